use thiserror::Error;

use crate::layer::LayerId;

/// Errors reported by grid operations that name something that doesn't exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("layer {0} does not exist")]
    UnknownLayer(LayerId),

    #[error("no layer is selected")]
    NoLayerSelected,

    #[error("brush size {0} is not one of the supported sizes")]
    InvalidBrushSize(u32),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;
