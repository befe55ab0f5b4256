use egui::Color32;
use serde::{Deserialize, Serialize};

/// An RGBA color with each channel in `0.0..=1.0`, not premultiplied.
///
/// This is the shape the color picker edits in place, so the editor stores
/// colors this way and only converts to [`Color32`] when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Fully transparent black. Unpainted tiles read back as this.
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Self = Self([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Self = Self([0.0, 0.0, 1.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }

    pub fn is_transparent(&self) -> bool {
        self.a() <= 0.0
    }

    /// Mutable access to the raw channels, for `Ui::color_edit_button_rgba_unmultiplied`.
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        &mut self.0
    }

    /// Converts to an 8-bit unmultiplied color, clamping out-of-range channels.
    pub fn to_color32(self) -> Color32 {
        let [r, g, b, a] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl From<[f32; 4]> for Color {
    fn from(channels: [f32; 4]) -> Self {
        Self(channels)
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        color.to_color32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::RED.is_transparent());
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(Color::RED.to_color32(), Color32::from_rgba_unmultiplied(255, 0, 0, 255));
        assert_eq!(Color::TRANSPARENT.to_color32(), Color32::TRANSPARENT);
        // Out-of-range channels are clamped rather than wrapped
        assert_eq!(
            Color::new(2.0, -1.0, 0.0, 1.0).to_color32(),
            Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
    }
}
