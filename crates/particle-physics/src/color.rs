//! Particle colors

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Indigo-500 at 80% alpha
pub const INDIGO: Color = Color::from_srgba(99, 102, 241, 204);
/// Violet-500 at 80% alpha
pub const VIOLET: Color = Color::from_srgba(139, 92, 246, 204);
/// Purple-500 at 80% alpha
pub const PURPLE: Color = Color::from_srgba(168, 85, 247, 204);

/// Fixed palette particles pick their color from
pub const PALETTE: [Color; 3] = [INDIGO, VIOLET, PURPLE];

/// Look up a palette entry, wrapping out-of-range indices
pub fn palette_color(index: u32) -> Color {
    PALETTE[index as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_extremes() {
        let black = Color::from_srgba(0, 0, 0, 255);
        let white = Color::from_srgba(255, 255, 255, 255);
        assert_eq!(black.r, 0.0);
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn test_palette_is_blue_dominant() {
        for color in PALETTE {
            assert!(color.b > color.r);
            assert!(color.b > color.g);
            assert!((color.a - 0.8).abs() < 1e-2);
        }
    }

    #[test]
    fn test_palette_index_wraps() {
        assert_eq!(palette_color(0), INDIGO);
        assert_eq!(palette_color(4), VIOLET);
    }
}
