//! Linear RGB color with `#rrggbb` conversion for operator-panel edits.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// RGB color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_u32(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse `#rrggbb`, `rrggbb`, or the short `#rgb` form
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidColor(s.to_string()));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(SceneError::InvalidColor(s.to_string())),
        };
        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|_| SceneError::InvalidColor(s.to_string()))?;
        Ok(Self::from_u32(packed))
    }

    pub fn to_u32(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }

    /// Linear blend, `t = 0` gives `self`, `t = 1` gives `other`
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_preserves_string() {
        let c = Rgb::from_hex("#b1e1ff").unwrap();
        assert_eq!(c.to_hex(), "#b1e1ff");
        assert_eq!(c.to_u32(), 0xB1E1FF);
    }

    #[test]
    fn test_short_form_expands() {
        let c = Rgb::from_hex("#8AC").unwrap();
        assert_eq!(c.to_u32(), 0x88AACC);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_rejects_signs_and_repeated_hash() {
        assert!(Rgb::from_hex("#+12345").is_err());
        assert!(Rgb::from_hex("+8a").is_err());
        assert!(Rgb::from_hex("##123456").is_err());
        assert_eq!(Rgb::from_hex("123456").unwrap().to_u32(), 0x123456);
    }

    #[test]
    fn test_mix_endpoints() {
        let base = Rgb::new(0.0, 0.25, 0.5);
        assert_eq!(base.mix(Rgb::WHITE, 0.0), base);
        assert_eq!(base.mix(Rgb::WHITE, 1.0), Rgb::WHITE);
    }
}
