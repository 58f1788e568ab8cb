use serde::{Deserialize, Serialize};

/// Delimited string encoding of one spray sample.
pub type Token = String;

/// A bounded group of tokens flushed together, in draw order.
pub type Batch = Vec<Token>;

/// The full ordered batch history of a drawing, as returned by the read
/// endpoint. Consumed once per replay.
pub type BatchStream = Vec<Batch>;

/// Spray colors selectable from the toolbar.
///
/// Discriminants are the wire codes. The mapping is closed and exact in both
/// directions: unknown codes and unknown names are rejected, never silently
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u32)]
pub enum SprayColor {
    Red = 1,
    Green = 2,
    Blue = 3,
    #[default]
    Black = 4,
}

impl SprayColor {
    /// All registered colors, in wire-code order.
    pub const ALL: [SprayColor; 4] = [Self::Red, Self::Green, Self::Blue, Self::Black];

    /// Wire code for this color.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up a color by wire code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            4 => Some(Self::Black),
            _ => None,
        }
    }

    /// CSS-style name used at the UI boundary.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Black => "black",
        }
    }

    /// Look up a color by its UI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

/// One spray sample taken from pointer input.
///
/// Coordinates are canvas-local. Radius and density come from the toolbar
/// sliders; their UI ranges are published in [`crate::constants`] but the
/// codec does not enforce them - range clamping is a UI concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprayCommand {
    /// X position in canvas pixels.
    pub x: u32,
    /// Y position in canvas pixels.
    pub y: u32,
    /// Spray radius in pixels.
    pub radius: u32,
    /// Dot density per sample.
    pub density: u32,
    /// Selected spray color.
    pub color: SprayColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes_round_trip() {
        for color in SprayColor::ALL {
            assert_eq!(SprayColor::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn color_names_round_trip() {
        for color in SprayColor::ALL {
            assert_eq!(SprayColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn unknown_code_and_name_rejected() {
        assert_eq!(SprayColor::from_code(0), None);
        assert_eq!(SprayColor::from_code(5), None);
        assert_eq!(SprayColor::from_name("magenta"), None);
    }
}
