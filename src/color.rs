//! Color-picker helpers.

use crate::models::Rgba;

/// One color channel as two lower-case hex digits (`5` -> `"05"`).
pub fn component_to_hex(c: u8) -> String {
    format!("{:02x}", c)
}

/// `#rrggbb` for the given channels. Alpha is dropped.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(r),
        component_to_hex(g),
        component_to_hex(b)
    )
}

impl Rgba {
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}
