// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// The four neon tones particles are drawn in
pub const PALETTE: [Color; 4] = [
    Color::from_u32(0x00ffffff),
    Color::from_u32(0xff00ffff),
    Color::from_u32(0xffcc00ff),
    Color::from_u32(0x00ff99ff),
];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// `#rrggbb`, the form canvas fill and shadow styles take.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r,g,b,alpha)` with `alpha` in `[0, 1]`, clamped.
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}
