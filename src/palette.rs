/// Fixed ordinal color palettes, assigned deterministically by index.

/// Tableau10 scheme, in hex.
const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

#[derive(Debug, Clone, Copy)]
pub struct OrdinalPalette {
    colors: &'static [&'static str],
}

impl OrdinalPalette {
    pub fn tableau10() -> Self {
        Self { colors: &TABLEAU10 }
    }

    /// Color for the point at `index`, cycling past the palette length.
    /// Identical input always yields identical colors.
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Parse a `#rrggbb` hex color into its channels. Unparseable strings fall
/// back to black rather than failing a render.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (0, 0, 0);
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    (channel(0..2), channel(2..4), channel(4..6))
}
