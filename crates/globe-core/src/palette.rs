use rand::seq::SliceRandom;
use rand::Rng;

/// Arc colors as CSS hex strings; the web overlay and the renderer share them.
pub const ARC_COLORS: [&str; 12] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", // violet to coral
    "#4facfe", "#00f2fe", "#43e97b", "#38f9d7", // cyan to mint
    "#fa709a", "#fee140", "#a8edea", "#fed6e3", // warm pastels
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcColor(pub &'static str);

impl ArcColor {
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// RGB in [0, 1]. Malformed hex falls back to a warm white.
    pub fn rgb(&self) -> [f32; 3] {
        parse_hex_rgb(self.0).unwrap_or([1.0, 0.85, 0.7])
    }
}

pub fn random_arc_color<R: Rng + ?Sized>(rng: &mut R) -> ArcColor {
    ArcColor(ARC_COLORS.choose(rng).copied().unwrap_or(ARC_COLORS[0]))
}

pub fn parse_hex_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}
