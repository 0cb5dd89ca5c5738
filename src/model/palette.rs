use egui::Color32;

/// Colors handed out to new tasks, in order.
pub const TASK_COLORS: &[Color32] = &[
    Color32::from_rgb(0x1E, 0xAE, 0xDB), // Bright blue
    Color32::from_rgb(0x8B, 0x5C, 0xF6), // Vivid purple
    Color32::from_rgb(0xD9, 0x46, 0xEF), // Magenta pink
    Color32::from_rgb(0xF9, 0x73, 0x16), // Bright orange
    Color32::from_rgb(0x0E, 0xA5, 0xE9), // Ocean blue
];

/// Round-robin color source owned by the application session.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Color32>,
    next: usize,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(TASK_COLORS.to_vec())
    }
}

impl ColorPalette {
    /// An empty list falls back to the built-in colors.
    pub fn new(colors: Vec<Color32>) -> Self {
        let colors = if colors.is_empty() {
            TASK_COLORS.to_vec()
        } else {
            colors
        };
        Self { colors, next: 0 }
    }

    /// The color the next call to [`Self::next_color`] will return.
    pub fn peek(&self) -> Color32 {
        self.colors[self.next]
    }

    pub fn next_color(&mut self) -> Color32 {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .ok_or_else(|| format!("Invalid hex color '{}'", s))
            .and_then(|c| u8::from_str_radix(c, 16).map_err(|e| e.to_string()))
    };
    match s.len() {
        6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
    }
}
