use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Ansi256,
    NoColor,
}

pub type Rgb = (u8, u8, u8);

/// Chart chrome. The plot area is black; series colors come from the palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Rgb,
    pub subtext: Rgb,
    pub base: Rgb,
    pub peak: Rgb,
    pub circle: Rgb,
    pub annotation: Rgb,
    pub capability: ColorCapability,
}

impl Theme {
    pub fn detect() -> Self {
        Self::with_capability(detect_color_capability())
    }

    pub fn with_capability(capability: ColorCapability) -> Self {
        Self {
            text: (0xcd, 0xd6, 0xf4),
            subtext: (0xa6, 0xad, 0xc8),
            base: (0x00, 0x00, 0x00),
            peak: (0x00, 0x80, 0x00),
            circle: (0xff, 0x00, 0x00),
            annotation: (0xf5, 0xde, 0xb3),
            capability,
        }
    }

    pub fn color(&self, rgb: Rgb) -> Color {
        map_color(self.capability, rgb)
    }

    pub fn color_text(&self) -> Color {
        self.color(self.text)
    }
    pub fn color_subtext(&self) -> Color {
        self.color(self.subtext)
    }
    pub fn color_base(&self) -> Color {
        self.color(self.base)
    }
    pub fn color_peak(&self) -> Color {
        self.color(self.peak)
    }
    pub fn color_circle(&self) -> Color {
        self.color(self.circle)
    }
    pub fn color_annotation(&self) -> Color {
        self.color(self.annotation)
    }
}

pub fn detect_color_capability() -> ColorCapability {
    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        return ColorCapability::Ansi256;
    }

    ColorCapability::NoColor
}

fn map_color(cap: ColorCapability, t: Rgb) -> Color {
    match cap {
        ColorCapability::TrueColor => Color::Rgb(t.0, t.1, t.2),
        ColorCapability::Ansi256 => Color::Indexed(rgb_to_ansi256(t.0, t.1, t.2)),
        ColorCapability::NoColor => Color::Reset,
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 color cube, 16..231
    let r6 = (r as u16 * 5 / 255) as u8;
    let g6 = (g as u16 * 5 / 255) as u8;
    let b6 = (b as u16 * 5 / 255) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}
