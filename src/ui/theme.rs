use crate::engine::config::ThemeConfig;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub link: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            link: Color::Rgb(122, 162, 247),    // #7AA2F7 Link Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    /// Theme from configured hex colors; unparsable entries keep the
    /// midnight color.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fallback = Self::midnight();
        Self {
            background: parse_hex(&config.background_color).unwrap_or(fallback.background),
            text: parse_hex(&config.text_color).unwrap_or(fallback.text),
            link: parse_hex(&config.link_color).unwrap_or(fallback.link),
            dimmed: parse_hex(&config.dimmed_color).unwrap_or(fallback.dimmed),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
