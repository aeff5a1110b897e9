//! Terminal presentation settings
//!
//! A [`Theme`] is built once at startup and handed to every view's render
//! call. It is never mutated afterwards.

use crossterm::style::{Color, Stylize};

/// Colors and layout settings shared by all views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Color for show titles and headings
    pub title_color: Color,
    /// Color for labels and selection hints
    pub accent_color: Color,
    /// Color for regular text
    pub text_color: Color,
    /// Text shown in place of a poster when a show has no image
    pub placeholder_text: String,
    /// Width of horizontal separator lines
    pub rule_width: usize,
    /// Whether to emit ANSI color sequences at all
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_color: Color::Rgb {
                r: 0x30,
                g: 0x6d,
                b: 0x7d,
            },
            accent_color: Color::Rgb {
                r: 0x4c,
                g: 0xaf,
                b: 0x50,
            },
            text_color: Color::Rgb {
                r: 0xff,
                g: 0xff,
                b: 0xff,
            },
            placeholder_text: "No Image".to_string(),
            rule_width: 60,
            color: true,
        }
    }
}

impl Theme {
    /// A theme without any color output
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Styles a heading or show title
    pub fn title(&self, text: &str) -> String {
        if self.color {
            text.with(self.title_color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styles a label
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.accent_color)
    }

    /// Styles regular text
    pub fn text(&self, text: &str) -> String {
        self.paint(text, self.text_color)
    }

    /// A horizontal separator line
    pub fn rule(&self) -> String {
        "─".repeat(self.rule_width)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Parses a `#rrggbb` color string
///
/// # Returns
///
/// The color, or `None` if the string is not a six digit hex color
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#306d7d"),
            Some(Color::Rgb {
                r: 0x30,
                g: 0x6d,
                b: 0x7d
            })
        );
        assert_eq!(
            parse_hex_color("#FFFFFF"),
            Some(Color::Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(parse_hex_color("306d7d"), None);
        assert_eq!(parse_hex_color("#306d7"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_plain_theme_emits_no_escape_sequences() {
        let theme = Theme::plain();
        assert_eq!(theme.title("Title"), "Title");
        assert_eq!(theme.accent("Genres:"), "Genres:");
        assert_eq!(theme.text("Drama"), "Drama");
    }

    #[test]
    fn test_colored_theme_wraps_text() {
        let theme = Theme::default();
        assert!(theme.title("Title").contains("Title"));
        assert!(theme.text("Drama").contains("Drama"));
    }

    #[test]
    fn test_rule_width() {
        let theme = Theme {
            rule_width: 3,
            ..Theme::plain()
        };
        assert_eq!(theme.rule(), "───");
    }
}
