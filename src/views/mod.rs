//! Screens of the listings front-end
//!
//! Each view owns the data it fetched and renders itself into any writer
//! using the [`Theme`] it is handed. Views fetch once, when first activated.

pub mod catalog;
pub mod detail;
pub mod listing;

use crate::theme::Theme;
use std::io::{self, Write};

/// What to show where a poster would go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    /// Link to the poster image
    Image(String),
    /// Text shown in place of a missing image (the show name)
    Placeholder(String),
}

impl Poster {
    /// Chooses between the image link and a placeholder carrying `name`
    pub fn from_url(url: Option<&str>, name: &str) -> Self {
        match url {
            Some(url) => Poster::Image(url.to_string()),
            None => Poster::Placeholder(name.to_string()),
        }
    }

    fn render(&self, theme: &Theme) -> String {
        match self {
            Poster::Image(url) => theme.text(url),
            Poster::Placeholder(name) => {
                theme.text(&format!("[{}] {}", theme.placeholder_text, name))
            }
        }
    }
}

/// A screen that can draw itself
pub trait View {
    /// Writes the current state of the view
    ///
    /// # Arguments
    ///
    /// * `theme` - Presentation settings
    /// * `out` - Destination for the rendered text
    fn render(&self, theme: &Theme, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes a labelled value line
fn write_field(out: &mut dyn Write, theme: &Theme, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", theme.accent(label), theme.text(value))
}

#[cfg(test)]
pub(crate) fn render_to_string(view: &dyn View, theme: &Theme) -> String {
    let mut buffer = Vec::new();
    view.render(theme, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
