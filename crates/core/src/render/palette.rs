//! Terminal styles used by the tree report

use owo_colors::Style;

/// Semantic class of a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Caution,
}

/// Immutable set of styles handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Banners and section titles
    pub heading: Style,
    /// Module part of a record header
    pub module: Style,
    /// Container names
    pub name: Style,
    /// Endpoint URLs
    pub url: Style,
    pub positive: Style,
    pub negative: Style,
    pub caution: Style,
}

impl Palette {
    /// ANSI colors
    pub fn ansi() -> Self {
        Self {
            heading: Style::new().bold(),
            module: Style::new().bold().blue(),
            name: Style::new().cyan(),
            url: Style::new().green(),
            positive: Style::new().green(),
            negative: Style::new().red(),
            caution: Style::new().bold().yellow(),
        }
    }

    /// No styling at all
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            module: Style::new(),
            name: Style::new(),
            url: Style::new(),
            positive: Style::new(),
            negative: Style::new(),
            caution: Style::new(),
        }
    }

    /// Style for a tone
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Caution => self.caution,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}
