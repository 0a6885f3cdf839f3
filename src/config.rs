use crate::{
    cardsize::{self, CardSize},
    colour::{colours, Colour},
    layout::{Geometry, Margins},
    CardError, Fixed,
};
use std::{fmt, str::FromStr};

/// Vertical space kept free at the bottom of the content area for the page number
pub const PAGE_NUMBER_RESERVE: i32 = 50;

/// Everything that determines how text is fitted onto a card
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Card width in pixels
    pub width: i32,
    /// Card height in pixels
    pub height: i32,
    pub padding: Margins,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
    pub background: Colour,
    pub text: Colour,
    pub page_number_colour: Colour,
    pub show_page_number: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        let (width, height) = cardsize::PORTRAIT;
        PageConfig {
            width,
            height,
            padding: Margins::trbl(100, 80, 100, 80),
            font_size: 36.0,
            line_height: 1.8,
            background: colours::WHITE,
            text: colours::CHARCOAL,
            page_number_colour: colours::SILVER,
            show_page_number: true,
        }
    }
}

impl PageConfig {
    /// Create a configuration with the default settings
    pub fn new() -> PageConfig {
        PageConfig::default()
    }

    /// Set the card size, modifying `self`
    pub fn size(mut self, size: CardSize) -> Self {
        (self.width, self.height) = size;
        self
    }

    pub fn padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the line height multiplier, modifying `self`
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn colours(mut self, background: Colour, text: Colour) -> Self {
        self.background = background;
        self.text = text;
        self
    }

    pub fn show_page_number(mut self, show: bool) -> Self {
        self.show_page_number = show;
        self
    }

    /// Height of one line of text in whole pixels
    pub fn line_height_px(&self) -> i32 {
        (self.font_size * self.line_height) as i32
    }

    /// Height available for text when the page number is (or isn't) drawn
    pub(crate) fn content_height_px(&self, with_page_number: bool) -> i32 {
        let height = self.height - self.padding.vertical();
        if with_page_number {
            height - PAGE_NUMBER_RESERVE
        } else {
            height
        }
    }

    /// The layout limits derived from this configuration. Space for the page
    /// number is always reserved when page numbers are enabled, since the page
    /// count is not known until layout has finished
    pub fn geometry(&self) -> Geometry {
        Geometry {
            width_budget: Fixed::from_px(self.width - self.padding.horizontal()),
            line_height: self.line_height_px(),
            content_height: self.content_height_px(self.show_page_number),
        }
    }

    /// Check that the configuration leaves room for at least some text
    pub fn validate(&self) -> Result<(), CardError> {
        let geometry = self.geometry();
        if geometry.width_budget <= Fixed::ZERO {
            return Err(CardError::InvalidGeometry(
                "horizontal padding leaves no width for text",
            ));
        }
        if geometry.line_height <= 0 {
            return Err(CardError::InvalidGeometry(
                "font size and line height give a zero line height",
            ));
        }
        if geometry.content_height <= 0 {
            return Err(CardError::InvalidGeometry(
                "vertical padding leaves no height for text",
            ));
        }
        Ok(())
    }
}

/// Built-in card styles
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Template {
    /// Dark text on white
    Default,
    Dark,
    /// Warm paper tones
    Warm,
}

impl Template {
    pub fn all() -> &'static [Template] {
        &[Template::Default, Template::Dark, Template::Warm]
    }

    /// The name used to select this template
    pub fn name(&self) -> &'static str {
        match self {
            Template::Default => "default",
            Template::Dark => "dark",
            Template::Warm => "warm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Default => "white background, dark text",
            Template::Dark => "dark background, light text",
            Template::Warm => "warm paper background, brown text",
        }
    }

    pub fn config(&self) -> PageConfig {
        let config = PageConfig::default();
        match self {
            Template::Default => config,
            Template::Dark => config.colours(colours::NIGHT, colours::MIST),
            Template::Warm => config.colours(colours::PAPER, colours::SEPIA),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::all()
            .iter()
            .copied()
            .find(|template| template.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownTemplate(s.to_string()))
    }
}
