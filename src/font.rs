use crate::{
    metrics::{GlyphMetrics, LineMetrics},
    CardError, Fixed,
};
use owned_ttf_parser::{AsFaceRef, Face, OwnedFace};
use std::path::Path;

/// A parsed TTF or OTF font, sized for layout. Fonts are only used for
/// measurement here; drawing glyphs is left to whatever renders the pages.
pub struct Font {
    pub face: OwnedFace,
    /// The font size in pixels that all metrics are scaled to
    pub size: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>, size: f32) -> Result<Font, CardError> {
        Font::load_collection(bytes, 0, size)
    }

    /// Load the face at `index` from a font collection (`.ttc`). Plain font files
    /// only contain index 0
    pub fn load_collection(bytes: Vec<u8>, index: u32, size: f32) -> Result<Font, CardError> {
        let face = OwnedFace::from_vec(bytes, index)?;
        let font = Font { face, size };
        log::debug!(
            "loaded font {:?} at {}px (ascent {}, line height {})",
            font.family(),
            size,
            font.ascent(),
            font.line_height()
        );
        Ok(font)
    }

    /// Read and parse a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P, size: f32) -> Result<Font, CardError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes, size)
    }

    fn face_ref(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self) -> f32 {
        self.size / self.face_ref().units_per_em() as f32
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    /// Distance from the baseline to the top of the font
    pub fn ascent(&self) -> Fixed {
        Fixed::from_f32(self.scaling() * self.face_ref().ascender() as f32)
    }

    /// Distance from the baseline to the bottom of the font.
    /// Note: this is usually negative
    pub fn descent(&self) -> Fixed {
        Fixed::from_f32(self.scaling() * self.face_ref().descender() as f32)
    }

    /// Extra space between lines
    pub fn leading(&self) -> Fixed {
        Fixed::from_f32(self.scaling() * self.face_ref().line_gap() as f32)
    }

    /// How much to vertically offset a second row of text below a first row of text
    pub fn line_height(&self) -> Fixed {
        self.leading() + self.ascent() - self.descent()
    }
}

impl GlyphMetrics for Font {
    fn advance(&self, ch: char) -> Option<Fixed> {
        let face = self.face_ref();
        let gid = face.glyph_index(ch)?;
        let advance = face.glyph_hor_advance(gid)?;
        Some(Fixed::from_f32(self.scaling() * advance as f32))
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: self.ascent(),
            line_height: self.line_height(),
        }
    }
}
