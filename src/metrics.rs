use crate::units::Fixed;
use std::collections::HashSet;

/// Vertical metrics of a face at a particular size
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LineMetrics {
    /// Distance from the top of a line to its baseline
    pub ascent: Fixed,
    /// Recommended distance between consecutive baselines
    pub line_height: Fixed,
}

/// Measurement capability consumed by the line wrapper.
///
/// Implementations are expected to be read-only lookups against an
/// already-loaded font so that paragraphs can be measured from several
/// threads at once.
pub trait GlyphMetrics: Send + Sync {
    /// Horizontal advance of `ch`, or `None` if the provider cannot measure it
    fn advance(&self, ch: char) -> Option<Fixed>;

    /// Line-height relevant metrics
    fn line_metrics(&self) -> LineMetrics;

    /// Advance of `ch`, falling back to half the recommended line height
    /// for characters the provider cannot measure
    fn advance_or_fallback(&self, ch: char) -> Fixed {
        self.advance(ch).unwrap_or_else(|| {
            log::trace!("no advance for {ch:?}, using fallback width");
            self.line_metrics().line_height.half()
        })
    }
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn advance(&self, ch: char) -> Option<Fixed> {
        (**self).advance(ch)
    }

    fn line_metrics(&self) -> LineMetrics {
        (**self).line_metrics()
    }
}

/// Calculate the width of a string of text, using the fallback advance for
/// characters the provider cannot measure
pub fn measure<M: GlyphMetrics + ?Sized>(text: &str, metrics: &M) -> Fixed {
    text.chars().map(|ch| metrics.advance_or_fallback(ch)).sum()
}

/// A provider where every character has the same advance. Useful for grid-like
/// layouts and for exercising layout code without a font file.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: Fixed,
    pub line_metrics: LineMetrics,
    /// Characters reported as unmeasurable
    pub missing: HashSet<char>,
}

impl MonospaceMetrics {
    pub fn new(advance: Fixed, line_height: Fixed) -> MonospaceMetrics {
        MonospaceMetrics {
            advance,
            line_metrics: LineMetrics {
                ascent: line_height,
                line_height,
            },
            missing: HashSet::new(),
        }
    }

    /// Mark `chars` as unmeasurable so they take the fallback advance
    pub fn with_missing<I: IntoIterator<Item = char>>(mut self, chars: I) -> MonospaceMetrics {
        self.missing.extend(chars);
        self
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn advance(&self, ch: char) -> Option<Fixed> {
        if self.missing.contains(&ch) {
            None
        } else {
            Some(self.advance)
        }
    }

    fn line_metrics(&self) -> LineMetrics {
        self.line_metrics
    }
}
