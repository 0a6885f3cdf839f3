use crate::colour::Colour;
use crate::config::PageConfig;
use crate::layout::paginate::Page;
use crate::metrics::{measure, GlyphMetrics};

/// A run of text and the pixel position of the start of its baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Where a renderer should draw everything on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// One entry per page line, blank separators included
    pub lines: Vec<PlacedLine>,
    /// Distance between consecutive baselines
    pub pitch: i32,
    /// The "index / total" page label, if one should be drawn
    pub label: Option<PlacedLine>,
    pub label_colour: Colour,
}

/// Calculates the baselines for a page of text.
///
/// Lines are spread out to fill the content area when there is room, but never
/// closer together than the configured line height, and the block of text is
/// centred vertically. The page number reserve and label only apply when the
/// page is one of several.
pub fn place_page<M: GlyphMetrics + ?Sized>(
    page: &Page,
    config: &PageConfig,
    metrics: &M,
) -> PagePlacement {
    let numbered = config.show_page_number && page.total > 1;
    let content_height = config.content_height_px(numbered);
    let count = page.lines.len() as i32;

    let mut pitch = config.line_height_px();
    if count > 1 {
        pitch = pitch.max(content_height / count);
    }

    let ascent = metrics.line_metrics().ascent.ceil();
    let block_height = (count - 1).max(0) * pitch;
    let first_baseline = config.padding.top + (content_height - block_height) / 2 + ascent;

    let lines = page
        .lines
        .iter()
        .enumerate()
        .map(|(i, text)| PlacedLine {
            text: text.clone(),
            x: config.padding.left,
            y: first_baseline + i as i32 * pitch,
        })
        .collect();

    let label = numbered.then(|| {
        let text = format!("{} / {}", page.index, page.total);
        let width = measure(&text, metrics).ceil();
        PlacedLine {
            x: (config.width - width) / 2,
            y: config.height - config.padding.bottom / 2,
            text,
        }
    });

    PagePlacement {
        lines,
        pitch,
        label,
        label_colour: config.page_number_colour,
    }
}
