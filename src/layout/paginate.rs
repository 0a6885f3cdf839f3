use crate::config::PageConfig;
use crate::layout::balance::balance;
use crate::layout::paragraph::{count_display_lines, flatten, segment, trim_blank_lines};
use crate::layout::wrap::wrap_line;
use crate::metrics::GlyphMetrics;
use crate::units::Fixed;

/// Inputs with at least this many source lines are wrapped on the rayon pool
#[cfg(feature = "parallel")]
const PARALLEL_MIN_LINES: usize = 64;

/// The space text is fitted into
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Geometry {
    /// Maximum width of a line of text
    pub width_budget: Fixed,
    /// Height of one line of text, in pixels
    pub line_height: i32,
    /// Height available for lines of text on each page, in pixels
    pub content_height: i32,
}

impl Geometry {
    /// How many lines fit on a page; always at least one
    pub fn max_lines_per_page(&self) -> i32 {
        if self.line_height <= 0 {
            return 1;
        }
        (self.content_height / self.line_height).max(1)
    }
}

impl From<&PageConfig> for Geometry {
    fn from(config: &PageConfig) -> Self {
        config.geometry()
    }
}

/// One card's worth of laid out text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Wrapped lines in drawing order; empty strings separate paragraphs
    pub lines: Vec<String>,
    /// 1-based position of this page
    pub index: usize,
    /// Number of pages produced alongside this one
    pub total: usize,
}

/// Wraps `text` and divides it into pages.
///
/// Every line of the input is wrapped to `geometry.width_budget`; blank lines
/// mark paragraph boundaries. Paragraphs are never split across pages, and the
/// number of pages is the fewest that could hold the text at
/// [`Geometry::max_lines_per_page`] lines each, with the paragraphs spread as
/// evenly over them as their boundaries allow.
///
/// Text that is empty or entirely blank produces no pages.
pub fn paginate<M: GlyphMetrics + ?Sized>(
    text: &str,
    geometry: &Geometry,
    metrics: &M,
) -> Vec<Page> {
    let max_lines = geometry.max_lines_per_page();

    let lines = wrap_text(text, geometry.width_budget, metrics);
    let lines = trim_blank_lines(&lines);
    if lines.is_empty() {
        log::debug!("nothing to paginate");
        return Vec::new();
    }

    let paragraphs = segment(lines);
    let total_lines = count_display_lines(&paragraphs);
    let num_pages = total_lines.div_ceil(max_lines as usize);
    log::debug!(
        "{} paragraphs, {total_lines} lines at {max_lines} lines per page: {num_pages} page(s)",
        paragraphs.len()
    );

    let plan = balance(&paragraphs, num_pages, max_lines);
    log::debug!("split plan {:?}", plan.boundaries());

    let pages: Vec<Vec<String>> = plan
        .pages()
        .map(|range| flatten(&paragraphs[range]))
        .collect();
    let total = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(i, lines)| Page {
            lines,
            index: i + 1,
            total,
        })
        .collect()
}

/// Lays out `text` with the geometry derived from `config`
pub fn layout<M: GlyphMetrics + ?Sized>(
    text: &str,
    config: &PageConfig,
    metrics: &M,
) -> Vec<Page> {
    paginate(text, &config.geometry(), metrics)
}

/// Wraps every source line of `text`, in order. Trailing spaces, tabs and
/// carriage returns are trimmed first, and lines left empty become a single
/// empty line
pub fn wrap_text<M: GlyphMetrics + ?Sized>(
    text: &str,
    max_width: Fixed,
    metrics: &M,
) -> Vec<String> {
    let source: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t', '\r']))
        .collect();
    wrap_all(&source, max_width, metrics).into_iter().flatten().collect()
}

fn wrap_source_line<M: GlyphMetrics + ?Sized>(
    line: &str,
    max_width: Fixed,
    metrics: &M,
) -> Vec<String> {
    if line.is_empty() {
        vec![String::new()]
    } else {
        wrap_line(line, max_width, metrics)
    }
}

#[cfg(feature = "parallel")]
fn wrap_all<M: GlyphMetrics + ?Sized>(
    source: &[&str],
    max_width: Fixed,
    metrics: &M,
) -> Vec<Vec<String>> {
    use rayon::prelude::*;

    if source.len() >= PARALLEL_MIN_LINES && rayon::current_num_threads() > 1 {
        // collect keeps the input order
        source
            .par_iter()
            .map(|line| wrap_source_line(line, max_width, metrics))
            .collect()
    } else {
        source
            .iter()
            .map(|line| wrap_source_line(line, max_width, metrics))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn wrap_all<M: GlyphMetrics + ?Sized>(
    source: &[&str],
    max_width: Fixed,
    metrics: &M,
) -> Vec<Vec<String>> {
    source
        .iter()
        .map(|line| wrap_source_line(line, max_width, metrics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn mono() -> MonospaceMetrics {
        MonospaceMetrics::new(Fixed::from_px(10), Fixed::from_px(20))
    }

    fn geometry(chars_per_line: i32, lines_per_page: i32) -> Geometry {
        Geometry {
            width_budget: Fixed::from_px(chars_per_line * 10),
            line_height: 20,
            content_height: lines_per_page * 20,
        }
    }

    #[test]
    fn short_text_is_one_page() {
        let pages = paginate("A\n\nB\nC\n\nD", &geometry(10, 10), &mono());
        assert_eq!(
            pages,
            vec![Page {
                lines: vec!["A", "", "B", "C", "", "D"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                index: 1,
                total: 1,
            }]
        );
    }

    #[test]
    fn blank_text_has_no_pages() {
        assert!(paginate("", &geometry(10, 10), &mono()).is_empty());
        assert!(paginate("\n  \n\t\n", &geometry(10, 10), &mono()).is_empty());
    }

    #[test]
    fn boundary_blank_lines_are_dropped() {
        let pages = paginate("\n\n  hello  \n\n", &geometry(20, 10), &mono());
        assert_eq!(pages.len(), 1);
        // leading whitespace is content, trailing whitespace is not
        assert_eq!(pages[0].lines, vec!["  hello".to_string()]);
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        let pages = paginate("one\r\n\r\ntwo\r\n", &geometry(20, 10), &mono());
        assert_eq!(pages[0].lines, vec!["one", "", "two"]);
    }

    #[test]
    fn ideographic_spaces_are_content() {
        let pages = paginate("A\n\u{3000}\u{3000}\nB", &geometry(10, 10), &mono());
        assert_eq!(pages[0].lines, vec!["A", "\u{3000}\u{3000}", "B"]);

        let pages = paginate("你好\u{3000}\u{A0}", &geometry(10, 10), &mono());
        assert_eq!(pages[0].lines, vec!["你好\u{3000}\u{A0}"]);
    }

    #[test]
    fn paragraphs_balance_across_two_pages() {
        let text = "a\nb\nc\n\nd\ne\nf\ng\nh\ni\nj";
        let pages = paginate(text, &geometry(10, 10), &mono());
        // 3 + 1 + 7 = 11 lines need two pages of at most 10
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines, vec!["a", "b", "c"]);
        assert_eq!(pages[1].lines.len(), 7);
        assert!(pages.iter().all(|p| p.total == 2));
        assert_eq!(pages.iter().map(|p| p.index).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn wrapped_lines_count_towards_pages() {
        // each source line wraps into three lines
        let text = "aaaaaaaaaaaaaaa\n\nbbbbbbbbbbbbbbb\n\nccccccccccccccc";
        let pages = paginate(text, &geometry(5, 4), &mono());
        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert_eq!(page.lines.len(), 3);
            assert_eq!(page.total, 3);
        }
    }

    #[test]
    fn degenerate_line_height_still_paginates() {
        let geometry = Geometry {
            width_budget: Fixed::from_px(100),
            line_height: 0,
            content_height: 0,
        };
        assert_eq!(geometry.max_lines_per_page(), 1);
        let pages = paginate("a\n\nb", &geometry, &mono());
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn layout_uses_the_config_geometry() {
        let config = PageConfig::default();
        let text = (0..8)
            .map(|_| lipsum::lipsum(60))
            .collect::<Vec<_>>()
            .join("\n\n");
        let pages = layout(&text, &config, &mono());
        let expected = paginate(&text, &config.geometry(), &mono());
        assert_eq!(pages, expected);
        assert!(pages.len() > 1);
    }
}
