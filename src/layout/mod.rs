//! Line wrapping and pagination.
//!
//! Text is laid out in four steps, each of which is exposed on its own:
//!
//! - [`wrap_line`](crate::layout::wrap_line) - breaks one source line into lines that fit a width,
//!   following CJK and punctuation line-breaking rules
//! - [`segment`](crate::layout::segment) / [`flatten`](crate::layout::flatten) - group wrapped
//!   lines into paragraphs and back
//! - [`balance`](crate::layout::balance) - choose which paragraphs go on which page
//! - [`paginate`](crate::layout::paginate) - all of the above, producing [`Page`](crate::layout::Page)s
//!
//! [`place_page`](crate::layout::place_page) then works out where each line of a page
//! should be drawn.
//!
//! # Example
//!
//! ```
//! use text_cards::{Fixed, MonospaceMetrics};
//! use text_cards::layout::{paginate, Geometry};
//!
//! let metrics = MonospaceMetrics::new(Fixed::from_px(10), Fixed::from_px(20));
//! let geometry = Geometry {
//!     width_budget: Fixed::from_px(100),
//!     line_height: 20,
//!     content_height: 200,
//! };
//!
//! let pages = paginate("Hello, world!\n\n你好，世界！", &geometry, &metrics);
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].lines, vec!["Hello, ", "world!", "", "你好，世界！"]);
//! ```

mod balance;
mod margins;
mod paginate;
mod paragraph;
mod placement;
mod wrap;

pub use balance::*;
pub use margins::*;
pub use paginate::*;
pub use paragraph::*;
pub use placement::*;
pub use wrap::*;
