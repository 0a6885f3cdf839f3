//! Pre-defined card sizes for common social-media formats.
//!
//! All sizes are (width, height) in pixels. Use the
//! [`CardOrientation`](crate::cardsize::CardOrientation) trait to flip between
//! portrait and landscape.
//!
//! # Example
//!
//! ```
//! use text_cards::cardsize::{PORTRAIT, CardOrientation};
//!
//! let card = PORTRAIT;
//! assert_eq!(card.landscape(), (1440, 1080));
//! ```

/// Card dimensions as (width, height) in pixels.
pub type CardSize = (i32, i32);

/// 3:4 portrait, the default for image-post text cards
pub const PORTRAIT: CardSize = (1080, 1440);
pub const SQUARE: CardSize = (1080, 1080);
/// 9:16, full-screen stories
pub const STORY: CardSize = (1080, 1920);
pub const LANDSCAPE: CardSize = (1440, 1080);

/// Convert card sizes between portrait and landscape orientations.
pub trait CardOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl CardOrientation for CardSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> CardSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
