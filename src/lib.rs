//! Wraps text to a width and splits it into evenly filled, fixed-size pages,
//! ready to be drawn as image cards.
//!
//! Measurement goes through the [`GlyphMetrics`] trait, implemented by
//! [`Font`] for TTF/OTF files and by [`MonospaceMetrics`] for fixed-width text.

pub mod cardsize;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod font;
pub use font::*;

/// Line wrapping, paragraph grouping, and page balancing
pub mod layout;

mod metrics;
pub use metrics::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export the font parser, for building [`Font`]s from already parsed faces
pub use owned_ttf_parser;
