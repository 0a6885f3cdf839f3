use thiserror::Error;

/// All errors that the crate can generate. Layout itself never fails; these
/// come from loading fonts and resolving configuration.
#[derive(Error, Debug)]
pub enum CardError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("unknown template {0:?}")]
    /// No preset exists with the requested name
    UnknownTemplate(String),

    #[error("invalid page geometry: {0}")]
    /// The page configuration leaves no room for text
    InvalidGeometry(&'static str),
}
