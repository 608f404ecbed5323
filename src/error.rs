//! Error types for color parsing, palette resolution and swatch matching.
//!
//! Unreadable caches and unreachable contrast targets are not errors; both
//! fall back silently and only show up in debug logs.

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Hex color must be provided")]
    Empty,

    #[error("Hex color must be 6 digits long: {input:?}")]
    InvalidLength { input: String },

    #[error("Invalid hex color: {input:?}")]
    InvalidDigits { input: String },
}

/// Errors produced while resolving the inputs of a palette run.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error(
        "No base color provided and couldn't read one from the color-scheme cache\n\
         Usage: dank16 [<BASE_HEX>] [--light|--dark] [--ghostty] \
         [--honor-primary HEX] [--background HEX]"
    )]
    MissingBaseColor,
}

/// Errors produced by the nearest-swatch matcher.
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    #[error("Unable to resolve nearest swatch color")]
    Unresolved,
}

impl SwatchError {
    /// Process exit code for this failure (1 for bad input, 2 for lookup failure).
    pub fn exit_code(&self) -> u8 {
        match self {
            SwatchError::InvalidColor(_) => 1,
            SwatchError::Unresolved => 2,
        }
    }
}
