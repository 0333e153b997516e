//! Error type for geohash parsing

/// Errors that can occur while reading a geohash string
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside of the geohash alphabet was encountered
    #[error("invalid geohash character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Index of the character within the input, counted in characters
        position: usize,
    },
}

/// Result type of fallible geohash operations
pub type Result<T> = core::result::Result<T, Error>;
