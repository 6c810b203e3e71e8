use thiserror::Error;

/// Errors surfaced by the keyword store and the bulk loaders.
///
/// Everything else is modeled as a non-error result: removing a missing
/// keyword returns `false`, looking up a missing word returns `None`, and a
/// scan that finds nothing returns an empty result.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty keyword was passed to `add`.
    #[error("keyword must not be empty")]
    EmptyKeyword,
    /// A keyword file could not be read.
    #[error("failed to read keyword file")]
    Io(#[from] std::io::Error),
}
