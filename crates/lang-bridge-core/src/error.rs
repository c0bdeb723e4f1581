use thiserror::Error;

/// Errors raised while turning locale files into a catalogue.
#[derive(Debug, Error)]
pub enum LangError {
    /// A locale file could not be parsed.
    #[error("Failed to load locale file '{path}': {source}")]
    Resource {
        /// Path of the offending file, relative to its source root.
        path: String,
        #[source]
        source: ResourceError,
    },
    /// A path matched neither the root-level nor the scoped layout.
    #[error("Locale file '{0}' does not match '<locale>.<ext>' or '<locale>/<domain>.<ext>'")]
    UnrecognizedPath(String),
    /// Reading a locale file from disk failed.
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the resource parsers.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid PHP array at byte {offset}: {message}")]
    Php { offset: usize, message: String },
    #[error("top-level value must be a key/value mapping")]
    NotAnObject,
    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("unsupported file extension")]
    UnsupportedFormat,
}
