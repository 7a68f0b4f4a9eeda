/// Core error type.
///
/// Adapter crates map their specific errors into this type so the bot can
/// report failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(
        "invalid annotation {kind:?}: offset {offset} + length {length} exceeds text length {text_len}"
    )]
    InvalidAnnotation {
        kind: String,
        offset: usize,
        length: usize,
        text_len: usize,
    },

    #[error("invalid limits: {0}")]
    InvalidLimits(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
