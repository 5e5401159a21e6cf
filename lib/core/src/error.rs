use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Both lost and found descriptions are required")]
    MissingDescription,

    #[error("After pruning, no terms remain in the vocabulary")]
    EmptyVocabulary,

    #[error("Undefined similarity: {0}")]
    UndefinedScore(&'static str),

    #[error("Lemmatization failed: {0}")]
    Lemmatization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Short category name, safe to expose to clients
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingDescription => "validation",
            Error::EmptyVocabulary | Error::UndefinedScore(_) => "scoring",
            Error::Lemmatization(_) => "preprocessing",
            Error::InvalidConfig(_) => "config",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
        }
    }
}
