use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed dimension '{0}'")]
    MalformedDimension(String),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("numeric overflow")]
    Overflow,
}
