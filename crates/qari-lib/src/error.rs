use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not find {0} in page")]
    MissingField(&'static str),
    #[error("malformed reader payload: {0}")]
    MalformedPayload(String),
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
    #[error("invalid url '{0}'")]
    InvalidUrl(String),
    #[error("{0} is not supported by this source")]
    Unsupported(&'static str),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl Error {
    /// True when the page was fetched but its format could not be read,
    /// as opposed to a connectivity failure.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_)
                | Error::MalformedPayload(_)
                | Error::InvalidSelector(_)
                | Error::InvalidUrl(_)
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
