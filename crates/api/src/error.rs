use core::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// The outbound call failed in transit, or the upstream answered with an
    /// error status.
    Fetch(reqwest::Error),
    /// The upstream body could not be decoded into the expected JSON shape.
    Json(serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "outbound request failed: {err}"),
            Self::Json(err) => write!(f, "unexpected upstream response: {err}"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
