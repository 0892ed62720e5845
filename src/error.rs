use thiserror::Error;

/// Everything that can go wrong during a registry lookup. Each variant maps
/// to a stable wire code and an HTTP-style status for the error envelope.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("nationality must be V or E")]
    InvalidNationality,

    #[error("cedula number is required")]
    MissingId,

    #[error("cedula number must contain digits only")]
    InvalidIdFormat,

    #[error("CNE service responded with HTTP {status}")]
    UpstreamHttp { status: u16 },

    #[error("could not reach the CNE service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no record in the electoral registry")]
    NotFound,

    #[error("unhandled failure: {0}")]
    Unknown(String),
}

impl LookupError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNationality => "invalid-nationality",
            Self::MissingId => "missing-id",
            Self::InvalidIdFormat => "invalid-id-format",
            Self::UpstreamHttp { .. } | Self::Network(_) => "upstream-transport-error",
            Self::NotFound => "not-found",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidNationality | Self::MissingId | Self::InvalidIdFormat => 400,
            Self::UpstreamHttp { .. } | Self::Network(_) => 502,
            Self::NotFound => 404,
            Self::Unknown(_) => 500,
        }
    }
}
