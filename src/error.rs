//! Failure taxonomy for node calls.
//!
//! Two layers exist. [`TypedError`] is a classified failure reported by a
//! service: it carries the numeric code, a message and the [`Service`] it came
//! from, plus the [`ErrorKind`] derived from the code. [`ClientError`] is what
//! every [`NodeClient`](crate::NodeClient) call returns; it wraps a
//! `TypedError` for rejected responses and keeps transport and decode
//! failures distinguishable as infrastructure errors.

use std::fmt::Display;

use thiserror::Error;

/// Logical service a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Node,
    Identity,
    Treasury,
    Gateway,
}

impl Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Node => write!(f, "node"),
            Service::Identity => write!(f, "identity"),
            Service::Treasury => write!(f, "treasury"),
            Service::Gateway => write!(f, "gateway"),
        }
    }
}

/// Fixed classification of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    InsufficientFunds,
    InvalidAddress,
    TransactionFailed,
    ConnectionFailed,
    RateLimited,
}

impl ErrorKind {
    /// Maps a status code to a kind. A 400 from the treasury means
    /// insufficient funds; from any other service it means a bad address.
    pub fn classify(code: u16, service: Service) -> Option<Self> {
        match code {
            400 if service == Service::Treasury => Some(ErrorKind::InsufficientFunds),
            400 => Some(ErrorKind::InvalidAddress),
            401 => Some(ErrorKind::Unauthorized),
            404 => Some(ErrorKind::NotFound),
            429 => Some(ErrorKind::RateLimited),
            500 => Some(ErrorKind::TransactionFailed),
            503 => Some(ErrorKind::ConnectionFailed),
            _ => None,
        }
    }

    /// Canonical status code for the kind.
    pub fn code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Unauthorized => 401,
            ErrorKind::InsufficientFunds | ErrorKind::InvalidAddress => 400,
            ErrorKind::TransactionFailed => 500,
            ErrorKind::ConnectionFailed => 503,
            ErrorKind::RateLimited => 429,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "Not Found"),
            ErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ErrorKind::InsufficientFunds => write!(f, "Insufficient Funds"),
            ErrorKind::InvalidAddress => write!(f, "Invalid Address"),
            ErrorKind::TransactionFailed => write!(f, "Transaction Failed"),
            ErrorKind::ConnectionFailed => write!(f, "Connection Failed"),
            ErrorKind::RateLimited => write!(f, "Rate Limited"),
        }
    }
}

/// A classified failure reported by one of the services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} error {code}: {message}")]
pub struct TypedError {
    pub code: u16,
    pub message: String,
    pub service: Service,
    pub kind: Option<ErrorKind>,
}

impl TypedError {
    /// Builds an error from a status code, classifying it for `service`.
    pub fn new(code: u16, message: impl Into<String>, service: Service) -> Self {
        Self {
            code,
            message: message.into(),
            service,
            kind: ErrorKind::classify(code, service),
        }
    }

    pub fn from_kind(kind: ErrorKind, message: impl Into<String>, service: Service) -> Self {
        Self {
            code: kind.code(),
            message: message.into(),
            service,
            kind: Some(kind),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == Some(ErrorKind::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == Some(ErrorKind::Unauthorized)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == Some(ErrorKind::RateLimited)
    }
}

/// Errors returned by [`NodeClient`](crate::NodeClient) operations.
///
/// # Error Categories
///
/// - **Infrastructure**: [`Build`](ClientError::Build),
///   [`InvalidConfig`](ClientError::InvalidConfig),
///   [`InvalidUrl`](ClientError::InvalidUrl),
///   [`Transport`](ClientError::Transport), [`Encode`](ClientError::Encode),
///   [`Decode`](ClientError::Decode)
/// - **Classified**: [`UnexpectedStatus`](ClientError::UnexpectedStatus)
/// - **Domain**: [`EmptyChain`](ClientError::EmptyChain)
#[derive(Debug, Error)]
pub enum ClientError {
    /// The shared HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {0}")]
    Build(#[from] reqwest::Error),

    /// The client configuration cannot produce a working transport.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The configured base URL and the request path do not form a valid URL.
    #[error("{operation}: invalid request URL: {reason}")]
    InvalidUrl { operation: &'static str, reason: String },

    /// The request never produced a response: DNS failure, refused
    /// connection, timeout, or an interrupted body.
    #[error("{operation}: request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest_middleware::Error,
    },

    #[error("{operation}: failed to encode request body: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the expected JSON shape.
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A status-checked operation received a code outside its accepted set.
    #[error("{operation}: unexpected status: {error}")]
    UnexpectedStatus { operation: &'static str, error: TypedError },

    /// The node reported a block height of zero, so no latest block exists.
    #[error("Chain has no blocks yet")]
    EmptyChain,
}

impl ClientError {
    /// Classification of the failure, when it fits the fixed taxonomy.
    ///
    /// Transport failures report [`ErrorKind::ConnectionFailed`]; decode and
    /// URL failures have no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ClientError::Transport { .. } => Some(ErrorKind::ConnectionFailed),
            ClientError::UnexpectedStatus { error, .. } => error.kind,
            _ => None,
        }
    }

    /// The HTTP status code, for rejected responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { error, .. } => Some(error.code),
            _ => None,
        }
    }

    pub fn typed(&self) -> Option<&TypedError> {
        match self {
            ClientError::UnexpectedStatus { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ErrorKind::Unauthorized)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind() == Some(ErrorKind::RateLimited)
    }

    pub fn is_connection_failed(&self) -> bool {
        self.kind() == Some(ErrorKind::ConnectionFailed)
    }

    /// True for failures below the API: transport, URL and (de)serialisation.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            ClientError::Build(_)
                | ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl { .. }
                | ClientError::Transport { .. }
                | ClientError::Encode { .. }
                | ClientError::Decode { .. }
        )
    }
}
