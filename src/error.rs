use std::fmt;
use std::io;

/// Failure classes shared by both pipelines. Everything is fatal for this
/// tool; the variants exist so the diagnostic names what actually went wrong.
#[derive(Debug)]
pub enum PipelineError {
    /// Transport failure, timeout, or a non-success HTTP status.
    Network(reqwest::Error),
    /// The API rejected the configured credentials or access token.
    Auth(String),
    /// The response body does not match the expected shape.
    Parse(String),
    /// The destination file cannot be created or written.
    Io(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Network(e) => write!(f, "network request failed: {}", e),
            PipelineError::Auth(msg) => write!(f, "authentication failed: {}", msg),
            PipelineError::Parse(msg) => write!(f, "unexpected response shape: {}", msg),
            PipelineError::Io(e) => write!(f, "could not write output: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Network(e) => Some(e),
            PipelineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        PipelineError::Network(e)
    }
}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        PipelineError::Io(e)
    }
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        match e.into_kind() {
            csv::ErrorKind::Io(io_err) => PipelineError::Io(io_err),
            other => PipelineError::Parse(format!("csv error: {:?}", other)),
        }
    }
}
