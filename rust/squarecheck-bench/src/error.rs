//! Runner errors and their CLI rendering.

use squarecheck_core::SquareCheckError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Core(#[from] SquareCheckError),
    #[error("could not read config file '{}'", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid config value '{key}': {message}")]
    InvalidConfig { key: &'static str, message: String },
    #[error("could not serialize report")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// ErrorChain
// =============================================================================

/// A primary error message plus the messages of its `source()` chain,
/// outermost first.
#[derive(Debug, Clone)]
pub struct ErrorChain {
    pub primary: String,
    pub causes: Vec<String>,
}

impl ErrorChain {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            causes: Vec::new(),
        }
    }

    /// Walk a `std::error::Error` source chain and collect every message.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut chain = Self::new(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            chain.causes.push(cause.to_string());
            source = cause.source();
        }
        chain
    }

    /// Format for stderr:
    ///
    /// ```text
    /// error: <primary message>
    ///   caused by: <cause 1>
    /// ```
    pub fn format_for_display(&self) -> String {
        format!("error: {}", self)
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for cause in &self.causes {
            write!(f, "\n  caused by: {}", cause)?;
        }
        Ok(())
    }
}
