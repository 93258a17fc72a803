//! Structured error types shared across topo crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TopoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TopoError {
    /// Malformed input: bad dimensions, odd edge lists, out-of-range vertices.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// Catalog index outside the valid span.
    #[error("out of range: {0}")]
    OutOfRange(ErrorInfo),
    /// Catalog name that is not registered.
    #[error("unknown name: {0}")]
    UnknownName(ErrorInfo),
    /// Size overflow, configured limit breach or failed reservation.
    #[error("allocation failure: {0}")]
    Allocation(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TopoError {
    /// Builds an [`TopoError::InvalidArgument`] error.
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        TopoError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Builds an [`TopoError::OutOfRange`] error.
    pub fn out_of_range(code: impl Into<String>, message: impl Into<String>) -> Self {
        TopoError::OutOfRange(ErrorInfo::new(code, message))
    }

    /// Builds an [`TopoError::UnknownName`] error.
    pub fn unknown_name(code: impl Into<String>, message: impl Into<String>) -> Self {
        TopoError::UnknownName(ErrorInfo::new(code, message))
    }

    /// Builds an [`TopoError::Allocation`] error.
    pub fn allocation(code: impl Into<String>, message: impl Into<String>) -> Self {
        TopoError::Allocation(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TopoError::InvalidArgument(info)
            | TopoError::OutOfRange(info)
            | TopoError::UnknownName(info)
            | TopoError::Allocation(info)
            | TopoError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload, preserving the variant.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value.to_string()))
    }

    /// Attaches a remediation hint, preserving the variant.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, apply: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            TopoError::InvalidArgument(info) => TopoError::InvalidArgument(apply(info)),
            TopoError::OutOfRange(info) => TopoError::OutOfRange(apply(info)),
            TopoError::UnknownName(info) => TopoError::UnknownName(apply(info)),
            TopoError::Allocation(info) => TopoError::Allocation(apply(info)),
            TopoError::Serde(info) => TopoError::Serde(apply(info)),
        }
    }
}
