// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

pub const UNRECOVERABLE_ERROR_TEXT: &str = "The connector has encountered an unrecoverable error. \
Please try again later, or file an issue if this error persists.";

#[derive(Debug)]
pub enum ConnectorError {
    Io(io::Error),
    Http(reqwest::Error),
    Status { url: String, status: u16 },
    Json(serde_json::Error),
    Config(String),
    User(UserError),
}

// These allow conversion to ConnectorError, so that '?' works across the fetch and transform
// stages.

impl From<io::Error> for ConnectorError {
    fn from(e: io::Error) -> Self {
        ConnectorError::Io(e)
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(e: reqwest::Error) -> Self {
        ConnectorError::Http(e)
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(e: serde_json::Error) -> Self {
        ConnectorError::Json(e)
    }
}

impl From<UserError> for ConnectorError {
    fn from(e: UserError) -> Self {
        ConnectorError::User(e)
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::Io(e) => write!(f, "I/O error: {}", e),
            ConnectorError::Http(e) => write!(f, "HTTP error: {}", e),
            ConnectorError::Status { url, status } => {
                write!(f, "HTTP status {} from {}", status, url)
            }
            ConnectorError::Json(e) => write!(f, "JSON error: {}", e),
            ConnectorError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConnectorError::User(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for ConnectorError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConnectorError::Io(e) => Some(e),
            ConnectorError::Http(e) => Some(e),
            ConnectorError::Json(e) => Some(e),
            ConnectorError::User(e) => Some(e),
            _ => None,
        }
    }
}

/// What the host gets to see when a data request fails. The text is fixed; the cause only
/// survives in `debug_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub text: String,
    pub debug_text: String,
}

impl UserError {
    pub fn unrecoverable(cause: &ConnectorError) -> Self {
        UserError {
            text: String::from(UNRECOVERABLE_ERROR_TEXT),
            debug_text: format!("Error fetching data. Exception details: {}", cause),
        }
    }
}

impl From<ConnectorError> for UserError {
    fn from(e: ConnectorError) -> Self {
        UserError::unrecoverable(&e)
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl error::Error for UserError {}
