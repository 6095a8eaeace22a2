#![allow(missing_docs)]
//! Error types for the appraisal engine

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JaniceErrorCode {
    EmptyInput,
    Transport,
    EmptyResponse,
    UnexpectedContent,
    NoItems,
    TokenNotFound,
    PartialPair,
    InvalidControl,
    ApiError,
    NetworkError,
    ConfigError,
}

impl fmt::Display for JaniceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::Transport => "TRANSPORT",
            Self::EmptyResponse => "EMPTY_RESPONSE",
            Self::UnexpectedContent => "UNEXPECTED_CONTENT",
            Self::NoItems => "NO_ITEMS",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::PartialPair => "PARTIAL_PAIR",
            Self::InvalidControl => "INVALID_CONTROL",
            Self::ApiError => "API_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub struct JaniceError {
    pub code: JaniceErrorCode,
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl JaniceError {
    pub fn new(code: JaniceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        code: JaniceErrorCode,
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

impl fmt::Display for JaniceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl JaniceError {
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::EmptyInput, message)
    }

    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self::new(
            JaniceErrorCode::Transport,
            format!("API request failed with status {status}: {}", message.into()),
        )
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::EmptyResponse, message)
    }

    pub fn unexpected_content(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::UnexpectedContent, message)
    }

    pub fn no_items(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::NoItems, message)
    }

    pub fn token_not_found(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::TokenNotFound, message)
    }

    pub fn partial_pair(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::PartialPair, message)
    }

    pub fn invalid_control(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::InvalidControl, message)
    }

    pub fn api_error(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::ApiError, message)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::NetworkError, message)
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(JaniceErrorCode::ConfigError, message)
    }
}

pub type Result<T> = std::result::Result<T, JaniceError>;
