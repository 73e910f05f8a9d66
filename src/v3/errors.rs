/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::Operation;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("{operation} (status: {status}): {message}")]
    RemoteCall {
        operation: Operation,
        status: u16,
        message: String,
    },

    #[error("No album titled: {0}")]
    AlbumNotFound(String),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),
}

impl ImgurError {
    /// The step that failed when this is a remote call failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ImgurError::RemoteCall { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}
