/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::{ApiClient, ApiParams, ApiResponse, Creds, Transport};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Cheap to clone handle that is passed into every API call.
///
/// ```rust
/// use imgur_orphans::v3::{Client, Creds};
///
/// let client = Client::new(Creds::from_token(Some("access-token")));
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds)),
        }
    }

    /// Creates a client whose requests go through the given transport
    pub fn with_transport(creds: Creds, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_client: Arc::new(ApiClient::with_transport(creds, transport)),
        }
    }

    /// Creates a client talking to a different API origin
    pub fn with_origin(creds: Creds, origin: &str) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds).with_origin(origin)),
        }
    }

    pub fn endpoint(&self, path: &str, params: Option<&ApiParams<'_>>) -> Result<Url, ImgurError> {
        self.api_client.endpoint(path, params)
    }

    pub async fn get(&self, url: Url) -> Result<ApiResponse, ImgurError> {
        self.api_client.get(url).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse, ImgurError> {
        self.api_client.post(url, body).await
    }
}
