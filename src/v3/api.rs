/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::Operation;
use crate::v3::errors::ImgurError;
use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com";

// Environment variable holding the OAuth2 access token
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Moves a request over the wire and hands back the raw status and body.
///
/// [`reqwest::Client`] implements this directly. Tests substitute their own implementation to
/// script responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), ImgurError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), ImgurError> {
        let mut builder = self.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        Ok((status, resp.bytes().await?))
    }
}

/// Credentials used to authorize requests.
///
/// The access token is obtained via the OAuth2 flow external to this library. Without one the
/// requests still go out, they just are not authorized for account scoped endpoints.
#[derive(Default, Clone)]
pub struct Creds {
    access_token: Option<String>,
}

impl Creds {
    /// Creates credentials from an already acquired access token
    pub fn from_token(access_token: Option<&str>) -> Self {
        Self {
            access_token: access_token.filter(|v| !v.is_empty()).map(|v| v.into()),
        }
    }

    /// Reads the access token from the `ACCESS_TOKEN` environment variable
    pub fn from_env() -> Self {
        let creds = Self::from_token(std::env::var(ACCESS_TOKEN_VAR).ok().as_deref());
        if creds.has_token() {
            debug!(">> Running with access token");
        } else {
            debug!(">> Running without access token");
        }
        creds
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// Result of a single call: whether the status was a success and the parsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub ok: bool,
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Pulls the `data` field out of the response envelope.
    ///
    /// A not-ok response becomes [`ImgurError::RemoteCall`] tagged with `operation`.
    pub fn into_data<T: DeserializeOwned>(self, operation: Operation) -> Result<T, ImgurError> {
        if !self.ok {
            let message = self.error_message();
            error!("{}: {}", operation, message);
            return Err(ImgurError::RemoteCall {
                operation,
                status: self.status,
                message,
            });
        }
        serde_json::from_value::<ResponseBody<T>>(self.body)
            .map(|v| v.data)
            .map_err(ImgurError::ApiResponseMalformed)
    }

    // The API puts the reason under data.error, either as a string or as an object with a message
    fn error_message(&self) -> String {
        match self.body.pointer("/data/error") {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Object(obj)) => obj
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| Value::Object(obj.clone()).to_string(), |v| v.to_string()),
            _ if self.body.is_null() => "no response body".to_string(),
            _ => self.body.to_string(),
        }
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    origin: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a new client that talks to the Imgur API over https
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(creds, Arc::new(reqwest::Client::new()))
    }

    /// Creates a new client that sends its requests through the provided transport
    pub fn with_transport(creds: Creds, transport: Arc<dyn Transport>) -> Self {
        Self {
            creds,
            origin: API_ORIGIN.to_string(),
            transport,
        }
    }

    /// Points the client at a different API origin
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    /// Builds the full url for an API path.
    ///
    /// The path is resolved below any path the origin carries, so an origin of
    /// `http://host/proxy` sends `/3/album` to `http://host/proxy/3/album`.
    pub fn endpoint(&self, path: &str, params: Option<&ApiParams<'_>>) -> Result<Url, ImgurError> {
        let base = format!("{}/", self.origin.trim_end_matches('/'));
        let mut req_url = Url::parse(&base)?.join(path.trim_start_matches('/'))?;
        if let Some(params) = params {
            req_url.query_pairs_mut().extend_pairs(params);
        }
        Ok(req_url)
    }

    /// Performs a get request to the Imgur API
    pub async fn get(&self, url: Url) -> Result<ApiResponse, ImgurError> {
        self.request(Method::GET, url, None).await
    }

    /// Performs a post request with a JSON body to the Imgur API
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse, ImgurError> {
        let data = serde_json::to_vec(body)?;
        self.request(Method::POST, url, Some(Bytes::from(data))).await
    }

    fn headers(&self) -> Result<HeaderMap, ImgurError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.creds.access_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
    ) -> Result<ApiResponse, ImgurError> {
        debug!("{} {}", method, url);
        let headers = self.headers()?;
        let (status, data) = self.transport.send(method, url, headers, body).await?;
        let body = if data.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&data).unwrap_or_else(|err| {
                debug!("Non JSON response body: {:?}", err);
                Value::Null
            })
        };
        Ok(ApiResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("origin", &self.origin)
            .finish()
    }
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct ResponseBody<ResponseType> {
    data: ResponseType,
}
