/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use bytes::Bytes;
use imgur_orphans::v3::{Client, Creds, ImgurError, Transport};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

// A request as seen by the mock
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Recorded {
    #[allow(dead_code)]
    pub(crate) fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Scripted transport. Responses are keyed on "METHOD /path?query"; anything not scripted gets
/// a successful empty page.
#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Mutex<HashMap<String, (u16, Value)>>,
    requests: Mutex<Vec<Recorded>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Responds with `data` wrapped in the API envelope
    pub(crate) fn respond(&self, route: &str, status: u16, data: Value) {
        let body = json!({ "data": data, "success": status < 300, "status": status });
        self.routes
            .lock()
            .unwrap()
            .insert(route.to_string(), (status, body));
    }

    /// Scripts an album or image listing page
    pub(crate) fn page(&self, uri: &str, page: usize, data: Value) {
        self.respond(&format!("GET {}?page={}&perPage=50", uri, page), 200, data);
    }

    pub(crate) fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.recorded().iter().map(Recorded::line).collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), ImgurError> {
        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let key = format!("{} {}", method, path);
        let body = match body {
            Some(data) => Some(serde_json::from_slice(&data)?),
            None => None,
        };
        self.requests.lock().unwrap().push(Recorded {
            method,
            path,
            headers,
            body,
        });

        let (status, resp) = self
            .routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (200, json!({ "data": [], "success": true, "status": 200 })));
        Ok((
            StatusCode::from_u16(status).unwrap(),
            Bytes::from(serde_json::to_vec(&resp)?),
        ))
    }
}

/// Client whose requests all go to the mock
#[allow(dead_code)]
pub(crate) fn client(mock: &Arc<MockTransport>, token: Option<&str>) -> Client {
    Client::with_transport(Creds::from_token(token), mock.clone())
}

/// Listing entries with ids "{prefix}{n}" for every n in the range
#[allow(dead_code)]
pub(crate) fn items(prefix: &str, range: std::ops::Range<usize>) -> Value {
    Value::Array(
        range
            .map(|n| json!({ "id": format!("{}{}", prefix, n) }))
            .collect(),
    )
}
