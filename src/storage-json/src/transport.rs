// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::options::RequestOptions;
use crate::{Error, Result};
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;
use std::time::Duration;

/// The configuration shared by all the clients.
#[derive(Clone, Debug, Default)]
pub(crate) struct ClientConfig {
    pub endpoint: Option<String>,
    pub cred: Option<Credentials>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// The options applied to every request, unless the request overrides them.
    pub(crate) fn default_options(&self) -> RequestOptions {
        let mut options = RequestOptions::default();
        if let Some(t) = self.timeout {
            options.set_timeout(t);
        }
        if let Some(ua) = &self.user_agent {
            options.set_user_agent(ua.clone());
        }
        options
    }
}

/// A thin wrapper around `reqwest::Client` for JSON services.
#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl HttpClient {
    pub(crate) fn new(config: ClientConfig, default_endpoint: &str) -> Result<Self> {
        let cred = Self::make_credentials(&config)?;
        let inner = reqwest::Client::new();
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            inner,
            cred,
            endpoint,
        })
    }

    fn make_credentials(config: &ClientConfig) -> Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        google_cloud_auth::credentials::Builder::default()
            .build()
            .map_err(Error::client_init)
    }

    pub(crate) fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends the request and parses the response.
    ///
    /// Deadlines are enforced by the callers, this function runs until the
    /// response is received or the transport fails.
    pub(crate) async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        tracing::debug!(
            path = %response.url().path(),
            status = status.as_u16(),
            "received response"
        );
        if !status.is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The body for requests without a payload.
#[derive(serde::Serialize)]
pub(crate) struct NoBody;

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let body = response.bytes().await.map_err(Error::io)?;
    Err(crate::error::from_http_error(status_code, &body))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body, and serde_json fails with an EOF error.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response.bytes().await.map_err(Error::io)?;
    match body {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
