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

//! Per-request configuration.
//!
//! Each request builder in this crate implements [RequestOptionsBuilder].
//! Applications use the functions in this trait to override the client
//! defaults for a single request.
//!
//! # Example
//! ```
//! # use google_cloud_storage_json::client::StorageControl;
//! # use google_cloud_storage_json::options::RequestOptionsBuilder;
//! # use std::time::Duration;
//! async fn sample(client: &StorageControl) -> anyhow::Result<()> {
//!     let bucket = client
//!         .get_bucket()
//!         .set_bucket("my-bucket")
//!         .with_timeout(Duration::from_secs(10))
//!         .send()
//!         .await?;
//!     println!("bucket = {bucket:?}");
//!     Ok(())
//! }
//! ```

use crate::{Error, Result};
use std::time::Duration;

/// The options for a single request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    user_project: Option<String>,
}

impl RequestOptions {
    /// The deadline for the complete request.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sets the deadline for the complete request.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// The user agent sent with the request, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Sets the user agent sent with the request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The project billed for the request, if any.
    pub fn user_project(&self) -> Option<&str> {
        self.user_project.as_deref()
    }

    /// Sets the project billed for the request.
    ///
    /// Requests on buckets with requester pays enabled must set this value
    /// unless the caller owns the bucket. Pub/Sub ignores it.
    pub fn set_user_project<T: Into<String>>(&mut self, v: T) {
        self.user_project = Some(v.into());
    }
}

/// Implementation details for the request builders.
#[doc(hidden)]
pub mod internal {
    use super::RequestOptions;

    /// Request builders implement this trait to gain [super::RequestOptionsBuilder].
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Sets the per-request options.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Sets the deadline for the request.
    ///
    /// The deadline covers the complete request, including the time to obtain
    /// the authentication headers. If the deadline expires the request fails
    /// with an error where [is_timeout()][crate::Error::is_timeout] returns
    /// true.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the user agent for the request.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the project billed for the request.
    fn with_user_project<V: Into<String>>(self, v: V) -> Self;
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_user_project<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_project(v);
        self
    }
}

/// Runs `fut` to completion, or until `timeout` expires.
pub(crate) async fn with_deadline<F, T>(timeout: Option<Duration>, fut: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    match timeout {
        None => fut.await,
        Some(t) => tokio::time::timeout(t, fut)
            .await
            .map_err(Error::timeout)?,
    }
}
