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

use super::builder::*;
use crate::Result;
use crate::client::ClientBuilder;
use crate::options::RequestOptions;
use crate::stub::dynamic;
use crate::transport::ClientConfig;
use std::sync::Arc;

/// Implements a client for the topic administration surface of Pub/Sub.
///
/// Cloud Storage publishes bucket notifications to Pub/Sub topics. This
/// client creates and inspects those topics, it does not publish or receive
/// messages.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_storage_json::client::TopicAdmin;
/// let client = TopicAdmin::builder().build().await?;
/// let topic = client
///     .create_topic()
///     .set_name("projects/my-project/topics/my-topic")
///     .send()
///     .await?;
/// println!("created {}", topic.name);
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// `TopicAdmin` uses the same [ClientBuilder] as
/// [StorageControl][crate::client::StorageControl]. By default it uses the
/// global endpoint (`https://pubsub.googleapis.com`) and
/// [Application Default Credentials].
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct TopicAdmin {
    inner: Arc<dyn dynamic::TopicAdmin>,
    options: RequestOptions,
}

impl TopicAdmin {
    /// Returns a builder for [TopicAdmin].
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::TopicAdmin + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let options = config.default_options();
        let inner = super::transport::TopicAdmin::new(config)?;
        Ok(Self {
            inner: Arc::new(inner),
            options,
        })
    }

    /// Returns the configuration of a topic.
    pub fn get_topic(&self) -> GetTopic {
        GetTopic::new(self.inner.clone(), self.options.clone())
    }

    /// Creates a topic.
    ///
    /// Fails with a service error (HTTP 409) if the topic already exists.
    pub fn create_topic(&self) -> CreateTopic {
        CreateTopic::new(self.inner.clone(), self.options.clone())
    }
}

impl ClientBuilder<TopicAdmin> {
    /// Creates a new client.
    ///
    /// Fails with an error where [is_client_init()][crate::Error::is_client_init]
    /// is true if the default credentials cannot be loaded.
    pub async fn build(self) -> Result<TopicAdmin> {
        TopicAdmin::new(self.config)
    }
}
