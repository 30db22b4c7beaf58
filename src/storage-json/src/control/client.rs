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
use crate::options::RequestOptions;
use crate::stub::dynamic;
use crate::transport::ClientConfig;
use google_cloud_auth::credentials::Credentials;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// Implements a client for the bucket configuration surface of Cloud Storage.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_storage_json::client::StorageControl;
/// let client = StorageControl::builder().build().await?;
/// let bucket = client.get_bucket().set_bucket("my-bucket").send().await?;
/// println!("bucket metageneration = {:?}", bucket.metageneration);
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `StorageControl` use the `with_*` methods in the type returned
/// by [builder()][StorageControl::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://storage.googleapis.com`). Applications using an emulator, or
///   running in restricted networks, may want to override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `StorageControl` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `StorageControl` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
///
/// # Service Description
///
/// This client is used to read and change bucket metadata, and to manage the
/// Pub/Sub notifications of a bucket. It does not expose any functions to
/// read or write objects.
///
/// Each change to the bucket metadata increments the bucket metageneration.
/// Updates can be made conditional on the current metageneration, see
/// [PatchBucket::set_if_metageneration_match] and the [occ][crate::occ]
/// module.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct StorageControl {
    inner: Arc<dyn dynamic::StorageControl>,
    options: RequestOptions,
}

impl StorageControl {
    /// Returns a builder for [StorageControl].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_storage_json::client::StorageControl;
    /// let client = StorageControl::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::StorageControl + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let options = config.default_options();
        let inner = super::transport::StorageControl::new(config)?;
        Ok(Self {
            inner: Arc::new(inner),
            options,
        })
    }

    /// Returns the metadata of a bucket.
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_storage_json::client::StorageControl;
    /// # let client = StorageControl::builder().build().await?;
    /// let bucket = client.get_bucket().set_bucket("my-bucket").send().await?;
    /// println!("requester pays = {}", bucket.requester_pays());
    /// # Ok(()) }
    /// ```
    pub fn get_bucket(&self) -> GetBucket {
        GetBucket::new(self.inner.clone(), self.options.clone())
    }

    /// Creates a new bucket.
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_storage_json::client::StorageControl;
    /// # use google_cloud_storage_json::model::Bucket;
    /// # let client = StorageControl::builder().build().await?;
    /// let bucket = client
    ///     .insert_bucket()
    ///     .set_project("my-project")
    ///     .set_bucket(Bucket::new().set_name("my-bucket"))
    ///     .send()
    ///     .await?;
    /// println!("created {}", bucket.name);
    /// # Ok(()) }
    /// ```
    pub fn insert_bucket(&self) -> InsertBucket {
        InsertBucket::new(self.inner.clone(), self.options.clone())
    }

    /// Changes some attributes of a bucket.
    ///
    /// Only the attributes set in the [BucketPatch][crate::model::BucketPatch]
    /// change. Applications that need to avoid overwriting concurrent changes
    /// should use [update_if_unchanged()][crate::occ::update_if_unchanged].
    pub fn patch_bucket(&self) -> PatchBucket {
        PatchBucket::new(self.inner.clone(), self.options.clone())
    }

    /// Deletes an empty bucket.
    pub fn delete_bucket(&self) -> DeleteBucket {
        DeleteBucket::new(self.inner.clone(), self.options.clone())
    }

    /// Creates a notification configuration for a bucket.
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_storage_json::client::StorageControl;
    /// # use google_cloud_storage_json::model::{Notification, notification_topic};
    /// # let client = StorageControl::builder().build().await?;
    /// let notification = client
    ///     .insert_notification()
    ///     .set_bucket("my-bucket")
    ///     .set_notification(
    ///         Notification::new()
    ///             .set_topic(notification_topic("my-project", "my-topic"))
    ///             .set_payload_format(Notification::JSON_API_V1),
    ///     )
    ///     .send()
    ///     .await?;
    /// println!("notification id = {}", notification.id);
    /// # Ok(()) }
    /// ```
    pub fn insert_notification(&self) -> InsertNotification {
        InsertNotification::new(self.inner.clone(), self.options.clone())
    }

    /// Returns a notification configuration.
    pub fn get_notification(&self) -> GetNotification {
        GetNotification::new(self.inner.clone(), self.options.clone())
    }

    /// Lists the notification configurations of a bucket.
    pub fn list_notifications(&self) -> ListNotifications {
        ListNotifications::new(self.inner.clone(), self.options.clone())
    }

    /// Deletes a notification configuration.
    pub fn delete_notification(&self) -> DeleteNotification {
        DeleteNotification::new(self.inner.clone(), self.options.clone())
    }
}

/// A builder for the clients in this crate.
///
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_storage_json::client::StorageControl;
/// # use std::time::Duration;
/// let client = StorageControl::builder()
///     .with_endpoint("http://localhost:9000")
///     .with_timeout(Duration::from_secs(30))
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<C> {
    pub(crate) config: ClientConfig,
    _client: PhantomData<fn() -> C>,
}

impl<C> ClientBuilder<C> {
    pub(crate) fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            _client: PhantomData,
        }
    }

    /// Sets the endpoint.
    ///
    /// Applications using an emulator set this to the emulator address, e.g.
    /// `http://localhost:8085`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_storage_json::client::StorageControl;
    /// use google_cloud_auth::credentials::anonymous::Builder;
    /// let client = StorageControl::builder()
    ///     .with_credentials(Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the user agent sent with each request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Sets the default deadline for each request.
    ///
    /// Requests can override this value, see
    /// [RequestOptionsBuilder][crate::options::RequestOptionsBuilder].
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.timeout = Some(v.into());
        self
    }
}

impl ClientBuilder<StorageControl> {
    /// Creates a new client.
    ///
    /// Fails with an error where [is_client_init()][crate::Error::is_client_init]
    /// is true if the default credentials cannot be loaded.
    pub async fn build(self) -> Result<StorageControl> {
        StorageControl::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_auth::credentials::anonymous::Builder as Anonymous;

    #[test]
    fn builder_config() {
        let builder = StorageControl::builder()
            .with_endpoint("http://localhost:1234")
            .with_user_agent("test-agent/1.0")
            .with_timeout(Duration::from_secs(30))
            .with_credentials(Anonymous::new().build());
        assert_eq!(
            builder.config.endpoint.as_deref(),
            Some("http://localhost:1234")
        );
        assert_eq!(builder.config.user_agent.as_deref(), Some("test-agent/1.0"));
        assert_eq!(builder.config.timeout, Some(Duration::from_secs(30)));
        assert!(builder.config.cred.is_some());
    }

    #[tokio::test]
    async fn build_with_defaults() -> anyhow::Result<()> {
        let client = StorageControl::builder()
            .with_credentials(Anonymous::new().build())
            .with_timeout(Duration::from_secs(10))
            .build()
            .await?;
        assert_eq!(client.options.timeout(), Some(Duration::from_secs(10)));
        let mut builder = client.get_bucket();
        let options = crate::options::internal::RequestBuilder::request_options(&mut builder);
        assert_eq!(options.timeout(), Some(Duration::from_secs(10)));
        Ok(())
    }
}
