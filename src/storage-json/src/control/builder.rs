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

use crate::Result;
use crate::model::*;
use crate::options::{RequestOptions, internal, with_deadline};
use crate::path::required;
use crate::stub::dynamic;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub(crate) struct RequestBuilder<R> {
    stub: Arc<dyn dynamic::StorageControl>,
    request: R,
    options: RequestOptions,
}

impl<R: Default> RequestBuilder<R> {
    fn new(stub: Arc<dyn dynamic::StorageControl>, options: RequestOptions) -> Self {
        Self {
            stub,
            request: R::default(),
            options,
        }
    }
}

macro_rules! request_builder {
    ($name:ident, $request:ty) => {
        impl $name {
            pub(crate) fn new(
                stub: Arc<dyn dynamic::StorageControl>,
                options: RequestOptions,
            ) -> Self {
                Self(RequestBuilder::new(stub, options))
            }

            /// Sets the full request, replacing any prior values.
            pub fn with_request<V: Into<$request>>(mut self, v: V) -> Self {
                self.0.request = v.into();
                self
            }
        }

        impl internal::RequestBuilder for $name {
            fn request_options(&mut self) -> &mut RequestOptions {
                &mut self.0.options
            }
        }
    };
}

/// The request builder for [StorageControl::get_bucket][crate::client::StorageControl::get_bucket] calls.
#[derive(Clone, Debug)]
pub struct GetBucket(RequestBuilder<GetBucketRequest>);

request_builder!(GetBucket, GetBucketRequest);

impl GetBucket {
    /// Sends the request.
    pub async fn send(self) -> Result<Bucket> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        with_deadline(options.timeout(), stub.get_bucket(request, options.clone())).await
    }

    /// Sets the value of [bucket][GetBucketRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }
}

/// The request builder for [StorageControl::insert_bucket][crate::client::StorageControl::insert_bucket] calls.
#[derive(Clone, Debug)]
pub struct InsertBucket(RequestBuilder<InsertBucketRequest>);

request_builder!(InsertBucket, InsertBucketRequest);

impl InsertBucket {
    /// Sends the request.
    pub async fn send(self) -> Result<Bucket> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("project", &request.project)?;
        required("bucket.name", &request.bucket.name)?;
        with_deadline(
            options.timeout(),
            stub.insert_bucket(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [project][InsertBucketRequest::project].
    ///
    /// This is a **required** field for requests.
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.project = v.into();
        self
    }

    /// Sets the value of [bucket][InsertBucketRequest::bucket].
    ///
    /// The bucket name is **required**.
    pub fn set_bucket<T: Into<Bucket>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }
}

/// The request builder for [StorageControl::patch_bucket][crate::client::StorageControl::patch_bucket] calls.
///
/// # Example
/// ```
/// # use google_cloud_storage_json::client::StorageControl;
/// # use google_cloud_storage_json::model::{BucketBilling, BucketPatch};
/// async fn sample(client: &StorageControl, metageneration: i64) -> anyhow::Result<()> {
///     let bucket = client
///         .patch_bucket()
///         .set_bucket("my-bucket")
///         .set_patch(BucketPatch::new().set_billing(BucketBilling::new().set_requester_pays(false)))
///         .set_if_metageneration_match(metageneration)
///         .send()
///         .await?;
///     println!("new metageneration = {:?}", bucket.metageneration);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PatchBucket(RequestBuilder<PatchBucketRequest>);

request_builder!(PatchBucket, PatchBucketRequest);

impl PatchBucket {
    /// Sends the request.
    pub async fn send(self) -> Result<Bucket> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        with_deadline(
            options.timeout(),
            stub.patch_bucket(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [bucket][PatchBucketRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [patch][PatchBucketRequest::patch].
    pub fn set_patch<T: Into<BucketPatch>>(mut self, v: T) -> Self {
        self.0.request.patch = v.into();
        self
    }

    /// Makes the update conditional on the bucket's current metageneration.
    ///
    /// If the metageneration does not match, the service rejects the request
    /// and the error has [is_version_conflict()][crate::Error::is_version_conflict]
    /// set.
    pub fn set_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.0.request.if_metageneration_match = Some(v.into());
        self
    }
}

/// The request builder for [StorageControl::delete_bucket][crate::client::StorageControl::delete_bucket] calls.
#[derive(Clone, Debug)]
pub struct DeleteBucket(RequestBuilder<DeleteBucketRequest>);

request_builder!(DeleteBucket, DeleteBucketRequest);

impl DeleteBucket {
    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        with_deadline(
            options.timeout(),
            stub.delete_bucket(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [bucket][DeleteBucketRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }

    /// Only delete the bucket if its metageneration matches this value.
    pub fn set_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.0.request.if_metageneration_match = Some(v.into());
        self
    }
}

/// The request builder for [StorageControl::insert_notification][crate::client::StorageControl::insert_notification] calls.
#[derive(Clone, Debug)]
pub struct InsertNotification(RequestBuilder<InsertNotificationRequest>);

request_builder!(InsertNotification, InsertNotificationRequest);

impl InsertNotification {
    /// Sends the request.
    pub async fn send(self) -> Result<Notification> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        required("notification.topic", &request.notification.topic)?;
        with_deadline(
            options.timeout(),
            stub.insert_notification(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [bucket][InsertNotificationRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [notification][InsertNotificationRequest::notification].
    ///
    /// The notification topic is **required**.
    pub fn set_notification<T: Into<Notification>>(mut self, v: T) -> Self {
        self.0.request.notification = v.into();
        self
    }
}

/// The request builder for [StorageControl::get_notification][crate::client::StorageControl::get_notification] calls.
#[derive(Clone, Debug)]
pub struct GetNotification(RequestBuilder<NotificationRequest>);

request_builder!(GetNotification, NotificationRequest);

impl GetNotification {
    /// Sends the request.
    pub async fn send(self) -> Result<Notification> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        required("notification", &request.notification)?;
        with_deadline(
            options.timeout(),
            stub.get_notification(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [bucket][NotificationRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [notification][NotificationRequest::notification].
    ///
    /// This is a **required** field for requests.
    pub fn set_notification<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.notification = v.into();
        self
    }
}

/// The request builder for [StorageControl::list_notifications][crate::client::StorageControl::list_notifications] calls.
#[derive(Clone, Debug)]
pub struct ListNotifications(RequestBuilder<ListNotificationsRequest>);

request_builder!(ListNotifications, ListNotificationsRequest);

impl ListNotifications {
    /// Sends the request.
    ///
    /// The service returns all the notifications of a bucket in a single page.
    pub async fn send(self) -> Result<Vec<Notification>> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        let response = with_deadline(
            options.timeout(),
            stub.list_notifications(request, options.clone()),
        )
        .await?;
        Ok(response.items)
    }

    /// Sets the value of [bucket][ListNotificationsRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }
}

/// The request builder for [StorageControl::delete_notification][crate::client::StorageControl::delete_notification] calls.
#[derive(Clone, Debug)]
pub struct DeleteNotification(RequestBuilder<NotificationRequest>);

request_builder!(DeleteNotification, NotificationRequest);

impl DeleteNotification {
    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        let RequestBuilder {
            stub,
            request,
            options,
        } = self.0;
        required("bucket", &request.bucket)?;
        required("notification", &request.notification)?;
        with_deadline(
            options.timeout(),
            stub.delete_notification(request, options.clone()),
        )
        .await
    }

    /// Sets the value of [bucket][NotificationRequest::bucket].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.bucket = v.into();
        self
    }

    /// Sets the value of [notification][NotificationRequest::notification].
    ///
    /// This is a **required** field for requests.
    pub fn set_notification<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.notification = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::client::StorageControl;
    use crate::model::*;
    use crate::options::{RequestOptions, RequestOptionsBuilder};
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    #[derive(Debug)]
    struct Slow;

    impl crate::stub::StorageControl for Slow {
        async fn get_bucket(&self, req: GetBucketRequest, _: RequestOptions) -> crate::Result<Bucket> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Bucket::new().set_name(req.bucket))
        }

        async fn insert_notification(
            &self,
            req: InsertNotificationRequest,
            options: RequestOptions,
        ) -> crate::Result<Notification> {
            assert_eq!(options.user_project(), Some("billed-project"));
            let mut n = req.notification;
            n.id = "1".to_string();
            Ok(n)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn deadline() {
        let client = StorageControl::from_stub(Slow);
        let err = assert_err!(
            client
                .get_bucket()
                .set_bucket("b")
                .with_timeout(Duration::from_secs(10))
                .send()
                .await
        );
        assert!(err.is_timeout(), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn no_deadline() {
        let client = StorageControl::from_stub(Slow);
        let bucket = assert_ok!(client.get_bucket().set_bucket("b").send().await);
        assert_eq!(bucket.name, "b");
    }

    #[tokio::test]
    async fn options_reach_stub() -> anyhow::Result<()> {
        let client = StorageControl::from_stub(Slow);
        let n = client
            .insert_notification()
            .set_bucket("b")
            .set_notification(Notification::new().set_topic(notification_topic("p", "t")))
            .with_user_project("billed-project")
            .send()
            .await?;
        assert_eq!(n.id, "1");
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields() {
        // The stub panics on all these calls, the requests must fail first.
        let client = StorageControl::from_stub(Slow);
        let errors = [
            client.insert_bucket().set_project("p").send().await.err(),
            client
                .insert_bucket()
                .set_bucket(Bucket::new().set_name("b"))
                .send()
                .await
                .err(),
            client.patch_bucket().send().await.err(),
            client.delete_bucket().send().await.err(),
            client.insert_notification().set_bucket("b").send().await.err(),
            client.get_notification().set_bucket("b").send().await.err(),
            client.list_notifications().send().await.map(|_| ()).err(),
            client.delete_notification().set_notification("1").send().await.err(),
        ];
        for (i, err) in errors.into_iter().enumerate() {
            let err = err.unwrap_or_else(|| panic!("request {i} should fail"));
            assert!(err.is_request(), "{i}: {err:?}");
        }
        let err = assert_err!(client.get_bucket().send().await);
        assert!(err.is_request(), "{err:?}");
    }

    #[tokio::test]
    async fn with_request() -> anyhow::Result<()> {
        let client = StorageControl::from_stub(Slow);
        let n = client
            .insert_notification()
            .with_request(
                InsertNotificationRequest::new()
                    .set_bucket("b")
                    .set_notification(Notification::new().set_topic("//t")),
            )
            .with_user_project("billed-project")
            .send()
            .await?;
        assert_eq!(n.topic, "//t");
        Ok(())
    }
}
