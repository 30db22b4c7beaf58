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

//! Traits to mock the clients in this crate.
//!
//! Application developers may need to mock the clients in this crate to test
//! their own code. Implement the traits in this module and then create the
//! clients using `from_stub()`, e.g. [StorageControl::from_stub][crate::client::StorageControl::from_stub].

use crate::Result;
use crate::model::*;
use crate::options::RequestOptions;

/// Defines the trait used to implement [crate::client::StorageControl].
///
/// Application developers may need to implement this trait to mock
/// `client::StorageControl`. In other use-cases, application developers only
/// use `client::StorageControl` and need not be concerned with this trait or
/// its implementations.
///
/// The trait provides a default implementation of each method. These
/// implementations panic, mocks only need to implement the methods used in
/// their tests.
pub trait StorageControl: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::StorageControl::get_bucket].
    fn get_bucket(
        &self,
        _req: GetBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::StorageControl::insert_bucket].
    fn insert_bucket(
        &self,
        _req: InsertBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::StorageControl::patch_bucket].
    fn patch_bucket(
        &self,
        _req: PatchBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::StorageControl::delete_bucket].
    fn delete_bucket(
        &self,
        _req: DeleteBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::StorageControl::insert_notification].
    fn insert_notification(
        &self,
        _req: InsertNotificationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Notification>> + Send {
        unimplemented_stub::<Notification>()
    }

    /// Implements [crate::client::StorageControl::get_notification].
    fn get_notification(
        &self,
        _req: NotificationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Notification>> + Send {
        unimplemented_stub::<Notification>()
    }

    /// Implements [crate::client::StorageControl::list_notifications].
    fn list_notifications(
        &self,
        _req: ListNotificationsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<ListNotificationsResponse>> + Send {
        unimplemented_stub::<ListNotificationsResponse>()
    }

    /// Implements [crate::client::StorageControl::delete_notification].
    fn delete_notification(
        &self,
        _req: NotificationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }
}

/// Defines the trait used to implement [crate::client::TopicAdmin].
///
/// Application developers may need to implement this trait to mock
/// `client::TopicAdmin`. In other use-cases, application developers only
/// use `client::TopicAdmin` and need not be concerned with this trait or
/// its implementations.
pub trait TopicAdmin: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::TopicAdmin::get_topic].
    fn get_topic(
        &self,
        _req: GetTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Topic>> + Send {
        unimplemented_stub::<Topic>()
    }

    /// Implements [crate::client::TopicAdmin::create_topic].
    fn create_topic(
        &self,
        _req: Topic,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Topic>> + Send {
        unimplemented_stub::<Topic>()
    }
}

async fn unimplemented_stub<T>() -> Result<T> {
    unimplemented!(concat!(
        "to prevent breaking changes as services gain new RPCs, the stub ",
        "traits provide default implementations of each method. In the client ",
        "libraries, all implementations of the traits override all methods. ",
        "Therefore, this error should not appear in normal code using the client ",
        "libraries. The only expected context for this error is test code mocking ",
        "the client libraries. If that is how you got this error, verify that your ",
        "mock implements all the methods your test uses."
    ));
}

/// Object-safe versions of the traits, used by the clients.
pub(crate) mod dynamic {
    use crate::Result;
    use crate::model::*;
    use crate::options::RequestOptions;

    #[async_trait::async_trait]
    pub trait StorageControl: std::fmt::Debug + Send + Sync {
        async fn get_bucket(&self, req: GetBucketRequest, options: RequestOptions)
        -> Result<Bucket>;

        async fn insert_bucket(
            &self,
            req: InsertBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket>;

        async fn patch_bucket(
            &self,
            req: PatchBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket>;

        async fn delete_bucket(&self, req: DeleteBucketRequest, options: RequestOptions)
        -> Result<()>;

        async fn insert_notification(
            &self,
            req: InsertNotificationRequest,
            options: RequestOptions,
        ) -> Result<Notification>;

        async fn get_notification(
            &self,
            req: NotificationRequest,
            options: RequestOptions,
        ) -> Result<Notification>;

        async fn list_notifications(
            &self,
            req: ListNotificationsRequest,
            options: RequestOptions,
        ) -> Result<ListNotificationsResponse>;

        async fn delete_notification(
            &self,
            req: NotificationRequest,
            options: RequestOptions,
        ) -> Result<()>;
    }

    /// All implementations of [super::StorageControl] also implement [StorageControl].
    #[async_trait::async_trait]
    impl<T: super::StorageControl> StorageControl for T {
        async fn get_bucket(
            &self,
            req: GetBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::get_bucket(self, req, options).await
        }

        async fn insert_bucket(
            &self,
            req: InsertBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::insert_bucket(self, req, options).await
        }

        async fn patch_bucket(
            &self,
            req: PatchBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::patch_bucket(self, req, options).await
        }

        async fn delete_bucket(
            &self,
            req: DeleteBucketRequest,
            options: RequestOptions,
        ) -> Result<()> {
            T::delete_bucket(self, req, options).await
        }

        async fn insert_notification(
            &self,
            req: InsertNotificationRequest,
            options: RequestOptions,
        ) -> Result<Notification> {
            T::insert_notification(self, req, options).await
        }

        async fn get_notification(
            &self,
            req: NotificationRequest,
            options: RequestOptions,
        ) -> Result<Notification> {
            T::get_notification(self, req, options).await
        }

        async fn list_notifications(
            &self,
            req: ListNotificationsRequest,
            options: RequestOptions,
        ) -> Result<ListNotificationsResponse> {
            T::list_notifications(self, req, options).await
        }

        async fn delete_notification(
            &self,
            req: NotificationRequest,
            options: RequestOptions,
        ) -> Result<()> {
            T::delete_notification(self, req, options).await
        }
    }

    #[async_trait::async_trait]
    pub trait TopicAdmin: std::fmt::Debug + Send + Sync {
        async fn get_topic(&self, req: GetTopicRequest, options: RequestOptions) -> Result<Topic>;

        async fn create_topic(&self, req: Topic, options: RequestOptions) -> Result<Topic>;
    }

    /// All implementations of [super::TopicAdmin] also implement [TopicAdmin].
    #[async_trait::async_trait]
    impl<T: super::TopicAdmin> TopicAdmin for T {
        async fn get_topic(&self, req: GetTopicRequest, options: RequestOptions) -> Result<Topic> {
            T::get_topic(self, req, options).await
        }

        async fn create_topic(&self, req: Topic, options: RequestOptions) -> Result<Topic> {
            T::create_topic(self, req, options).await
        }
    }
}
