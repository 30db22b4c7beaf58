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
use crate::options::RequestOptions;
use crate::path::segment;
use crate::transport::{ClientConfig, HttpClient, NoBody};
use reqwest::Method;

const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

/// Implements [crate::stub::StorageControl] using the Cloud Storage JSON API.
#[derive(Clone, Debug)]
pub(crate) struct StorageControl {
    inner: HttpClient,
}

impl StorageControl {
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, DEFAULT_ENDPOINT)?;
        Ok(Self { inner })
    }

    fn builder(
        &self,
        method: Method,
        path: String,
        options: &RequestOptions,
    ) -> reqwest::RequestBuilder {
        let builder = self
            .inner
            .builder(method, path)
            .query(&[("alt", "json"), ("prettyPrint", "false")]);
        match options.user_project() {
            None => builder,
            Some(p) => builder.query(&[("userProject", p)]),
        }
    }
}

fn bucket_path(bucket: &str) -> String {
    format!("/storage/v1/b/{}", segment(bucket))
}

fn notifications_path(bucket: &str) -> String {
    format!("{}/notificationConfigs", bucket_path(bucket))
}

fn notification_path(bucket: &str, notification: &str) -> String {
    format!(
        "{}/{}",
        notifications_path(bucket),
        segment(notification)
    )
}

impl crate::stub::StorageControl for StorageControl {
    async fn get_bucket(&self, req: GetBucketRequest, options: RequestOptions) -> Result<Bucket> {
        let builder = self.builder(Method::GET, bucket_path(&req.bucket), &options);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn insert_bucket(
        &self,
        req: InsertBucketRequest,
        options: RequestOptions,
    ) -> Result<Bucket> {
        let builder = self
            .builder(Method::POST, "/storage/v1/b".to_string(), &options)
            .query(&[("project", req.project.as_str())]);
        self.inner.execute(builder, Some(req.bucket), options).await
    }

    async fn patch_bucket(
        &self,
        req: PatchBucketRequest,
        options: RequestOptions,
    ) -> Result<Bucket> {
        let builder = self.builder(Method::PATCH, bucket_path(&req.bucket), &options);
        let builder = req
            .if_metageneration_match
            .iter()
            .fold(builder, |b, v| b.query(&[("ifMetagenerationMatch", v)]));
        self.inner.execute(builder, Some(req.patch), options).await
    }

    async fn delete_bucket(&self, req: DeleteBucketRequest, options: RequestOptions) -> Result<()> {
        let builder = self.builder(Method::DELETE, bucket_path(&req.bucket), &options);
        let builder = req
            .if_metageneration_match
            .iter()
            .fold(builder, |b, v| b.query(&[("ifMetagenerationMatch", v)]));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn insert_notification(
        &self,
        req: InsertNotificationRequest,
        options: RequestOptions,
    ) -> Result<Notification> {
        let builder = self.builder(Method::POST, notifications_path(&req.bucket), &options);
        self.inner
            .execute(builder, Some(req.notification), options)
            .await
    }

    async fn get_notification(
        &self,
        req: NotificationRequest,
        options: RequestOptions,
    ) -> Result<Notification> {
        let builder = self.builder(
            Method::GET,
            notification_path(&req.bucket, &req.notification),
            &options,
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_notifications(
        &self,
        req: ListNotificationsRequest,
        options: RequestOptions,
    ) -> Result<ListNotificationsResponse> {
        let builder = self.builder(Method::GET, notifications_path(&req.bucket), &options);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn delete_notification(
        &self,
        req: NotificationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let builder = self.builder(
            Method::DELETE,
            notification_path(&req.bucket, &req.notification),
            &options,
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}
