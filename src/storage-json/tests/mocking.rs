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

#[cfg(test)]
mod tests {
    use google_cloud_storage_json as gcs;
    use gcs::model::*;
    use gcs::options::RequestOptions;
    use gcs::{Error, Result, ServiceError};

    mockall::mock! {
        #[derive(Debug)]
        StorageControl {}
        impl gcs::stub::StorageControl for StorageControl {
            async fn get_bucket(&self, _req: GetBucketRequest, _options: RequestOptions) -> Result<Bucket>;
            async fn insert_bucket(&self, _req: InsertBucketRequest, _options: RequestOptions) -> Result<Bucket>;
            async fn patch_bucket(&self, _req: PatchBucketRequest, _options: RequestOptions) -> Result<Bucket>;
            async fn delete_bucket(&self, _req: DeleteBucketRequest, _options: RequestOptions) -> Result<()>;
            async fn insert_notification(&self, _req: InsertNotificationRequest, _options: RequestOptions) -> Result<Notification>;
            async fn get_notification(&self, _req: NotificationRequest, _options: RequestOptions) -> Result<Notification>;
            async fn list_notifications(&self, _req: ListNotificationsRequest, _options: RequestOptions) -> Result<ListNotificationsResponse>;
            async fn delete_notification(&self, _req: NotificationRequest, _options: RequestOptions) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        TopicAdmin {}
        impl gcs::stub::TopicAdmin for TopicAdmin {
            async fn get_topic(&self, _req: GetTopicRequest, _options: RequestOptions) -> Result<Topic>;
            async fn create_topic(&self, _req: Topic, _options: RequestOptions) -> Result<Topic>;
        }
    }

    fn bucket_at(metageneration: i64) -> Bucket {
        Bucket::new()
            .set_name("my-bucket")
            .set_metageneration(metageneration)
            .set_billing(BucketBilling::new().set_requester_pays(true))
    }

    #[tokio::test]
    async fn mock_get_bucket() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .withf(|req, _| req.bucket == "my-bucket")
            .return_once(|_, _| Ok(bucket_at(3)));
        let client = gcs::client::StorageControl::from_stub(mock);
        let bucket = client.get_bucket().set_bucket("my-bucket").send().await?;
        assert_eq!(bucket.metageneration, Some(3));
        assert!(bucket.requester_pays(), "{bucket:?}");
        Ok(())
    }

    #[tokio::test]
    async fn mock_update_if_unchanged() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_bucket()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(bucket_at(5)));
        mock.expect_patch_bucket()
            .withf(|req, _| {
                req.bucket == "my-bucket"
                    && req.if_metageneration_match == Some(5)
                    && req.patch.billing == Some(BucketBilling::new().set_requester_pays(false))
                    && req.patch.labels.is_none()
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(bucket_at(6).set_billing(BucketBilling::new().set_requester_pays(false)))
            });

        let client = gcs::client::StorageControl::from_stub(mock);
        let patch = BucketPatch::new().set_billing(BucketBilling::new().set_requester_pays(false));
        let bucket = gcs::occ::update_if_unchanged(&client, "my-bucket", patch).await?;
        assert_eq!(bucket.metageneration, Some(6));
        assert!(!bucket.requester_pays(), "{bucket:?}");
        Ok(())
    }

    #[tokio::test]
    async fn mock_update_if_unchanged_conflict() {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .times(1)
            .return_once(|_, _| Ok(bucket_at(5)));
        mock.expect_patch_bucket().times(1).return_once(|_, _| {
            Err(Error::service(ServiceError::new(
                412,
                "At least one of the pre-conditions you specified did not hold.",
            )))
        });

        let client = gcs::client::StorageControl::from_stub(mock);
        let patch = BucketPatch::new().set_labels([("owner", "test")]);
        let err = gcs::occ::update_if_unchanged(&client, "my-bucket", patch)
            .await
            .expect_err("conflicts are errors");
        assert!(err.is_version_conflict(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(412));
    }

    #[tokio::test]
    async fn mock_insert_notification() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_insert_notification()
            .withf(|req, _| {
                req.bucket == "my-bucket"
                    && req.notification.topic
                        == "//pubsub.googleapis.com/projects/my-project/topics/my-topic"
            })
            .times(2)
            .returning({
                let mut next = 0;
                move |req, _| {
                    next += 1;
                    let mut n = req.notification;
                    n.id = next.to_string();
                    Ok(n)
                }
            });

        let client = gcs::client::StorageControl::from_stub(mock);
        let mut ids = Vec::new();
        for _ in 0..2 {
            let n = client
                .insert_notification()
                .set_bucket("my-bucket")
                .set_notification(
                    Notification::new()
                        .set_topic(notification_topic("my-project", "my-topic"))
                        .set_payload_format(Notification::JSON_API_V1),
                )
                .send()
                .await?;
            ids.push(n.id);
        }
        assert_eq!(ids, vec!["1", "2"]);
        Ok(())
    }

    #[tokio::test]
    async fn mock_list_notifications() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_list_notifications().return_once(|_, _| {
            Ok(serde_json::from_value(serde_json::json!({
                "items": [
                    {"id": "1", "topic": "//pubsub.googleapis.com/projects/p/topics/t"},
                    {"id": "2", "topic": "//pubsub.googleapis.com/projects/p/topics/t"},
                ]
            }))
            .expect("valid test payload"))
        });
        let client = gcs::client::StorageControl::from_stub(mock);
        let items = client
            .list_notifications()
            .set_bucket("my-bucket")
            .send()
            .await?;
        let ids = items.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
        Ok(())
    }

    #[tokio::test]
    async fn mock_topic_admin() -> anyhow::Result<()> {
        let mut mock = MockTopicAdmin::new();
        mock.expect_get_topic()
            .return_once(|_, _| Err(Error::service(ServiceError::new(404, "Resource not found"))));
        mock.expect_create_topic()
            .withf(|req, _| req.name == "projects/my-project/topics/my-topic")
            .return_once(|req, _| Ok(req));

        let client = gcs::client::TopicAdmin::from_stub(mock);
        let err = client
            .get_topic()
            .set_topic(topic_name("my-project", "my-topic"))
            .send()
            .await
            .expect_err("topic does not exist");
        assert!(err.is_not_found(), "{err:?}");
        let topic = client
            .create_topic()
            .set_name(topic_name("my-project", "my-topic"))
            .send()
            .await?;
        assert_eq!(topic.name, "projects/my-project/topics/my-topic");
        Ok(())
    }
}
