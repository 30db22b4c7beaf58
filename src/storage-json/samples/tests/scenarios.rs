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

//! Runs the samples against an in-memory fake of the services.

#[cfg(test)]
mod tests {
    use google_cloud_storage_json as gcs;
    use gcs::client::StorageControl;
    use gcs::model::{
        Bucket, BucketBilling, HierarchicalNamespace, IamConfiguration, UniformBucketLevelAccess,
        Versioning,
    };
    use serde_json::json;
    use storage_json_fake_server::FakeServer;
    use storage_samples::config::Config;
    use storage_samples::{buckets, notifications};
    use test_case::test_case;

    const PROJECT_ID: &str = "test-project";
    const TOPIC_ID: &str = "test-topic";

    fn config(server: &FakeServer) -> Config {
        Config {
            project_id: PROJECT_ID.to_string(),
            topic_id: TOPIC_ID.to_string(),
            storage_emulator: Some(server.endpoint().to_string()),
            pubsub_emulator: Some(server.endpoint().to_string()),
        }
    }

    async fn setup() -> anyhow::Result<(FakeServer, StorageControl)> {
        let server = FakeServer::start().await?;
        let client = config(&server).storage_control().await?;
        Ok((server, client))
    }

    async fn insert(client: &StorageControl, bucket: Bucket) -> anyhow::Result<Bucket> {
        let bucket = client
            .insert_bucket()
            .set_project(PROJECT_ID)
            .set_bucket(bucket)
            .send()
            .await?;
        Ok(bucket)
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test_case(None; "uniform access omitted")]
    #[test_case(Some(false); "uniform access disabled")]
    #[tokio::test]
    async fn hierarchical_namespace_without_uniform_access_is_rejected(
        uniform_access: Option<bool>,
    ) -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        let bucket = Bucket::new()
            .set_name("b1")
            .set_hierarchical_namespace(HierarchicalNamespace::new().set_enabled(true));
        let bucket = match uniform_access {
            None => bucket,
            Some(v) => bucket.set_iam_configuration(
                IamConfiguration::new()
                    .set_uniform_bucket_level_access(UniformBucketLevelAccess::new().set_enabled(v)),
            ),
        };
        let err = client
            .insert_bucket()
            .set_project(PROJECT_ID)
            .set_bucket(bucket)
            .send()
            .await
            .expect_err("the service requires uniform bucket-level access");
        assert_eq!(err.http_status_code(), Some(400), "{err:?}");
        assert!(server.bucket("b1").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_hierarchical_namespace() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        let mut out = Vec::new();
        buckets::create_bucket_hierarchical_namespace::sample(&mut out, &client, PROJECT_ID, "b1")
            .await?;
        let out = output(out);
        assert!(out.contains("with hierarchical namespace enabled"), "{out}");

        let bucket = client.get_bucket().set_bucket("b1").send().await?;
        assert!(bucket.hierarchical_namespace_enabled(), "{bucket:?}");
        assert!(bucket.uniform_bucket_level_access_enabled(), "{bucket:?}");
        assert_eq!(bucket.metageneration, Some(1));
        assert!(server.bucket("b1").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_twice() -> anyhow::Result<()> {
        let (_server, client) = setup().await?;
        let mut out = Vec::new();
        buckets::create_bucket_hierarchical_namespace::sample(&mut out, &client, PROJECT_ID, "b1")
            .await?;
        let err = buckets::create_bucket_hierarchical_namespace::sample(
            &mut out, &client, PROJECT_ID, "b1",
        )
        .await
        .expect_err("duplicate buckets are rejected");
        let gcs_err = err.downcast_ref::<gcs::Error>();
        assert_eq!(
            gcs_err.and_then(gcs::Error::http_status_code),
            Some(409),
            "{err:?}"
        );
        assert!(format!("{err:#}").contains("Bucket(\"b1\").Create"), "{err:#}");
        Ok(())
    }

    #[tokio::test]
    async fn disable_requester_pays() -> anyhow::Result<()> {
        let (_server, client) = setup().await?;
        insert(
            &client,
            Bucket::new()
                .set_name("b1")
                .set_billing(BucketBilling::new().set_requester_pays(true)),
        )
        .await?;

        let mut out = Vec::new();
        buckets::disable_requester_pays::sample(&mut out, &client, "b1").await?;
        buckets::get_requester_pays_status::sample(&mut out, &client, "b1").await?;
        let out = output(out);
        assert!(out.contains("Requester pays disabled for bucket b1"), "{out}");
        assert!(out.contains("Requester pays is disabled for bucket b1"), "{out}");

        let bucket = client.get_bucket().set_bucket("b1").send().await?;
        assert!(!bucket.requester_pays(), "{bucket:?}");
        assert_eq!(bucket.metageneration, Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_the_requested_attributes() -> anyhow::Result<()> {
        let (_server, client) = setup().await?;
        let before = insert(
            &client,
            Bucket::new()
                .set_name("b1")
                .set_labels([("env", "test"), ("owner", "samples")])
                .set_versioning(Versioning::new().set_enabled(true))
                .set_iam_configuration(IamConfiguration::new().set_public_access_prevention(
                    "enforced",
                )),
        )
        .await?;

        let mut out = Vec::new();
        buckets::enable_requester_pays::sample(&mut out, &client, "b1").await?;

        let after = client.get_bucket().set_bucket("b1").send().await?;
        assert!(after.requester_pays(), "{after:?}");
        assert_eq!(after.labels, before.labels);
        assert_eq!(after.versioning, before.versioning);
        assert_eq!(after.iam_configuration, before.iam_configuration);
        assert_eq!(after.metageneration, before.metageneration.map(|v| v + 1));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_update_is_a_version_conflict() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        insert(
            &client,
            Bucket::new()
                .set_name("b1")
                .set_billing(BucketBilling::new().set_requester_pays(true)),
        )
        .await?;

        server.inject_concurrent_update("b1");
        let mut out = Vec::new();
        let err = buckets::disable_requester_pays::sample(&mut out, &client, "b1")
            .await
            .expect_err("the bucket changed after it was read");
        let gcs_err = err.downcast_ref::<gcs::Error>();
        assert!(
            gcs_err.is_some_and(gcs::Error::is_version_conflict),
            "{err:?}"
        );
        assert!(out.is_empty(), "{}", output(out));

        let stored = server.bucket("b1").expect("bucket exists");
        assert_eq!(stored["billing"]["requesterPays"], json!(true));
        assert_eq!(stored["metageneration"], json!("2"));
        assert_eq!(stored["labels"]["concurrent-update"], json!("true"));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_bucket() -> anyhow::Result<()> {
        let (_server, client) = setup().await?;
        let mut out = Vec::new();
        let err = buckets::enable_requester_pays::sample(&mut out, &client, "missing")
            .await
            .expect_err("the bucket does not exist");
        let gcs_err = err.downcast_ref::<gcs::Error>();
        assert!(gcs_err.is_some_and(gcs::Error::is_not_found), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_notification() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        server.insert_topic(PROJECT_ID, "t1");
        insert(&client, Bucket::new().set_name("b1")).await?;

        let mut out = Vec::new();
        let id = notifications::create_bucket_notification::sample(
            &mut out, &client, PROJECT_ID, "b1", "t1",
        )
        .await?;
        assert!(!id.is_empty());
        let out = output(out);
        assert!(out.contains("created notification"), "{out}");
        assert!(out.contains(&id), "{out}");

        let notification = client
            .get_notification()
            .set_bucket("b1")
            .set_notification(&id)
            .send()
            .await?;
        assert_eq!(
            notification.topic,
            "//pubsub.googleapis.com/projects/test-project/topics/t1"
        );
        assert_eq!(notification.payload_format, "JSON_API_V1");
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_notification_twice() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        server.insert_topic(PROJECT_ID, "t1");
        insert(&client, Bucket::new().set_name("b1")).await?;

        let mut out = Vec::new();
        let first = notifications::create_bucket_notification::sample(
            &mut out, &client, PROJECT_ID, "b1", "t1",
        )
        .await?;
        let second = notifications::create_bucket_notification::sample(
            &mut out, &client, PROJECT_ID, "b1", "t1",
        )
        .await?;
        assert_ne!(first, second);
        assert_eq!(server.notification_count("b1"), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_notification_missing_topic() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        insert(&client, Bucket::new().set_name("b1")).await?;

        let mut out = Vec::new();
        let err = notifications::create_bucket_notification::sample(
            &mut out, &client, PROJECT_ID, "b1", "missing",
        )
        .await
        .expect_err("the topic does not exist");
        let gcs_err = err.downcast_ref::<gcs::Error>();
        assert!(gcs_err.is_some_and(gcs::Error::is_not_found), "{err:?}");
        assert_eq!(server.notification_count("b1"), 0);
        Ok(())
    }

    #[tokio::test]
    async fn notification_lifecycle() -> anyhow::Result<()> {
        let (server, client) = setup().await?;
        server.insert_topic(PROJECT_ID, "t1");
        insert(&client, Bucket::new().set_name("b1")).await?;

        let mut out = Vec::new();
        let id = notifications::create_bucket_notification::sample(
            &mut out, &client, PROJECT_ID, "b1", "t1",
        )
        .await?;
        notifications::list_bucket_notifications::sample(&mut out, &client, "b1").await?;
        notifications::print_pubsub_bucket_notification::sample(&mut out, &client, "b1", &id)
            .await?;
        notifications::delete_bucket_notification::sample(&mut out, &client, "b1", &id).await?;
        let out = output(out);
        assert!(
            out.contains(&format!(
                "Notification {id} publishes to //pubsub.googleapis.com/projects/test-project/topics/t1"
            )),
            "{out}"
        );
        assert!(
            out.contains(&format!(
                "Notification {id}: topic=//pubsub.googleapis.com/projects/test-project/topics/t1 payload_format=JSON_API_V1"
            )),
            "{out}"
        );
        assert!(!out.contains("self_link") && !out.contains("etag"), "{out}");
        assert!(
            out.contains(&format!("Deleted notification {id} from bucket b1")),
            "{out}"
        );
        assert_eq!(server.notification_count("b1"), 0);
        Ok(())
    }

    #[tokio::test]
    async fn run_bucket_examples() -> anyhow::Result<()> {
        let server = FakeServer::start().await?;
        let config = config(&server);
        let mut buckets = Vec::new();
        let mut out = Vec::new();
        storage_samples::run_bucket_examples(&mut out, &config, &mut buckets).await?;
        assert_eq!(buckets.len(), 1);
        assert!(server.bucket(&buckets[0]).is_none(), "{buckets:?}");
        let out = output(out);
        assert!(out.contains("Requester pays enabled"), "{out}");
        assert!(out.contains("Requester pays disabled"), "{out}");
        Ok(())
    }

    #[tokio::test]
    async fn run_notification_examples() -> anyhow::Result<()> {
        let server = FakeServer::start().await?;
        let config = config(&server);
        let mut buckets = Vec::new();
        let mut out = Vec::new();
        storage_samples::run_notification_examples(&mut out, &config, &mut buckets).await?;
        assert_eq!(buckets.len(), 1);
        assert_eq!(server.notification_count(&buckets[0]), 0);

        let client = config.storage_control().await?;
        for name in &buckets {
            storage_samples::cleanup_bucket(&client, name).await?;
        }
        assert!(server.bucket(&buckets[0]).is_none(), "{buckets:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_topic() -> anyhow::Result<()> {
        let server = FakeServer::start().await?;
        let topics = config(&server).topic_admin().await?;
        let mut out = Vec::new();
        storage_samples::topics::create_topic(&mut out, &topics, PROJECT_ID, "t1").await?;
        let out = output(out);
        assert!(
            out.contains("Created topic projects/test-project/topics/t1"),
            "{out}"
        );
        // Existing topics are not an error for the test helper.
        storage_samples::topics::ensure_topic(&topics, PROJECT_ID, "t1").await?;
        storage_samples::topics::ensure_topic(&topics, PROJECT_ID, "t2").await?;
        Ok(())
    }
}
