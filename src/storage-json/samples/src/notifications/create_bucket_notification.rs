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

// [START storage_create_bucket_notifications]
use anyhow::Context;
use google_cloud_storage_json::client::StorageControl;
use google_cloud_storage_json::model::{Notification, notification_topic};
use google_cloud_storage_json::options::RequestOptionsBuilder;
use std::io::Write;
use std::time::Duration;

/// Returns the id of the new notification.
pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    project_id: &str,
    bucket_id: &str,
    topic_id: &str,
) -> anyhow::Result<String> {
    let notification = client
        .insert_notification()
        .set_bucket(bucket_id)
        .set_notification(
            Notification::new()
                .set_topic(notification_topic(project_id, topic_id))
                .set_payload_format(Notification::JSON_API_V1),
        )
        .with_timeout(Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("Bucket({bucket_id:?}).AddNotification"))?;
    writeln!(
        out,
        "created notification with ID {} for bucket {bucket_id}",
        notification.id
    )?;
    Ok(notification.id)
}
// [END storage_create_bucket_notifications]
