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

//! Pub/Sub topics used as notification destinations.

use anyhow::Context;
use google_cloud_storage_json::client::TopicAdmin;
use google_cloud_storage_json::model::topic_name;
use google_cloud_storage_json::options::RequestOptionsBuilder;
use std::io::Write;
use std::time::Duration;

// [START pubsub_create_topic]
pub async fn create_topic<W: Write>(
    out: &mut W,
    client: &TopicAdmin,
    project_id: &str,
    topic_id: &str,
) -> anyhow::Result<()> {
    let topic = client
        .create_topic()
        .set_name(topic_name(project_id, topic_id))
        .with_timeout(Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("Topic({topic_id:?}).Create"))?;
    writeln!(out, "Created topic {}", topic.name)?;
    Ok(())
}
// [END pubsub_create_topic]

/// Creates the topic unless it already exists.
pub async fn ensure_topic(client: &TopicAdmin, project_id: &str, topic_id: &str) -> anyhow::Result<()> {
    let name = topic_name(project_id, topic_id);
    match client
        .get_topic()
        .set_topic(&name)
        .with_timeout(Duration::from_secs(10))
        .send()
        .await
    {
        Ok(_) => return Ok(()),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e).with_context(|| format!("Topic({topic_id:?}).Exists")),
    }
    tracing::info!("creating topic {name}");
    match client
        .create_topic()
        .set_name(&name)
        .with_timeout(Duration::from_secs(10))
        .send()
        .await
    {
        // Lost a race with some other test.
        Err(e) if e.http_status_code() == Some(409) => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Topic({topic_id:?}).Create")),
        Ok(_) => Ok(()),
    }
}
