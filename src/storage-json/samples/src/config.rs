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

//! Runtime configuration for the samples.
//!
//! The samples read their configuration from the environment:
//!
//! * `GOOGLE_CLOUD_PROJECT`: the project that owns the buckets and topics.
//! * `STORAGE_EMULATOR_HOST`: if set, the Cloud Storage clients use this
//!   endpoint and anonymous credentials.
//! * `PUBSUB_EMULATOR_HOST`: likewise, for the Pub/Sub clients.
//! * `GOOGLE_CLOUD_RUST_TEST_TOPIC`: the topic for the notification samples.

use anyhow::Context;
use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
use google_cloud_storage_json::client::{ClientBuilder, StorageControl, TopicAdmin};

pub const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
pub const STORAGE_EMULATOR_VAR: &str = "STORAGE_EMULATOR_HOST";
pub const PUBSUB_EMULATOR_VAR: &str = "PUBSUB_EMULATOR_HOST";
pub const TOPIC_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_TOPIC";
pub const DEFAULT_TOPIC_ID: &str = "storage-samples-notifications";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub project_id: String,
    pub topic_id: String,
    pub storage_emulator: Option<String>,
    pub pubsub_emulator: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id = std::env::var(PROJECT_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .with_context(|| format!("{PROJECT_VAR} must be set"))?;
        Ok(Self::with_project(project_id))
    }

    /// Reads the configuration from the environment, except for the project.
    pub fn with_project<T: Into<String>>(project_id: T) -> Self {
        let topic_id = std::env::var(TOPIC_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TOPIC_ID.to_string());
        Self {
            project_id: project_id.into(),
            topic_id,
            storage_emulator: emulator(STORAGE_EMULATOR_VAR),
            pubsub_emulator: emulator(PUBSUB_EMULATOR_VAR),
        }
    }

    pub async fn storage_control(&self) -> anyhow::Result<StorageControl> {
        let client = configure(StorageControl::builder(), self.storage_emulator.as_deref())
            .build()
            .await?;
        Ok(client)
    }

    pub async fn topic_admin(&self) -> anyhow::Result<TopicAdmin> {
        let client = configure(TopicAdmin::builder(), self.pubsub_emulator.as_deref())
            .build()
            .await?;
        Ok(client)
    }
}

fn configure<C>(builder: ClientBuilder<C>, emulator: Option<&str>) -> ClientBuilder<C> {
    match emulator {
        None => builder,
        Some(endpoint) => builder
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build()),
    }
}

/// Emulators are often configured as `host:port`, without a scheme.
fn emulator(var: &str) -> Option<String> {
    let host = std::env::var(var).ok().filter(|v| !v.is_empty())?;
    if host.starts_with("http://") || host.starts_with("https://") {
        return Some(host);
    }
    Some(format!("http://{host}"))
}
