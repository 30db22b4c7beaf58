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

//! Samples for the Cloud Storage bucket configuration client.
//!
//! Each sample lives in its own module and writes one confirmation line to
//! `out` when it succeeds. The runners in this module execute the samples
//! in sequence, as the integration tests and the `storage-samples` binary do.

pub mod buckets;
pub mod cli;
pub mod config;
pub mod notifications;
pub mod topics;

use config::Config;
use google_cloud_storage_json::client::StorageControl;
use rand::{Rng, distr::Distribution};
use std::io::Write;

pub const BUCKET_ID_LENGTH: usize = 63;

/// Runs the bucket samples, creating a new bucket.
///
/// The name of the bucket is pushed into `buckets`, even on failure, so the
/// caller can clean up.
pub async fn run_bucket_examples<W: Write>(
    out: &mut W,
    config: &Config,
    buckets: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = config.storage_control().await?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    tracing::info!("running create_bucket_hierarchical_namespace example");
    buckets::create_bucket_hierarchical_namespace::sample(out, &client, &config.project_id, &id)
        .await?;
    tracing::info!("running enable_requester_pays example");
    buckets::enable_requester_pays::sample(out, &client, &id).await?;
    tracing::info!("running get_requester_pays_status example");
    buckets::get_requester_pays_status::sample(out, &client, &id).await?;
    tracing::info!("running disable_requester_pays example");
    buckets::disable_requester_pays::sample(out, &client, &id).await?;
    tracing::info!("running get_requester_pays_status example");
    buckets::get_requester_pays_status::sample(out, &client, &id).await?;
    tracing::info!("running delete_bucket example");
    buckets::delete_bucket::sample(out, &client, &id).await?;
    Ok(())
}

/// Runs the notification samples, creating a new bucket and, if needed, the
/// configured topic.
pub async fn run_notification_examples<W: Write>(
    out: &mut W,
    config: &Config,
    buckets: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = config.storage_control().await?;
    let topics = config.topic_admin().await?;
    topics::ensure_topic(&topics, &config.project_id, &config.topic_id).await?;

    let id = random_bucket_id();
    buckets.push(id.clone());
    buckets::create_bucket_hierarchical_namespace::sample(out, &client, &config.project_id, &id)
        .await?;

    tracing::info!("running create_bucket_notification example");
    let notification_id = notifications::create_bucket_notification::sample(
        out,
        &client,
        &config.project_id,
        &id,
        &config.topic_id,
    )
    .await?;
    tracing::info!("running list_bucket_notifications example");
    notifications::list_bucket_notifications::sample(out, &client, &id).await?;
    tracing::info!("running print_pubsub_bucket_notification example");
    notifications::print_pubsub_bucket_notification::sample(out, &client, &id, &notification_id)
        .await?;
    tracing::info!("running delete_bucket_notification example");
    notifications::delete_bucket_notification::sample(out, &client, &id, &notification_id)
        .await?;
    Ok(())
}

/// Deletes the notifications in a bucket and then the bucket.
pub async fn cleanup_bucket(client: &StorageControl, name: &str) -> anyhow::Result<()> {
    let notifications = match client.list_notifications().set_bucket(name).send().await {
        Ok(n) => n,
        // Already deleted, for example, by the delete_bucket sample.
        Err(e) if e.is_not_found() => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    for n in notifications {
        if let Err(e) = client
            .delete_notification()
            .set_bucket(name)
            .set_notification(&n.id)
            .send()
            .await
        {
            tracing::warn!("cannot delete notification {} in bucket {name}: {e}", n.id);
        }
    }
    client.delete_bucket().set_bucket(name).send().await?;
    Ok(())
}

pub fn random_bucket_id() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const PREFIX: &str = "rust-samples-json-";

    let bucket_id: String = rand::rng()
        .sample_iter(RandomChars::new(CHARSET))
        .take(BUCKET_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{bucket_id}")
}

pub struct RandomChars {
    chars: &'static [u8],
}

impl RandomChars {
    pub fn new(chars: &'static [u8]) -> Self {
        Self { chars }
    }
}

impl Distribution<u8> for RandomChars {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let index = rng.random_range(0..self.chars.len());
        self.chars[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_id() {
        let got = random_bucket_id();
        assert_eq!(got.len(), BUCKET_ID_LENGTH, "{got}");
        assert!(got.starts_with("rust-samples-json-"), "{got}");
        assert!(
            got.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{got}"
        );
    }

    #[test]
    fn random_chars() {
        let chars = RandomChars::new(b"xyz");
        let got: String = rand::rng()
            .sample_iter(chars)
            .take(32)
            .map(char::from)
            .collect();
        assert!(got.chars().all(|c| "xyz".contains(c)), "{got:?}");
    }
}
