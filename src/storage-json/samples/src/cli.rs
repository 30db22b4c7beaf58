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

//! Command line arguments for the `storage-samples` binary.

use anyhow::bail;
use clap::{Parser, Subcommand};

/// Runs a single Cloud Storage bucket configuration sample.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The project that owns the buckets and topics.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: Option<String>,

    /// Show debug logs.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Create a bucket with hierarchical namespace and uniform bucket-level
    /// access enabled.
    CreateBucketHierarchicalNamespace { bucket_id: String },
    /// Disable requester pays, failing if the bucket changes concurrently.
    DisableRequesterPays { bucket_id: String },
    /// Enable requester pays, failing if the bucket changes concurrently.
    EnableRequesterPays { bucket_id: String },
    /// Print the requester pays configuration of a bucket.
    GetRequesterPaysStatus { bucket_id: String },
    /// Delete an empty bucket.
    DeleteBucket { bucket_id: String },
    /// Publish changes in a bucket to a Pub/Sub topic.
    CreateBucketNotification {
        bucket_id: String,
        #[arg(env = "GOOGLE_CLOUD_RUST_TEST_TOPIC")]
        topic_id: String,
    },
    /// List the notifications configured in a bucket.
    ListBucketNotifications { bucket_id: String },
    /// Print a single notification.
    PrintPubsubBucketNotification {
        bucket_id: String,
        notification_id: String,
    },
    /// Delete a notification.
    DeleteBucketNotification {
        bucket_id: String,
        notification_id: String,
    },
    /// Create a Pub/Sub topic.
    CreateTopic { topic_id: String },
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        let needs_project = matches!(
            self.command,
            Command::CreateBucketHierarchicalNamespace { .. }
                | Command::CreateBucketNotification { .. }
                | Command::CreateTopic { .. }
        );
        if needs_project && self.project_id.as_deref().is_none_or(str::is_empty) {
            bail!("--project-id (or GOOGLE_CLOUD_PROJECT) is required for this sample")
        }
        if let Some(id) = self.bucket_id() {
            if !(3..=63).contains(&id.len()) {
                bail!("invalid bucket name {id:?}, must have between 3 and 63 characters")
            }
        }
        Ok(())
    }

    /// The project id, empty when not set.
    pub fn project_id(&self) -> &str {
        self.project_id.as_deref().unwrap_or_default()
    }

    fn bucket_id(&self) -> Option<&str> {
        match &self.command {
            Command::CreateBucketHierarchicalNamespace { bucket_id }
            | Command::DisableRequesterPays { bucket_id }
            | Command::EnableRequesterPays { bucket_id }
            | Command::GetRequesterPaysStatus { bucket_id }
            | Command::DeleteBucket { bucket_id }
            | Command::CreateBucketNotification { bucket_id, .. }
            | Command::ListBucketNotifications { bucket_id }
            | Command::PrintPubsubBucketNotification { bucket_id, .. }
            | Command::DeleteBucketNotification { bucket_id, .. } => Some(bucket_id),
            Command::CreateTopic { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_success() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=my-project",
            "create-bucket-notification",
            "my-bucket",
            "my-topic",
        ])?;
        assert_eq!(args.project_id(), "my-project");
        assert_eq!(
            args.command,
            Command::CreateBucketNotification {
                bucket_id: "my-bucket".to_string(),
                topic_id: "my-topic".to_string(),
            }
        );
        let got = args.validate();
        assert!(got.is_ok(), "{got:?} {args:?}");
        Ok(())
    }

    #[test_case(&["program", "--project-id=p", "create-bucket-hierarchical-namespace", "my-bucket"])]
    #[test_case(&["program", "disable-requester-pays", "my-bucket"])]
    #[test_case(&["program", "enable-requester-pays", "my-bucket"])]
    #[test_case(&["program", "get-requester-pays-status", "my-bucket"])]
    #[test_case(&["program", "print-pubsub-bucket-notification", "my-bucket", "1"])]
    #[test_case(&["program", "--project-id=p", "create-topic", "t"])]
    fn validate_success(input: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        let got = args.validate();
        assert!(got.is_ok(), "{got:?} {args:?}");
        Ok(())
    }

    #[test_case(&["program", "--project-id=", "create-bucket-hierarchical-namespace", "my-bucket"])]
    #[test_case(&["program", "--project-id=p", "create-bucket-hierarchical-namespace", "ab"])]
    #[test_case(&["program", "--project-id=", "create-topic", "t"])]
    #[test_case(&["program", "delete-bucket", ""])]
    fn validate_error(input: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        let got = args.validate();
        assert!(got.is_err(), "{got:?} {args:?}");
        Ok(())
    }
}
