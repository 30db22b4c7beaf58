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

use clap::Parser;
use storage_samples::buckets;
use storage_samples::cli::{Args, Command};
use storage_samples::config::Config;
use storage_samples::notifications;
use storage_samples::topics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;
    enable_tracing(&args);

    let config = Config::with_project(args.project_id());
    let project_id = config.project_id.as_str();
    let mut out = std::io::stdout().lock();

    tracing::info!("running {:?}", args.command);
    match &args.command {
        Command::CreateBucketHierarchicalNamespace { bucket_id } => {
            let client = config.storage_control().await?;
            buckets::create_bucket_hierarchical_namespace::sample(
                &mut out, &client, project_id, bucket_id,
            )
            .await
        }
        Command::DisableRequesterPays { bucket_id } => {
            let client = config.storage_control().await?;
            buckets::disable_requester_pays::sample(&mut out, &client, bucket_id).await
        }
        Command::EnableRequesterPays { bucket_id } => {
            let client = config.storage_control().await?;
            buckets::enable_requester_pays::sample(&mut out, &client, bucket_id).await
        }
        Command::GetRequesterPaysStatus { bucket_id } => {
            let client = config.storage_control().await?;
            buckets::get_requester_pays_status::sample(&mut out, &client, bucket_id).await
        }
        Command::DeleteBucket { bucket_id } => {
            let client = config.storage_control().await?;
            buckets::delete_bucket::sample(&mut out, &client, bucket_id).await
        }
        Command::CreateBucketNotification {
            bucket_id,
            topic_id,
        } => {
            let client = config.storage_control().await?;
            notifications::create_bucket_notification::sample(
                &mut out, &client, project_id, bucket_id, topic_id,
            )
            .await
            .map(|_| ())
        }
        Command::ListBucketNotifications { bucket_id } => {
            let client = config.storage_control().await?;
            notifications::list_bucket_notifications::sample(&mut out, &client, bucket_id).await
        }
        Command::PrintPubsubBucketNotification {
            bucket_id,
            notification_id,
        } => {
            let client = config.storage_control().await?;
            notifications::print_pubsub_bucket_notification::sample(
                &mut out,
                &client,
                bucket_id,
                notification_id,
            )
            .await
        }
        Command::DeleteBucketNotification {
            bucket_id,
            notification_id,
        } => {
            let client = config.storage_control().await?;
            notifications::delete_bucket_notification::sample(
                &mut out,
                &client,
                bucket_id,
                notification_id,
            )
            .await
        }
        Command::CreateTopic { topic_id } => {
            let client = config.topic_admin().await?;
            topics::create_topic(&mut out, &client, project_id, topic_id).await
        }
    }
}

fn enable_tracing(args: &Args) {
    use tracing_subscriber::fmt::format::FmtSpan;

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot install the tracing subscriber: {e}");
    }
}
