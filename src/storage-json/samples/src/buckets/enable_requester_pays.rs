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

// [START storage_enable_requester_pays]
use anyhow::Context;
use google_cloud_storage_json::client::StorageControl;
use google_cloud_storage_json::model::{BucketBilling, BucketPatch};
use google_cloud_storage_json::occ::update_if_unchanged_with_timeout;
use std::io::Write;
use std::time::Duration;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
) -> anyhow::Result<()> {
    let patch = BucketPatch::new().set_billing(BucketBilling::new().set_requester_pays(true));
    update_if_unchanged_with_timeout(client, bucket_id, patch, Duration::from_secs(10))
        .await
        .with_context(|| format!("Bucket({bucket_id:?}).Update"))?;
    writeln!(out, "Requester pays enabled for bucket {bucket_id}")?;
    Ok(())
}
// [END storage_enable_requester_pays]
