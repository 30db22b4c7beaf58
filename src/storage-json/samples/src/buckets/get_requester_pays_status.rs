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

// [START storage_get_requester_pays_status]
use anyhow::Context;
use google_cloud_storage_json::client::StorageControl;
use google_cloud_storage_json::options::RequestOptionsBuilder;
use std::io::Write;
use std::time::Duration;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    bucket_id: &str,
) -> anyhow::Result<()> {
    let bucket = client
        .get_bucket()
        .set_bucket(bucket_id)
        .with_timeout(Duration::from_secs(10))
        .send()
        .await
        .with_context(|| format!("Bucket({bucket_id:?}).Attrs"))?;
    writeln!(
        out,
        "Requester pays is {} for bucket {bucket_id}",
        if bucket.requester_pays() {
            "enabled"
        } else {
            "disabled"
        }
    )?;
    Ok(())
}
// [END storage_get_requester_pays_status]
