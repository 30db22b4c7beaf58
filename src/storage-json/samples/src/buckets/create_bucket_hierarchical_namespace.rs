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

// [START storage_create_bucket_hierarchical_namespace]
use anyhow::Context;
use google_cloud_storage_json::client::StorageControl;
use google_cloud_storage_json::model::{
    Bucket, HierarchicalNamespace, IamConfiguration, UniformBucketLevelAccess,
};
use google_cloud_storage_json::options::RequestOptionsBuilder;
use std::io::Write;
use std::time::Duration;

pub async fn sample<W: Write>(
    out: &mut W,
    client: &StorageControl,
    project_id: &str,
    bucket_id: &str,
) -> anyhow::Result<()> {
    // A hierarchical namespace requires uniform bucket-level access, both
    // must be set in the same request.
    let bucket = client
        .insert_bucket()
        .set_project(project_id)
        .set_bucket(
            Bucket::new()
                .set_name(bucket_id)
                .set_hierarchical_namespace(HierarchicalNamespace::new().set_enabled(true))
                .set_iam_configuration(IamConfiguration::new().set_uniform_bucket_level_access(
                    UniformBucketLevelAccess::new().set_enabled(true),
                )),
        )
        .with_timeout(Duration::from_secs(30))
        .send()
        .await
        .with_context(|| format!("Bucket({bucket_id:?}).Create"))?;
    writeln!(
        out,
        "Created bucket {} with hierarchical namespace enabled",
        bucket.name
    )?;
    Ok(())
}
// [END storage_create_bucket_hierarchical_namespace]
