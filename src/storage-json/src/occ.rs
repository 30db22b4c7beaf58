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

//! Optimistic concurrency control for bucket metadata updates.
//!
//! Every change to the metadata of a bucket increments its metageneration.
//! The functions in this module read the current metageneration and make the
//! update conditional on it. If some other client changes the bucket between
//! the read and the update, the service rejects the update and nothing is
//! applied.
//!
//! # Algorithm
//!
//! 1. Get the bucket metadata, including its metageneration (`get_bucket`)
//! 2. Send the patch with `ifMetagenerationMatch` set to that metageneration
//!    (`patch_bucket`)
//! 3. If the precondition fails, return an error where
//!    [is_version_conflict()][crate::Error::is_version_conflict] is true
//! 4. Any other error is returned unchanged
//!
//! Unlike a full OCC loop, the update is **not** retried on conflicts. The
//! caller decided on the patch without seeing the concurrent change, only the
//! caller can decide if the patch is still valid.
//!
//! # Example
//! ```no_run
//! # use google_cloud_storage_json::client::StorageControl;
//! # async fn example(client: &StorageControl) -> anyhow::Result<()> {
//! use google_cloud_storage_json::model::{BucketBilling, BucketPatch};
//! use google_cloud_storage_json::occ::update_if_unchanged;
//!
//! let patch = BucketPatch::new().set_billing(BucketBilling::new().set_requester_pays(false));
//! match update_if_unchanged(client, "my-bucket", patch).await {
//!     Ok(bucket) => println!("updated at metageneration {:?}", bucket.metageneration),
//!     Err(e) if e.is_version_conflict() => println!("the bucket changed, read it again"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::StorageControl;
use crate::model::{Bucket, BucketPatch};
use crate::options::with_deadline;
use crate::{Error, Result};
use std::time::Duration;

/// The bucket operations used by the conditional update.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub(crate) trait BucketOperations {
    async fn get_bucket(&self, bucket: &str) -> Result<Bucket>;

    async fn patch_bucket(
        &self,
        bucket: &str,
        patch: BucketPatch,
        if_metageneration_match: i64,
    ) -> Result<Bucket>;
}

#[async_trait::async_trait]
impl BucketOperations for StorageControl {
    async fn get_bucket(&self, bucket: &str) -> Result<Bucket> {
        self.get_bucket().set_bucket(bucket).send().await
    }

    async fn patch_bucket(
        &self,
        bucket: &str,
        patch: BucketPatch,
        if_metageneration_match: i64,
    ) -> Result<Bucket> {
        self.patch_bucket()
            .set_bucket(bucket)
            .set_patch(patch)
            .set_if_metageneration_match(if_metageneration_match)
            .send()
            .await
    }
}

async fn update_if_unchanged_impl<C>(client: &C, bucket: &str, patch: BucketPatch) -> Result<Bucket>
where
    C: BucketOperations + Sync,
{
    if bucket.is_empty() {
        return Err(Error::request("missing bucket name"));
    }
    if patch.is_empty() {
        return Err(Error::request(format!(
            "the patch for bucket `{bucket}` has no changes"
        )));
    }

    let current = client.get_bucket(bucket).await?;
    let observed = current.metageneration.ok_or_else(|| {
        Error::deser(format!(
            "the metadata for bucket `{bucket}` is missing its metageneration"
        ))
    })?;

    match client.patch_bucket(bucket, patch, observed).await {
        Err(e) if e.is_version_conflict() => {
            tracing::warn!(
                bucket,
                observed_metageneration = observed,
                "bucket changed after it was read, the update was not applied"
            );
            Err(e)
        }
        r => r,
    }
}

/// Applies `patch` to `bucket` only if the bucket has not changed since it
/// was read.
///
/// Makes exactly one `get_bucket` and, if that succeeds, one `patch_bucket`
/// call. Attributes not set in `patch` are left unchanged.
///
/// # Errors
///
/// * [is_version_conflict()][crate::Error::is_version_conflict]: the bucket
///   changed after it was read. The patch was not applied.
/// * [is_request()][crate::Error::is_request]: `bucket` is empty, or `patch`
///   has no changes. No requests are sent.
/// * Any error from `get_bucket` or `patch_bucket`, unchanged.
pub async fn update_if_unchanged<B>(
    client: &StorageControl,
    bucket: B,
    patch: BucketPatch,
) -> Result<Bucket>
where
    B: AsRef<str>,
{
    update_if_unchanged_impl(client, bucket.as_ref(), patch).await
}

/// Like [update_if_unchanged], with a deadline for both requests.
///
/// If the deadline expires the function returns an error where
/// [is_timeout()][crate::Error::is_timeout] is true. The patch may or may not
/// have been applied in that case.
pub async fn update_if_unchanged_with_timeout<B>(
    client: &StorageControl,
    bucket: B,
    patch: BucketPatch,
    timeout: Duration,
) -> Result<Bucket>
where
    B: AsRef<str>,
{
    with_deadline(
        Some(timeout),
        update_if_unchanged_impl(client, bucket.as_ref(), patch),
    )
    .await
}
