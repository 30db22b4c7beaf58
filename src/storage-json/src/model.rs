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

//! The messages exchanged with Cloud Storage and Pub/Sub.
//!
//! These types follow the JSON representation used by the services. Fields
//! that the service may omit are `Option<T>`, and the `set_*` functions
//! provide a fluent way to initialize them.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::collections::BTreeMap;

/// A bucket, as represented in the Cloud Storage JSON API.
///
/// Only the attributes used by this crate are represented. Other attributes
/// returned by the service are ignored.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// The name of the bucket.
    #[serde(default)]
    pub name: String,

    /// The ID of the bucket. Same as the name for buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The project number of the project the bucket belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub project_number: Option<u64>,

    /// The metadata generation of this bucket.
    ///
    /// Each change to the bucket metadata increments this value. The JSON API
    /// represents it as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub metageneration: Option<i64>,

    /// The location of the bucket, e.g. `US-CENTRAL1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The default storage class, e.g. `STANDARD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,

    /// The bucket's billing configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BucketBilling>,

    /// The bucket's IAM configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_configuration: Option<IamConfiguration>,

    /// The bucket's hierarchical namespace configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical_namespace: Option<HierarchicalNamespace>,

    /// User-provided labels, in key/value pairs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// The default value for event-based hold on newly created objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_event_based_hold: Option<bool>,

    /// The bucket's versioning configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,

    /// The creation time of the bucket in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    /// The modification time of the bucket in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Bucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metageneration][Bucket::metageneration].
    pub fn set_metageneration<T: Into<i64>>(mut self, v: T) -> Self {
        self.metageneration = Some(v.into());
        self
    }

    /// Sets the value of [location][Bucket::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [storage_class][Bucket::storage_class].
    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    /// Sets the value of [billing][Bucket::billing].
    pub fn set_billing<T: Into<BucketBilling>>(mut self, v: T) -> Self {
        self.billing = Some(v.into());
        self
    }

    /// Sets the value of [iam_configuration][Bucket::iam_configuration].
    pub fn set_iam_configuration<T: Into<IamConfiguration>>(mut self, v: T) -> Self {
        self.iam_configuration = Some(v.into());
        self
    }

    /// Sets the value of [hierarchical_namespace][Bucket::hierarchical_namespace].
    pub fn set_hierarchical_namespace<T: Into<HierarchicalNamespace>>(mut self, v: T) -> Self {
        self.hierarchical_namespace = Some(v.into());
        self
    }

    /// Sets the value of [labels][Bucket::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [default_event_based_hold][Bucket::default_event_based_hold].
    pub fn set_default_event_based_hold(mut self, v: bool) -> Self {
        self.default_event_based_hold = Some(v);
        self
    }

    /// Sets the value of [versioning][Bucket::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }

    /// Returns true if requester pays is enabled.
    ///
    /// The service omits the billing configuration for buckets that never
    /// enabled requester pays, this is treated as disabled.
    pub fn requester_pays(&self) -> bool {
        self.billing
            .as_ref()
            .and_then(|b| b.requester_pays)
            .unwrap_or(false)
    }

    /// Returns true if the bucket uses a hierarchical namespace.
    pub fn hierarchical_namespace_enabled(&self) -> bool {
        self.hierarchical_namespace
            .as_ref()
            .and_then(|h| h.enabled)
            .unwrap_or(false)
    }

    /// Returns true if uniform bucket-level access is enabled.
    pub fn uniform_bucket_level_access_enabled(&self) -> bool {
        self.iam_configuration
            .as_ref()
            .and_then(|c| c.uniform_bucket_level_access.as_ref())
            .and_then(|u| u.enabled)
            .unwrap_or(false)
    }
}

/// The billing configuration of a bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketBilling {
    /// When set to true, the requester pays for the bucket operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
}

impl BucketBilling {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [requester_pays][BucketBilling::requester_pays].
    pub fn set_requester_pays(mut self, v: bool) -> Self {
        self.requester_pays = Some(v);
        self
    }
}

/// The IAM configuration of a bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct IamConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniform_bucket_level_access: Option<UniformBucketLevelAccess>,

    /// Either `inherited` or `enforced`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_prevention: Option<String>,
}

impl IamConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [uniform_bucket_level_access][IamConfiguration::uniform_bucket_level_access].
    pub fn set_uniform_bucket_level_access<T: Into<UniformBucketLevelAccess>>(
        mut self,
        v: T,
    ) -> Self {
        self.uniform_bucket_level_access = Some(v.into());
        self
    }

    /// Sets the value of [public_access_prevention][IamConfiguration::public_access_prevention].
    pub fn set_public_access_prevention<T: Into<String>>(mut self, v: T) -> Self {
        self.public_access_prevention = Some(v.into());
        self
    }
}

/// Uniform bucket-level access disables object ACLs in the bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UniformBucketLevelAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The deadline for changing the configuration from true to false, in
    /// RFC 3339 format. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_time: Option<String>,
}

impl UniformBucketLevelAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [enabled][UniformBucketLevelAccess::enabled].
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }
}

/// The hierarchical namespace configuration of a bucket.
///
/// This can only be set when the bucket is created, and requires uniform
/// bucket-level access.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HierarchicalNamespace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl HierarchicalNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [enabled][HierarchicalNamespace::enabled].
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }
}

/// The versioning configuration of a bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Versioning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Versioning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [enabled][Versioning::enabled].
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }
}

/// The mutable attributes of a bucket.
///
/// Only the fields set in this type are sent to the service, all other
/// attributes of the bucket remain unchanged.
///
/// # Example
/// ```
/// # use google_cloud_storage_json::model::{BucketBilling, BucketPatch};
/// let patch = BucketPatch::new().set_billing(BucketBilling::new().set_requester_pays(false));
/// assert!(!patch.is_empty());
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BucketBilling>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_configuration: Option<IamConfiguration>,

    /// Labels to add or replace. Labels not in this map are unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_event_based_hold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,
}

impl BucketPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [billing][BucketPatch::billing].
    pub fn set_billing<T: Into<BucketBilling>>(mut self, v: T) -> Self {
        self.billing = Some(v.into());
        self
    }

    /// Sets the value of [iam_configuration][BucketPatch::iam_configuration].
    pub fn set_iam_configuration<T: Into<IamConfiguration>>(mut self, v: T) -> Self {
        self.iam_configuration = Some(v.into());
        self
    }

    /// Sets the value of [labels][BucketPatch::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [default_event_based_hold][BucketPatch::default_event_based_hold].
    pub fn set_default_event_based_hold(mut self, v: bool) -> Self {
        self.default_event_based_hold = Some(v);
        self
    }

    /// Sets the value of [versioning][BucketPatch::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }

    /// Returns true if the patch would not change any attribute.
    ///
    /// Nested records without any values set count as no change, the service
    /// would still increment the metageneration for them.
    pub fn is_empty(&self) -> bool {
        self.billing
            .as_ref()
            .is_none_or(|b| b.requester_pays.is_none())
            && self.iam_configuration.as_ref().is_none_or(|c| {
                c.public_access_prevention.is_none()
                    && c.uniform_bucket_level_access
                        .as_ref()
                        .is_none_or(|u| u.enabled.is_none())
            })
            && self.labels.as_ref().is_none_or(BTreeMap::is_empty)
            && self.default_event_based_hold.is_none()
            && self.versioning.as_ref().is_none_or(|v| v.enabled.is_none())
    }
}

/// A notification configuration for a bucket.
///
/// Cloud Storage publishes a message to the Pub/Sub topic each time an
/// object in the bucket changes. Unlike buckets, most fields in this resource
/// use `snake_case` names in JSON.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Notification {
    /// The ID of the notification, assigned by the service.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The Pub/Sub topic, in the format
    /// `//pubsub.googleapis.com/projects/{project}/topics/{topic}`.
    #[serde(default)]
    pub topic: String,

    /// If not empty, only these events trigger a message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_types: Vec<String>,

    /// Attributes attached to each message.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_attributes: BTreeMap<String, String>,

    /// If not empty, only objects with this prefix trigger a message.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub object_name_prefix: String,

    /// One of [Notification::JSON_API_V1] or [Notification::NONE].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload_format: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(default, rename = "selfLink", skip_serializing_if = "String::is_empty")]
    pub self_link: String,
}

impl Notification {
    /// Messages contain the object metadata as JSON.
    pub const JSON_API_V1: &'static str = "JSON_API_V1";
    /// Messages contain no payload, only attributes.
    pub const NONE: &'static str = "NONE";

    pub const OBJECT_FINALIZE: &'static str = "OBJECT_FINALIZE";
    pub const OBJECT_METADATA_UPDATE: &'static str = "OBJECT_METADATA_UPDATE";
    pub const OBJECT_DELETE: &'static str = "OBJECT_DELETE";
    pub const OBJECT_ARCHIVE: &'static str = "OBJECT_ARCHIVE";

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][Notification::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of [event_types][Notification::event_types].
    pub fn set_event_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.event_types = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [custom_attributes][Notification::custom_attributes].
    pub fn set_custom_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [object_name_prefix][Notification::object_name_prefix].
    pub fn set_object_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.object_name_prefix = v.into();
        self
    }

    /// Sets the value of [payload_format][Notification::payload_format].
    pub fn set_payload_format<T: Into<String>>(mut self, v: T) -> Self {
        self.payload_format = v.into();
        self
    }
}

/// Formats the name of a Pub/Sub topic as expected in [Notification::topic].
///
/// # Example
/// ```
/// # use google_cloud_storage_json::model::notification_topic;
/// assert_eq!(
///     notification_topic("my-project", "my-topic"),
///     "//pubsub.googleapis.com/projects/my-project/topics/my-topic"
/// );
/// ```
pub fn notification_topic(project_id: &str, topic_id: &str) -> String {
    format!("//pubsub.googleapis.com/projects/{project_id}/topics/{topic_id}")
}

/// The response for listing the notifications of a bucket.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ListNotificationsResponse {
    #[serde(default)]
    pub items: Vec<Notification>,
}

/// A Pub/Sub topic.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The name of the topic, in the format `projects/{project}/topics/{topic}`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kms_key_name: String,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Topic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][Topic::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Formats the name of a Pub/Sub topic as expected in [Topic::name].
pub fn topic_name(project_id: &str, topic_id: &str) -> String {
    format!("projects/{project_id}/topics/{topic_id}")
}

/// The request message for [StorageControl::get_bucket][crate::client::StorageControl::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketRequest {
    pub bucket: String,
}

impl GetBucketRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][GetBucketRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }
}

/// The request message for [StorageControl::insert_bucket][crate::client::StorageControl::insert_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertBucketRequest {
    /// The project that owns the new bucket.
    pub project: String,
    /// The bucket attributes, the name is required.
    pub bucket: Bucket,
}

impl InsertBucketRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [project][InsertBucketRequest::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sets the value of [bucket][InsertBucketRequest::bucket].
    pub fn set_bucket<T: Into<Bucket>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }
}

/// The request message for [StorageControl::patch_bucket][crate::client::StorageControl::patch_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchBucketRequest {
    pub bucket: String,
    pub patch: BucketPatch,
    /// If set, the update only succeeds if the bucket metageneration matches
    /// this value.
    pub if_metageneration_match: Option<i64>,
}

impl PatchBucketRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][PatchBucketRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [patch][PatchBucketRequest::patch].
    pub fn set_patch<T: Into<BucketPatch>>(mut self, v: T) -> Self {
        self.patch = v.into();
        self
    }

    /// Sets the value of [if_metageneration_match][PatchBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_match = Some(v.into());
        self
    }
}

/// The request message for [StorageControl::delete_bucket][crate::client::StorageControl::delete_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketRequest {
    pub bucket: String,
    pub if_metageneration_match: Option<i64>,
}

impl DeleteBucketRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][DeleteBucketRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [if_metageneration_match][DeleteBucketRequest::if_metageneration_match].
    pub fn set_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_match = Some(v.into());
        self
    }
}

/// The request message for [StorageControl::insert_notification][crate::client::StorageControl::insert_notification].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertNotificationRequest {
    pub bucket: String,
    pub notification: Notification,
}

impl InsertNotificationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][InsertNotificationRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [notification][InsertNotificationRequest::notification].
    pub fn set_notification<T: Into<Notification>>(mut self, v: T) -> Self {
        self.notification = v.into();
        self
    }
}

/// The request message for [StorageControl::get_notification][crate::client::StorageControl::get_notification]
/// and [StorageControl::delete_notification][crate::client::StorageControl::delete_notification].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct NotificationRequest {
    pub bucket: String,
    pub notification: String,
}

impl NotificationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][NotificationRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }

    /// Sets the value of [notification][NotificationRequest::notification].
    pub fn set_notification<T: Into<String>>(mut self, v: T) -> Self {
        self.notification = v.into();
        self
    }
}

/// The request message for [StorageControl::list_notifications][crate::client::StorageControl::list_notifications].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListNotificationsRequest {
    pub bucket: String,
}

impl ListNotificationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][ListNotificationsRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }
}

/// The request message for [TopicAdmin::get_topic][crate::client::TopicAdmin::get_topic].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTopicRequest {
    /// The topic name, in the format `projects/{project}/topics/{topic}`.
    pub topic: String,
}

impl GetTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topic][GetTopicRequest::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn bucket_from_json() -> anyhow::Result<()> {
        let input = json!({
            "kind": "storage#bucket",
            "name": "test-bucket",
            "id": "test-bucket",
            "projectNumber": "123456",
            "metageneration": "7",
            "location": "US-CENTRAL1",
            "storageClass": "STANDARD",
            "billing": {"requesterPays": true},
            "iamConfiguration": {
                "uniformBucketLevelAccess": {"enabled": true, "lockedTime": "2025-05-01T00:00:00Z"},
                "publicAccessPrevention": "inherited",
            },
            "hierarchicalNamespace": {"enabled": true},
            "labels": {"env": "test"},
            "etag": "CAc=",
        });
        let got = serde_json::from_value::<Bucket>(input)?;
        assert_eq!(got.name, "test-bucket");
        assert_eq!(got.project_number, Some(123456));
        assert_eq!(got.metageneration, Some(7));
        assert!(got.requester_pays());
        assert!(got.hierarchical_namespace_enabled());
        assert!(got.uniform_bucket_level_access_enabled());
        assert_eq!(got.labels.get("env").map(String::as_str), Some("test"));
        Ok(())
    }

    #[test]
    fn bucket_defaults() {
        let bucket = Bucket::new().set_name("b");
        assert!(!bucket.requester_pays());
        assert!(!bucket.hierarchical_namespace_enabled());
        assert!(!bucket.uniform_bucket_level_access_enabled());
    }

    #[test]
    fn bucket_to_json() -> anyhow::Result<()> {
        let bucket = Bucket::new()
            .set_name("hns-bucket")
            .set_hierarchical_namespace(HierarchicalNamespace::new().set_enabled(true))
            .set_iam_configuration(
                IamConfiguration::new().set_uniform_bucket_level_access(
                    UniformBucketLevelAccess::new().set_enabled(true),
                ),
            );
        let got = serde_json::to_value(&bucket)?;
        let want = json!({
            "name": "hns-bucket",
            "hierarchicalNamespace": {"enabled": true},
            "iamConfiguration": {"uniformBucketLevelAccess": {"enabled": true}},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn metageneration_is_a_string() -> anyhow::Result<()> {
        let bucket = Bucket::new().set_name("b").set_metageneration(42);
        let got = serde_json::to_value(&bucket)?;
        assert_eq!(got, json!({"name": "b", "metageneration": "42"}));
        Ok(())
    }

    #[test]
    fn patch_to_json() -> anyhow::Result<()> {
        let patch = BucketPatch::new()
            .set_billing(BucketBilling::new().set_requester_pays(false))
            .set_labels([("k", "v")]);
        let got = serde_json::to_value(&patch)?;
        let want = json!({"billing": {"requesterPays": false}, "labels": {"k": "v"}});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn patch_is_empty() {
        assert!(BucketPatch::new().is_empty());
        assert!(!BucketPatch::new().set_default_event_based_hold(false).is_empty());
        assert!(!BucketPatch::new().set_labels([("a", "b")]).is_empty());
        assert!(
            !BucketPatch::new()
                .set_billing(BucketBilling::new().set_requester_pays(false))
                .is_empty()
        );
    }

    #[test_case(BucketPatch::new().set_billing(BucketBilling::new()); "empty billing")]
    #[test_case(BucketPatch::new().set_labels(Vec::<(String, String)>::new()); "empty labels")]
    #[test_case(BucketPatch::new().set_versioning(Versioning::new()); "empty versioning")]
    #[test_case(BucketPatch::new().set_iam_configuration(IamConfiguration::new()); "empty iam")]
    #[test_case(BucketPatch::new().set_iam_configuration(
        IamConfiguration::new().set_uniform_bucket_level_access(UniformBucketLevelAccess::new())
    ); "empty uniform access")]
    fn patch_with_empty_records_is_empty(patch: BucketPatch) {
        assert!(patch.is_empty(), "{patch:?}");
    }

    #[test]
    fn notification_to_json() -> anyhow::Result<()> {
        let notification = Notification::new()
            .set_topic(notification_topic("p", "t"))
            .set_payload_format(Notification::JSON_API_V1)
            .set_event_types([Notification::OBJECT_FINALIZE])
            .set_object_name_prefix("logs/");
        let got = serde_json::to_value(&notification)?;
        let want = json!({
            "topic": "//pubsub.googleapis.com/projects/p/topics/t",
            "payload_format": "JSON_API_V1",
            "event_types": ["OBJECT_FINALIZE"],
            "object_name_prefix": "logs/",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn notification_from_json() -> anyhow::Result<()> {
        let input = json!({
            "kind": "storage#notification",
            "id": "17",
            "topic": "//pubsub.googleapis.com/projects/p/topics/t",
            "payload_format": "NONE",
            "custom_attributes": {"a": "b"},
            "etag": "17",
            "selfLink": "https://www.googleapis.com/storage/v1/b/b/notificationConfigs/17",
        });
        let got = serde_json::from_value::<Notification>(input)?;
        assert_eq!(got.id, "17");
        assert_eq!(got.payload_format, Notification::NONE);
        assert_eq!(
            got.custom_attributes.get("a").map(String::as_str),
            Some("b")
        );
        assert!(got.self_link.ends_with("/17"), "{got:?}");
        Ok(())
    }

    #[test]
    fn list_notifications_empty() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ListNotificationsResponse>(
            json!({"kind": "storage#notifications"}),
        )?;
        assert!(got.items.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn topic_names() {
        assert_eq!(topic_name("p", "t"), "projects/p/topics/t");
        assert_eq!(
            notification_topic("p", "t"),
            "//pubsub.googleapis.com/projects/p/topics/t"
        );
    }
}
