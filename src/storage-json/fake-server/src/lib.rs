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

//! An in-memory server for the Cloud Storage bucket and Pub/Sub topic APIs.
//!
//! The storage samples tests run against this server. It models the service
//! behavior the samples depend on:
//!
//! - The metageneration of a new bucket is 1, and each successful patch
//!   increments it.
//! - A patch with a mismatched `ifMetagenerationMatch` fails with 412.
//! - A hierarchical namespace requires uniform bucket-level access.
//! - Notifications require an existing topic, and each insert returns a new
//!   id, even for duplicate configurations.
//!
//! Nothing else about the services is modeled.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

const TOPIC_PREFIX: &str = "//pubsub.googleapis.com/";

#[derive(Debug, Default)]
struct Inner {
    buckets: BTreeMap<String, Value>,
    notifications: BTreeMap<String, BTreeMap<u64, Value>>,
    topics: BTreeSet<String>,
    next_notification_id: u64,
    concurrent_updates: BTreeSet<String>,
}

#[derive(Clone, Debug, Default)]
struct Shared(Arc<Mutex<Inner>>);

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A handler panicked while holding the lock, the test is already broken.
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A running fake server.
///
/// The server stops when this value is dropped.
#[derive(Debug)]
pub struct FakeServer {
    endpoint: String,
    state: Shared,
    task: JoinHandle<()>,
}

impl FakeServer {
    /// Starts a new server on a random local port.
    pub async fn start() -> anyhow::Result<Self> {
        let state = Shared::default();
        let app = axum::Router::new()
            .route("/storage/v1/b", post(insert_bucket))
            .route(
                "/storage/v1/b/{bucket}",
                get(get_bucket).patch(patch_bucket).delete(delete_bucket),
            )
            .route(
                "/storage/v1/b/{bucket}/notificationConfigs",
                get(list_notifications).post(insert_notification),
            )
            .route(
                "/storage/v1/b/{bucket}/notificationConfigs/{id}",
                get(get_notification).delete(delete_notification),
            )
            .route(
                "/v1/projects/{project}/topics/{topic}",
                get(get_topic).put(create_topic),
            )
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let task = tokio::spawn(async {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("fake server stopped: {e}");
            }
        });
        Ok(Self {
            endpoint: format!("http://{}:{}", addr.ip(), addr.port()),
            state,
            task,
        })
    }

    /// The endpoint for both the Cloud Storage and Pub/Sub clients.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates a topic without going through the Pub/Sub API.
    pub fn insert_topic(&self, project: &str, topic: &str) {
        self.state
            .lock()
            .topics
            .insert(format!("projects/{project}/topics/{topic}"));
    }

    /// Returns the stored metadata for a bucket.
    pub fn bucket(&self, name: &str) -> Option<Value> {
        self.state.lock().buckets.get(name).cloned()
    }

    /// Returns the number of notifications configured in a bucket.
    pub fn notification_count(&self, bucket: &str) -> usize {
        self.state
            .lock()
            .notifications
            .get(bucket)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }

    /// Simulates a concurrent change to `bucket`.
    ///
    /// The next read of the bucket returns its current metadata. Immediately
    /// after that read some other client changes a label, and the
    /// metageneration increases.
    pub fn inject_concurrent_update(&self, bucket: &str) {
        self.state
            .lock()
            .concurrent_updates
            .insert(bucket.to_string());
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn error(code: StatusCode, reason: &str, message: impl Into<String>) -> Response {
    let message = message.into();
    let body = json!({"error": {
        "code": code.as_u16(),
        "message": message,
        "errors": [{"domain": "global", "reason": reason, "message": message}],
    }});
    (code, Json(body)).into_response()
}

fn not_found(what: &str) -> Response {
    error(StatusCode::NOT_FOUND, "notFound", format!("{what} not found"))
}

fn metageneration(bucket: &Value) -> i64 {
    bucket
        .get("metageneration")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn set_metageneration(bucket: &mut Value, v: i64) {
    if let Some(o) = bucket.as_object_mut() {
        o.insert("metageneration".to_string(), Value::String(v.to_string()));
    }
}

fn is_enabled(bucket: &Value, pointer: &str) -> bool {
    bucket
        .pointer(pointer)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Applies a JSON merge patch. Null values remove the field.
fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(t), Value::Object(p)) => {
            for (k, v) in p {
                if v.is_null() {
                    t.remove(&k);
                    continue;
                }
                match t.get_mut(&k) {
                    Some(existing) if existing.is_object() && v.is_object() => merge(existing, v),
                    _ => {
                        t.insert(k, v);
                    }
                }
            }
        }
        (t, p) => *t = p,
    }
}

async fn insert_bucket(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    Json(mut body): Json<Value>,
) -> Response {
    if query.get("project").is_none_or(|p| p.is_empty()) {
        return error(StatusCode::BAD_REQUEST, "required", "Required parameter: project");
    }
    let name = match body.get("name").and_then(Value::as_str) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return error(StatusCode::BAD_REQUEST, "required", "Required field: name"),
    };
    if is_enabled(&body, "/hierarchicalNamespace/enabled")
        && !is_enabled(&body, "/iamConfiguration/uniformBucketLevelAccess/enabled")
    {
        return error(
            StatusCode::BAD_REQUEST,
            "invalid",
            "Hierarchical namespace requires uniform bucket-level access to be enabled.",
        );
    }
    let mut inner = state.lock();
    if inner.buckets.contains_key(&name) {
        return error(
            StatusCode::CONFLICT,
            "conflict",
            "Your previous request to create the named bucket succeeded and you already own it.",
        );
    }
    if let Some(o) = body.as_object_mut() {
        o.insert("kind".to_string(), json!("storage#bucket"));
        o.insert("id".to_string(), json!(name));
        o.insert("projectNumber".to_string(), json!("123456"));
        o.entry("location").or_insert_with(|| json!("US"));
        o.entry("storageClass").or_insert_with(|| json!("STANDARD"));
    }
    set_metageneration(&mut body, 1);
    inner.buckets.insert(name, body.clone());
    (StatusCode::OK, Json(body)).into_response()
}

async fn get_bucket(State(state): State<Shared>, Path(bucket): Path<String>) -> Response {
    let mut inner = state.lock();
    let Some(current) = inner.buckets.get(&bucket).cloned() else {
        return not_found(&format!("bucket {bucket}"));
    };
    if inner.concurrent_updates.remove(&bucket) {
        if let Some(stored) = inner.buckets.get_mut(&bucket) {
            let next = metageneration(stored) + 1;
            merge(stored, json!({"labels": {"concurrent-update": "true"}}));
            set_metageneration(stored, next);
        }
    }
    (StatusCode::OK, Json(current)).into_response()
}

async fn patch_bucket(
    State(state): State<Shared>,
    Path(bucket): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(patch): Json<Value>,
) -> Response {
    let mut inner = state.lock();
    let Some(stored) = inner.buckets.get_mut(&bucket) else {
        return not_found(&format!("bucket {bucket}"));
    };
    let current = metageneration(stored);
    if let Some(expected) = query.get("ifMetagenerationMatch") {
        match expected.parse::<i64>() {
            Ok(v) if v == current => {}
            Ok(_) => {
                return error(
                    StatusCode::PRECONDITION_FAILED,
                    "conditionNotMet",
                    "At least one of the pre-conditions you specified did not hold.",
                );
            }
            Err(_) => {
                return error(
                    StatusCode::BAD_REQUEST,
                    "invalidParameter",
                    format!("Invalid value for ifMetagenerationMatch: {expected}"),
                );
            }
        }
    }
    if patch.get("hierarchicalNamespace").is_some() {
        return error(
            StatusCode::BAD_REQUEST,
            "invalid",
            "The hierarchical namespace of a bucket cannot be changed.",
        );
    }
    merge(stored, patch);
    set_metageneration(stored, current + 1);
    (StatusCode::OK, Json(stored.clone())).into_response()
}

async fn delete_bucket(State(state): State<Shared>, Path(bucket): Path<String>) -> Response {
    let mut inner = state.lock();
    if inner.buckets.remove(&bucket).is_none() {
        return not_found(&format!("bucket {bucket}"));
    }
    inner.notifications.remove(&bucket);
    StatusCode::NO_CONTENT.into_response()
}

async fn insert_notification(
    State(state): State<Shared>,
    Path(bucket): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut inner = state.lock();
    if !inner.buckets.contains_key(&bucket) {
        return not_found(&format!("bucket {bucket}"));
    }
    let topic = match body.get("topic").and_then(Value::as_str) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return error(StatusCode::BAD_REQUEST, "required", "Required field: topic"),
    };
    let topic_name = topic.strip_prefix(TOPIC_PREFIX).unwrap_or(&topic);
    if !inner.topics.contains(topic_name) {
        return not_found(&format!("topic {topic}"));
    }
    inner.next_notification_id += 1;
    let id = inner.next_notification_id;
    if let Some(o) = body.as_object_mut() {
        o.insert("kind".to_string(), json!("storage#notification"));
        o.insert("id".to_string(), json!(id.to_string()));
        o.insert("etag".to_string(), json!(id.to_string()));
        o.insert(
            "selfLink".to_string(),
            json!(format!(
                "https://www.googleapis.com/storage/v1/b/{bucket}/notificationConfigs/{id}"
            )),
        );
        o.entry("payload_format")
            .or_insert_with(|| json!("JSON_API_V1"));
    }
    inner
        .notifications
        .entry(bucket)
        .or_default()
        .insert(id, body.clone());
    (StatusCode::OK, Json(body)).into_response()
}

async fn list_notifications(State(state): State<Shared>, Path(bucket): Path<String>) -> Response {
    let inner = state.lock();
    if !inner.buckets.contains_key(&bucket) {
        return not_found(&format!("bucket {bucket}"));
    }
    let items = inner
        .notifications
        .get(&bucket)
        .map(|m| m.values().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let mut body = Map::new();
    body.insert("kind".to_string(), json!("storage#notifications"));
    if !items.is_empty() {
        body.insert("items".to_string(), Value::Array(items));
    }
    (StatusCode::OK, Json(Value::Object(body))).into_response()
}

fn notification_id(id: &str) -> Option<u64> {
    id.parse().ok()
}

async fn get_notification(
    State(state): State<Shared>,
    Path((bucket, id)): Path<(String, String)>,
) -> Response {
    let inner = state.lock();
    let found = notification_id(&id)
        .and_then(|id| inner.notifications.get(&bucket)?.get(&id).cloned());
    match found {
        Some(n) => (StatusCode::OK, Json(n)).into_response(),
        None => not_found(&format!("notification {id} in bucket {bucket}")),
    }
}

async fn delete_notification(
    State(state): State<Shared>,
    Path((bucket, id)): Path<(String, String)>,
) -> Response {
    let mut inner = state.lock();
    let removed = notification_id(&id)
        .and_then(|id| inner.notifications.get_mut(&bucket)?.remove(&id));
    match removed {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(&format!("notification {id} in bucket {bucket}")),
    }
}

async fn get_topic(
    State(state): State<Shared>,
    Path((project, topic)): Path<(String, String)>,
) -> Response {
    let name = format!("projects/{project}/topics/{topic}");
    if !state.lock().topics.contains(&name) {
        return pubsub_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
    }
    (StatusCode::OK, Json(json!({"name": name}))).into_response()
}

async fn create_topic(
    State(state): State<Shared>,
    Path((project, topic)): Path<(String, String)>,
    Json(mut body): Json<Value>,
) -> Response {
    let name = format!("projects/{project}/topics/{topic}");
    if !state.lock().topics.insert(name.clone()) {
        return pubsub_error(StatusCode::CONFLICT, "ALREADY_EXISTS", "Topic already exists");
    }
    if let Some(o) = body.as_object_mut() {
        o.insert("name".to_string(), json!(name));
    }
    (StatusCode::OK, Json(body)).into_response()
}

fn pubsub_error(code: StatusCode, status: &str, message: &str) -> Response {
    let body = json!({"error": {
        "code": code.as_u16(),
        "message": message,
        "status": status,
    }});
    (code, Json(body)).into_response()
}
