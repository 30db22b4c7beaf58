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

//! Google Cloud Client Libraries for Rust - Storage bucket configuration
//!
//! This crate contains a small client for the bucket configuration surface of
//! the [Cloud Storage JSON API], and for the [Pub/Sub] topics used as the
//! destination of bucket notifications. Most applications will use the
//! structs defined in the [client] module. More specifically:
//!
//! * [StorageControl][client::StorageControl]
//! * [TopicAdmin][client::TopicAdmin]
//!
//! Bucket attribute changes that must not overwrite concurrent changes should
//! use the [occ] module. It reads the current metageneration of the bucket and
//! makes the update conditional on that metageneration.
//!
//! [Cloud Storage JSON API]: https://cloud.google.com/storage/docs/json_api
//! [Pub/Sub]: https://cloud.google.com/pubsub/docs/reference/rest

pub use error::{Error, ErrorKind, ServiceError};

/// The result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub mod error;
pub mod model;
pub mod occ;
pub mod options;
pub mod stub;

mod control;
mod path;
mod pubsub;
mod transport;

/// Clients to interact with Cloud Storage and Pub/Sub.
pub mod client {
    pub use crate::control::client::{ClientBuilder, StorageControl};
    pub use crate::pubsub::client::TopicAdmin;
}

/// Request builders.
pub mod builder {
    pub mod storage_control {
        pub use crate::control::builder::*;
    }
    pub mod topic_admin {
        pub use crate::pubsub::builder::*;
    }
}
