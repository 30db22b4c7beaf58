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

use crate::Result;
use crate::model::{GetTopicRequest, Topic};
use crate::options::{RequestOptions, internal, with_deadline};
use crate::stub::dynamic;
use std::sync::Arc;

/// The request builder for [TopicAdmin::get_topic][crate::client::TopicAdmin::get_topic] calls.
#[derive(Clone, Debug)]
pub struct GetTopic {
    stub: Arc<dyn dynamic::TopicAdmin>,
    request: GetTopicRequest,
    options: RequestOptions,
}

impl GetTopic {
    pub(crate) fn new(stub: Arc<dyn dynamic::TopicAdmin>, options: RequestOptions) -> Self {
        Self {
            stub,
            request: GetTopicRequest::default(),
            options,
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<GetTopicRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets the value of [topic][GetTopicRequest::topic].
    ///
    /// This is a **required** field for requests. The format is
    /// `projects/{project}/topics/{topic}`.
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.request.topic = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Topic> {
        crate::path::topic(&self.request.topic)?;
        with_deadline(
            self.options.timeout(),
            self.stub.get_topic(self.request, self.options.clone()),
        )
        .await
    }
}

impl internal::RequestBuilder for GetTopic {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [TopicAdmin::create_topic][crate::client::TopicAdmin::create_topic] calls.
#[derive(Clone, Debug)]
pub struct CreateTopic {
    stub: Arc<dyn dynamic::TopicAdmin>,
    request: Topic,
    options: RequestOptions,
}

impl CreateTopic {
    pub(crate) fn new(stub: Arc<dyn dynamic::TopicAdmin>, options: RequestOptions) -> Self {
        Self {
            stub,
            request: Topic::default(),
            options,
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<Topic>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets the value of [name][Topic::name].
    ///
    /// This is a **required** field for requests. The format is
    /// `projects/{project}/topics/{topic}`.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sets the value of [labels][Topic::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request = self.request.set_labels(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Topic> {
        crate::path::topic(&self.request.name)?;
        with_deadline(
            self.options.timeout(),
            self.stub.create_topic(self.request, self.options.clone()),
        )
        .await
    }
}

impl internal::RequestBuilder for CreateTopic {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
