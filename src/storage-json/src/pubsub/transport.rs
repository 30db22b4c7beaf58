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
use crate::options::RequestOptions;
use crate::path::segment;
use crate::transport::{ClientConfig, HttpClient, NoBody};
use reqwest::Method;

const DEFAULT_ENDPOINT: &str = "https://pubsub.googleapis.com";

/// Implements [crate::stub::TopicAdmin] using the Pub/Sub REST API.
#[derive(Clone, Debug)]
pub(crate) struct TopicAdmin {
    inner: HttpClient,
}

impl TopicAdmin {
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, DEFAULT_ENDPOINT)?;
        Ok(Self { inner })
    }
}

fn topic_path(name: &str) -> Result<String> {
    let (project, topic) = crate::path::topic(name)?;
    Ok(format!(
        "/v1/projects/{}/topics/{}",
        segment(project),
        segment(topic)
    ))
}

impl crate::stub::TopicAdmin for TopicAdmin {
    async fn get_topic(&self, req: GetTopicRequest, options: RequestOptions) -> Result<Topic> {
        let builder = self.inner.builder(Method::GET, topic_path(&req.topic)?);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_topic(&self, req: Topic, options: RequestOptions) -> Result<Topic> {
        let builder = self.inner.builder(Method::PUT, topic_path(&req.name)?);
        // The name is in the path, the body carries the remaining fields.
        let body = Topic {
            name: String::new(),
            ..req
        };
        self.inner.execute(builder, Some(body), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() -> anyhow::Result<()> {
        assert_eq!(topic_path("projects/p/topics/t")?, "/v1/projects/p/topics/t");
        assert!(topic_path("t").is_err());
        Ok(())
    }
}
