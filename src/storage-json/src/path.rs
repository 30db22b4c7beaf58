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

use crate::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters that do not need escaping in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes `value` for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Returns an error if a required field is empty.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::request(format!("missing required field `{field}`")));
    }
    Ok(value)
}

/// Splits `projects/{project}/topics/{topic}` into its components.
pub(crate) fn topic(name: &str) -> Result<(&str, &str)> {
    let invalid = || {
        Error::request(format!(
            "invalid topic name `{name}`, expected `projects/{{project}}/topics/{{topic}}`"
        ))
    };
    let rest = name.strip_prefix("projects/").ok_or_else(invalid)?;
    let (project, topic) = rest.split_once("/topics/").ok_or_else(invalid)?;
    if project.is_empty() || topic.is_empty() || project.contains('/') || topic.contains('/') {
        return Err(invalid());
    }
    Ok((project, topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("my-bucket", "my-bucket")]
    #[test_case("my_bucket.example.com", "my_bucket.example.com")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a b", "a%20b")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    fn escape(input: &str, want: &str) {
        assert_eq!(segment(input), want);
    }

    #[test]
    fn required_field() {
        assert!(matches!(required("bucket", "b"), Ok("b")));
        let err = required("bucket", "").expect_err("empty values are rejected");
        assert!(err.is_request(), "{err:?}");
        assert!(err.to_string().contains("bucket"), "{err}");
    }

    #[test]
    fn topic_name() {
        let got = topic("projects/p/topics/t");
        assert!(matches!(got, Ok(("p", "t"))), "{got:?}");
    }

    #[test_case(""; "empty")]
    #[test_case("t"; "missing project")]
    #[test_case("projects/p"; "missing topic")]
    #[test_case("projects//topics/t"; "empty project")]
    #[test_case("projects/p/topics/"; "empty topic")]
    #[test_case("projects/p/topics/t/extra"; "trailing segments")]
    #[test_case("//pubsub.googleapis.com/projects/p/topics/t"; "full resource name")]
    fn bad_topic_name(input: &str) {
        let err = topic(input).expect_err("invalid topic names are rejected");
        assert!(err.is_request(), "{err:?}");
    }
}
