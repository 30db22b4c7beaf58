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

//! Errors returned by the clients in this crate.

use serde::Deserialize;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by all the clients in this crate.
///
/// The clients report errors from multiple sources. The service may reject
/// the request, the credentials may be unusable, the request may time out
/// before a response is received, or the application may provide invalid
/// inputs.
///
/// Most applications just return or log the error. Applications that need to
/// react to specific conditions can use the predicates in this type. The most
/// common case is [is_version_conflict()][Error::is_version_conflict]: the
/// bucket changed between the time it was read and the time a conditional
/// update was attempted.
///
/// # Example
/// ```
/// use google_cloud_storage_json::Error;
/// match example_function() {
///     Err(e) if e.is_version_conflict() => { println!("lost the race, read again: {e}"); },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use google_cloud_storage_json::ServiceError;
///     # Err(Error::service(ServiceError::new(412, "Precondition Failed")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    service: Option<Box<ServiceError>>,
    source: Option<BoxError>,
}

/// The category of an [Error].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The client could not be created, typically because the default
    /// credentials are not configured.
    ClientInit,
    /// The credentials could not produce the authentication headers for a
    /// request.
    Authentication,
    /// The bucket, notification, or topic does not exist.
    NotFound,
    /// A metageneration precondition did not match the current state of the
    /// bucket.
    VersionConflict,
    /// The caller does not have permission to perform the operation.
    PermissionDenied,
    /// The request did not complete before its deadline.
    Timeout,
    /// The service rejected the request for any other reason.
    Service,
    /// The request could not be sent, or the response could not be received.
    Io,
    /// The request inputs are invalid, the request was not sent.
    Request,
    /// The request body could not be serialized.
    Serialization,
    /// The response could not be deserialized.
    Deserialization,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// The kind is derived from the HTTP status code in `error`.
    ///
    /// # Example
    /// ```
    /// use google_cloud_storage_json::{Error, ServiceError};
    /// let error = Error::service(ServiceError::new(404, "No such bucket"));
    /// assert!(error.is_not_found());
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self {
            kind: kind_for_status(error.code),
            service: Some(Box::new(error)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// Creates an error representing a problem sending the request.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Io, source)
    }

    /// Creates an error representing a problem creating the client.
    pub fn client_init<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::ClientInit, source)
    }

    /// Creates an error representing a problem with the credentials.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// Creates an error representing invalid request inputs.
    pub fn request<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Request, source)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            service: None,
            source: Some(source.into()),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The client could not be created.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is missing [Application Default Credentials].
    /// Configure them, or provide explicit credentials via
    /// [ClientBuilder::with_credentials][crate::client::ClientBuilder::with_credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    pub fn is_client_init(&self) -> bool {
        matches!(self.kind, ErrorKind::ClientInit)
    }

    /// The credentials could not create the authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// The resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }

    /// The bucket metageneration did not match the request precondition.
    ///
    /// The request was not applied. Applications that want to retry must read
    /// the bucket again, and decide if the update is still valid.
    pub fn is_version_conflict(&self) -> bool {
        matches!(self.kind, ErrorKind::VersionConflict)
    }

    /// The caller lacks the permissions to perform the request.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.kind, ErrorKind::PermissionDenied)
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The service returned an error.
    ///
    /// This includes not found, version conflicts, and permission errors.
    pub fn is_service(&self) -> bool {
        self.service.is_some()
    }

    /// The request could not be sent, or the response was not received.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The request inputs were invalid.
    pub fn is_request(&self) -> bool {
        matches!(self.kind, ErrorKind::Request)
    }

    /// The error details returned by the service, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        self.service.as_deref()
    }

    /// The HTTP status code returned by the service, if any.
    pub fn http_status_code(&self) -> Option<u16> {
        self.service.as_ref().map(|s| s.code)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.service, &self.source) {
            (ErrorKind::VersionConflict, Some(s), _) => {
                write!(f, "the bucket metageneration precondition failed: {s}")
            }
            (_, Some(s), _) => s.fmt(f),
            (ErrorKind::ClientInit, _, Some(e)) => write!(f, "cannot create the client: {e}"),
            (ErrorKind::Authentication, _, Some(e)) => {
                write!(f, "cannot create the authentication headers: {e}")
            }
            (ErrorKind::Timeout, _, Some(e)) => {
                write!(f, "the request exceeded the configured timeout: {e}")
            }
            (ErrorKind::Io, _, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Request, _, Some(e)) => write!(f, "invalid request: {e}"),
            (ErrorKind::Serialization, _, Some(e)) => {
                write!(f, "cannot serialize the request: {e}")
            }
            (ErrorKind::Deserialization, _, Some(e)) => {
                write!(f, "cannot deserialize the response: {e}")
            }
            (k, _, _) => write!(f, "{k:?} error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(s) = &self.service {
            return Some(s.as_ref());
        }
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// The error details returned by the service.
///
/// Both Cloud Storage and Pub/Sub return errors as a JSON object with an
/// `error` field. This type holds the contents of that field.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, thiserror::Error)]
#[error("the service reports an error with code {code} described as: {message}")]
#[non_exhaustive]
pub struct ServiceError {
    /// The HTTP status code.
    pub code: u16,
    /// A developer-facing error message.
    #[serde(default)]
    pub message: String,
    /// The canonical status name, e.g. `FAILED_PRECONDITION`. Cloud Storage
    /// typically omits it.
    #[serde(default)]
    pub status: String,
    /// Additional details, Cloud Storage uses these to report the reason.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ServiceError {
    /// Creates a new error with the given HTTP status code and message.
    pub fn new<T: Into<String>>(code: u16, message: T) -> Self {
        Self {
            code,
            message: message.into(),
            ..Default::default()
        }
    }

    /// Sets the canonical status name.
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the additional details.
    pub fn set_errors<T: IntoIterator<Item = ErrorDetail>>(mut self, v: T) -> Self {
        self.errors = v.into_iter().collect();
        self
    }

    /// The reason in the first detail, e.g. `conditionNotMet`.
    pub fn reason(&self) -> Option<&str> {
        self.errors.first().map(|d| d.reason.as_str())
    }
}

/// One of the additional details in a [ServiceError].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct ErrorDetail {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorDetail {
    /// Creates a new detail with the given reason.
    pub fn new<T: Into<String>>(reason: T) -> Self {
        Self {
            domain: "global".to_string(),
            reason: reason.into(),
            ..Default::default()
        }
    }

    /// Sets the message.
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

#[derive(Deserialize)]
struct ErrorReply {
    error: ServiceError,
}

/// Converts an HTTP error response into an [Error].
///
/// Services sometimes return errors that are not JSON, for example, when a
/// load balancer rejects the request. Those are reported with the payload as
/// the message.
pub(crate) fn from_http_error(status_code: u16, payload: &[u8]) -> Error {
    let error = match serde_json::from_slice::<ErrorReply>(payload) {
        Ok(reply) => reply.error,
        Err(_) => ServiceError::new(status_code, String::from_utf8_lossy(payload)),
    };
    Error::service(error)
}

fn kind_for_status(code: u16) -> ErrorKind {
    match code {
        404 => ErrorKind::NotFound,
        412 => ErrorKind::VersionConflict,
        401 | 403 => ErrorKind::PermissionDenied,
        _ => ErrorKind::Service,
    }
}
