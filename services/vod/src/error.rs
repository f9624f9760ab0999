// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use http::StatusCode;
use panda_core::Error;
use serde::Deserialize;
use serde_json::{Map, Value};

/// ApiError is the error body returned by panda for any non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("panda: {code} {error}: {message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub code: u16,
    /// Short error token such as `bad_request`.
    #[serde(default)]
    pub error: String,
    /// Human readable description.
    #[serde(default)]
    pub message: String,
}

/// Turn a non-200 response into an [`Error`].
///
/// A well formed body yields an [`ErrorKind::Api`](panda_core::ErrorKind::Api)
/// error carrying the [`ApiError`]. Anything else yields an
/// [`ErrorKind::Decode`](panda_core::ErrorKind::Decode) error whose source is
/// the parse failure. The status is attached to both.
pub fn parse_error(status: StatusCode, body: &[u8]) -> Error {
    // Only a json object is an error body, arrays must not fill the struct.
    let decoded = serde_json::from_slice::<Map<String, Value>>(body)
        .and_then(|object| serde_json::from_value::<ApiError>(Value::Object(object)));

    match decoded {
        Ok(mut api_error) => {
            api_error.code = status.as_u16();
            Error::api(api_error.to_string())
                .with_status(status)
                .with_source(api_error)
        }
        Err(err) => Error::decode(format!(
            "failed to decode error response with status {status}"
        ))
        .with_status(status)
        .with_source(err),
    }
}

/// Panda specific accessors on [`Error`].
pub trait ErrorExt {
    /// The decoded error body, if the service sent one.
    fn api_error(&self) -> Option<&ApiError>;
}

impl ErrorExt for Error {
    fn api_error(&self) -> Option<&ApiError> {
        self.source_as::<ApiError>()
    }
}
