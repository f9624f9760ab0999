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

use http::Method;

use crate::QueryParams;

/// Signing context for request.
///
/// Signers add their fields to `query` in place. The same parameter set is
/// later serialized into the transmitted url, so it must not be touched
/// between signing and sending.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Host as configured by the user, port included if any.
    pub host: String,
    /// Logical request path, relative to the api version.
    pub path: String,
    /// HTTP query parameters.
    pub query: QueryParams,
}

impl SigningRequest {
    /// Create a new signing request.
    pub fn new(
        method: Method,
        host: impl Into<String>,
        path: impl Into<String>,
        query: QueryParams,
    ) -> Self {
        Self {
            method,
            host: host.into(),
            path: path.into(),
            query,
        }
    }

    /// Set a query pair, replacing any value already present.
    #[inline]
    pub fn query_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.set(key, value);
    }
}
