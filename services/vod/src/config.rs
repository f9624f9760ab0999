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

use crate::constants::*;
use panda_core::utils::Redact;
use panda_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the panda vod client.
#[derive(Clone, Default)]
pub struct Config {
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PANDA_HOST`]
    /// - default to [`HOST_US`]
    pub host: Option<String>,
    /// `api_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PANDA_API_VERSION`]
    /// - default to [`DEFAULT_API_VERSION`]
    pub api_version: Option<String>,
    /// `cloud_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PANDA_CLOUD_ID`]
    pub cloud_id: Option<String>,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PANDA_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PANDA_SECRET_KEY`]
    pub secret_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("cloud_id", &self.cloud_id)
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl Config {
    /// Set the host, port included if any.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the api version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the cloud id.
    pub fn with_cloud_id(mut self, cloud_id: impl Into<String>) -> Self {
        self.cloud_id = Some(cloud_id.into());
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the secret key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PANDA_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_API_VERSION) {
            self.api_version.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_CLOUD_ID) {
            self.cloud_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }

        self
    }

    /// Host to talk to, falling back to the US deployment.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(HOST_US)
    }

    /// Api version to use, falling back to [`DEFAULT_API_VERSION`].
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }
}
