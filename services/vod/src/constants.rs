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

// Env values used in panda vod.
pub const PANDA_HOST: &str = "PANDA_HOST";
pub const PANDA_API_VERSION: &str = "PANDA_API_VERSION";
pub const PANDA_CLOUD_ID: &str = "PANDA_CLOUD_ID";
pub const PANDA_ACCESS_KEY: &str = "PANDA_ACCESS_KEY";
pub const PANDA_SECRET_KEY: &str = "PANDA_SECRET_KEY";

/// Host of the US deployment.
pub const HOST_US: &str = "api.pandastream.com";
/// Host of the EU deployment.
pub const HOST_EU: &str = "api-eu.pandastream.com";
/// Api version segment prefixed to every request path.
pub const DEFAULT_API_VERSION: &str = "v2";

/// The only port that switches requests to https.
pub const HTTPS_PORT: u16 = 443;

// Query parameters added by the signer.
pub const ACCESS_KEY: &str = "access_key";
pub const CLOUD_ID: &str = "cloud_id";
pub const TIMESTAMP: &str = "timestamp";
pub const SIGNATURE: &str = "signature";
