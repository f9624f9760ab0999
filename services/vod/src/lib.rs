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

//! Panda VOD signing and dispatch.
//!
//! This crate signs requests for the panda video transcoding api and sends
//! them over the transport of a [`Context`](panda_core::Context).
//!
//! Every request carries `access_key`, `cloud_id`, `timestamp` and
//! `signature` as query parameters. The signature is the base64 encoded
//! HMAC-SHA256, keyed with the secret key, of
//!
//! ```text
//! METHOD\nHOST\nPATH\nCANONICAL_QUERY
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use panda_core::{Context, OsEnv, Result};
//! use panda_http_send_reqwest::ReqwestHttpSend;
//! use panda_vod::{Client, Config, Manager};
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Credentials not set here are read from PANDA_ACCESS_KEY,
//!     // PANDA_SECRET_KEY and PANDA_CLOUD_ID.
//!     let config = Config::default().with_cloud_id("my-cloud-id");
//!     let client = Client::from_config(ctx, config)?;
//!
//!     let manager = Manager::new(client);
//!     for video in manager.videos(None)? {
//!         println!("{} {:?}", video.id, video.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Raw requests
//!
//! [`Client`] exposes the generic dispatcher for paths not covered by
//! [`Manager`]:
//!
//! ```no_run
//! # use panda_core::{Context, QueryParams, Result};
//! # use panda_vod::{Client, Credential};
//! # fn main() -> Result<()> {
//! let client = Client::us(Context::new(), Credential::new("ak", "sk", "cloud"))?;
//! let params = QueryParams::new().with("status", "success");
//! let body = client.get("/videos.json", Some(params))?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{DEFAULT_API_VERSION, HOST_EU, HOST_US};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner};

mod url;
pub use url::build_url;

mod error;
pub use error::{parse_error, ApiError, ErrorExt};

mod client;
pub use client::Client;

mod paths;

mod resource;
pub use resource::{route_for, Operation, Resource, ResourceKind};

pub mod models;

mod manager;
pub use manager::Manager;
