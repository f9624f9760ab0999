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

//! Core components for signing Panda API requests.
//!
//! This crate provides the foundational types and traits shared by the panda
//! service crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and credential checks (`SigningCredential`)
//! - **QueryParams**: Multi-valued query parameters with a deterministic, canonical serialization
//! - **Error**: One error type with an [`ErrorKind`] for every failure a call can end with
//!
//! ## Example
//!
//! ```
//! use panda_core::QueryParams;
//!
//! let mut params = QueryParams::new();
//! params.set("cloud_id", "123456789");
//! params.add("profiles", "h264");
//! params.add("profiles", "webm 720p");
//!
//! assert_eq!(
//!     params.encode(),
//!     "cloud_id=123456789&profiles=h264&profiles=webm+720p"
//! );
//! assert_eq!(
//!     params.canonicalize(),
//!     "cloud_id=123456789&profiles=h264&profiles=webm%20720p"
//! );
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod query;
pub use query::{canonicalize_query, QueryParams};
mod request;
pub use request::SigningRequest;
