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

//! Signed-request client for the Panda video transcoding api.
//!
//! This crate bundles [`panda_core`] with the service crates behind cargo
//! features:
//!
//! - `vod`: the panda video api, see [`vod`]
//! - `default-context`: [`default_context`] backed by blocking reqwest and the OS environment
//!
//! ```no_run
//! # fn main() -> panda::Result<()> {
//! let manager = panda::vod::default_manager()?;
//! for profile in manager.profiles(None)? {
//!     println!("{}", profile.id);
//! }
//! # Ok(())
//! # }
//! ```

pub use panda_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "vod")]
pub mod vod;
