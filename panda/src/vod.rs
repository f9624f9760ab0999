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

//! Panda VOD support with convenience APIs.

pub use panda_vod::*;

#[cfg(feature = "default-context")]
use crate::default_context;

/// Create a client from the environment with the default context.
///
/// Credentials are read from `PANDA_ACCESS_KEY`, `PANDA_SECRET_KEY` and
/// `PANDA_CLOUD_ID`, the host from `PANDA_HOST` falling back to [`HOST_US`].
///
/// ```no_run
/// # fn main() -> panda::Result<()> {
/// let client = panda::vod::default_client()?;
/// let clouds = client.get("/clouds.json", None)?;
/// println!("{}", String::from_utf8_lossy(&clouds));
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> panda_core::Result<Client> {
    Client::from_config(default_context(), Config::default())
}

/// Create a [`Manager`] on top of [`default_client`].
#[cfg(feature = "default-context")]
pub fn default_manager() -> panda_core::Result<Manager> {
    Ok(Manager::new(default_client()?))
}
