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
use crate::Credential;
use panda_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the panda credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `PANDA_ACCESS_KEY`: The access key
/// - `PANDA_SECRET_KEY`: The secret key
/// - `PANDA_CLOUD_ID`: The cloud id
///
/// All three have to be present, a partial set yields nothing.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (
            envs.get(PANDA_ACCESS_KEY),
            envs.get(PANDA_SECRET_KEY),
            envs.get(PANDA_CLOUD_ID),
        ) {
            (Some(ak), Some(sk), Some(cloud_id)) => {
                Ok(Some(Credential::new(ak.clone(), sk.clone(), cloud_id.clone())))
            }
            _ => Ok(None),
        }
    }
}
