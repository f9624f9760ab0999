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
use log::debug;
use panda_core::hash::base64_hmac_sha256;
use panda_core::time::{format_rfc3339_nano, now, DateTime};
use panda_core::{Error, Result, SigningCredential, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implements the panda query signature.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Time to sign the next request with.
    pub fn time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Sign the request and return the signature.
    ///
    /// `access_key`, `cloud_id` and `timestamp` are written into `req.query`
    /// before the signature is computed over it. The caller is expected to add
    /// the returned value as `signature` and send `req.query` unchanged.
    pub fn sign(
        &self,
        cred: &Credential,
        req: &mut SigningRequest,
        signing_time: DateTime,
    ) -> Result<String> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        req.query.remove(SIGNATURE);
        req.query_set(ACCESS_KEY, &cred.access_key);
        req.query_set(CLOUD_ID, &cred.cloud_id);
        req.query_set(TIMESTAMP, format_rfc3339_nano(signing_time));

        let string_to_sign = string_to_sign(req)?;
        base64_hmac_sha256(cred.secret_key.as_bytes(), string_to_sign.as_bytes())
    }
}

/// Build the string to sign for the request.
///
/// ```text
/// METHOD\nHOST\nPATH\nCANONICAL_QUERY
/// ```
pub fn string_to_sign(req: &SigningRequest) -> Result<String> {
    let mut s = String::new();
    writeln!(&mut s, "{}", req.method.as_str().to_ascii_uppercase())?;
    writeln!(&mut s, "{}", req.host)?;
    writeln!(&mut s, "{}", req.path)?;
    write!(&mut s, "{}", req.query.canonicalize())?;

    debug!("string to sign: {}", &s);
    Ok(s)
}
