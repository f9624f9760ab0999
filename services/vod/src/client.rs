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
use crate::{build_url, parse_error, Config, Credential, DefaultCredentialProvider, RequestSigner};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::uri::Authority;
use http::{Method, StatusCode};
use log::debug;
use panda_core::{
    Context, Error, ProvideCredential, QueryParams, Result, SigningCredential, SigningRequest,
};
use std::sync::Arc;

/// Client signs and sends requests to the panda api.
///
/// A client holds no per request state, clone it or share it between threads
/// freely.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    host: String,
    api_version: String,
    credential: Credential,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client talking to `host`, port included if any.
    pub fn new(ctx: Context, host: impl Into<String>, credential: Credential) -> Result<Self> {
        let host = host.into();
        host.parse::<Authority>()
            .map_err(|e| Error::config_invalid(format!("invalid host: {host}")).with_source(e))?;
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        Ok(Self {
            ctx,
            host,
            api_version: DEFAULT_API_VERSION.to_string(),
            credential,
            signer: RequestSigner::new(),
        })
    }

    /// Create a client for the US deployment.
    pub fn us(ctx: Context, credential: Credential) -> Result<Self> {
        Self::new(ctx, HOST_US, credential)
    }

    /// Create a client for the EU deployment.
    pub fn eu(ctx: Context, credential: Credential) -> Result<Self> {
        Self::new(ctx, HOST_EU, credential)
    }

    /// Create a client from `config`, completed with the environment of `ctx`.
    ///
    /// Returns a credential error when no complete credential can be found.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let config = config.from_env(&ctx);
        let provider = DefaultCredentialProvider::with_config(Arc::new(config.clone()));
        let Some(credential) = provider.provide_credential(&ctx)? else {
            return Err(Error::credential_invalid(
                "no credential found in config or environment",
            ));
        };

        Ok(Self::new(ctx, config.host(), credential)?.with_api_version(config.api_version()))
    }

    /// Use another api version than [`DEFAULT_API_VERSION`].
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Replace the signer used for every request.
    ///
    /// # Note
    ///
    /// A signer built with [`RequestSigner::with_time`] signs every request
    /// with the same timestamp. Only use this function for testing.
    #[doc(hidden)]
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Switch the cloud addressed by this client.
    pub fn set_cloud_id(&mut self, cloud_id: impl Into<String>) {
        self.credential.cloud_id = cloud_id.into();
    }

    /// Get a copy of this client addressing another cloud.
    pub fn with_cloud_id(&self, cloud_id: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.set_cloud_id(cloud_id);
        client
    }

    /// Host requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Api version prefixed to every path.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Cloud requests are scoped to.
    pub fn cloud_id(&self) -> &str {
        &self.credential.cloud_id
    }

    /// Sign and send a request, returning the body of a 200 response.
    ///
    /// Any other status is turned into an error by [`parse_error`].
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        params: Option<QueryParams>,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        let mut req = SigningRequest::new(method, &self.host, path, params.unwrap_or_default());

        let signing_time = self.signer.time();
        let signature = self.signer.sign(&self.credential, &mut req, signing_time)?;
        req.query_set(SIGNATURE, signature);

        let uri = build_url(&self.host, &self.api_version, &req.path, &req.query)?;
        debug!("sending request: {} {}", req.method, req.path);

        let http_req = http::Request::builder()
            .method(req.method)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(body.unwrap_or_default())?;
        let resp = self.ctx.http_send(http_req)?;

        let (parts, body) = resp.into_parts();
        debug!("got response: {} {}", parts.status, req.path);
        if parts.status != StatusCode::OK {
            return Err(parse_error(parts.status, &body));
        }

        Ok(body)
    }

    /// Send a GET request.
    pub fn get(&self, path: &str, params: Option<QueryParams>) -> Result<Bytes> {
        self.execute(Method::GET, path, "", params, None)
    }

    /// Send a POST request.
    pub fn post(
        &self,
        path: &str,
        content_type: &str,
        params: Option<QueryParams>,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        self.execute(Method::POST, path, content_type, params, body)
    }

    /// Send a PUT request.
    pub fn put(
        &self,
        path: &str,
        content_type: &str,
        params: Option<QueryParams>,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        self.execute(Method::PUT, path, content_type, params, body)
    }

    /// Send a DELETE request.
    pub fn delete(&self, path: &str) -> Result<Bytes> {
        self.execute(Method::DELETE, path, "", None, None)
    }
}
