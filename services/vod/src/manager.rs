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

use crate::models::*;
use crate::resource::{route_for, Operation, Resource};
use crate::{paths, Client};
use panda_core::{QueryParams, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Manager offers typed operations on top of a [`Client`].
#[derive(Debug, Clone)]
pub struct Manager {
    client: Client,
}

impl Manager {
    /// Create a new manager.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client used by this manager.
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: Option<QueryParams>) -> Result<T> {
        let body = self.client.get(path, params)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, params: Option<QueryParams>) -> Result<T> {
        let body = self.client.post(path, "", params, None)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Get the cloud with `id`.
    pub fn cloud(&self, id: &str) -> Result<Cloud> {
        self.get(&paths::cloud(id), None)
    }

    /// List all clouds of the account.
    pub fn clouds(&self) -> Result<Vec<Cloud>> {
        self.get(paths::CLOUDS, None)
    }

    /// Update `cloud` with the storage key pair, refreshing it from the response.
    pub fn update_cloud(
        &self,
        cloud: &mut Cloud,
        aws_access_key: &str,
        aws_secret_key: &str,
    ) -> Result<()> {
        let mut params = QueryParams::from_serialize(&*cloud)?;
        params.set("aws_access_key", aws_access_key);
        params.set("aws_secret_key", aws_secret_key);

        let body = self.client.put(&paths::cloud(&cloud.id), "", Some(params), None)?;
        *cloud = serde_json::from_slice(&body)?;
        Ok(())
    }

    /// Create an encoding for an existing video.
    pub fn new_encoding(&self, req: &NewEncodingRequest) -> Result<Encoding> {
        self.post(paths::ENCODINGS, Some(QueryParams::from_serialize(req)?))
    }

    /// Get the encoding with `id`.
    pub fn encoding(&self, id: &str) -> Result<Encoding> {
        self.get(&paths::encoding(id), None)
    }

    /// List encodings of the cloud.
    pub fn encodings(&self, filter: Option<&EncodingFilter>) -> Result<Vec<Encoding>> {
        self.get(paths::ENCODINGS, filter.map(QueryParams::from_serialize).transpose()?)
    }

    /// Cancel the encoding with `id`.
    pub fn cancel_encoding(&self, id: &str) -> Result<()> {
        self.client.post(&paths::encoding_cancel(id), "", None, None)?;
        Ok(())
    }

    /// Retry the encoding with `id`.
    pub fn retry_encoding(&self, id: &str) -> Result<()> {
        self.client.post(&paths::encoding_retry(id), "", None, None)?;
        Ok(())
    }

    /// Create a new profile.
    pub fn new_profile(&self, profile: &Profile) -> Result<Profile> {
        self.post(paths::PROFILES, Some(QueryParams::from_serialize(profile)?))
    }

    /// Get the profile with `id`.
    pub fn profile(&self, id: &str) -> Result<Profile> {
        self.get(&paths::profile(id), None)
    }

    /// List profiles of the cloud.
    pub fn profiles(&self, filter: Option<&ProfileFilter>) -> Result<Vec<Profile>> {
        self.get(paths::PROFILES, filter.map(QueryParams::from_serialize).transpose()?)
    }

    /// Create a video fetched by panda from `source_url`.
    pub fn new_video_url(&self, source_url: &str, req: Option<&NewVideoRequest>) -> Result<Video> {
        let mut params = match req {
            Some(req) => QueryParams::from_serialize(req)?,
            None => QueryParams::new(),
        };
        params.set("source_url", source_url);

        self.post(paths::VIDEOS, Some(params))
    }

    /// Get the video with `id`.
    pub fn video(&self, id: &str) -> Result<Video> {
        self.get(&paths::video(id), None)
    }

    /// List videos of the cloud.
    pub fn videos(&self, filter: Option<&VideoFilter>) -> Result<Vec<Video>> {
        self.get(paths::VIDEOS, filter.map(QueryParams::from_serialize).transpose()?)
    }

    /// List encodings of the video with `id`.
    pub fn video_encodings(&self, id: &str, filter: Option<&EncodingFilter>) -> Result<Vec<Encoding>> {
        self.get(
            &paths::video_encodings(id),
            filter.map(QueryParams::from_serialize).transpose()?,
        )
    }

    /// Get the meta data of the video with `id`.
    pub fn video_metadata(&self, id: &str) -> Result<MetaData> {
        self.get(&paths::video_metadata(id), None)
    }

    /// Delete the source file of the video with `id`, keeping its encodings.
    pub fn delete_source(&self, id: &str) -> Result<()> {
        self.client.delete(&paths::video_source(id))?;
        Ok(())
    }

    /// Get the notification settings of the cloud.
    pub fn notifications(&self) -> Result<Notifications> {
        self.get(paths::NOTIFICATIONS, None)
    }

    /// Update `resource` on the server, refreshing it from the response.
    ///
    /// # Panics
    ///
    /// Panics if the kind of `resource` can't be updated, see [`route_for`].
    pub fn update<R>(&self, resource: &mut R) -> Result<()>
    where
        R: Resource + Serialize + DeserializeOwned,
    {
        let path = route_for(Operation::Update, &*resource);
        let params = QueryParams::from_serialize(&*resource)?;

        let body = self.client.put(&path, "", Some(params), None)?;
        *resource = serde_json::from_slice(&body)?;
        Ok(())
    }

    /// Delete `resource` on the server.
    ///
    /// # Panics
    ///
    /// Panics if the kind of `resource` can't be deleted, see [`route_for`].
    pub fn delete<R: Resource + ?Sized>(&self, resource: &R) -> Result<()> {
        self.client.delete(&route_for(Operation::Delete, resource))?;
        Ok(())
    }
}
