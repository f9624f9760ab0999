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

//! Rest paths of panda resources, relative to the api version.

pub const CLOUDS: &str = "/clouds.json";
pub const ENCODINGS: &str = "/encodings.json";
pub const NOTIFICATIONS: &str = "/notifications.json";
pub const PROFILES: &str = "/profiles.json";
pub const VIDEOS: &str = "/videos.json";

pub fn cloud(id: &str) -> String {
    format!("/clouds/{id}.json")
}

pub fn encoding(id: &str) -> String {
    format!("/encodings/{id}.json")
}

pub fn encoding_cancel(id: &str) -> String {
    format!("/encodings/{id}/cancel.json")
}

pub fn encoding_retry(id: &str) -> String {
    format!("/encodings/{id}/retry.json")
}

pub fn profile(id: &str) -> String {
    format!("/profiles/{id}.json")
}

pub fn video(id: &str) -> String {
    format!("/videos/{id}.json")
}

/// Videos are deleted without the `.json` suffix.
pub fn video_delete(id: &str) -> String {
    format!("/videos/{id}")
}

pub fn video_encodings(id: &str) -> String {
    format!("/videos/{id}/encodings.json")
}

pub fn video_metadata(id: &str) -> String {
    format!("/videos/{id}/metadata.json")
}

pub fn video_source(id: &str) -> String {
    format!("/videos/{id}/source.json")
}
