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

//! Resource models exchanged with the panda api.
//!
//! Only the commonly used fields are modeled, unknown fields are ignored
//! when decoding.

use crate::resource::{Resource, ResourceKind};
use panda_core::time::DateTime;
use serde::{Deserialize, Serialize, Serializer};

/// State of a video or an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Done.
    Success,
    /// Failed, see `error_message`.
    Fail,
    /// Still running.
    Processing,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// How a profile fits the source into the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Letterbox,
    Preserve,
    Constrain,
    Pad,
    Crop,
}

/// Meta data of a video as reported by panda.
pub type MetaData = serde_json::Map<String, serde_json::Value>;

/// Cloud is a panda sub account backed by one storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub id: String,
    pub name: Option<String>,
    pub s3_videos_bucket: Option<String>,
    pub s3_private_access: Option<bool>,
    pub url: Option<String>,
    #[serde(with = "panda_time")]
    pub created_at: Option<DateTime>,
    #[serde(with = "panda_time")]
    pub updated_at: Option<DateTime>,
}

/// Video uploaded to a cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    pub status: Option<Status>,
    #[serde(with = "panda_time")]
    pub created_at: Option<DateTime>,
    #[serde(with = "panda_time")]
    pub updated_at: Option<DateTime>,
    pub mime_type: Option<String>,
    pub original_filename: Option<String>,
    pub source_url: Option<String>,
    pub duration: Option<f64>,
    pub height: Option<u64>,
    pub width: Option<u64>,
    pub extname: Option<String>,
    pub file_size: Option<u64>,
    pub path: Option<String>,
    pub error_message: Option<String>,
    pub payload: Option<String>,
}

impl Resource for Video {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Video
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Encoding of a video with one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encoding {
    pub id: String,
    pub video_id: Option<String>,
    pub profile_id: Option<String>,
    pub profile_name: Option<String>,
    pub status: Option<Status>,
    pub encoding_progress: Option<u32>,
    pub files: Vec<String>,
    #[serde(with = "panda_time")]
    pub created_at: Option<DateTime>,
    #[serde(with = "panda_time")]
    pub updated_at: Option<DateTime>,
    pub extname: Option<String>,
    pub path: Option<String>,
    pub error_message: Option<String>,
}

impl Resource for Encoding {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Encoding
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Encoding profile.
///
/// Leave `id` empty when creating a new profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub preset_name: Option<String>,
    pub extname: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub upscale: Option<bool>,
    pub aspect_mode: Option<AspectMode>,
    pub video_bitrate: Option<u64>,
    pub audio_bitrate: Option<u64>,
    pub fps: Option<f64>,
    pub command: Option<String>,
    #[serde(with = "panda_time")]
    pub created_at: Option<DateTime>,
    #[serde(with = "panda_time")]
    pub updated_at: Option<DateTime>,
}

impl Resource for Profile {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Profile
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Notification settings of the cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub url: Option<String>,
    pub delay: Option<u32>,
    pub events: Events,
}

impl Resource for Notifications {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Notifications
    }

    fn id(&self) -> &str {
        ""
    }
}

/// Events that trigger a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Events {
    pub video_created: bool,
    pub video_encoded: bool,
    pub encoding_progress: bool,
    pub encoding_completed: bool,
}

/// Parameters for creating an encoding of an existing video.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEncodingRequest {
    pub video_id: String,
    pub profile_id: Option<String>,
    pub profile_name: Option<String>,
}

/// Parameters for creating a video.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewVideoRequest {
    /// Profile names, sent as one comma separated value.
    #[serde(
        serialize_with = "serialize_comma_separated",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub profiles: Vec<String>,
    pub path_format: Option<String>,
    pub payload: Option<String>,
}

/// Filter for listing videos.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoFilter {
    pub status: Option<Status>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Filter for listing encodings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EncodingFilter {
    pub status: Option<Status>,
    pub video_id: Option<String>,
    pub profile_id: Option<String>,
    pub profile_name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Filter for listing profiles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileFilter {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn serialize_comma_separated<S: Serializer>(values: &[String], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&values.join(","))
}

/// Timestamps as panda writes them: `2011/03/01 15:39:10 +0000`.
mod panda_time {
    use chrono::Utc;
    use panda_core::time::DateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

    pub fn serialize<S: Serializer>(time: &Option<DateTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => s.serialize_str(&time.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime>, D::Error> {
        let Some(value) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };

        chrono::DateTime::parse_from_str(&value, FORMAT)
            .map(|time| Some(time.with_timezone(&Utc)))
            .map_err(|err| de::Error::custom(format!("invalid time {value:?}: {err}")))
    }
}
