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

use crate::paths;
use std::fmt;

/// Kinds of resources that can be updated or deleted through [`route_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Encoding profile.
    Profile,
    /// Uploaded video.
    Video,
    /// Encoding of a video with a profile.
    Encoding,
    /// Notification settings of the cloud.
    Notifications,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Profile => write!(f, "profile"),
            ResourceKind::Video => write!(f, "video"),
            ResourceKind::Encoding => write!(f, "encoding"),
            ResourceKind::Notifications => write!(f, "notifications"),
        }
    }
}

/// Routed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// PUT the resource.
    Update,
    /// DELETE the resource.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// A resource that can be addressed by its kind and id.
pub trait Resource {
    /// Kind of the resource.
    fn kind(&self) -> ResourceKind;
    /// Id of the resource, ignored by kinds without one.
    fn id(&self) -> &str;
}

/// Get the rest path for running `op` on `resource`.
///
/// | kind          | update                | delete                 |
/// |---------------|-----------------------|------------------------|
/// | profile       | `/profiles/{id}.json` | `/profiles/{id}.json`  |
/// | video         |                       | `/videos/{id}`         |
/// | encoding      |                       | `/encodings/{id}.json` |
/// | notifications | `/notifications.json` |                        |
///
/// # Panics
///
/// Panics for the empty cells above. Calling it that way is a bug in the
/// caller, no request is ever built for such a pair.
pub fn route_for<R: Resource + ?Sized>(op: Operation, resource: &R) -> String {
    match (op, resource.kind()) {
        (Operation::Update | Operation::Delete, ResourceKind::Profile) => {
            paths::profile(resource.id())
        }
        (Operation::Update, ResourceKind::Notifications) => paths::NOTIFICATIONS.to_string(),
        (Operation::Delete, ResourceKind::Video) => paths::video_delete(resource.id()),
        (Operation::Delete, ResourceKind::Encoding) => paths::encoding(resource.id()),
        (op, kind) => panic!("{kind} does not support {op}"),
    }
}
