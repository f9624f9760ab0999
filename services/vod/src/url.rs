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

use crate::constants::HTTPS_PORT;
use http::uri::Authority;
use http::Uri;
use panda_core::{Error, QueryParams, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside one path segment.
///
/// Unreserved characters and sub-delims stay as they are, everything that
/// could end the path or is not allowed in a uri is percent encoded.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Build the url a request is sent to.
///
/// The scheme is `https` only when `host` carries port 443, `http` otherwise.
/// `version` and `path` are joined segment by segment, each segment percent
/// encoded, and the query is the form encoding of `params`, left out when
/// there are none. The signature covers the unescaped path.
///
/// ```
/// use panda_core::QueryParams;
/// use panda_vod::build_url;
///
/// let params = QueryParams::new().with("cloud_id", "12345");
/// let uri = build_url("localhost:80", "v2", "/videos.json", &params).unwrap();
/// assert_eq!(uri.to_string(), "http://localhost:80/v2/videos.json?cloud_id=12345");
/// ```
pub fn build_url(host: &str, version: &str, path: &str, params: &QueryParams) -> Result<Uri> {
    let authority: Authority = host
        .parse()
        .map_err(|e| Error::config_invalid(format!("invalid host: {host}")).with_source(e))?;
    let scheme = if authority.port_u16() == Some(HTTPS_PORT) {
        "https"
    } else {
        "http"
    };

    let mut url = format!("{scheme}://{authority}{}", join_path(version, path));
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.encode());
    }

    Ok(url.parse()?)
}

/// Join path segments into one absolute path.
///
/// Empty and `.` segments are dropped, `..` removes the previous one. Kept
/// segments are percent encoded so `?`, `#` and spaces stay in the path.
fn join_path(version: &str, path: &str) -> String {
    let mut segments = Vec::new();
    for segment in version.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(utf8_percent_encode(s, PATH_SEGMENT_ENCODE_SET).to_string()),
        }
    }

    format!("/{}", segments.join("/"))
}
