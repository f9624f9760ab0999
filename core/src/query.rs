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

//! Multi-valued query parameters and their canonical serialization.

use std::collections::BTreeMap;

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// AsciiSet for form encoded query values.
///
/// Everything except `A-Z a-z 0-9 - _ . ~` is escaped. Space is left out of
/// the set so it can be turned into `+` afterwards.
static FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Rewrites applied on top of the form encoding to get the canonical query.
///
/// Order matters: `+` only ever comes from a space since a literal `+` is
/// escaped as `%2B`.
const CANONICAL_FIXUPS: [(&str, &str); 4] =
    [("+", "%20"), ("%5B", "["), ("%5D", "]"), ("%7E", "~")];

/// QueryParams is a set of query parameters where every key may carry
/// multiple values.
///
/// Keys are kept sorted, values of the same key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing every existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Append `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Builder style [`QueryParams::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|vs| vs.first())
            .map(String::as_str)
    }

    /// Get all values of `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remove `key` and return its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.remove(key)
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Serialize into a form encoded query string.
    ///
    /// ```text
    /// {b: ["x y"], a: ["1", "2"]} => "a=1&a=2&b=x+y"
    /// ```
    pub fn encode(&self) -> String {
        let mut s = String::with_capacity(16);

        for (idx, (k, v)) in self.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }
            push_form_encoded(&mut s, k);
            s.push('=');
            push_form_encoded(&mut s, v);
        }

        s
    }

    /// Serialize into the canonical query string used for signing.
    ///
    /// This is [`QueryParams::encode`] with spaces as `%20` and `[`, `]`, `~`
    /// left unescaped.
    ///
    /// ```text
    /// {"a b": ["[x]~"]} => "a%20b=[x]~"
    /// ```
    pub fn canonicalize(&self) -> String {
        canonicalize_query(&self.encode())
    }

    /// Parse a form encoded query string.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.add(k, v);
        }
        params
    }

    /// Flatten a serializable value into query parameters.
    ///
    /// - scalars become a single value (`true`, `42`, `name`)
    /// - sequences become repeated values of the same key
    /// - nested objects become `parent[child]` keys
    /// - `null` is skipped
    ///
    /// The top level value must serialize into an object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let Value::Object(map) = serde_json::to_value(value)? else {
            return Err(Error::request_invalid(
                "only structs and maps can be turned into query parameters",
            ));
        };

        let mut params = Self::new();
        for (k, v) in map {
            flatten_into(&mut params, k, v);
        }
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.add(k, v);
        }
        params
    }
}

/// Apply the canonical rewrites to a form encoded query string.
pub fn canonicalize_query(encoded: &str) -> String {
    CANONICAL_FIXUPS
        .iter()
        .fold(encoded.to_string(), |s, &(from, to)| s.replace(from, to))
}

fn push_form_encoded(s: &mut String, input: &str) {
    for part in utf8_percent_encode(input, FORM_ENCODE_SET) {
        if part.contains(' ') {
            s.push_str(&part.replace(' ', "+"));
        } else {
            s.push_str(part);
        }
    }
}

fn flatten_into(params: &mut QueryParams, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(v) => params.add(key, v.to_string()),
        Value::Number(v) => params.add(key, v.to_string()),
        Value::String(v) => params.add(key, v),
        Value::Array(vs) => {
            for v in vs {
                flatten_into(params, key.clone(), v);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(params, format!("{key}[{k}]"), v);
            }
        }
    }
}
