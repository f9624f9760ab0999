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

use crate::*;
use bytes::Bytes;
use http::{Method, StatusCode};
use panda_core::time::{format_rfc3339_nano, parse_rfc3339};
use panda_core::{Context, ErrorKind, QueryParams};
use panda_vod::{Client, ErrorExt, HOST_US};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

#[test]
fn test_get_sends_signed_request() {
    let mock = MockHttpSend::ok(r#"[{"id":"1"}]"#);
    let client = init_client(&mock);

    let body = client.get("/videos.json", None).unwrap();
    assert_eq!(body, Bytes::from_static(br#"[{"id":"1"}]"#));

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(
        req.uri.to_string(),
        "http://api.pandastream.com/v2/videos.json?access_key=abcdefgh&cloud_id=123456789&signature=kVnZs%2FNX13ldKPdhFYoVnoclr8075DwiZF0TGgIbMsc%3D&timestamp=2011-03-01T15%3A39%3A10.260762Z"
    );
    assert_eq!(req.content_type.as_deref(), Some(""));
    assert!(req.body.is_empty());
}

#[test]
fn test_get_keeps_caller_params() {
    let mock = MockHttpSend::ok("[]");
    let client = init_client(&mock);

    let mut params = QueryParams::new();
    params.set("status", "success");
    params.add("profiles", "h264");
    params.add("profiles", "webm 720p");
    client.get("/videos.json", Some(params)).unwrap();

    let req = mock.only_request();
    let query = req.query();
    assert_eq!(query.get("status"), Some("success"));
    assert_eq!(
        query.get_all("profiles"),
        ["h264".to_string(), "webm 720p".to_string()]
    );
    assert!(req.uri.query().unwrap().contains("profiles=webm+720p"));
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_post_sends_body_and_content_type() {
    let mock = MockHttpSend::ok(r#"{"id":"1"}"#);
    let client = init_client(&mock);

    client
        .post(
            "/videos.json",
            "multipart/form-data; boundary=--panda--",
            None,
            Some(Bytes::from_static(b"payload")),
        )
        .unwrap();

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(
        req.content_type.as_deref(),
        Some("multipart/form-data; boundary=--panda--")
    );
    assert_eq!(req.body, Bytes::from_static(b"payload"));
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_put_and_delete_methods() {
    let mock = MockHttpSend::ok("{}");
    let client = init_client(&mock);

    client
        .put("/notifications.json", "", Some(QueryParams::new().with("delay", "5")), None)
        .unwrap();
    client.delete("/videos/abc").unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].uri.path(), "/v2/notifications.json");
    assert_eq!(requests[0].query().get("delay"), Some("5"));
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].uri.path(), "/v2/videos/abc");
    assert!(requests[1].body.is_empty());

    for req in &requests {
        assert!(verify_signature(req, HOST_US, "ijklmnop"));
    }
}

#[test]
fn test_api_error() {
    let mock = MockHttpSend::respond(
        StatusCode::BAD_REQUEST,
        r#"{"error":"bad_request","message":"invalid id"}"#,
    );
    let client = init_client(&mock);

    let err = client.get("/videos/abc.json", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

    let api_error = err.api_error().expect("error body must be decoded");
    assert_eq!(api_error.code, 400);
    assert_eq!(api_error.error, "bad_request");
    assert_eq!(api_error.message, "invalid id");
}

#[test]
fn test_undecodable_error() {
    let mock = MockHttpSend::respond(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
    let client = init_client(&mock);

    let err = client.get("/videos.json", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert!(err.api_error().is_none());
}

#[test]
fn test_only_200_is_success() {
    let mock = MockHttpSend::respond(StatusCode::CREATED, r#"{"id":"1"}"#);
    let client = init_client(&mock);

    let err = client.post("/videos.json", "", None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::CREATED));
}

#[test]
fn test_https_port_is_signed_verbatim() {
    let mock = MockHttpSend::ok("[]");
    let client = Client::new(
        Context::new().with_http_send(mock.clone()),
        "localhost:443",
        credential(),
    )
    .unwrap();

    client.get("/videos.json", None).unwrap();

    let req = mock.only_request();
    assert_eq!(req.uri.scheme_str(), Some("https"));
    assert_eq!(req.uri.authority().unwrap().as_str(), "localhost:443");
    assert!(verify_signature(&req, "localhost:443", "ijklmnop"));
    assert!(!verify_signature(&req, "localhost", "ijklmnop"));
}

#[test]
fn test_custom_api_version() {
    let mock = MockHttpSend::ok("[]");
    let client = init_client(&mock).with_api_version("v3");

    client.get("/videos.json", None).unwrap();
    assert_eq!(mock.only_request().uri.path(), "/v3/videos.json");
}

#[test]
fn test_cloud_switching() {
    let mock = MockHttpSend::ok("[]");
    let client = init_client(&mock);

    client.with_cloud_id("987654321").get("/videos.json", None).unwrap();
    client.get("/videos.json", None).unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].query().get("cloud_id"), Some("987654321"));
    assert_eq!(requests[1].query().get("cloud_id"), Some("123456789"));
    assert!(verify_signature(&requests[0], HOST_US, "ijklmnop"));
}

#[test]
fn test_timestamp_is_current_time() {
    let mock = MockHttpSend::ok("[]");
    let client = Client::us(Context::new().with_http_send(mock.clone()), credential()).unwrap();

    let before = panda_core::time::now();
    client.get("/videos.json", None).unwrap();
    let after = panda_core::time::now();

    let req = mock.only_request();
    let timestamp = req.query().get("timestamp").unwrap().to_string();
    let t = parse_rfc3339(&timestamp).unwrap();
    assert!(before <= t && t <= after);
    assert_eq!(format_rfc3339_nano(t), timestamp);
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_each_request_takes_a_fresh_timestamp() {
    let mock = MockHttpSend::ok("[]");
    let client = Client::us(Context::new().with_http_send(mock.clone()), credential()).unwrap();

    client.get("/videos.json", None).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    client.get("/videos.json", None).unwrap();

    let requests = mock.requests();
    let first = parse_rfc3339(requests[0].query().get("timestamp").unwrap()).unwrap();
    let second = parse_rfc3339(requests[1].query().get("timestamp").unwrap()).unwrap();
    assert!(first < second);
    assert_ne!(
        requests[0].query().get("signature"),
        requests[1].query().get("signature")
    );
    for req in &requests {
        assert!(verify_signature(req, HOST_US, "ijklmnop"));
    }
}

#[test]
fn test_concurrent_requests() {
    const N: usize = 16;

    let mock = MockHttpSend::ok("[]");
    let client = Client::us(Context::new().with_http_send(mock.clone()), credential()).unwrap();

    std::thread::scope(|s| {
        for i in 0..N {
            let client = &client;
            s.spawn(move || {
                let params = QueryParams::new().with("page", i.to_string());
                client.get("/videos.json", Some(params)).unwrap();
            });
        }
    });

    let requests = mock.requests();
    assert_eq!(requests.len(), N);

    let mut pages = BTreeSet::new();
    for req in &requests {
        assert!(verify_signature(req, HOST_US, "ijklmnop"));
        assert_eq!(req.query().get_all("signature").len(), 1);
        pages.insert(req.query().get("page").unwrap().parse::<usize>().unwrap());
    }
    assert_eq!(pages, (0..N).collect::<BTreeSet<_>>());
}
