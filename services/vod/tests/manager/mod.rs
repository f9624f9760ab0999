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
use http::{Method, StatusCode};
use panda_core::time::parse_rfc3339;
use panda_core::ErrorKind;
use panda_vod::models::*;
use panda_vod::{Manager, HOST_US};
use pretty_assertions::assert_eq;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn init_manager(mock: &MockHttpSend) -> Manager {
    Manager::new(init_client(mock))
}

#[test]
fn test_videos_with_filter() {
    let mock = MockHttpSend::ok(
        r#"[{"id":"v1","status":"success"},{"id":"v2","status":"fail","error_message":"broken"}]"#,
    );
    let manager = init_manager(&mock);

    let filter = VideoFilter {
        status: Some(Status::Success),
        page: Some(2),
        ..Default::default()
    };
    let videos = manager.videos(Some(&filter)).unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[1].status, Some(Status::Fail));
    assert_eq!(videos[1].error_message.as_deref(), Some("broken"));

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri.path(), "/v2/videos.json");
    assert_eq!(req.query().get("status"), Some("success"));
    assert_eq!(req.query().get("page"), Some("2"));
    assert!(!req.query().contains_key("per_page"));
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_get_resources_by_id() {
    let mock = MockHttpSend::new(|req| {
        let body = match req.uri.path() {
            "/v2/clouds/c1.json" => r#"{"id":"c1","name":"main"}"#,
            "/v2/encodings/e1.json" => r#"{"id":"e1","video_id":"v1","encoding_progress":42}"#,
            "/v2/profiles/p1.json" => r#"{"id":"p1","name":"h264","aspect_mode":"letterbox"}"#,
            "/v2/videos/v1.json" => r#"{"id":"v1","original_filename":"panda.mp4"}"#,
            "/v2/videos/v1/metadata.json" => r#"{"video_codec":"h264","width":640}"#,
            "/v2/notifications.json" => r#"{"url":"http://example.com","delay":5,"events":{"video_created":true}}"#,
            _ => return (StatusCode::NOT_FOUND, r#"{"error":"not_found"}"#.to_string()),
        };
        (StatusCode::OK, body.to_string())
    });
    let manager = init_manager(&mock);

    assert_eq!(manager.cloud("c1").unwrap().name.as_deref(), Some("main"));
    assert_eq!(manager.encoding("e1").unwrap().encoding_progress, Some(42));
    assert_eq!(
        manager.profile("p1").unwrap().aspect_mode,
        Some(AspectMode::Letterbox)
    );
    assert_eq!(
        manager.video("v1").unwrap().original_filename.as_deref(),
        Some("panda.mp4")
    );
    assert_eq!(
        manager.video_metadata("v1").unwrap()["width"],
        serde_json::json!(640)
    );
    let notifications = manager.notifications().unwrap();
    assert!(notifications.events.video_created);
    assert!(!notifications.events.video_encoded);

    let err = manager.video("missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_ids_stay_in_the_signed_path() {
    let mock = MockHttpSend::ok(r#"{"id":"abc?x"}"#);
    let manager = init_manager(&mock);

    assert_eq!(manager.video("abc?x").unwrap().id, "abc?x");
    manager.video("a b").unwrap();
    manager.video("abc#x").unwrap();

    let requests = mock.requests();
    let paths: Vec<_> = requests.iter().map(|r| r.uri.path().to_string()).collect();
    assert_eq!(
        paths,
        [
            "/v2/videos/abc%3Fx.json",
            "/v2/videos/a%20b.json",
            "/v2/videos/abc%23x.json",
        ]
    );
    for req in &requests {
        assert!(!req.query().contains_key("x"));
        assert!(!req.query().contains_key("x.json"));
        assert!(verify_signature(req, HOST_US, "ijklmnop"));
    }
}

#[test]
fn test_list_resources() {
    let mock = MockHttpSend::ok("[]");
    let manager = init_manager(&mock);

    assert!(manager.clouds().unwrap().is_empty());
    assert!(manager.encodings(None).unwrap().is_empty());
    assert!(manager.profiles(None).unwrap().is_empty());
    assert!(manager
        .video_encodings(
            "v1",
            Some(&EncodingFilter {
                profile_name: Some("h264".to_string()),
                ..Default::default()
            })
        )
        .unwrap()
        .is_empty());

    let requests = mock.requests();
    let paths: Vec<_> = requests.iter().map(|r| r.uri.path().to_string()).collect();
    assert_eq!(
        paths,
        [
            "/v2/clouds.json",
            "/v2/encodings.json",
            "/v2/profiles.json",
            "/v2/videos/v1/encodings.json",
        ]
    );
    assert_eq!(requests[3].query().get("profile_name"), Some("h264"));
}

#[test]
fn test_new_resources() {
    let mock = MockHttpSend::ok(r#"{"id":"new"}"#);
    let manager = init_manager(&mock);

    let video = manager
        .new_video_url(
            "http://example.com/panda.mp4",
            Some(&NewVideoRequest {
                profiles: vec!["h264".to_string(), "webm".to_string()],
                ..Default::default()
            }),
        )
        .unwrap();
    assert_eq!(video.id, "new");

    let encoding = manager
        .new_encoding(&NewEncodingRequest {
            video_id: "v1".to_string(),
            profile_name: Some("h264".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(encoding.id, "new");

    let profile = manager
        .new_profile(&Profile {
            name: Some("h264".to_string()),
            width: Some(640),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(profile.id, "new");

    let requests = mock.requests();
    assert!(requests.iter().all(|r| r.method == Method::POST));

    assert_eq!(requests[0].uri.path(), "/v2/videos.json");
    assert_eq!(
        requests[0].query().get("source_url"),
        Some("http://example.com/panda.mp4")
    );
    assert_eq!(requests[0].query().get("profiles"), Some("h264,webm"));

    assert_eq!(requests[1].uri.path(), "/v2/encodings.json");
    assert_eq!(requests[1].query().get("video_id"), Some("v1"));
    assert!(!requests[1].query().contains_key("profile_id"));

    assert_eq!(requests[2].uri.path(), "/v2/profiles.json");
    assert_eq!(requests[2].query().get("width"), Some("640"));
    assert!(!requests[2].query().contains_key("id"));

    for req in &requests {
        assert!(verify_signature(req, HOST_US, "ijklmnop"));
    }
}

#[test]
fn test_encoding_actions() {
    let mock = MockHttpSend::ok("{}");
    let manager = init_manager(&mock);

    manager.cancel_encoding("e1").unwrap();
    manager.retry_encoding("e1").unwrap();
    manager.delete_source("v1").unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].uri.path(), "/v2/encodings/e1/cancel.json");
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].uri.path(), "/v2/encodings/e1/retry.json");
    assert_eq!(requests[2].method, Method::DELETE);
    assert_eq!(requests[2].uri.path(), "/v2/videos/v1/source.json");
}

#[test]
fn test_update_profile() {
    let mock = MockHttpSend::ok(
        r#"{"id":"p1","name":"h264","width":1280,"updated_at":"2011/03/01 15:39:10 +0000"}"#,
    );
    let manager = init_manager(&mock);

    let mut profile = Profile {
        id: "p1".to_string(),
        name: Some("h264".to_string()),
        width: Some(1280),
        ..Default::default()
    };
    manager.update(&mut profile).unwrap();
    assert_eq!(profile.updated_at, Some(parse_rfc3339("2011-03-01T15:39:10Z").unwrap()));

    let req = mock.only_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.uri.path(), "/v2/profiles/p1.json");
    assert_eq!(req.query().get("width"), Some("1280"));
    assert_eq!(req.query().get("id"), Some("p1"));
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_update_notifications() {
    let mock = MockHttpSend::ok(r#"{"url":"http://example.com","delay":10,"events":{"video_encoded":true}}"#);
    let manager = init_manager(&mock);

    let mut notifications = Notifications {
        url: Some("http://example.com".to_string()),
        delay: Some(10),
        events: Events {
            video_encoded: true,
            ..Default::default()
        },
    };
    manager.update(&mut notifications).unwrap();
    assert!(notifications.events.video_encoded);

    let req = mock.only_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.uri.path(), "/v2/notifications.json");
    assert_eq!(req.query().get("events[video_encoded]"), Some("true"));
    assert!(req.uri.query().unwrap().contains("events%5Bvideo_encoded%5D=true"));
    assert!(verify_signature(&req, HOST_US, "ijklmnop"));
}

#[test]
fn test_update_cloud() {
    let mock = MockHttpSend::ok(r#"{"id":"c1","s3_videos_bucket":"videos"}"#);
    let manager = init_manager(&mock);

    let mut cloud = Cloud {
        id: "c1".to_string(),
        s3_videos_bucket: Some("videos".to_string()),
        ..Default::default()
    };
    manager.update_cloud(&mut cloud, "aws_ak", "aws_sk").unwrap();
    assert_eq!(cloud.s3_videos_bucket.as_deref(), Some("videos"));

    let req = mock.only_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.uri.path(), "/v2/clouds/c1.json");
    assert_eq!(req.query().get("aws_access_key"), Some("aws_ak"));
    assert_eq!(req.query().get("aws_secret_key"), Some("aws_sk"));
}

#[test]
fn test_delete_resources() {
    let mock = MockHttpSend::ok("{}");
    let manager = init_manager(&mock);

    manager
        .delete(&Video {
            id: "v1".to_string(),
            ..Default::default()
        })
        .unwrap();
    manager
        .delete(&Encoding {
            id: "e1".to_string(),
            ..Default::default()
        })
        .unwrap();
    manager
        .delete(&Profile {
            id: "p1".to_string(),
            ..Default::default()
        })
        .unwrap();

    let requests = mock.requests();
    assert!(requests.iter().all(|r| r.method == Method::DELETE));
    let paths: Vec<_> = requests.iter().map(|r| r.uri.path().to_string()).collect();
    assert_eq!(
        paths,
        ["/v2/videos/v1", "/v2/encodings/e1.json", "/v2/profiles/p1.json"]
    );
}

#[test]
fn test_unsupported_routes_panic_before_sending() {
    let mock = MockHttpSend::ok("{}");
    let manager = init_manager(&mock);

    let mut video = Video {
        id: "v1".to_string(),
        ..Default::default()
    };
    let result = catch_unwind(AssertUnwindSafe(|| manager.update(&mut video)));
    assert!(result.is_err());

    let result = catch_unwind(AssertUnwindSafe(|| {
        manager.delete(&Notifications::default())
    }));
    assert!(result.is_err());

    assert!(mock.requests().is_empty());
}

#[test]
fn test_undecodable_success_body() {
    let mock = MockHttpSend::ok("not json");
    let manager = init_manager(&mock);

    let err = manager.videos(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), None);
}
