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

use log::warn;
use panda_core::{Context, OsEnv, Result};
use panda_http_send_reqwest::ReqwestHttpSend;
use panda_vod::{Client, Config, Manager};
use std::env;

fn init_manager() -> Option<Manager> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PANDA_VOD_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let client = Client::from_config(ctx, Config::default())
        .expect("PANDA_ACCESS_KEY, PANDA_SECRET_KEY and PANDA_CLOUD_ID must be set");

    Some(Manager::new(client))
}

#[test]
fn test_live_list_clouds() -> Result<()> {
    let Some(manager) = init_manager() else {
        warn!("PANDA_VOD_TEST is not set, skipped");
        return Ok(());
    };

    let clouds = manager.clouds()?;
    let cloud_id = manager.client().cloud_id();
    assert!(clouds.iter().any(|c| c.id == cloud_id));
    Ok(())
}

#[test]
fn test_live_list_videos() -> Result<()> {
    let Some(manager) = init_manager() else {
        warn!("PANDA_VOD_TEST is not set, skipped");
        return Ok(());
    };

    manager.videos(None)?;
    manager.profiles(None)?;
    manager.notifications()?;
    Ok(())
}

#[test]
fn test_live_video_not_found() -> Result<()> {
    let Some(manager) = init_manager() else {
        warn!("PANDA_VOD_TEST is not set, skipped");
        return Ok(());
    };

    let err = manager.video("not_exist_video").unwrap_err();
    assert!(err.is_api_error(), "unexpected error: {err:?}");
    Ok(())
}
