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

use panda::vod::{default_manager, models::VideoFilter, models::Status, ErrorExt};
use panda::Result;

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let manager = default_manager()?;
    println!("using cloud {}", manager.client().cloud_id());

    let filter = VideoFilter {
        status: Some(Status::Success),
        per_page: Some(10),
        ..Default::default()
    };
    for video in manager.videos(Some(&filter))? {
        println!("{} {:?}", video.id, video.original_filename);
    }

    match manager.video("not_exist_video") {
        Ok(video) => println!("found {}", video.id),
        Err(err) => match err.api_error() {
            Some(api_error) => println!("api error: {api_error}"),
            None => return Err(err),
        },
    }

    Ok(())
}
