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

use http::Method;
use panda_core::{QueryParams, Result, SigningRequest};
use panda_vod::{build_url, Credential, RequestSigner, DEFAULT_API_VERSION, HOST_US};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let cred = Credential::new("abcdefgh", "ijklmnop", "123456789");
    let signer = RequestSigner::new();

    let params = QueryParams::new().with("status", "success");
    let mut req = SigningRequest::new(Method::GET, HOST_US, "/videos.json", params);

    let signature = signer.sign(&cred, &mut req, signer.time())?;
    req.query_set("signature", signature);

    let uri = build_url(HOST_US, DEFAULT_API_VERSION, &req.path, &req.query)?;
    println!("GET {uri}");

    Ok(())
}
