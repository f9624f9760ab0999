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

//! Time related utils.

use crate::{Error, Result};
use chrono::Timelike;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC3339 with nanosecond precision: `2011-03-01T15:39:10.260762Z`
///
/// Trailing zeros of the fraction are trimmed and the fraction is dropped
/// entirely when it is zero.
pub fn format_rfc3339_nano(t: DateTime) -> String {
    let mut s = t.format("%Y-%m-%dT%H:%M:%S").to_string();

    // Leap seconds are folded into the nanosecond field by chrono.
    let nanos = t.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let frac = format!("{nanos:09}");
        s.push('.');
        s.push_str(frac.trim_end_matches('0'));
    }
    s.push('Z');
    s
}

/// Parse time from RFC3339.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| {
            Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e)
        })?
        .with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(260_762_000, "2011-03-01T15:39:10.260762Z"; "micros")]
    #[test_case(260_700_000, "2011-03-01T15:39:10.2607Z"; "uneven digits")]
    #[test_case(1, "2011-03-01T15:39:10.000000001Z"; "one nano")]
    #[test_case(0, "2011-03-01T15:39:10Z"; "whole second")]
    fn test_format_rfc3339_nano(nanos: u32, expected: &str) {
        let t = Utc
            .with_ymd_and_hms(2011, 3, 1, 15, 39, 10)
            .unwrap()
            .with_nanosecond(nanos)
            .unwrap();

        assert_eq!(format_rfc3339_nano(t), expected);
    }

    #[test]
    fn test_parse_rfc3339_round_trip() -> Result<()> {
        let t = parse_rfc3339("2011-03-01T15:39:10.260762000Z")?;
        assert_eq!(format_rfc3339_nano(t), "2011-03-01T15:39:10.260762Z");
        Ok(())
    }
}
