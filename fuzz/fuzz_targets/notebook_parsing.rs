// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for notebook parsing.
//!
//! The notebook file is hand-editable, so parsing must reject garbage with an
//! error instead of panicking, and anything it accepts must survive a
//! serialize/parse cycle unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use remedy::parse_records;

fuzz_target!(|data: &[u8]| {
    let Ok(records) = parse_records(data) else {
        return;
    };

    let encoded = serde_json::to_vec_pretty(&records).expect("records always serialize");
    let reparsed = parse_records(&encoded).expect("own output must parse");
    assert_eq!(records, reparsed);
});
