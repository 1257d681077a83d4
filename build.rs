// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Build script for timermux
//!
//! This build script turns the chip-family and per-unit presence features
//! into `$OUT_DIR/present.rs`, the list of timer units compiled into the
//! interrupt line tables. Configuration mistakes are reported here, before
//! any handler code is compiled.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Chip family description as seen by the build script
struct Family {
    name: &'static str,
    /// First physical TC unit wired as a generic timer on this family
    tc_first: u8,
    tc_last: u8,
    tcc_count: u8,
}

const SAMD21: Family = Family {
    name: "samd21",
    tc_first: 3,
    tc_last: 7,
    tcc_count: 3,
};

const SAMD51: Family = Family {
    name: "samd51",
    tc_first: 0,
    tc_last: 7,
    tcc_count: 5,
};

fn feature_enabled(name: &str) -> bool {
    let var = format!("CARGO_FEATURE_{}", name.to_uppercase());
    env::var_os(var).is_some()
}

fn select_family() -> &'static Family {
    match (feature_enabled("samd21"), feature_enabled("samd51")) {
        (true, false) => &SAMD21,
        (false, true) => &SAMD51,
        (true, true) => panic!(
            "timermux: features `samd21` and `samd51` are mutually exclusive \
             (the default `samd51j` is on; depend with `default-features = false` to pick another part)"
        ),
        (false, false) => panic!(
            "timermux: select a chip family with feature `samd21` or `samd51` (or a variant such as `samd21g`)"
        ),
    }
}

/// Collect present units and check that they form a gap-free run starting at `first`
fn present_units(prefix: &str, first: u8, last: u8, family: &Family) -> Vec<u8> {
    let mut units = Vec::new();
    for n in 0..=7u8 {
        let feature = format!("{}{}", prefix, n);
        if !feature_enabled(&feature) {
            continue;
        }
        if n < first || n > last {
            panic!(
                "timermux: {} does not exist on {}",
                feature.to_uppercase(),
                family.name
            );
        }
        units.push(n);
    }

    for (i, &n) in units.iter().enumerate() {
        let expected = first + i as u8;
        if n != expected {
            panic!(
                "timermux: {} units on {} must be contiguous from {}{} (found {}{} at position {})",
                prefix.to_uppercase(),
                family.name,
                prefix.to_uppercase(),
                first,
                prefix.to_uppercase(),
                n,
                i
            );
        }
    }

    units
}

fn render_list(units: &[u8]) -> String {
    units
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let family = select_family();
    let tc = present_units("tc", family.tc_first, family.tc_last, family);
    let tcc = present_units("tcc", 0, family.tcc_count - 1, family);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let contents = format!(
        "// Generated by build.rs for {family}.\n\
         pub(crate) const TC_INST_NUM: usize = {tc_len};\n\
         pub(crate) const TCC_INST_NUM: usize = {tcc_len};\n\
         pub(crate) const PRESENT_TC: [u8; TC_INST_NUM] = [{tc_list}];\n\
         pub(crate) const PRESENT_TCC: [u8; TCC_INST_NUM] = [{tcc_list}];\n",
        family = family.name,
        tc_len = tc.len(),
        tcc_len = tcc.len(),
        tc_list = render_list(&tc),
        tcc_list = render_list(&tcc),
    );

    fs::write(out_dir.join("present.rs"), contents).expect("failed to write present.rs");
}
