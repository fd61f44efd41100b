// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embed an rpath to the libpython that pyo3 linked against, so the binary
//! and test executables start without LD_LIBRARY_PATH.

fn main() {
    let config = pyo3_build_config::get();
    let windows = std::env::var("CARGO_CFG_TARGET_OS")
        .map(|os| os == "windows")
        .unwrap_or(false);

    if let (Some(lib_dir), false) = (&config.lib_dir, windows) {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_dir);
    }
}
