// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::process::Command;

fn git_output(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tarball builds have no .git; fall back to CI-provided values, then "unknown".
    let commit = git_output(&["rev-parse", "HEAD"])
        .or_else(|| std::env::var("LUME_COMMIT").ok())
        .unwrap_or_else(|| "unknown".to_string());
    let commit_datetime = git_output(&["log", "-1", "--format=%cI"])
        .or_else(|| std::env::var("LUME_COMMIT_DATETIME").ok())
        .unwrap_or_else(|| "unknown".to_string());
    let build_datetime = chrono::Utc::now().to_rfc3339();

    println!("cargo:rustc-env=LUME_COMMIT={commit}");
    println!("cargo:rustc-env=LUME_COMMIT_DATETIME={commit_datetime}");
    println!("cargo:rustc-env=LUME_BUILD_DATETIME={build_datetime}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LUME_COMMIT");
    println!("cargo:rerun-if-env-changed=LUME_COMMIT_DATETIME");
    Ok(())
}
