// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use lume_bindings::compose::Composer;
use lume_bindings::config::consts::DEFAULT_CONFIG_FILE_PATH;
use lume_bindings::config::load_config_or_default;
use lume_bindings::host::NullHost;
use lume_bindings::sdk::LinkedSdk;
use std::env;
use tracing_subscriber::EnvFilter;

/// Compose the bindings module outside any host runtime and show what the
/// import would publish. Useful for checking the roster, the policy
/// resolution, and the metadata attributes without a scripting host.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml]", args[0]);
        eprintln!("Example: {} lume.yaml", args[0]);
        std::process::exit(1);
    }
    let config_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE_PATH);

    println!("🔍 Lume Bindings Import Inspector");
    println!("═════════════════════════════════");

    let config = load_config_or_default(config_path);
    println!("📋 Config: {} (module '{}')", config_path, config.module_name);

    // No scripting host here, so every policy probe resolves to no-override.
    let sdk = LinkedSdk::new();
    let composer = Composer::new(config, &NullHost, &sdk);
    let (module, report) = composer.compose().context("module composition failed")?;

    println!("\n📊 Import Report:");
    println!("  Phase: {}", report.phase);
    println!("  Units registered: {}", report.unit_count);
    println!(
        "  Install signal handler: {}",
        report.policy.install_signal_handler
    );
    println!("  SDK init: {}", report.init);
    println!("  Banner: {}", report.banner);

    let undefined = module.undefined_types();
    if undefined.is_empty() {
        println!("  Type surface: complete");
    } else {
        println!("  ⚠️  Undefined types: {:?}", undefined);
    }

    println!("\n🗂  Namespace dump:");
    println!("{}", serde_json::to_string_pretty(&module)?);

    Ok(())
}
