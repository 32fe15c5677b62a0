// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Build-time metadata baked into the bindings.
//!
//! The commit and datetime values are captured by `build.rs` and land here
//! as compile-time environment variables; the firmware versions are the
//! ones this SDK release ships with. `publish` pushes the whole set into a
//! module namespace as the seven dunder attributes the scripting side
//! reads.

use crate::module::{AttrValue, ModuleNamespace};

/// Bindings version, taken from the crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Commit hash the bindings were built from ("unknown" outside git).
pub const COMMIT: &str = env!("LUME_COMMIT");
/// Commit datetime in RFC 3339 ("unknown" outside git).
pub const COMMIT_DATETIME: &str = env!("LUME_COMMIT_DATETIME");
/// Datetime of the build itself in RFC 3339.
pub const BUILD_DATETIME: &str = env!("LUME_BUILD_DATETIME");

/// Firmware version flashed to production devices for this release.
pub const DEVICE_VERSION: &str = "1.14.2";
/// Bootloader version paired with this release.
pub const BOOTLOADER_VERSION: &str = "0.0.28";
/// Firmware version for RVC3-generation devices.
pub const DEVICE_RVC3_VERSION: &str = "1.13.3";

pub const ATTR_VERSION: &str = "__version__";
pub const ATTR_COMMIT: &str = "__commit__";
pub const ATTR_COMMIT_DATETIME: &str = "__commit_datetime__";
pub const ATTR_BUILD_DATETIME: &str = "__build_datetime__";
pub const ATTR_DEVICE_VERSION: &str = "__device_version__";
pub const ATTR_BOOTLOADER_VERSION: &str = "__bootloader_version__";
pub const ATTR_DEVICE_RVC3_VERSION: &str = "__device_rvc3_version__";

/// Every metadata attribute `publish` sets, in publication order.
pub const METADATA_ATTR_KEYS: [&str; 7] = [
    ATTR_VERSION,
    ATTR_COMMIT,
    ATTR_COMMIT_DATETIME,
    ATTR_BUILD_DATETIME,
    ATTR_DEVICE_VERSION,
    ATTR_BOOTLOADER_VERSION,
    ATTR_DEVICE_RVC3_VERSION,
];

/// Human-readable banner passed to SDK initialization.
pub fn banner(product: &str) -> String {
    format!(
        "{} - version: {} from {} build: {}",
        product, VERSION, COMMIT_DATETIME, BUILD_DATETIME
    )
}

/// Publish the metadata attributes into `namespace`.
///
/// Returns the number of attributes written. Publication happens before
/// any binding unit runs, so the version attributes stay readable even
/// when later import phases fail.
pub fn publish(namespace: &mut ModuleNamespace) -> usize {
    let values: [(&str, &str); 7] = [
        (ATTR_VERSION, VERSION),
        (ATTR_COMMIT, COMMIT),
        (ATTR_COMMIT_DATETIME, COMMIT_DATETIME),
        (ATTR_BUILD_DATETIME, BUILD_DATETIME),
        (ATTR_DEVICE_VERSION, DEVICE_VERSION),
        (ATTR_BOOTLOADER_VERSION, BOOTLOADER_VERSION),
        (ATTR_DEVICE_RVC3_VERSION, DEVICE_RVC3_VERSION),
    ];

    for (key, value) in values {
        namespace.set_attr(key, AttrValue::Str(value.to_string()));
    }
    values.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_sets_every_metadata_attribute() {
        let mut namespace = ModuleNamespace::new("lume");
        let published = publish(&mut namespace);

        assert_eq!(published, METADATA_ATTR_KEYS.len());
        for key in METADATA_ATTR_KEYS {
            let value = namespace
                .attr(key)
                .and_then(AttrValue::as_str)
                .unwrap_or_else(|| panic!("missing attribute {}", key));
            assert!(!value.is_empty(), "attribute {} is empty", key);
        }
    }

    #[test]
    fn test_publish_is_idempotent() {
        let mut namespace = ModuleNamespace::new("lume");
        publish(&mut namespace);
        publish(&mut namespace);

        assert_eq!(namespace.attr_count(), METADATA_ATTR_KEYS.len());
    }

    #[test]
    fn test_version_attribute_matches_crate_version() {
        let mut namespace = ModuleNamespace::new("lume");
        publish(&mut namespace);

        assert_eq!(
            namespace.attr(ATTR_VERSION).and_then(AttrValue::as_str),
            Some(VERSION)
        );
    }

    #[test]
    fn test_banner_carries_all_components() {
        let text = banner("Lume script bindings");

        assert!(text.starts_with("Lume script bindings - version: "));
        assert!(text.contains(VERSION));
        assert!(text.contains(COMMIT_DATETIME));
        assert!(text.contains(BUILD_DATETIME));
    }

    #[test]
    fn test_metadata_keys_are_distinct() {
        for (i, a) in METADATA_ATTR_KEYS.iter().enumerate() {
            for b in METADATA_ATTR_KEYS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
