#[cfg(test)]
mod integration_tests {
    use crate::bindings::{
        AssetManagerUnit, CommonUnit, DatatypesUnit, ModelUnit, NodeUnit, PipelineUnit,
    };
    use crate::build_info;
    use crate::compose::{Composer, ImportPhase, Scheduler, UnitCatalog};
    use crate::config::{load_config, ComposeConfig, UnitToggles};
    use crate::host::policy::INSTALL_SIGNAL_HANDLER_KEY;
    use crate::host::{HostValue, NullHost, ScriptedHost};
    use crate::module::{AttrValue, ModuleNamespace};
    use crate::sdk::{InitGuard, InitStatus, ScriptedSdk};
    use std::sync::Arc;

    /// Full import against a healthy SDK: every builtin surface lands.
    #[test]
    fn test_full_import_registers_every_builtin_surface() {
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let guard = InitGuard::new();

        let (module, report) = composer.compose_with_guard(&guard).unwrap();

        assert_eq!(report.phase, ImportPhase::Initialized);
        assert_eq!(report.unit_count, 13);
        assert_eq!(module.name(), "lume");

        // The pipeline unit's forward-declared Device stub must be filled in
        assert!(module.undefined_types().is_empty());
        assert!(module.type_binding("Device").unwrap().defined);

        for name in ["Point2f", "Frame", "Pipeline", "CalibrationData", "Bootloader"] {
            assert!(module.has_type(name), "missing type {}", name);
        }
    }

    /// Composing a roster whose Device definer is missing leaves the
    /// pipeline unit's forward declaration observably unfilled.
    #[test]
    fn test_missing_definer_leaves_stub_observable() {
        let mut catalog = UnitCatalog::new();
        catalog.add(Arc::new(CommonUnit));
        catalog.add(Arc::new(DatatypesUnit));
        catalog.add(Arc::new(ModelUnit));
        catalog.add(Arc::new(NodeUnit));
        catalog.add(Arc::new(AssetManagerUnit));
        catalog.add(Arc::new(PipelineUnit));

        let mut module = ModuleNamespace::new("lume");
        Scheduler::new(catalog).run(&mut module).unwrap();

        // Declared but never defined: the stub is still visible as a type
        assert!(module.has_type("Device"));
        assert!(!module.type_binding("Device").unwrap().defined);
        assert_eq!(module.undefined_types(), vec!["Device".to_string()]);
    }

    /// Metadata attributes are published before initialization is
    /// attempted, so they stay visible when initialization fails.
    #[test]
    fn test_metadata_survives_init_failure() {
        let sdk = ScriptedSdk::failing("simulated device stack failure");
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let guard = InitGuard::new();

        let (module, report) = composer.compose_with_guard(&guard).unwrap();

        assert_eq!(report.phase, ImportPhase::InitializationDeferred);
        for key in build_info::METADATA_ATTR_KEYS {
            assert!(
                matches!(module.attr(key), Some(AttrValue::Str(_))),
                "attribute {} not published",
                key
            );
        }
    }

    /// Two composes over one guard only touch the SDK once.
    #[test]
    fn test_init_attempted_once_per_guard() {
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let guard = InitGuard::new();

        let (_, first) = composer.compose_with_guard(&guard).unwrap();
        let (_, second) = composer.compose_with_guard(&guard).unwrap();

        assert_eq!(sdk.call_count(), 1);
        assert_eq!(first.init, second.init);
    }

    /// A host-side false override must reach the SDK initialize call.
    #[test]
    fn test_resolved_policy_flows_to_the_sdk() {
        let host =
            ScriptedHost::new().with_globals(INSTALL_SIGNAL_HANDLER_KEY, HostValue::Bool(false));
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(ComposeConfig::default(), &host, &sdk);
        let guard = InitGuard::new();

        let (_, report) = composer.compose_with_guard(&guard).unwrap();

        assert!(!report.policy.install_signal_handler);
        assert_eq!(report.policy.globals_override, Some(false));
        assert!(!sdk.last_init().unwrap().install_signal_handler);
    }

    /// ROS glue only joins the roster when toggled on.
    #[test]
    fn test_ros_unit_is_config_gated() {
        let sdk = ScriptedSdk::succeeding();

        let default_composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);
        let (module, report) = default_composer
            .compose_with_guard(&InitGuard::new())
            .unwrap();
        assert_eq!(report.unit_count, 13);
        assert!(!module.has_type("RosBridge"));

        let mut config = ComposeConfig::default();
        config.units = UnitToggles { ros: true };
        let ros_composer = Composer::new(config, &NullHost, &sdk);
        let (module, report) = ros_composer
            .compose_with_guard(&InitGuard::new())
            .unwrap();
        assert_eq!(report.unit_count, 14);
        assert!(module.has_type("RosBridge"));
    }

    /// Config file to composed module, end to end.
    #[test]
    fn test_compose_from_config_file() {
        let yaml = r#"
module_name: lume_embedded
install_signal_handler: false
units:
  ros: true
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lume.yaml");
        std::fs::write(&path, yaml).unwrap();

        let config = load_config(&path).unwrap();
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(config, &NullHost, &sdk);

        let (module, report) = composer.compose_with_guard(&InitGuard::new()).unwrap();

        assert_eq!(module.name(), "lume_embedded");
        assert!(module.has_type("RosBridge"));
        assert!(!report.policy.install_signal_handler);
        assert!(!sdk.last_init().unwrap().install_signal_handler);
    }

    /// The banner handed to the SDK is the one in the report.
    #[test]
    fn test_banner_reaches_the_sdk() {
        let sdk = ScriptedSdk::succeeding();
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);

        let (_, report) = composer.compose_with_guard(&InitGuard::new()).unwrap();

        assert_eq!(report.banner, build_info::banner("Lume script bindings"));
        assert!(report.banner.contains(build_info::VERSION));
        assert_eq!(sdk.last_init().unwrap().banner, report.banner);
    }

    /// Reports serialize for the inspection binary's JSON output.
    #[test]
    fn test_report_serializes_to_json() {
        let sdk = ScriptedSdk::failing("offline");
        let composer = Composer::new(ComposeConfig::default(), &NullHost, &sdk);

        let (_, report) = composer.compose_with_guard(&InitGuard::new()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["phase"], "initialization_deferred");
        assert_eq!(value["unit_count"], 13);
        assert!(value["init"]["deferred"]["reason"]
            .as_str()
            .unwrap()
            .contains("offline"));
        assert!(matches!(report.init, InitStatus::Deferred { .. }));
    }
}
