/// Default path probed for a compose configuration file
pub const DEFAULT_CONFIG_FILE_PATH: &str = "lume.yaml";
/// Module name the host runtime imports the bindings under
pub const DEFAULT_MODULE_NAME: &str = "lume";
/// Product name used in the SDK initialization banner
pub const DEFAULT_PRODUCT: &str = "Lume script bindings";
