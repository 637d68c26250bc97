pub const REMOTE_CONFIG_PLUGIN_NAME: &str = "FirebaseConfigPlugin";
pub const DEFAULTS_RESOURCE_PREFERENCE: &str = "FirebaseRemoteConfigDefaults";
