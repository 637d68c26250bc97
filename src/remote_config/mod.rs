#![doc = include_str!("README.md")]
mod api;
mod constants;
pub mod defaults;
pub mod error;
pub mod preferences;
pub mod sdk;
pub mod settings;
pub mod value;

pub use api::RemoteConfigBridge;
pub use constants::{DEFAULTS_RESOURCE_PREFERENCE, REMOTE_CONFIG_PLUGIN_NAME};
pub use defaults::{coerce_defaults, parse_defaults, DefaultsMap};
pub use error::{RemoteConfigError, RemoteConfigErrorCode, RemoteConfigResult};
pub use preferences::BridgePreferences;
pub use sdk::RemoteConfigSdk;
pub use settings::{RemoteConfigSettings, RemoteConfigSettingsUpdate};
pub use value::{DefaultValue, RemoteConfigValue, RemoteConfigValueSource};
