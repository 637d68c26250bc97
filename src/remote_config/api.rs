use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value as JsonValue;

use crate::remote_config::constants::REMOTE_CONFIG_PLUGIN_NAME;
use crate::remote_config::defaults::{coerce_defaults, DefaultsMap};
use crate::remote_config::error::RemoteConfigResult;
use crate::remote_config::preferences::BridgePreferences;
use crate::remote_config::sdk::RemoteConfigSdk;
use crate::remote_config::settings::{RemoteConfigSettings, RemoteConfigSettingsUpdate};
use crate::remote_config::value::RemoteConfigValue;

/// Host facing Remote Config operations backed by a platform SDK handle.
///
/// Every call is forwarded to the SDK once and resolves exactly once; the bridge keeps no
/// state of its own besides the handle.
#[derive(Clone)]
pub struct RemoteConfigBridge {
    inner: Arc<RemoteConfigBridgeInner>,
}

struct RemoteConfigBridgeInner {
    sdk: Arc<dyn RemoteConfigSdk>,
    preferences: BridgePreferences,
}

impl RemoteConfigBridge {
    /// Creates the bridge and installs the initial defaults.
    ///
    /// When `preferences` name a bundled defaults resource the SDK loads it; otherwise an
    /// empty defaults map is registered so the SDK is never left without defaults.
    pub async fn initialize(
        sdk: Arc<dyn RemoteConfigSdk>,
        preferences: BridgePreferences,
    ) -> RemoteConfigResult<Self> {
        log::debug!("Starting {REMOTE_CONFIG_PLUGIN_NAME}");

        let installed = match preferences.defaults_resource() {
            Some(resource) => {
                log::debug!("loading Remote Config defaults from resource `{resource}`");
                sdk.set_defaults_from_resource(resource).await
            }
            None => sdk.set_defaults(DefaultsMap::new()).await,
        };
        installed.map_err(|err| log_failure("initial setDefaults", err))?;

        Ok(Self {
            inner: Arc::new(RemoteConfigBridgeInner { sdk, preferences }),
        })
    }

    pub fn preferences(&self) -> &BridgePreferences {
        &self.inner.preferences
    }

    pub async fn fetch(&self, expiration_seconds: u64) -> RemoteConfigResult<()> {
        self.inner
            .sdk
            .fetch(Duration::from_secs(expiration_seconds))
            .await
            .map_err(|err| log_failure("fetch", err))
    }

    pub async fn activate(&self) -> RemoteConfigResult<bool> {
        self.inner
            .sdk
            .activate()
            .await
            .map_err(|err| log_failure("activate", err))
    }

    pub async fn fetch_and_activate(&self) -> RemoteConfigResult<bool> {
        self.inner
            .sdk
            .fetch_and_activate()
            .await
            .map_err(|err| log_failure("fetchAndActivate", err))
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        self.get_value(key).as_bool()
    }

    pub fn get_bytes(&self, key: &str) -> Vec<u8> {
        self.get_value(key).as_bytes()
    }

    pub fn get_number(&self, key: &str) -> f64 {
        self.get_value(key).as_number()
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get_value(key).as_string()
    }

    /// Returns the SDK value wrapper, which also exposes the source of the parameter.
    pub fn get_value(&self, key: &str) -> RemoteConfigValue {
        self.inner.sdk.get_value(key)
    }

    /// Applies the host settings object on top of the SDK defaults.
    ///
    /// Only positive `fetchTimeoutInSeconds` / `minimumFetchIntervalInSeconds` values are
    /// applied; the rest keep their defaults.
    pub fn set_config_settings(&self, config: &JsonValue) -> RemoteConfigResult<RemoteConfigSettings> {
        let settings = RemoteConfigSettingsUpdate::from_json(config)?.to_settings();
        log::debug!(
            "applying Remote Config settings: fetch timeout {}s, minimum fetch interval {}s",
            settings.fetch_timeout_seconds(),
            settings.minimum_fetch_interval_seconds()
        );
        self.inner.sdk.set_config_settings(settings.clone());
        Ok(settings)
    }

    /// Coerces the host defaults object and registers it with the SDK.
    ///
    /// Coercion failures are reported before the SDK is called.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use firebase_config_bridge::remote_config::{BridgePreferences, RemoteConfigBridge, RemoteConfigSdk};
    /// # async fn example(sdk: Arc<dyn RemoteConfigSdk>) -> Result<(), Box<dyn std::error::Error>> {
    /// let bridge = RemoteConfigBridge::initialize(sdk, BridgePreferences::default()).await?;
    /// bridge
    ///     .set_defaults(&serde_json::json!({ "welcome": "hi", "retries": 3, "logo": ["aGVsbG8="] }))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_defaults(&self, defaults: &JsonValue) -> RemoteConfigResult<()> {
        let map = coerce_defaults(defaults).map_err(|err| log_failure("setDefaults", err))?;
        log::debug!("registering {} Remote Config defaults", map.len());
        self.inner
            .sdk
            .set_defaults(map)
            .await
            .map_err(|err| log_failure("setDefaults", err))
    }
}

impl fmt::Debug for RemoteConfigBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfigBridge")
            .field("preferences", &self.inner.preferences)
            .finish()
    }
}

fn log_failure<E: fmt::Display>(operation: &str, err: E) -> E {
    log::warn!("remote config {operation} failed: {err}");
    err
}
