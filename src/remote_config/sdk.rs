//! Abstraction over the native Remote Config SDK.
//!
//! The bridge never fetches, caches or activates anything itself; every operation is
//! forwarded to an implementation of [`RemoteConfigSdk`] supplied by the host platform.
//! Implementations report failures with [`sdk_error`](crate::remote_config::error::sdk_error)
//! carrying the SDK's own message.

use std::time::Duration;

use crate::remote_config::defaults::DefaultsMap;
use crate::remote_config::error::RemoteConfigResult;
use crate::remote_config::settings::RemoteConfigSettings;
use crate::remote_config::value::RemoteConfigValue;

/// Handle to the platform Remote Config client.
#[cfg_attr(
    all(feature = "wasm-web", target_arch = "wasm32"),
    async_trait::async_trait(?Send)
)]
#[cfg_attr(
    not(all(feature = "wasm-web", target_arch = "wasm32")),
    async_trait::async_trait
)]
pub trait RemoteConfigSdk: Send + Sync {
    /// Fetches a new template, treating cached values younger than `expiration` as fresh.
    async fn fetch(&self, expiration: Duration) -> RemoteConfigResult<()>;

    /// Makes the last fetched template active; `true` when the active values changed.
    async fn activate(&self) -> RemoteConfigResult<bool>;

    async fn fetch_and_activate(&self) -> RemoteConfigResult<bool>;

    /// Reads a parameter. The SDK always yields a value, falling back to a static one.
    fn get_value(&self, key: &str) -> RemoteConfigValue;

    fn set_config_settings(&self, settings: RemoteConfigSettings);

    async fn set_defaults(&self, defaults: DefaultsMap) -> RemoteConfigResult<()>;

    /// Loads defaults from a resource bundled with the application, looked up by name.
    async fn set_defaults_from_resource(&self, resource_name: &str) -> RemoteConfigResult<()>;
}
