//! Test utilities shared across crate-level unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::Builder;

use crate::remote_config::defaults::DefaultsMap;
use crate::remote_config::error::{sdk_error, RemoteConfigResult};
use crate::remote_config::sdk::RemoteConfigSdk;
use crate::remote_config::settings::RemoteConfigSettings;
use crate::remote_config::value::{RemoteConfigValue, RemoteConfigValueSource};

pub fn block_on_future<F: Future>(future: F) -> F::Output {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

/// In-memory SDK stand-in that records every call it receives.
///
/// Values staged with [`RecordingSdk::set_remote`] become visible after `activate`.
/// [`RecordingSdk::fail_with`] makes every later async call fail with the given message.
#[derive(Default)]
pub struct RecordingSdk {
    calls: Mutex<Vec<String>>,
    defaults: Mutex<DefaultsMap>,
    fetched: Mutex<HashMap<String, String>>,
    active: Mutex<HashMap<String, String>>,
    settings: Mutex<Option<RemoteConfigSettings>>,
    failure: Mutex<Option<String>>,
}

impl RecordingSdk {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn defaults(&self) -> DefaultsMap {
        self.defaults.lock().unwrap().clone()
    }

    pub fn settings(&self) -> Option<RemoteConfigSettings> {
        self.settings.lock().unwrap().clone()
    }

    pub fn set_remote(&self, key: &str, value: &str) {
        self.fetched
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn record(&self, call: String) -> RemoteConfigResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(sdk_error(message)),
            None => Ok(()),
        }
    }

    fn activate_fetched(&self) -> bool {
        let mut fetched = self.fetched.lock().unwrap();
        if fetched.is_empty() {
            return false;
        }
        *self.active.lock().unwrap() = std::mem::take(&mut *fetched);
        true
    }
}

#[async_trait::async_trait]
impl RemoteConfigSdk for RecordingSdk {
    async fn fetch(&self, expiration: Duration) -> RemoteConfigResult<()> {
        self.record(format!("fetch({}s)", expiration.as_secs()))
    }

    async fn activate(&self) -> RemoteConfigResult<bool> {
        self.record("activate".to_string())?;
        Ok(self.activate_fetched())
    }

    async fn fetch_and_activate(&self) -> RemoteConfigResult<bool> {
        self.record("fetch_and_activate".to_string())?;
        Ok(self.activate_fetched())
    }

    fn get_value(&self, key: &str) -> RemoteConfigValue {
        if let Some(value) = self.active.lock().unwrap().get(key) {
            return RemoteConfigValue::new(RemoteConfigValueSource::Remote, value.clone());
        }
        if let Some(value) = self.defaults.lock().unwrap().get(key) {
            return RemoteConfigValue::new(RemoteConfigValueSource::Default, value.to_config_string());
        }
        RemoteConfigValue::static_value()
    }

    fn set_config_settings(&self, settings: RemoteConfigSettings) {
        self.calls
            .lock()
            .unwrap()
            .push("set_config_settings".to_string());
        *self.settings.lock().unwrap() = Some(settings);
    }

    async fn set_defaults(&self, defaults: DefaultsMap) -> RemoteConfigResult<()> {
        self.record(format!("set_defaults({})", defaults.len()))?;
        *self.defaults.lock().unwrap() = defaults;
        Ok(())
    }

    async fn set_defaults_from_resource(&self, resource_name: &str) -> RemoteConfigResult<()> {
        self.record(format!("set_defaults_from_resource({resource_name})"))
    }
}
