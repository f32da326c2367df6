#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};
use tokio::sync::Notify;

use dadata_proxy::suggest::AddressSource;
use dadata_proxy::types::address::{Address, Coordinates};
use dadata_proxy::types::dadata::{AddressData, CleanedAddress, GeolocateParams, SuggestParams};

/// Scripted reply for one backend operation.
#[derive(Clone)]
pub enum Script<T> {
    Reply(T),
    /// Provider answered with a non-success status.
    Rejected,
    /// Transport-level failure.
    Fails,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Script::Rejected
    }
}

#[derive(Clone)]
pub enum SuggestScript {
    Suggestions(Vec<Address>),
    Rejected,
    Fails,
    /// Parks the call until the gate is notified, then replies.
    Gated(Vec<Address>, Arc<Notify>),
}

/// Scripted [`AddressSource`]: suggest replies are keyed by query text,
/// geolocate and clean replies are single slots. Every call is logged.
#[derive(Default)]
pub struct MockSource {
    pub suggest_scripts: Mutex<HashMap<String, SuggestScript>>,
    pub geolocate_script: Mutex<Script<Vec<Address>>>,
    pub clean_script: Mutex<Script<CleanedAddress>>,
    pub suggest_log: Mutex<Vec<String>>,
    pub geolocate_log: Mutex<Vec<Coordinates>>,
    pub clean_log: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn on_suggest(&self, query: &str, script: SuggestScript) {
        self.suggest_scripts
            .lock()
            .unwrap()
            .insert(query.to_string(), script);
    }

    pub fn suggest_calls(&self) -> Vec<String> {
        self.suggest_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressSource for MockSource {
    async fn suggest(&self, query: &str, _params: &SuggestParams) -> Result<Option<Vec<Address>>> {
        self.suggest_log.lock().unwrap().push(query.to_string());
        let script = self.suggest_scripts.lock().unwrap().get(query).cloned();
        match script {
            Some(SuggestScript::Suggestions(list)) => Ok(Some(list)),
            Some(SuggestScript::Rejected) => Ok(None),
            Some(SuggestScript::Fails) => Err(eyre!("connection reset by provider")),
            Some(SuggestScript::Gated(list, gate)) => {
                gate.notified().await;
                Ok(Some(list))
            }
            None => Ok(Some(Vec::new())),
        }
    }

    async fn geolocate(
        &self,
        coords: Coordinates,
        _params: &GeolocateParams,
    ) -> Result<Option<Vec<Address>>> {
        self.geolocate_log.lock().unwrap().push(coords);
        let script = self.geolocate_script.lock().unwrap().clone();
        match script {
            Script::Reply(list) => Ok(Some(list)),
            Script::Rejected => Ok(None),
            Script::Fails => Err(eyre!("connection reset by provider")),
        }
    }

    async fn clean(&self, address: &str) -> Result<Option<CleanedAddress>> {
        self.clean_log.lock().unwrap().push(address.to_string());
        let script = self.clean_script.lock().unwrap().clone();
        match script {
            Script::Reply(info) => Ok(Some(info)),
            Script::Rejected => Ok(None),
            Script::Fails => Err(eyre!("connection reset by provider")),
        }
    }
}

pub fn suggestion(value: &str) -> Address {
    Address {
        value: value.to_string(),
        unrestricted_value: Some(value.to_string()),
        ..Default::default()
    }
}

pub fn structured_suggestion(value: &str) -> Address {
    Address {
        value: value.to_string(),
        unrestricted_value: Some(format!("125009, {value}")),
        postal_code: Some("125009".to_string()),
        city: Some("Москва".to_string()),
        street_with_type: Some("ул Тверская".to_string()),
        house: Some("1".to_string()),
        fias_id: Some("8d327a56-80de-4df2-815c-4f6ab1224c50".to_string()),
        kladr_id: Some("7700000000007750049".to_string()),
        geo_lat: Some("55.757919".to_string()),
        geo_lon: Some("37.611329".to_string()),
        ..Default::default()
    }
}

pub fn cleaned(source: &str, result: &str, geo: Option<(&str, &str)>) -> CleanedAddress {
    let mut data = AddressData::default();
    if let Some((lat, lon)) = geo {
        data.geo_lat = Some(lat.to_string());
        data.geo_lon = Some(lon.to_string());
    }
    CleanedAddress {
        source: Some(source.to_string()),
        result: Some(result.to_string()),
        data,
    }
}
