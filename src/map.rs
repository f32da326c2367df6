use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::watch;
use tracing::debug;

use crate::suggest::AddressSource;
use crate::types::address::{Address, Coordinates};
use crate::types::dadata::GeolocateParams;

#[derive(Debug, Clone, Default)]
pub struct MapFieldState {
    pub location: Option<Coordinates>,
    pub address: Option<Address>,
}

/// Couples a map pin to an address value: moving the pin reverse-geocodes
/// into an address, and committing address text moves the pin to wherever
/// the cleaner resolves it.
pub struct MapField {
    source: Arc<dyn AddressSource>,
    state: watch::Sender<MapFieldState>,
}

impl MapField {
    pub fn new(source: Arc<dyn AddressSource>) -> Self {
        let (state, _) = watch::channel(MapFieldState::default());
        MapField { source, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<MapFieldState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> MapFieldState {
        self.state.borrow().clone()
    }

    /// Map click or programmatic pin move. Adopts the provider's most
    /// confident match as the field value; with no match the previous
    /// address stands. Clearing the coordinates never touches the network.
    pub async fn set_coords(&mut self, coords: Option<Coordinates>) -> Result<Option<Address>> {
        let Some(coords) = coords else {
            self.state.send_modify(|state| state.location = None);
            return Ok(None);
        };
        self.state.send_modify(|state| state.location = Some(coords));

        let addresses = self
            .source
            .geolocate(coords, &GeolocateParams::default())
            .await?
            .ok_or_else(|| eyre!("geolocate request was rejected by the provider"))?;
        let Some(first) = addresses.into_iter().next() else {
            debug!(lat = coords.lat, lon = coords.lon, "no address at coordinates");
            return Ok(None);
        };
        self.state
            .send_modify(|state| state.address = Some(first.clone()));
        Ok(Some(first))
    }

    /// Committed address text. Runs it through the cleaner and, when the
    /// cleaned record carries a geoposition, moves the pin there. Text the
    /// cleaner cannot work with leaves the field as it was.
    pub async fn set_address_text(&mut self, text: &str) -> Result<Option<Address>> {
        if text.is_empty() {
            return Ok(None);
        }
        let Some(info) = self.source.clean(text).await? else {
            return Ok(None);
        };

        let location = info
            .data
            .geo_lat
            .as_deref()
            .zip(info.data.geo_lon.as_deref())
            .and_then(|(lat, lon)| {
                Some(Coordinates {
                    lat: lat.parse().ok()?,
                    lon: lon.parse().ok()?,
                })
            });
        let address = Address::from(info);
        self.state.send_modify(|state| {
            state.address = Some(address.clone());
            if let Some(location) = location {
                state.location = Some(location);
            }
        });
        Ok(Some(address))
    }
}
