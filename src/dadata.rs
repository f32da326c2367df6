use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use tracing::debug;

use crate::clients::{get_dadata_config, get_reqwest_client};
use crate::suggest::AddressSource;
use crate::types::address::{Address, Coordinates};
use crate::types::dadata::{
    CleanedAddress, GeolocateParams, RawSuggestion, SuggestParams, SuggestResponse,
};

#[derive(Serialize)]
struct SuggestRequest<'a> {
    #[serde(flatten)]
    params: &'a SuggestParams,
    query: &'a str,
}

/// Forward suggestions for partial text. `None` means Dadata answered with a
/// non-success status; an empty list means it matched nothing.
pub async fn suggest_address(
    query: &str,
    params: &SuggestParams,
) -> Result<Option<Vec<RawSuggestion>>> {
    let config = get_dadata_config()?;
    let url = format!(
        "{}/suggestions/api/4_1/rs/suggest/address",
        config.suggestions_url
    );
    let res = get_reqwest_client()?
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, format!("Token {}", config.token))
        .json(&SuggestRequest { params, query })
        .send()
        .await?;
    if !res.status().is_success() {
        debug!(status = %res.status(), "suggest request rejected");
        return Ok(None);
    }
    let body: SuggestResponse = res.json().await?;
    Ok(Some(body.suggestions))
}

pub async fn geolocate_address(
    coords: Coordinates,
    params: &GeolocateParams,
) -> Result<Option<Vec<RawSuggestion>>> {
    let config = get_dadata_config()?;
    let url = format!(
        "{}/suggestions/api/4_1/rs/geolocate/address",
        config.suggestions_url
    );
    let res = get_reqwest_client()?
        .get(&url)
        .query(params)
        .query(&coords)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, format!("Token {}", config.token))
        .send()
        .await?;
    if !res.status().is_success() {
        debug!(status = %res.status(), "geolocate request rejected");
        return Ok(None);
    }
    let body: SuggestResponse = res.json().await?;
    Ok(Some(body.suggestions))
}

/// Run text through the cleaner API. Needs the secret key on top of the
/// token; the key never leaves this server-side call.
pub async fn clean_address(address: &str) -> Result<Option<Vec<CleanedAddress>>> {
    let config = get_dadata_config()?;
    let secret_key = config
        .secret_key
        .as_deref()
        .ok_or_else(|| eyre!("DADATA_SECRET_KEY is not configured"))?;
    let url = format!("{}/api/v1/clean/address", config.cleaner_url);
    let res = get_reqwest_client()?
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, format!("Token {}", config.token))
        .header("X-Secret", secret_key)
        .json(&[address])
        .send()
        .await?;
    if !res.status().is_success() {
        debug!(status = %res.status(), "clean request rejected");
        return Ok(None);
    }
    Ok(Some(res.json().await?))
}

/// The live provider as an [`AddressSource`] for the field controllers.
pub struct Dadata;

#[async_trait]
impl AddressSource for Dadata {
    async fn suggest(&self, query: &str, params: &SuggestParams) -> Result<Option<Vec<Address>>> {
        let raw = suggest_address(query, params).await?;
        Ok(raw.map(|list| list.into_iter().map(Address::from).collect()))
    }

    async fn geolocate(
        &self,
        coords: Coordinates,
        params: &GeolocateParams,
    ) -> Result<Option<Vec<Address>>> {
        let raw = geolocate_address(coords, params).await?;
        Ok(raw.map(|list| list.into_iter().map(Address::from).collect()))
    }

    async fn clean(&self, address: &str) -> Result<Option<CleanedAddress>> {
        let cleaned = clean_address(address).await?;
        Ok(cleaned.and_then(|list| list.into_iter().next()))
    }
}
