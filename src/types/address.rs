use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dadata::{AddressData, CleanedAddress, RawSuggestion};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A flat, camelCase address record: the one-line display `value` plus every
/// granular field the provider knows about the match. Raw suggestions and
/// cleaner replies both normalize into this shape; keys Dadata adds that we
/// have no named slot for ride along in `rest` under their original names.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub value: String,
    pub unrestricted_value: Option<String>,
    /// Composed from `block_type` + `block`, which Dadata keeps separate.
    pub building: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub country_iso_code: Option<String>,
    pub federal_district: Option<String>,
    pub region_fias_id: Option<String>,
    pub region_kladr_id: Option<String>,
    pub region_iso_code: Option<String>,
    pub region_with_type: Option<String>,
    pub region_type: Option<String>,
    pub region_type_full: Option<String>,
    pub region: Option<String>,
    pub area_fias_id: Option<String>,
    pub area_kladr_id: Option<String>,
    pub area_with_type: Option<String>,
    pub area_type: Option<String>,
    pub area_type_full: Option<String>,
    pub area: Option<String>,
    pub city_fias_id: Option<String>,
    pub city_kladr_id: Option<String>,
    pub city_with_type: Option<String>,
    pub city_type: Option<String>,
    pub city_type_full: Option<String>,
    pub city: Option<String>,
    pub city_district_with_type: Option<String>,
    pub city_district_type: Option<String>,
    pub city_district_type_full: Option<String>,
    pub city_district: Option<String>,
    pub settlement_fias_id: Option<String>,
    pub settlement_kladr_id: Option<String>,
    pub settlement_with_type: Option<String>,
    pub settlement_type: Option<String>,
    pub settlement_type_full: Option<String>,
    pub settlement: Option<String>,
    pub street_fias_id: Option<String>,
    pub street_kladr_id: Option<String>,
    pub street_with_type: Option<String>,
    pub street_type: Option<String>,
    pub street_type_full: Option<String>,
    pub street: Option<String>,
    pub house_fias_id: Option<String>,
    pub house_kladr_id: Option<String>,
    pub house_type: Option<String>,
    pub house_type_full: Option<String>,
    pub house: Option<String>,
    pub block_type: Option<String>,
    pub block_type_full: Option<String>,
    pub block: Option<String>,
    pub flat_type: Option<String>,
    pub flat_type_full: Option<String>,
    pub flat: Option<String>,
    pub fias_id: Option<String>,
    pub fias_code: Option<String>,
    pub fias_level: Option<String>,
    pub kladr_id: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lon: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Address {
    /// Bare display text with no granular data, e.g. text the user typed
    /// that has not matched a suggestion yet.
    pub fn plain(value: &str) -> Self {
        Address {
            value: value.to_string(),
            ..Default::default()
        }
    }

    fn from_parts(value: String, unrestricted_value: Option<String>, data: AddressData) -> Self {
        let building = compose_building(&data);
        Address {
            value,
            unrestricted_value,
            building,
            postal_code: data.postal_code,
            country: data.country,
            country_iso_code: data.country_iso_code,
            federal_district: data.federal_district,
            region_fias_id: data.region_fias_id,
            region_kladr_id: data.region_kladr_id,
            region_iso_code: data.region_iso_code,
            region_with_type: data.region_with_type,
            region_type: data.region_type,
            region_type_full: data.region_type_full,
            region: data.region,
            area_fias_id: data.area_fias_id,
            area_kladr_id: data.area_kladr_id,
            area_with_type: data.area_with_type,
            area_type: data.area_type,
            area_type_full: data.area_type_full,
            area: data.area,
            city_fias_id: data.city_fias_id,
            city_kladr_id: data.city_kladr_id,
            city_with_type: data.city_with_type,
            city_type: data.city_type,
            city_type_full: data.city_type_full,
            city: data.city,
            city_district_with_type: data.city_district_with_type,
            city_district_type: data.city_district_type,
            city_district_type_full: data.city_district_type_full,
            city_district: data.city_district,
            settlement_fias_id: data.settlement_fias_id,
            settlement_kladr_id: data.settlement_kladr_id,
            settlement_with_type: data.settlement_with_type,
            settlement_type: data.settlement_type,
            settlement_type_full: data.settlement_type_full,
            settlement: data.settlement,
            street_fias_id: data.street_fias_id,
            street_kladr_id: data.street_kladr_id,
            street_with_type: data.street_with_type,
            street_type: data.street_type,
            street_type_full: data.street_type_full,
            street: data.street,
            house_fias_id: data.house_fias_id,
            house_kladr_id: data.house_kladr_id,
            house_type: data.house_type,
            house_type_full: data.house_type_full,
            house: data.house,
            block_type: data.block_type,
            block_type_full: data.block_type_full,
            block: data.block,
            flat_type: data.flat_type,
            flat_type_full: data.flat_type_full,
            flat: data.flat,
            fias_id: data.fias_id,
            fias_code: data.fias_code,
            fias_level: data.fias_level,
            kladr_id: data.kladr_id,
            geo_lat: data.geo_lat,
            geo_lon: data.geo_lon,
            rest: data.rest,
        }
    }
}

impl From<RawSuggestion> for Address {
    fn from(suggestion: RawSuggestion) -> Self {
        Address::from_parts(suggestion.value, suggestion.unrestricted_value, suggestion.data)
    }
}

impl From<CleanedAddress> for Address {
    fn from(cleaned: CleanedAddress) -> Self {
        Address::from_parts(cleaned.result.unwrap_or_default(), None, cleaned.data)
    }
}

// A bare block label without its type ("2" vs "стр 2") is still better than
// dropping the value, so only a lone type is treated as nothing.
fn compose_building(data: &AddressData) -> Option<String> {
    match (&data.block_type, &data.block) {
        (Some(block_type), Some(block)) => Some(format!("{block_type} {block}")),
        (None, Some(block)) => Some(block.clone()),
        _ => None,
    }
}
