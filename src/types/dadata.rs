use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Payload shapes exactly as Dadata sends them, snake_case and all.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuggestResponse {
    pub suggestions: Vec<RawSuggestion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawSuggestion {
    pub value: String,
    #[serde(default)]
    pub unrestricted_value: Option<String>,
    #[serde(default)]
    pub data: AddressData,
}

/// One element of the cleaner API reply. Unlike suggestions, the cleaner
/// returns its granular fields at the top level next to `source`/`result`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CleanedAddress {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(flatten)]
    pub data: AddressData,
}

/// The granular fields of an address record. Every level of the FIAS
/// hierarchy Dadata decomposes into gets a named slot; anything else the
/// provider sends survives untouched in `rest`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AddressData {
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

#[derive(Serialize, Debug, Clone, Default)]
pub struct SuggestParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Area filters, e.g. `[{"kladr_id": "6500000000000"}]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Value>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GeolocateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
