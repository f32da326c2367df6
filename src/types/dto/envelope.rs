use serde::{Deserialize, Serialize};

use crate::types::address::Address;
use crate::types::dadata::CleanedAddress;

// Success envelopes. The failure side is rendered by ResponseError.

#[derive(Serialize, Deserialize, Debug)]
pub struct SuggestionsResponse {
    pub ok: bool,
    pub suggestions: Vec<Address>,
}

/// `info` is the cleaner reply passed through without renaming, so its keys
/// stay in the provider's snake_case. `null` means the provider had nothing
/// for the requested text.
#[derive(Serialize, Deserialize, Debug)]
pub struct AddressInfoResponse {
    pub ok: bool,
    pub info: Option<CleanedAddress>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResolvedAddressResponse {
    pub ok: bool,
    pub address: Address,
}
