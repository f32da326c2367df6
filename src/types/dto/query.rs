use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SuggestQuery {
    pub address: Option<String>,
    pub count: Option<u32>,
    pub language: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct FindAddressQuery {
    pub address: Option<String>,
}
