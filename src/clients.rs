use std::fmt;
use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};

pub const DEFAULT_SUGGESTIONS_URL: &str = "https://suggestions.dadata.ru";
pub const DEFAULT_CLEANER_URL: &str = "https://cleaner.dadata.ru";

pub static REQWEST: OnceLock<reqwest::Client> = OnceLock::new();
pub static DADATA: OnceLock<DadataConfig> = OnceLock::new();

#[derive(Clone)]
pub struct DadataConfig {
    pub token: String,
    /// Required only for the cleaner API. Must never travel to a browser.
    pub secret_key: Option<String>,
    pub suggestions_url: String,
    pub cleaner_url: String,
}

// Keeps the credentials out of logs and error reports.
impl fmt::Debug for DadataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DadataConfig")
            .field("token", &"***")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("suggestions_url", &self.suggestions_url)
            .field("cleaner_url", &self.cleaner_url)
            .finish()
    }
}

pub fn get_reqwest_client() -> Result<&'static reqwest::Client> {
    REQWEST.get().ok_or(eyre!("Failed to get reqwest client"))
}

pub fn get_dadata_config() -> Result<&'static DadataConfig> {
    DADATA.get().ok_or(eyre!("Failed to get dadata config"))
}
