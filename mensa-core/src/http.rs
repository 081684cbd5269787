//! HTTP menu source backed by reqwest. Works natively and in the browser.

use crate::error::TransportError;
use crate::fetch::MenuSource;
use crate::menu::Menu;
use log::debug;
use mensa_utils::urls;
use reqwest::Client;

/// Default location of the published menu files.
pub const DEFAULT_BASE_URL: &str = "https://tum-dev.github.io/eat-api/";

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Http(e.to_string())
    }
}

/// Loads menu files relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: Client,
    base_url: String,
}

impl HttpMenuSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        urls::join(&self.base_url, path)
    }
}

impl MenuSource for HttpMenuSource {
    async fn get_menu(&self, path: &str) -> Result<Menu, TransportError> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(Menu::from_json(&body)?)
    }
}
