use crate::error::lookup::LookupError;
use crate::{NETWORK_TIMEOUT, USER_AGENT};

use common::{ErrorLocation, HttpStatusCode};
use models::{AddressInfo, AddressScope};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

/// Client for a "what is my IP" service that answers with a bare IP literal.
#[derive(Debug, Clone)]
pub struct PublicAddressLookup {
    endpoint: Url,
    client: Client,
}

impl PublicAddressLookup {
    pub fn new(endpoint: &str) -> Result<Self, LookupError> {
        Self::with_timeout(endpoint, NETWORK_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one GET and classify the returned address as [`AddressScope::Public`].
    ///
    /// # Errors
    ///
    /// - [`LookupError::Http`] on transport failure or timeout
    /// - [`LookupError::Status`] on any status other than 200
    /// - [`LookupError::Parse`] if the body is not a usable IP literal
    pub async fn discover(&self) -> Result<AddressInfo, LookupError> {
        debug!("Looking up public address via {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_ok() {
            return Err(LookupError::Status {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let address = AddressInfo::parse(&body, AddressScope::Public)?;

        debug!("Public address is {address}");
        Ok(address)
    }
}

/// One-shot lookup against `endpoint` with the default timeout.
pub async fn discover_public_address(endpoint: &str) -> Result<AddressInfo, LookupError> {
    PublicAddressLookup::new(endpoint)?.discover().await
}
