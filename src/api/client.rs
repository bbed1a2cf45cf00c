// src/api/client.rs

use crate::api::models::{
    Agent, ContactMessagePayload, HomeLoanInquiryPayload, InquiryPayload, PropertyTypeRef,
    UploadResponse, WireListing,
};
use crate::api::ApiError;
use crate::cache::ResponseCache;
use crate::cascade::LocationFetcher;
use crate::domain::listing::ListingRecord;
use crate::domain::location::LocationNode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("homeseek/", env!("CARGO_PKG_VERSION"));

/// Where the marketplace API lives and how long we wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Typed client for the marketplace REST API. List calls go through the
/// caller's `ResponseCache`; location lookups deliberately do not (child
/// lists are refetched per parent change, never cached across the chain).
pub struct MarketplaceClient {
    client: Client,
    config: ApiConfig,
}

impl MarketplaceClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::Network(format!("Bad URL {raw}: {e}")))?;
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    /// GET a JSON body straight from the API, no cache involved.
    fn fetch_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoint, params)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Status(status.as_u16(), body));
        }

        response
            .json::<Value>()
            .map_err(|e| ApiError::JsonParse(e.to_string()))
    }

    /// GET through the injected cache: a hit returns the stored body without
    /// touching the network, a miss fetches and stores.
    fn cached_json(
        &self,
        cache: &mut ResponseCache,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let key = ResponseCache::key(endpoint, params);
        if let Some(body) = cache.get(&key) {
            log::debug!("cache hit for {key}");
            return Ok(body.clone());
        }

        let body = self.fetch_json(endpoint, params)?;
        cache.put(key, body.clone());
        Ok(body)
    }

    fn post_json<T: serde::Serialize>(&self, endpoint: &str, payload: &T) -> Result<(), ApiError> {
        let url = self.endpoint_url(endpoint, &[])?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().unwrap_or_else(|_| "(no body)".to_string());
            Err(ApiError::Status(status.as_u16(), body))
        }
    }

    fn location_list(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<LocationNode>, ApiError> {
        let body = self.fetch_json(endpoint, params)?;
        serde_json::from_value(body).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
    }

    /// The full listing collection, normalized at the boundary. Records the
    /// API serves in a shape we cannot use are skipped with a warning rather
    /// than taking the whole page down.
    pub fn properties(&self, cache: &mut ResponseCache) -> Result<Vec<ListingRecord>, ApiError> {
        let body = self.cached_json(cache, "/properties", &[])?;
        let wire: Vec<WireListing> =
            serde_json::from_value(body).map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;

        let mut records = Vec::with_capacity(wire.len());
        for listing in wire {
            match listing.normalize() {
                Ok(record) => records.push(record),
                Err(reason) => log::warn!("Skipping malformed listing: {reason}"),
            }
        }
        Ok(records)
    }

    pub fn property_types(
        &self,
        cache: &mut ResponseCache,
    ) -> Result<Vec<PropertyTypeRef>, ApiError> {
        let body = self.cached_json(cache, "/property-types", &[])?;
        serde_json::from_value(body).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
    }

    pub fn agents(&self, cache: &mut ResponseCache) -> Result<Vec<Agent>, ApiError> {
        let body = self.cached_json(cache, "/agents", &[])?;
        serde_json::from_value(body).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
    }

    pub fn submit_inquiry(&self, inquiry: &InquiryPayload) -> Result<(), ApiError> {
        self.post_json("/inquiries", inquiry)
    }

    pub fn submit_contact_message(&self, message: &ContactMessagePayload) -> Result<(), ApiError> {
        self.post_json("/contact-messages", message)
    }

    pub fn submit_home_loan_inquiry(
        &self,
        inquiry: &HomeLoanInquiryPayload,
    ) -> Result<(), ApiError> {
        self.post_json("/home-loan-inquiries", inquiry)
    }

    /// Uploads one image, returning the stored URL.
    pub fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let url = self.endpoint_url("/uploads", &[])?;

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Status(status.as_u16(), body));
        }

        let stored: UploadResponse = response
            .json()
            .map_err(|e| ApiError::JsonParse(e.to_string()))?;
        Ok(stored.url)
    }
}

impl LocationFetcher for MarketplaceClient {
    fn states(&self) -> Result<Vec<LocationNode>, ApiError> {
        self.location_list("/states", &[])
    }

    fn districts(&self, state_id: i64) -> Result<Vec<LocationNode>, ApiError> {
        self.location_list("/districts", &[("stateId", state_id.to_string())])
    }

    fn talukas(&self, district_id: i64) -> Result<Vec<LocationNode>, ApiError> {
        self.location_list("/talukas", &[("districtId", district_id.to_string())])
    }

    fn tehsils(&self, taluka_id: i64) -> Result<Vec<LocationNode>, ApiError> {
        self.location_list("/tehsils", &[("talukaId", taluka_id.to_string())])
    }
}
