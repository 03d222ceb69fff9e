//! # Remote Store - HTTP Client for the Backend
//!
//! This module provides the HTTP client the rest of the crate uses to talk to
//! the backend's collection endpoints.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RemoteStore Endpoints                            │
//! │                                                                         │
//! │  GET    /products            → Vec<Product>                             │
//! │  POST   /products            → created Product (server assigns id)     │
//! │  PUT    /products/{id}       → updated Product                          │
//! │  DELETE /products/{id}       → no content                               │
//! │  GET    /sales               → Vec<Sale>                                │
//! │  POST   /sales               → created Sale                             │
//! │  GET    /settings            → Settings                                 │
//! │  GET    /reports/dashboard   → opaque JSON stats                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Contract
//! Every non-2xx status maps to [`ClientError::Fetch`] uniformly, regardless
//! of the response body. Transport failures map to the same variant. One
//! attempt per call; no retry, no backoff.

use grocer_core::{Product, ProductInput, Sale, SaleInput, Settings};
use reqwest::Response;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client over the backend's collection endpoints.
///
/// Cheap to clone is not a goal here; share it behind an `Arc` (see
/// [`crate::context::AppContext`]).
#[derive(Debug)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    /// Creates a remote store from connection configuration.
    pub fn new(config: &RemoteConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(RemoteStore {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Uniform status gate: any non-success status becomes a fetch error,
    /// with the body ignored.
    fn ensure_success(resp: Response) -> ClientResult<Response> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(ClientError::Fetch(format!(
                "HTTP {} from {}",
                status.as_u16(),
                resp.url().path()
            )))
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetches the full product collection.
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        debug!("GET /products");
        let resp = self.http.get(self.url("/products")).send().await?;
        let products = Self::ensure_success(resp)?.json().await?;
        Ok(products)
    }

    /// Creates a product. The backend assigns the id.
    pub async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        debug!(name = %input.name, "POST /products");
        let resp = self
            .http
            .post(self.url("/products"))
            .json(input)
            .send()
            .await?;
        let product = Self::ensure_success(resp)?.json().await?;
        Ok(product)
    }

    /// Updates an existing product. An unknown id is the backend's call to
    /// reject and surfaces as a fetch error.
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> ClientResult<Product> {
        debug!(id = %id, "PUT /products/{{id}}");
        let resp = self
            .http
            .put(self.url(&format!("/products/{}", id)))
            .json(input)
            .send()
            .await?;
        let product = Self::ensure_success(resp)?.json().await?;
        Ok(product)
    }

    /// Deletes a product. No response body is expected.
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        debug!(id = %id, "DELETE /products/{{id}}");
        let resp = self
            .http
            .delete(self.url(&format!("/products/{}", id)))
            .send()
            .await?;
        Self::ensure_success(resp)?;
        Ok(())
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Fetches the full sales collection.
    pub async fn list_sales(&self) -> ClientResult<Vec<Sale>> {
        debug!("GET /sales");
        let resp = self.http.get(self.url("/sales")).send().await?;
        let sales = Self::ensure_success(resp)?.json().await?;
        Ok(sales)
    }

    /// Records a sale.
    pub async fn create_sale(&self, input: &SaleInput) -> ClientResult<Sale> {
        debug!(product = %input.product, quantity = input.quantity, "POST /sales");
        let resp = self.http.post(self.url("/sales")).json(input).send().await?;
        let sale = Self::ensure_success(resp)?.json().await?;
        Ok(sale)
    }

    // =========================================================================
    // Settings & Reports
    // =========================================================================

    /// Fetches the settings tree. Callers wanting the degrade-to-defaults
    /// policy go through [`crate::settings::SettingsResolver`] instead.
    pub async fn fetch_settings(&self) -> ClientResult<Settings> {
        debug!("GET /settings");
        let resp = self.http.get(self.url("/settings")).send().await?;
        let settings = Self::ensure_success(resp)?.json().await?;
        Ok(settings)
    }

    /// Fetches aggregate dashboard statistics. The shape is owned by the
    /// backend's reporting layer and opaque to this client.
    pub async fn dashboard_stats(&self) -> ClientResult<serde_json::Value> {
        debug!("GET /reports/dashboard");
        let resp = self.http.get(self.url("/reports/dashboard")).send().await?;
        let stats = Self::ensure_success(resp)?.json().await?;
        Ok(stats)
    }
}
