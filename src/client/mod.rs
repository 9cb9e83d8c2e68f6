//! Typed wrappers over the `/api/...` proxy routes.
//!
//! Calls go to this server's own origin, so every page fetch passes through the
//! same proxy layer a browser would use.

use reqwest::{Method, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

pub mod deliveries;
pub mod error;
pub mod kitchen;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod restaurants;

pub use deliveries::DeliveriesApi;
pub use error::ClientError;
pub use kitchen::KitchenApi;
pub use notifications::NotificationsApi;
pub use orders::OrdersApi;
pub use payments::PaymentsApi;
pub use restaurants::RestaurantsApi;

use error::check_status;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }

    pub fn restaurants(&self) -> RestaurantsApi<'_> {
        RestaurantsApi { client: self }
    }

    pub fn kitchen(&self) -> KitchenApi<'_> {
        KitchenApi { client: self }
    }

    pub fn deliveries(&self) -> DeliveriesApi<'_> {
        DeliveriesApi { client: self }
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { client: self }
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi { client: self }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(Method::PUT, path, None::<&()>).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(ClientError::Decode)
    }
}
