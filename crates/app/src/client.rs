//! HTTP client for the JSON API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thali::{
    catalog::{FoodItem, FoodItemId},
    checkout::{GatewayError, OrderGateway},
    orders::{NewOrder, Order},
    users::{Credentials, Session},
};
use thiserror::Error;
use tracing::debug;

/// Where the API lives and who is calling it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server address, e.g. `"http://localhost:8698"`.
    pub base_url: String,

    /// Session token sent as a bearer credential.
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// The full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        self.send(self.http.get(self.url("/api/foods"))).await
    }

    /// A single catalog item.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the item does not exist.
    pub async fn get_food(&self, id: FoodItemId) -> Result<FoodItem, ApiError> {
        self.send(self.http.get(self.url(&format!("/api/foods/{id}"))))
            .await
    }

    /// Start a session.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or rejected credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.send(self.http.post(self.url("/api/login")).json(credentials))
            .await
    }

    /// Orders placed by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a missing session.
    pub async fn list_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.send(self.http.get(self.url("/api/orders/user"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();

        debug!(%status, body = %text, "api request failed");

        Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        })
    }
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn place_order(&self, order: NewOrder) -> Result<Order, GatewayError> {
        self.send(self.http.post(self.url("/api/orders")).json(&order))
            .await
            .map_err(|error| match error {
                ApiError::Status { status, body } if (400..500).contains(&status) => {
                    GatewayError::Rejected(format!("{status}: {body}"))
                }
                other => GatewayError::Unavailable(other.to_string()),
            })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:8698/".to_string(),
            token: None,
        });

        assert_eq!(client.url("/api/foods"), "http://localhost:8698/api/foods");
    }
}
