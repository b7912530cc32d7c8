// HTTP implementation of the product service
use crate::application::product_service::{ProductService, ServiceError};
use crate::domain::draft::NewProduct;
use crate::domain::price_history::PriceHistory;
use crate::domain::product::{ProductId, TrackedProduct};
use crate::infrastructure::http_client::normalize_base_url;
use crate::infrastructure::wire_mapper::{history_from_rows, products_from_rows};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductService {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_history_url(&self, id: &ProductId) -> String {
        format!(
            "{}/price_graph?product_id={}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// Map error statuses onto the service error taxonomy. 401 is the session-expiry signal.
    async fn check_status(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "product service responded");

        if status == StatusCode::UNAUTHORIZED {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Unauthorized { message });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn fetch_rows(&self, url: &str, path: &str) -> Result<Vec<Vec<Value>>, ServiceError> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(path, response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ServiceError::Decode(format!("{} returned malformed JSON: {}", path, e)))
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<(), ServiceError> {
        let response = self.client.post(self.url(path)).form(form).send().await?;
        Self::check_status(path, response).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn list_products(&self) -> Result<Vec<TrackedProduct>, ServiceError> {
        let rows = self.fetch_rows(&self.url("/dashboard"), "/dashboard").await?;
        products_from_rows(&rows).map_err(ServiceError::Decode)
    }

    async fn add_product(&self, product: &NewProduct) -> Result<(), ServiceError> {
        self.post_form(
            "/add_product",
            &[
                ("product_url", product.url.as_str()),
                ("target_price", product.target_price.as_str()),
            ],
        )
        .await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ServiceError> {
        self.post_form("/delete_product", &[("product_id", id.as_str())])
            .await
    }

    async fn price_history(&self, id: &ProductId) -> Result<PriceHistory, ServiceError> {
        let rows = self
            .fetch_rows(&self.build_history_url(id), "/price_graph")
            .await?;
        history_from_rows(&rows).map_err(ServiceError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url_encodes_product_id() {
        let service = HttpProductService::new(reqwest::Client::new(), "http://localhost:5000/");
        assert_eq!(
            service.build_history_url(&ProductId::new("a b&c")),
            "http://localhost:5000/price_graph?product_id=a%20b%26c"
        );
        assert_eq!(service.url("/dashboard"), "http://localhost:5000/dashboard");
    }
}
