// Port for the remote product service
use crate::domain::draft::NewProduct;
use crate::domain::price_history::PriceHistory;
use crate::domain::product::{ProductId, TrackedProduct};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("session is not authorized")]
    Unauthorized { message: String },
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Authorization-failure indicator, checked the same way for every call.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Unauthorized { .. })
    }

    /// Text the server sent along with an error status, unchanged. Blank bodies count as none.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { message, .. } | ServiceError::Unauthorized { message }
                if !message.trim().is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

#[async_trait]
pub trait ProductService: Send + Sync {
    /// Complete snapshot of the products tracked in the current session
    async fn list_products(&self) -> Result<Vec<TrackedProduct>, ServiceError>;

    /// Register a product for tracking. The new product is only observable through the next list.
    async fn add_product(&self, product: &NewProduct) -> Result<(), ServiceError>;

    async fn delete_product(&self, id: &ProductId) -> Result<(), ServiceError>;

    /// Recorded prices for one product
    async fn price_history(&self, id: &ProductId) -> Result<PriceHistory, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_returned_verbatim() {
        let err = ServiceError::Rejected {
            status: 400,
            message: " Product already tracked \n".to_string(),
        };
        assert_eq!(err.server_message(), Some(" Product already tracked \n"));

        let err = ServiceError::Unauthorized {
            message: "Not logged in".to_string(),
        };
        assert_eq!(err.server_message(), Some("Not logged in"));
    }

    #[test]
    fn test_blank_server_message_counts_as_absent() {
        let err = ServiceError::Rejected {
            status: 500,
            message: " \n\t".to_string(),
        };
        assert_eq!(err.server_message(), None);

        let err = ServiceError::Unauthorized {
            message: String::new(),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(
            ServiceError::Decode("bad".to_string()).server_message(),
            None
        );
    }

    #[test]
    fn test_unauthorized_indicator() {
        let err = ServiceError::Unauthorized {
            message: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!ServiceError::Decode("bad".to_string()).is_unauthorized());
    }
}
