// Add-product form draft and its validation
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("product URL is required")]
    MissingUrl,
    #[error("product URL is not valid: {0}")]
    InvalidUrl(String),
    #[error("target price is required")]
    MissingTargetPrice,
    #[error("target price is not a number: {0}")]
    InvalidTargetPrice(String),
    #[error("target price must be greater than zero")]
    NonPositiveTargetPrice,
}

/// Uncommitted input of the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductDraft {
    pub url: String,
    pub target_price: String,
}

/// A validated add request. Fields carry the user's input as typed (trimmed); parsing
/// only checks it, the server gets the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub url: String,
    pub target_price: String,
}

impl AddProductDraft {
    pub fn new(url: impl Into<String>, target_price: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target_price: target_price.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.target_price.is_empty()
    }

    pub fn clear(&mut self) {
        self.url.clear();
        self.target_price.clear();
    }

    pub fn validate(&self) -> Result<NewProduct, DraftError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(DraftError::MissingUrl);
        }
        let parsed = Url::parse(url).map_err(|e| DraftError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DraftError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        parse_target_price(&self.target_price)?;
        Ok(NewProduct {
            url: url.to_string(),
            target_price: self.target_price.trim().to_string(),
        })
    }
}

/// Parse a user-entered target price as a positive, finite decimal.
pub fn parse_target_price(raw: &str) -> Result<f64, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DraftError::MissingTargetPrice);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| DraftError::InvalidTargetPrice(raw.to_string()))?;
    if !value.is_finite() {
        return Err(DraftError::InvalidTargetPrice(raw.to_string()));
    }
    if value <= 0.0 {
        return Err(DraftError::NonPositiveTargetPrice);
    }
    Ok(value)
}
