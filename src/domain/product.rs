// Tracked product domain model
use std::fmt;

/// Opaque identifier of a tracked product, unique within one user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedProduct {
    pub id: ProductId,
    pub name: String,
    pub current_price: f64,
    pub target_price: f64,
}

impl TrackedProduct {
    pub fn new(id: ProductId, name: String, current_price: f64, target_price: f64) -> Self {
        Self {
            id,
            name,
            current_price,
            target_price,
        }
    }

    /// Label shown on the product card; the backend may not know the name yet.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Unknown product"
        } else {
            trimmed
        }
    }

    pub fn at_or_below_target(&self) -> bool {
        self.current_price <= self.target_price
    }
}

/// Format a price the way product cards show it, e.g. `$19.99`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_when_unknown() {
        let product = TrackedProduct::new("p1".into(), "  ".to_string(), 10.0, 5.0);
        assert_eq!(product.display_name(), "Unknown product");

        let product = TrackedProduct::new("p1".into(), " Widget ".to_string(), 10.0, 5.0);
        assert_eq!(product.display_name(), "Widget");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.99), "$19.99");
        assert_eq!(format_price(15.0), "$15.00");
    }

    #[test]
    fn test_at_or_below_target() {
        let product = TrackedProduct::new("p1".into(), "Widget".to_string(), 19.99, 15.0);
        assert!(!product.at_or_below_target());

        let product = TrackedProduct::new("p1".into(), "Widget".to_string(), 14.0, 15.0);
        assert!(product.at_or_below_target());
    }
}
