//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::errors::ProductsServiceError;

/// Category assigned when a caller does not name one.
pub const DEFAULT_CATEGORY: &str = "UNKNOWN";

/// Largest price the `NUMERIC(14, 2)` column can hold.
const MAX_PRICE: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Maximum number of fractional digits a price may carry.
const PRICE_SCALE: u32 = 2;

/// Mutable product fields, used both for creation and for full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: String,
}

impl ProductData {
    /// Check the invariants every stored product must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.trim().is_empty() {
            return Err(ProductsServiceError::validation("name must not be empty"));
        }

        if self.price < Decimal::ZERO {
            return Err(ProductsServiceError::validation(
                "price must not be negative",
            ));
        }

        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(ProductsServiceError::validation(
                "price must have at most two decimal places",
            ));
        }

        if self.price > MAX_PRICE {
            return Err(ProductsServiceError::validation("price is too large"));
        }

        Ok(())
    }
}

/// Product fields as supplied by a caller, before presence and invariant checks.
///
/// Omitted optional fields take their defaults. `name` and `price` must be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Resolve defaults and check the result against the product invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::Validation`] when a required field is missing or
    /// the resolved product is invalid.
    pub fn into_data(self) -> Result<ProductData, ProductsServiceError> {
        let name = self
            .name
            .ok_or_else(|| ProductsServiceError::validation("name is required"))?;

        let price = self
            .price
            .ok_or_else(|| ProductsServiceError::validation("price is required"))?;

        let data = ProductData {
            name,
            description: self.description.unwrap_or_default(),
            price,
            available: self.available.unwrap_or(true),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        };

        data.validate()?;

        Ok(data)
    }
}

impl From<ProductData> for ProductDraft {
    fn from(data: ProductData) -> Self {
        Self {
            name: Some(data.name),
            description: Some(data.description),
            price: Some(data.price),
            available: Some(data.available),
            category: Some(data.category),
        }
    }
}

/// Exact-match product lookup. Every populated attribute must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub price: Option<Decimal>,
}

impl ProductFilter {
    /// Whether the filter constrains nothing, i.e. selects every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.available.is_none()
            && self.price.is_none()
    }
}
