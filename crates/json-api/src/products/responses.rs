//! Product response bodies.

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::ProductRecord;

/// Product Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price as a decimal string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Whether the product can be ordered
    pub available: bool,

    /// Category
    pub category: String,

    /// Creation timestamp
    #[salvo(schema(value_type = String))]
    pub created_at: Timestamp,

    /// Last modification timestamp
    #[salvo(schema(value_type = String))]
    pub updated_at: Timestamp,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Availability Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityResponse {
    /// Product identifier
    pub id: i64,

    /// Whether the product can be ordered
    pub available: bool,
}

impl From<ProductRecord> for AvailabilityResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            available: product.available,
        }
    }
}
