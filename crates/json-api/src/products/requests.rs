//! Product request bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::{ProductData, ProductDraft};

use crate::{errors::ApiError, products::errors::into_api_error};

/// Product create or replace request
///
/// `name` and `price` are required. Other fields fall back to their defaults.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Display name
    pub name: Option<String>,

    /// Free-form description
    pub description: Option<String>,

    /// Unit price, as a JSON number or a decimal string
    #[salvo(schema(value_type = Option<String>))]
    pub price: Option<Decimal>,

    /// Whether the product can be ordered
    #[serde(alias = "available")]
    pub availability: Option<bool>,

    /// Category used for filtering
    pub category: Option<String>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            name: request.name,
            description: request.description,
            price: request.price,
            available: request.availability,
            category: request.category,
        }
    }
}

impl TryFrom<ProductRequest> for ProductData {
    type Error = ApiError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        ProductDraft::from(request)
            .into_data()
            .map_err(into_api_error)
    }
}

/// Availability change request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityRequest {
    /// New availability flag
    #[serde(alias = "availability")]
    pub available: bool,
}
