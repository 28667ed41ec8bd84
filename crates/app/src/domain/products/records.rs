//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name, never empty.
    pub name: String,

    /// Free-form description, possibly empty.
    pub description: String,

    /// Unit price, never negative.
    pub price: Decimal,

    /// Whether the product can currently be ordered.
    pub available: bool,

    /// Category used for filtering.
    pub category: String,

    /// Creation timestamp.
    pub created_at: Timestamp,

    /// Last time any field changed.
    pub updated_at: Timestamp,
}
