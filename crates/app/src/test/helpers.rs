//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::products::data::ProductData;

/// A valid product with the given name and category.
pub(crate) fn product_data(name: &str, category: &str) -> ProductData {
    ProductData {
        name: name.to_string(),
        description: format!("A {name} for testing"),
        price: Decimal::new(1999, 2),
        available: true,
        category: category.to_string(),
    }
}
