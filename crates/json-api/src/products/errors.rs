//! Product Errors

use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::Validation(message) => ApiError::validation(message),
        ProductsServiceError::InvalidData => ApiError::validation("Invalid product payload"),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            ApiError::internal()
        }
    }
}
