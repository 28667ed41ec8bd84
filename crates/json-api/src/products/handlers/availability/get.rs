//! Get Product Availability Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::AvailabilityResponse},
    state::State,
};

/// Get Product Availability Handler
#[endpoint(
    tags("products"),
    summary = "Get Product Availability",
    responses(
        (status_code = StatusCode::OK, description = "Current availability"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(id.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
