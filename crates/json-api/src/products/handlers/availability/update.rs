//! Set Product Availability Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error, requests::AvailabilityRequest, responses::AvailabilityResponse,
    },
    state::State,
};

/// Set Product Availability Handler
#[endpoint(
    tags("products"),
    summary = "Set Product Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid availability payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
    ),
)]
#[tracing::instrument(
    name = "products.availability.update",
    skip_all,
    fields(product_id = tracing::field::Empty, available = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<AvailabilityRequest>,
    depot: &mut Depot,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::from_i64(id.into_inner());
    let available = json.into_inner().available;

    let span = tracing::Span::current();

    span.record("product_id", id.into_i64());
    span.record("available", available);

    let product = state
        .app
        .products
        .set_availability(id, available)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
