//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::{data::ProductDraft, records::ProductId};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, requests::ProductRequest, responses::ProductResponse},
    state::State,
};

/// Replace Product Handler
///
/// Every mutable field is replaced; omitted optional fields reset to their defaults.
/// The body is checked only once the product is known to exist.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip_all,
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::from_i64(id.into_inner());
    let draft = ProductDraft::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", id.into_i64());

    if let Some(price) = draft.price {
        span.record("price", tracing::field::display(price));
    }

    let product = state
        .app
        .products
        .update_product(id, draft)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(product.into()))
}
