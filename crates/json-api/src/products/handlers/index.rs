//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::data::ProductFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Lists every product, or only those matching all supplied attributes.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products in creation order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed query parameter"),
    ),
)]
#[tracing::instrument(
    name = "products.index",
    skip_all,
    fields(filtered = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    category: QueryParam<String, false>,
    availability: QueryParam<String, false>,
    available: QueryParam<String, false>,
    price: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        name: name.into_inner(),
        category: category.into_inner(),
        available: availability
            .into_bool("availability")?
            .or(available.into_bool("available")?),
        price: price.into_decimal("price")?,
    };

    tracing::Span::current().record("filtered", !filter.is_empty());

    let products = if filter.is_empty() {
        state.app.products.list_products().await
    } else {
        state.app.products.find_products(filter).await
    }
    .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
