//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

/// Delete Product Handler
///
/// Deleting an absent product succeeds.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted or already absent"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::from_i64(id.into_inner());

    tracing::Span::current().record("product_id", id.into_i64());

    state
        .app
        .products
        .delete_product(id)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::MockProductsService;

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_returns_204() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(42))
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/products/42")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(res.take_string().await?.is_empty(), "expected empty body");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_twice_returns_204_both_times() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .times(2)
            .returning(|_| Ok(()));

        let service = make_service(products);

        for _ in 0..2 {
            let res = TestClient::delete("http://example.com/products/42")
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        }

        Ok(())
    }
}
