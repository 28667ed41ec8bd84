//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use catalog_app::domain::products::data::ProductData;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, requests::ProductRequest, responses::ProductResponse},
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let data = ProductData::try_from(json.into_inner())?;

    let product = state
        .app
        .products
        .create_product(data)
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", product.id.into_i64());

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        errors::{ErrorKind, ErrorResponse},
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    fn widget() -> ProductData {
        ProductData {
            name: "Widget".to_string(),
            description: String::new(),
            price: Decimal::new(999, 2),
            available: true,
            category: "Tools".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|data| *data == widget())
            .return_once(|_| Ok(make_product(1)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Widget",
                "price": 9.99,
                "category": "Tools",
                "availability": true,
            }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/1"));
        assert_eq!(body, ProductResponse::from(make_product(1)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_price_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget" }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, ErrorKind::ValidationError);
        assert_eq!(body.message, "price is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_empty_name_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "", "price": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            ErrorResponse {
                status: 400,
                error: ErrorKind::ValidationError,
                message: "name must not be empty".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_store_rejection_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid product payload");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .raw_json("{\"name\": ")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, ErrorKind::ValidationError);

        Ok(())
    }
}
