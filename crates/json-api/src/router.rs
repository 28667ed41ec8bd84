//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    healthcheck, index, media_type::require_json, observability, products, state::State,
};

/// Every route the service exposes, except the API documentation.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(index::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(products_router())
}

fn products_router() -> Router {
    Router::with_path("products")
        .hoop(require_json)
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler)
                .push(
                    Router::with_path("availability")
                        .get(products::availability::get::handler)
                        .put(products::availability::update::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::MockProductsService;

    use crate::{
        errors::{self, ErrorKind, ErrorResponse},
        index::ServiceInfo,
        test_helpers::{make_product, state_with_products},
    };

    use super::*;

    fn service(products: MockProductsService) -> Service {
        Service::new(app_router(state_with_products(products))).catcher(errors::catcher())
    }

    #[tokio::test]
    async fn test_root_returns_service_metadata() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .send(&service(MockProductsService::new()))
            .await;

        let body: ServiceInfo = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, ServiceInfo::current());

        Ok(())
    }

    #[tokio::test]
    async fn test_plain_text_post_returns_415() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .text("name=Widget&price=9.99")
            .send(&service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));
        assert_eq!(body.error, ErrorKind::MediaTypeError);

        Ok(())
    }

    async fn assert_media_type_error(res: &mut Response) -> TestResult {
        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));
        assert_eq!(body.status, 415);
        assert_eq!(body.error, ErrorKind::MediaTypeError);

        Ok(())
    }

    #[tokio::test]
    async fn test_put_product_with_wrong_content_type_returns_415() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let mut res = TestClient::put("http://example.com/products/1")
            .text("name=Widget&price=9.99")
            .send(&service(products))
            .await;

        assert_media_type_error(&mut res).await
    }

    #[tokio::test]
    async fn test_put_product_without_content_type_returns_415() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let mut res = TestClient::put("http://example.com/products/1")
            .send(&service(products))
            .await;

        assert_media_type_error(&mut res).await
    }

    #[tokio::test]
    async fn test_put_availability_with_wrong_content_type_returns_415() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_set_availability().never();

        let mut res = TestClient::put("http://example.com/products/1/availability")
            .text("available=false")
            .send(&service(products))
            .await;

        assert_media_type_error(&mut res).await
    }

    #[tokio::test]
    async fn test_put_availability_without_content_type_returns_415() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_set_availability().never();

        let mut res = TestClient::put("http://example.com/products/1/availability")
            .send(&service(products))
            .await;

        assert_media_type_error(&mut res).await
    }

    #[tokio::test]
    async fn test_unknown_route_returns_envelope() -> TestResult {
        let mut res = TestClient::get("http://example.com/orders")
            .send(&service(MockProductsService::new()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, 404);
        assert_eq!(body.error, ErrorKind::NotFound);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Ok(make_product(9)));

        products
            .expect_get_product()
            .once()
            .return_once(|_| Ok(make_product(9)));

        let service = service(products);

        let mut created = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "price": 9.99, "category": "Tools" }))
            .send(&service)
            .await;

        let created_body: serde_json::Value = created.take_json().await?;

        let mut fetched = TestClient::get("http://example.com/products/9")
            .send(&service)
            .await;

        let fetched_body: serde_json::Value = fetched.take_json().await?;

        assert_eq!(created.status_code, Some(StatusCode::CREATED));
        assert_eq!(fetched.status_code, Some(StatusCode::OK));
        assert_eq!(created_body, fetched_body);

        Ok(())
    }

    #[tokio::test]
    async fn test_health_and_request_id() -> TestResult {
        let res = TestClient::get("http://example.com/health")
            .send(&service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.headers().contains_key("x-request-id"),
            "expected request id header"
        );

        Ok(())
    }
}
