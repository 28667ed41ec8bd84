//! Test context for service-level integration tests.

use crate::{database::Db, domain::products::PgProductsService};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            products: PgProductsService::new(Db::new(db.pool().clone())),
            db,
        }
    }
}
