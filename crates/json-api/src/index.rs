//! Service Metadata Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Service metadata
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceInfo {
    /// Service name
    pub name: String,

    /// Service version
    pub version: String,
}

impl ServiceInfo {
    pub(crate) fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Service metadata handler
#[endpoint(tags("meta"), summary = "Service metadata")]
pub(crate) async fn handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
