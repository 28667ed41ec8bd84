//! Product availability sub-resource.

pub(crate) mod get;
pub(crate) mod update;
