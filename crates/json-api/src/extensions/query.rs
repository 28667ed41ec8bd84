//! Typed query parameter parsing helpers.

use std::str::FromStr;

use rust_decimal::Decimal;
use salvo::oapi::extract::QueryParam;

use crate::errors::ApiError;

pub(crate) trait QueryParamExt {
    /// Parse a boolean flag, accepting `true`/`false` in any case as well as `1`/`0`.
    fn into_bool(self, name: &str) -> Result<Option<bool>, ApiError>;

    /// Parse an exact decimal amount.
    fn into_decimal(self, name: &str) -> Result<Option<Decimal>, ApiError>;
}

impl QueryParamExt for QueryParam<String, false> {
    fn into_bool(self, name: &str) -> Result<Option<bool>, ApiError> {
        self.into_inner()
            .map(|value| {
                parse_bool(&value).ok_or_else(|| {
                    ApiError::validation(format!(
                        "could not parse \"{name}\" query parameter: expected true or false"
                    ))
                })
            })
            .transpose()
    }

    fn into_decimal(self, name: &str) -> Result<Option<Decimal>, ApiError> {
        self.into_inner()
            .map(|value| {
                Decimal::from_str(value.trim()).map_err(|error| {
                    ApiError::validation(format!(
                        "could not parse \"{name}\" query parameter: {error}"
                    ))
                })
            })
            .transpose()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();

    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
    }

    #[test]
    fn rejects_other_boolean_spellings() {
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("2"), None);
    }
}
