//! Custom Axum extractors
//!
//! Both reject with `ApiError` so clients always get the JSON error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an integer identity from the trailing path segment
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_id())?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::invalid_id())?;
        Ok(Self(id))
    }
}

/// JSON request body, decoded regardless of `Content-Type`
///
/// Only the first JSON value is read; anything after it is ignored. A
/// `null` body decodes to the record's zero value.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Body {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let value = decode_first(&bytes)?;
        Ok(Self(value))
    }
}

fn decode_first<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let first = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<T>>()
        .next()
        .ok_or_else(ApiError::invalid_json)?;

    match first {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(e) => {
            tracing::debug!("rejected request body: {}", e);
            Err(ApiError::invalid_json())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product};

    #[test]
    fn null_decodes_to_zero_value() {
        let product: Product = decode_first(b"null").unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn trailing_values_are_ignored() {
        let category: Category = decode_first(br#"{"name": "Minuman"} {}"#).unwrap();
        assert_eq!(category.name, "Minuman");
    }

    #[test]
    fn empty_or_malformed_body_is_rejected() {
        let bodies: [&[u8]; 4] = [b"", b"   ", b"{\"nama\": ", b"[1, 2]"];
        for body in bodies {
            let err = decode_first::<Product>(body).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest { message: "Invalid JSON" }));
        }
    }
}
