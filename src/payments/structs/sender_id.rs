use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

use crate::payments::errors::PaymentsApiError;

/// The `{userid}` path segment of a payments route.
///
/// Segments that are not all ASCII digits, or that do not decode at all, are
/// answered with a bare `404`, the same as an unmatched route. All-digit
/// segments too large for an `i64` are rejected with `400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for SenderId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Path(raw)) = Path::<String>::from_request_parts(parts, state).await else {
            return Err(StatusCode::NOT_FOUND.into_response());
        };

        parse_sender_id(&raw)
    }
}

fn parse_sender_id(raw: &str) -> Result<SenderId, Response> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatusCode::NOT_FOUND.into_response());
    }

    match raw.parse::<i64>() {
        Ok(id) => Ok(SenderId(id)),
        Err(_) => Err(PaymentsApiError::InvalidUserId.value().into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse() {
        assert_eq!(parse_sender_id("0").unwrap(), SenderId(0));
        assert_eq!(parse_sender_id("0042").unwrap(), SenderId(42));
    }

    #[test]
    fn non_digits_look_like_an_unmatched_route() {
        for raw in ["abc", "-1", "1a", "+1", " 1", ""] {
            let res = parse_sender_id(raw).unwrap_err();
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{:?}", raw);
        }
    }

    #[test]
    fn overflowing_digits_are_a_bad_request() {
        let res = parse_sender_id("99999999999999999999").unwrap_err();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
