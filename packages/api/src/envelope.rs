use serde::Deserialize;

use crate::error::ApiError;

/// The uniform wrapper every backend response shares.
///
/// `details` is an untyped array the backend attaches to validation errors;
/// the client never interprets it beyond carrying it for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    /// Collapse HTTP status + envelope into the tagged result callers match.
    ///
    /// A non-2xx status or `success: false` both become [`ApiError::Server`],
    /// carrying the envelope's `error` (falling back to `message`, then to a
    /// generic status line). On success the payload stays optional: several
    /// endpoints (delete, contact submit) confirm with only a `message`.
    pub fn into_result(self, status: u16) -> Result<Option<T>, ApiError> {
        if !(200..300).contains(&status) || !self.success {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| format!("HTTP error! status: {status}"));
            return Err(ApiError::Server { status, message });
        }
        Ok(self.data)
    }
}

/// Decode a response body into the envelope and collapse it into a result.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, ApiError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result(status),
        // A failed status with an unparsable body is still a server error;
        // only a 2xx with garbage is a malformed response.
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Server {
            status,
            message: format!("HTTP error! status: {status}"),
        }),
        Err(e) => Err(ApiError::InvalidResponse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_success_with_data() {
        let out: Option<Payload> =
            decode(200, r#"{"success":true,"data":{"value":7}}"#).unwrap();
        assert_eq!(out, Some(Payload { value: 7 }));
    }

    #[test]
    fn test_success_without_data() {
        let out: Option<Payload> =
            decode(200, r#"{"success":true,"message":"deleted"}"#).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn test_success_false_on_2xx_is_server_error() {
        let err = decode::<Payload>(200, r#"{"success":false,"error":"nope"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 200,
                message: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_non_2xx_uses_envelope_error() {
        let err =
            decode::<Payload>(404, r#"{"success":false,"error":"Project not found"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Project not found".to_string()
            }
        );
    }

    #[test]
    fn test_non_2xx_with_garbage_body_is_server_error() {
        let err = decode::<Payload>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 502, .. }));
    }

    #[test]
    fn test_2xx_with_garbage_body_is_invalid_response() {
        let err = decode::<Payload>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_error_falls_back_to_message() {
        let err = decode::<Payload>(500, r#"{"success":false,"message":"boom"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }
}
