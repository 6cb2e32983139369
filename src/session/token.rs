// ============================================================================
// TOKEN - Claim extraction from the session token
// ============================================================================
// The signature is never checked here; trust lives server-side. The decoded
// role is a UI hint only and every protected call is re-authorized by the
// backend.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

use crate::models::auth::{AuthUser, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token must have 3 segments")]
    BadStructure,
    #[error("payload segment is not decodable")]
    BadPayload,
    #[error("payload is missing user.id / user.role claims")]
    MissingClaims,
}

/// Extract the identity claims from a token's middle segment.
///
/// Fails when the token does not split into three segments, the payload is
/// not valid base64url/JSON, or the payload lacks a nested `user` object
/// with both `id` and `role`. Never panics past this boundary; the caller
/// treats any failure as "no session".
pub fn decode_claims(token: &str) -> Result<AuthUser, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 || parts[1].is_empty() {
        return Err(TokenError::BadStructure);
    }

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|_| TokenError::BadPayload)?;

    let payload: serde_json::Value =
        serde_json::from_slice(&payload_bytes).map_err(|_| TokenError::BadPayload)?;

    let user = payload.get("user").ok_or(TokenError::MissingClaims)?;
    let id = user
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or(TokenError::MissingClaims)?;
    let role = user
        .get("role")
        .and_then(|v| v.as_str())
        .ok_or(TokenError::MissingClaims)?;

    Ok(AuthUser {
        id: id.to_string(),
        role: Role::parse(role),
    })
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    use super::*;

    fn make_test_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let signature = URL_SAFE_NO_PAD.encode(b"sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decode_extracts_id_and_role() {
        let token = make_test_token(serde_json::json!({
            "user": { "id": "u1", "role": "donor" }
        }));
        let user = decode_claims(&token).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Donor);
    }

    #[test]
    fn missing_segments_fail() {
        assert_eq!(decode_claims("onlyonepart"), Err(TokenError::BadStructure));
        assert_eq!(decode_claims("two.parts"), Err(TokenError::BadStructure));
        assert_eq!(decode_claims("a..c"), Err(TokenError::BadStructure));
        assert_eq!(
            decode_claims("a.b.c.d"),
            Err(TokenError::BadStructure)
        );
    }

    #[test]
    fn undecodable_payload_fails() {
        assert_eq!(
            decode_claims("head.!!!not-base64!!!.sig"),
            Err(TokenError::BadPayload)
        );
        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert_eq!(
            decode_claims(&format!("head.{not_json}.sig")),
            Err(TokenError::BadPayload)
        );
    }

    #[test]
    fn missing_user_claims_fail() {
        let no_user = make_test_token(serde_json::json!({ "sub": "u1" }));
        assert_eq!(decode_claims(&no_user), Err(TokenError::MissingClaims));

        let no_id = make_test_token(serde_json::json!({ "user": { "role": "donor" } }));
        assert_eq!(decode_claims(&no_id), Err(TokenError::MissingClaims));

        let no_role = make_test_token(serde_json::json!({ "user": { "id": "u1" } }));
        assert_eq!(decode_claims(&no_role), Err(TokenError::MissingClaims));
    }

    #[test]
    fn unrecognized_role_still_decodes() {
        let token = make_test_token(serde_json::json!({
            "user": { "id": "u9", "role": "astronaut" }
        }));
        let user = decode_claims(&token).unwrap();
        assert_eq!(user.role, Role::Unknown);
    }
}
