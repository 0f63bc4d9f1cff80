//! Bearer-token payload inspection.
//!
//! The client reads the token's middle segment (base64url JSON) to learn the
//! subject id, role, and expiry. There is deliberately no signature check:
//! the backend validates the token on every request, and nothing
//! security-relevant is decided client-side beyond which pages to render.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::web::log;

const LEGACY_NAMEID_CLAIM: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
const LEGACY_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Claims the client cares about. Older backend builds emitted the full
/// XML-schema claim URIs, so both spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    nameid: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default, rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier")]
    nameid_legacy: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default, rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    role_legacy: Option<String>,
    #[serde(default)]
    exp: Option<u64>,
}

impl TokenClaims {
    pub fn subject_id(&self) -> Option<&str> {
        self.nameid
            .as_deref()
            .or(self.sub.as_deref())
            .or(self.nameid_legacy.as_deref())
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().or(self.role_legacy.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }

    /// A token whose expiry has passed (or arrived) is dead.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Decodes the payload segment of a compact token. Malformed input is
/// logged and mapped to `None`; it never propagates as an error.
pub fn decode(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    // Some issuers pad the segment; the url-safe alphabet never needs it.
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn(&format!("discarding malformed token payload: {e}"));
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::warn(&format!("discarding undecodable token claims: {e}"));
            None
        }
    }
}

/// Three-state validity of the stored token.
#[derive(Debug, Clone)]
pub enum TokenStatus {
    /// No token is stored; validity is unknown rather than false.
    Missing,
    /// Present but malformed or expired.
    Invalid,
    Valid(TokenClaims),
}

impl TokenStatus {
    pub fn of(token: Option<&str>, now_secs: u64) -> Self {
        let Some(token) = token else {
            return TokenStatus::Missing;
        };
        match decode(token) {
            Some(claims) if !claims.is_expired(now_secs) => TokenStatus::Valid(claims),
            Some(_) => TokenStatus::Invalid,
            None => TokenStatus::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_modern_claim_names() {
        let token = token_with_payload(r#"{"nameid":"42","role":"Admin","exp":4102444800}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.subject_id(), Some("42"));
        assert_eq!(claims.role(), Some("Admin"));
        assert!(claims.is_admin());
        assert!(!claims.is_expired(1_700_000_000));
    }

    #[test]
    fn falls_back_to_sub_then_legacy_uri() {
        let token = token_with_payload(r#"{"sub":"9","exp":4102444800}"#);
        assert_eq!(decode(&token).unwrap().subject_id(), Some("9"));

        let token = token_with_payload(
            r#"{"http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier":"17",
                "http://schemas.microsoft.com/ws/2008/06/identity/claims/role":"User"}"#,
        );
        let claims = decode(&token).unwrap();
        assert_eq!(claims.subject_id(), Some("17"));
        assert_eq!(claims.role(), Some("User"));
        assert!(!claims.is_admin());
    }

    #[test]
    fn expiry_is_inclusive() {
        let token = token_with_payload(r#"{"nameid":"1","exp":1000}"#);
        let claims = decode(&token).unwrap();
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
        assert!(!claims.is_expired(999));
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert!(decode("not-a-token").is_none());
        assert!(decode("a.!!!.c").is_none());
        // Valid base64 but not JSON.
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
        assert!(decode(&token).is_none());
    }

    #[test]
    fn padded_payloads_are_accepted() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"nameid":"5"}"#);
        let token = format!("h.{payload}==.s");
        assert_eq!(decode(&token).unwrap().subject_id(), Some("5"));
    }

    #[test]
    fn status_three_states() {
        assert!(matches!(TokenStatus::of(None, 0), TokenStatus::Missing));
        assert!(matches!(
            TokenStatus::of(Some("garbage"), 0),
            TokenStatus::Invalid
        ));

        let expired = token_with_payload(r#"{"nameid":"1","exp":10}"#);
        assert!(matches!(
            TokenStatus::of(Some(&expired), 11),
            TokenStatus::Invalid
        ));

        let live = token_with_payload(r#"{"nameid":"1","exp":4102444800}"#);
        assert!(matches!(
            TokenStatus::of(Some(&live), 1_700_000_000),
            TokenStatus::Valid(_)
        ));
    }
}
