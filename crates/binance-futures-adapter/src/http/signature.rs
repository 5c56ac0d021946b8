/*
[INPUT]:  Canonical query string and the account's API secret
[OUTPUT]: Lowercase hex HMAC-SHA256 signature for the `signature` parameter
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or canonical string format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs canonical query strings for authenticated endpoints
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl RequestSigner {
    /// Create a new request signer from the account's API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into().into_bytes(),
        }
    }

    /// Sign the exact query string that will be sent on the wire
    ///
    /// Returns the lowercase hex digest appended as the `signature`
    /// parameter. The payload must already contain `timestamp` (and
    /// `recvWindow` when present); the signature is always last.
    pub fn sign(&self, payload: &str) -> String {
        // HMAC-SHA256 accepts keys of any length, construction cannot fail
        let mut mac = HmacSha256::new_from_slice(&self.secret).expect("hmac key");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

// The secret must never leak through Debug output or logs.
impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
