//! Credentials and request signing.
//!
//! ## Security Model
//!
//! The private key is the HMAC key and is never exposed: no accessor, and
//! `Debug` redacts it. Signing covers the full request URL — base, path, and
//! the encoded query string with the nonce already appended — so a captured
//! signature cannot be replayed against a different query.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// API credentials: public key, HMAC private key, and the optional third
/// credential slot some hosts pass through (unused by this venue).
#[derive(Clone)]
pub struct ApiCredentials {
    public_key: String,
    private_key: String,
    extra: Option<String>,
}

impl ApiCredentials {
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        extra: Option<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            extra,
        }
    }

    /// The public key, sent as the `apikey` query parameter.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Lower-case hex HMAC-SHA512 digest of the full request URL, attached
    /// as the `apisign` header.
    pub fn sign(&self, url: &str) -> String {
        // HMAC accepts keys of any length; new_from_slice cannot fail here.
        let mut mac = HmacSha512::new_from_slice(self.private_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(url.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("extra", &self.extra.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}
