//! Opaque bearer credentials.

use std::fmt;

use serde::Deserialize;

macro_rules! secret_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[cfg(test)]
            pub(crate) fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Returns the raw token value.
            ///
            /// # Security
            ///
            /// Use only when building requests. Never log this value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the server sent no token.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&"[REDACTED]").finish()
            }
        }
    };
}

secret_token!(
    /// OAuth access token, exchanged once for a [`Session`](super::Session).
    AccessToken
);

secret_token!(
    /// OAuth refresh token. Returned by the token endpoint but never used:
    /// every call starts over from the credentials.
    RefreshToken
);

secret_token!(
    /// Per-request authentication token embedded in the profile.
    ///
    /// Valid for roughly five seconds after the session is established.
    AuthToken
);
