//! Authentication: token exchange and session establishment.
//!
//! The per-request authentication token lives for about five seconds, so
//! every data call walks the full cycle: credentials to [`Token`], token to
//! [`Session`], session token onto the request.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::{Session, Token};
pub use tokens::{AccessToken, AuthToken, RefreshToken};

pub(crate) use session::{establish_session, exchange_token};
