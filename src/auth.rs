//! Credentials, claim sets, and the RS256 signer/verifier pair.

pub mod api_key;
pub mod claims;
pub mod credential;
pub mod secret;
pub mod signer;
pub mod verifier;

pub use api_key::*;
pub use claims::*;
pub use credential::*;
pub use secret::*;
pub use signer::*;
pub use verifier::*;
