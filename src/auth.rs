//! Connector identity material, redacted secrets, and OAuth1 token pairs.

pub mod id;
pub mod key;
pub mod token;

pub use id::*;
pub use key::*;
pub use token::{credentials::*, secret::*};
