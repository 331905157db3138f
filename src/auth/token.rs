//! OAuth1 token pairs exchanged during and after the three-legged flow.

pub mod credentials;
pub mod secret;
