//! Provider-facing descriptors (data) and capabilities (behavior).
//!
//! `endpoints` holds the fixed OAuth1 servlet suffixes and the callback sentinel.
//! `descriptor` exposes the immutable [`ConnectorDescriptor`] and its builder.
//! `capability` defines [`VcsServer`], the contract every provider variant implements so
//! the platform can treat Bitbucket, GitHub, or GitLab connectors uniformly.

pub mod capability;
pub mod descriptor;
pub mod endpoints;

pub use capability::*;
pub use descriptor::*;
pub use endpoints::*;
