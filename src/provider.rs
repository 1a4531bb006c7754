//! Provider-facing descriptors (data) and profile strategies (behavior).
//!
//! `descriptor` exposes validated metadata (`ProviderDescriptor`) covering the OAuth 1.0a
//! endpoints, the profile endpoint, the strategy name, and the session key.
//! `strategy` defines [`ProfileStrategy`], the hook generic flows call once access
//! credentials are in hand to turn a provider payload into a [`Profile`](crate::auth::Profile).

pub mod builder;
pub mod descriptor;
pub mod strategy;

pub use builder::*;
pub use descriptor::*;
pub use strategy::*;
