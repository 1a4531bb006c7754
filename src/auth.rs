//! Strategy identifiers, OAuth 1.0a credential pairs, and the normalized user profile.

pub mod credentials;
pub mod id;
pub mod profile;

pub use credentials::*;
pub use id::*;
pub use profile::*;
