//! Shared types used across all modules.
//!
//! Records deserialized from the REST resource live here so the client,
//! the controllers and the renderers agree on one definition.

pub mod user;

pub use user::User;
