//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`User`] - An account in the user directory, including its password hash
//! - [`ShortLink`] - A stored short code to long URL mapping
//!
//! `User` is the internal record; the client-facing shape that omits the
//! password hash is [`crate::api::dto::users::UserResponse`]. Creation and
//! update inputs get their own structs (`NewUser`, `UserUpdate`).

pub mod short_link;
pub mod user;

pub use short_link::ShortLink;
pub use user::{NewUser, User, UserUpdate};
