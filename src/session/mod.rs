//! Session management.
//!
//! - [`Session`]: the signed-in user and their bearer token
//! - [`SessionStore`]: process-wide holder with login/logout, persisted
//!   through a [`SessionStorage`](crate::traits::SessionStorage)

pub(crate) mod model;
mod store;

pub use model::{jwt_expiry, Session};
pub use store::{LoginOutcome, SessionStore};
