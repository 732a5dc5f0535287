//! Core session model, route table and backend client

pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
mod guard;
mod routes;
mod session;
#[cfg(test)]
mod tests;
pub mod validation;

pub use guard::{GuardOutcome, guard};
pub use routes::{AppRoute, HOME_PATH, RouteAccess, SIGN_IN_PATH};
pub use session::*;
