//! Common reusable UI components shared by the auth views

pub mod form;
pub mod message;

pub use form::{FormField, SubmitButton};
pub use message::{ErrorMessage, SuccessMessage};
