//! Application pages module
//!
//! Public auth views (sign-in, register, password reset) and the guarded
//! views that consume the session (home, profile, edit profile, catalog
//! frames, admin).

mod catalog;
mod edit_profile;
mod forgot_password;
mod home;
mod not_found;
mod profile;
mod register;
mod reset_password;
mod sign_in;

pub use catalog::{AdminDashboardPage, CatalogPage};
pub use edit_profile::EditProfilePage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use sign_in::SignInPage;
