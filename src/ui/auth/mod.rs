//! Authentication UI module
//!
//! The session context, the route guard, and the sign-in/register forms.

mod context;
mod guard;
mod login_form;
mod register_form;
mod user_menu;

pub use context::{BrowserStorage, SessionContext, provide_session_context, use_session};
pub use guard::RequireSession;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::{UserAvatar, UserMenu};
