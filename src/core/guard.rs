//! Route guard decision
//!
//! The guard only asks whether a user is present. Role checks stay inside the
//! views that need them.

use crate::core::routes::SIGN_IN_PATH;
use crate::core::session::Session;

/// What a guarded route should show for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the wrapped view unchanged
    Render,
    /// Render nothing of the wrapped view and navigate to the given path
    Redirect(&'static str),
}

pub fn guard(session: &Session) -> GuardOutcome {
    if session.user().is_some() {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(SIGN_IN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{Credential, Role, User};

    #[test]
    fn test_signed_out_redirects_to_sign_in() {
        assert_eq!(
            guard(&Session::SignedOut),
            GuardOutcome::Redirect("/signin")
        );
    }

    #[test]
    fn test_signed_in_renders() {
        let session = Session::SignedIn {
            user: User {
                id: "1".to_string(),
                username: "u".to_string(),
                email: "u@example.com".to_string(),
                role: Role::User,
                profile_pic_url: None,
            },
            credential: Credential::new("t"),
        };
        assert_eq!(guard(&session), GuardOutcome::Render);
    }
}
