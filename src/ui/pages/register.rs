use leptos::prelude::*;

use crate::ui::auth::RegisterForm;
use crate::ui::navbar::AuthCard;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthCard>
            <RegisterForm />
        </AuthCard>
    }
}
