use crate::pages::login::{
    components::form::{LoginForm, SignupForm},
    view_model::{oauth_authorize_url, use_login_view_model, use_signup_view_model},
};
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            action=vm.login_action
            oauth_url=oauth_authorize_url()
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let vm = use_signup_view_model();
    view! { <SignupForm form=vm.form error=vm.error action=vm.signup_action /> }
}
