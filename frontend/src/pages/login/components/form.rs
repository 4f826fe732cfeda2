use crate::api::{ApiError, LoginRequest, SignupRequest};
use crate::components::error::InlineErrorMessage;
use crate::pages::login::utils::{LoginFormState, SignupFormState};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";
const SUBMIT_CLASS: &str = "group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50";

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                required
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn MicrosoftSignInLink(href: Option<String>) -> impl IntoView {
    href.map(|href| {
        view! {
            <a
                href=href
                class="w-full flex justify-center py-2 px-4 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50"
            >
                {"Sign in with Microsoft"}
            </a>
        }
    })
}

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    action: Action<LoginRequest, Result<(), ApiError>>,
    oauth_url: Option<String>,
) -> impl IntoView {
    let pending = action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_request() {
            Ok(request) => {
                error.set(None);
                action.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        {"Sign in to Workforce"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"Employee self-service"}
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <TextField id="email" label="Email" input_type="email" autocomplete="username" value=form.email />
                    <TextField id="password" label="Password" input_type="password" autocomplete="current-password" value=form.password />
                    <InlineErrorMessage error=Signal::derive(move || error.get()) />
                    <button type="submit" disabled=move || pending.get() class=SUBMIT_CLASS>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <MicrosoftSignInLink href=oauth_url />
                <p class="text-center text-sm text-gray-600">
                    {"No account yet? "}
                    <a href="/signup" class="text-blue-600 hover:underline">{"Create one"}</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignupForm(
    form: SignupFormState,
    error: RwSignal<Option<ApiError>>,
    action: Action<SignupRequest, Result<(), ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_request() {
            Ok(request) => {
                error.set(None);
                action.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {"Create your account"}
                </h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="first_name" label="First name" autocomplete="given-name" value=form.first_name />
                        <TextField id="last_name" label="Last name" autocomplete="family-name" value=form.last_name />
                    </div>
                    <TextField id="email" label="Email" input_type="email" autocomplete="email" value=form.email />
                    <TextField id="password" label="Password" input_type="password" autocomplete="new-password" value=form.password />
                    <TextField id="confirm_password" label="Confirm password" input_type="password" autocomplete="new-password" value=form.confirm_password />
                    <InlineErrorMessage error=Signal::derive(move || error.get()) />
                    <button type="submit" disabled=move || pending.get() class=SUBMIT_CLASS>
                        {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    {"Already registered? "}
                    <a href="/login" class="text-blue-600 hover:underline">{"Sign in"}</a>
                </p>
            </div>
        </div>
    }
}
