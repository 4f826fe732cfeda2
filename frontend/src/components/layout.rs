use crate::{
    api::ApiClient,
    components::notification::NotificationToast,
    state::{
        auth::{self, use_auth},
        shell::{use_shell, ShellEvent},
    },
    utils::navigation::LOGIN_PATH,
};
use leptos::*;

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/dashboard", label: "Dashboard", admin_only: false },
    NavItem { href: "/attendance", label: "Attendance", admin_only: false },
    NavItem { href: "/requests", label: "Requests", admin_only: false },
    NavItem { href: "/documents", label: "Documents", admin_only: false },
    NavItem { href: "/profile", label: "Profile", admin_only: false },
    NavItem { href: "/admin/employees", label: "Employees", admin_only: true },
];

pub fn visible_nav_items(is_admin: bool) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| is_admin || !item.admin_only)
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let shell = use_shell();
    let drawer_open = shell.state;
    let logout = auth::use_logout();
    let navigator = store_value(use_context::<ApiClient>().unwrap_or_default().navigator());

    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name())
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        logout.call(());
        navigator.get_value().navigate(LOGIN_PATH);
    };
    let toggle_drawer = move |_| shell.dispatch(ShellEvent::ToggleDrawer);

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=toggle_drawer
                            aria-expanded=move || drawer_open.get().drawer_open
                            aria-controls="side-bar"
                        >
                            <span class="sr-only">
                                {move || if drawer_open.get().drawer_open { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                        <h1 class="text-xl font-semibold text-gray-900">"Workforce"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-600">{display_name}</span>
                        <button
                            on:click=on_logout
                            class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100"
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SideBar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let shell = use_shell();
    let state = shell.state;
    let items = move || visible_nav_items(auth.get().is_admin());
    let close = move |_| shell.dispatch(ShellEvent::CloseDrawer);

    view! {
        <Show when=move || state.get().drawer_open>
            <div class="fixed inset-0 z-40 flex">
                <div class="fixed inset-0 bg-black/30" on:click=close></div>
                <nav id="side-bar" class="relative flex w-64 flex-col bg-white shadow-xl px-4 py-6 space-y-1">
                    <div class="px-3 pb-4 text-xs font-semibold uppercase text-gray-500">
                        {move || if state.get().clocked_in { "On shift" } else { "Off shift" }}
                    </div>
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="block text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100"
                                        on:click=close
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
            </div>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <SideBar/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <NotificationToast/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}
