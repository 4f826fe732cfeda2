use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                {children()}
            </div>
        </Layout>
    }
}
