use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn RequestsLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Requests"}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {"Submit overtime, leave and reimbursement requests and follow their status."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
