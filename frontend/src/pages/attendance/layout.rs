use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Attendance"}</h1>
                    <p class="mt-1 text-sm text-gray-600">{"Your completed shifts, newest first."}</p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
