use leptos::*;

#[component]
pub fn EmployeesFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{"Employees"}</h1>
                <p class="mt-1 text-sm text-gray-600">
                    {"Maintain employee records and review submitted certifications."}
                </p>
            </div>
            {children()}
        </div>
    }
}
