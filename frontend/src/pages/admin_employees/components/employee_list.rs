use crate::{
    api::Employee,
    components::empty_state::EmptyState,
    pages::admin_employees::{repository::EmployeeDirectory, utils::catalog_name},
};
use leptos::*;

#[component]
pub fn EmployeeList(
    #[prop(into)] directory: Signal<EmployeeDirectory>,
    on_edit: Callback<Employee>,
    on_delete: Callback<String>,
    on_certifications: Callback<Employee>,
) -> impl IntoView {
    // Delete is two-step: the first click arms the row.
    let confirming = create_rw_signal(None::<String>);
    let employees = Signal::derive(move || directory.get().employees);

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">{"Employee list"}</h3>
            <Show
                when=move || !employees.get().is_empty()
                fallback=|| view! { <EmptyState title="No employees yet" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Email"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Department"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Job title"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children=move |employee: Employee| {
                                    let catalogs = directory.with_untracked(|d| d.catalogs.clone());
                                    let id = employee.id.clone();
                                    let armed = {
                                        let id = id.clone();
                                        Signal::derive(move || confirming.get().as_deref() == Some(id.as_str()))
                                    };
                                    let edit_target = employee.clone();
                                    let cert_target = employee.clone();
                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {format!("{} {}", employee.first_name, employee.last_name)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{employee.email.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {catalog_name(&catalogs.departments, employee.department_id.as_deref())}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {catalog_name(&catalogs.job_titles, employee.job_title_id.as_deref())}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {if employee.active { "Active" } else { "Inactive" }}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-3">
                                                <button type="button" class="text-blue-600 hover:underline"
                                                    on:click=move |_| on_edit.call(edit_target.clone())>
                                                    {"Edit"}
                                                </button>
                                                <button type="button" class="text-blue-600 hover:underline"
                                                    on:click=move |_| on_certifications.call(cert_target.clone())>
                                                    {"Certifications"}
                                                </button>
                                                <button type="button" class="text-red-600 hover:underline"
                                                    on:click=move |_| {
                                                        if armed.get_untracked() {
                                                            confirming.set(None);
                                                            on_delete.call(id.clone());
                                                        } else {
                                                            confirming.set(Some(id.clone()));
                                                        }
                                                    }>
                                                    {move || if armed.get() { "Confirm delete" } else { "Delete" }}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::CatalogEntry;
    use crate::pages::admin_employees::utils::Catalogs;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn resolves_catalog_names_in_rows() {
        let html = render_to_string(|| {
            let directory = EmployeeDirectory {
                employees: serde_json::from_value(json!([{
                    "id": "e1",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "departmentId": "d1",
                    "active": false
                }]))
                .unwrap(),
                catalogs: Catalogs {
                    departments: vec![CatalogEntry {
                        id: "d1".into(),
                        name: "Research".into(),
                        description: None,
                    }],
                    ..Default::default()
                },
            };
            view! {
                <EmployeeList
                    directory=Signal::derive(move || directory.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                    on_certifications=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Research"));
        assert!(html.contains("Inactive"));
        assert!(html.contains("Certifications"));
    }
}
