use crate::{
    api::Employee,
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    utils::load_state::LoadState,
};
use leptos::*;

use super::{
    components::{
        catalogs::CatalogsPanel, certifications::CertificationsPanel,
        employee_form::EmployeeForm, employee_list::EmployeeList,
    },
    layout::EmployeesFrame,
    view_model::use_admin_employees_view_model,
};

#[component]
pub fn AdminEmployeesPage() -> impl IntoView {
    let vm = use_admin_employees_view_model();
    let load_state = vm.load_state();
    let directory = vm.directory();

    let on_edit = Callback::new(move |employee: Employee| vm.edit(&employee));
    let on_delete = Callback::new(move |id: String| vm.delete_action.dispatch(id));
    let on_certifications = Callback::new(move |employee: Employee| vm.select_employee(employee));

    view! {
        <Layout>
            <EmployeesFrame>
                <EmployeeForm vm=vm />
                {move || match load_state.get() {
                    LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                    LoadState::Failed(message) => view! {
                        <div>
                            <ErrorMessage message=message />
                            <button
                                type="button"
                                class="px-4 py-2 rounded bg-blue-600 text-white"
                                on:click=move |_| vm.retry()
                            >
                                {"Retry"}
                            </button>
                        </div>
                    }
                    .into_view(),
                    LoadState::Ready => view! {
                        <EmployeeList
                            directory=directory
                            on_edit=on_edit
                            on_delete=on_delete
                            on_certifications=on_certifications
                        />
                    }
                    .into_view(),
                }}
                <CertificationsPanel vm=vm />
                <Show when=move || load_state.get() == LoadState::Ready>
                    <CatalogsPanel vm=vm />
                </Show>
            </EmployeesFrame>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError, Certification};
    use crate::pages::admin_employees::repository::EmployeeDirectory;
    use crate::test_support::{
        helpers::{admin_profile, provide_auth},
        ssr::render_with_api,
    };
    use serde_json::json;

    fn api() -> ApiClient {
        ApiClient::new_with_base_url("http://localhost:9/api")
    }

    #[test]
    fn renders_form_and_list() {
        let html = render_with_api(api(), || {
            provide_auth(Some(admin_profile()));
            let vm = use_admin_employees_view_model();
            vm.directory_resource.set(Ok(EmployeeDirectory {
                employees: serde_json::from_value(json!([{
                    "id": "e1",
                    "firstName": "Grace",
                    "lastName": "Hopper",
                    "email": "grace@example.com"
                }]))
                .unwrap(),
                ..Default::default()
            }));
            view! { <AdminEmployeesPage /> }
        });
        assert!(html.contains("New employee"));
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("Organisation"));
    }

    #[test]
    fn shows_pending_certifications_with_review_buttons() {
        let html = render_with_api(api(), || {
            provide_auth(Some(admin_profile()));
            let vm = use_admin_employees_view_model();
            let employee: Employee = serde_json::from_value(json!({
                "id": "e1",
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com"
            }))
            .unwrap();
            vm.selected.set(Some(employee));
            let certs: Vec<Certification> = serde_json::from_value(json!([
                { "id": "c1", "name": "CPR", "status": "PENDING" },
                { "id": "c2", "name": "Forklift", "status": "APPROVED" }
            ]))
            .unwrap();
            vm.certifications_resource.set(Ok(certs));
            view! { <AdminEmployeesPage /> }
        });
        assert!(html.contains("Certifications: Grace Hopper"));
        assert!(html.contains("Forklift"));
        assert!(html.contains("Approved"));
        assert_eq!(html.matches("Reject").count(), 1);
    }

    #[test]
    fn shows_directory_error() {
        let html = render_with_api(api(), || {
            provide_auth(Some(admin_profile()));
            let vm = use_admin_employees_view_model();
            vm.directory_resource
                .set(Err(ApiError::request_failed("Forbidden")));
            view! { <AdminEmployeesPage /> }
        });
        assert!(html.contains("Error loading employees: Forbidden"));
        assert!(!html.contains("Organisation"));
    }
}
