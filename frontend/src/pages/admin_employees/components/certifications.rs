use crate::{
    api::{Certification, CertificationStatus},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
        status_badge::CertificationBadge,
    },
    pages::admin_employees::{
        repository::CertificationDecision,
        utils::CertificationFormState,
        view_model::{AdminEmployeesViewModel, ReviewTarget},
    },
    utils::{load_state::LoadState, time::format_date},
};
use leptos::{ev, *};

fn date_range(cert: &Certification) -> String {
    match (cert.issued_on, cert.expires_on) {
        (Some(issued), Some(expires)) => {
            format!("{} to {}", format_date(issued), format_date(expires))
        }
        (Some(issued), None) => format!("Issued {}", format_date(issued)),
        (None, Some(expires)) => format!("Expires {}", format_date(expires)),
        (None, None) => String::new(),
    }
}

#[component]
fn CertificationForm(vm: AdminEmployeesViewModel) -> impl IntoView {
    let form = vm.certification_form;
    let messages = vm.certification_messages;
    let pending = vm.certification_action.pending();
    let is_editing = Signal::derive(move || form.with(CertificationFormState::is_editing));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_certification();
    };
    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&CertificationFormState) -> String,
                      set: fn(&mut CertificationFormState, String)| {
        view! {
            <div>
                <label class="block text-sm font-medium text-gray-700">{label}</label>
                <input
                    type=kind
                    class="mt-1 w-full border rounded px-2 py-1"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| set(state, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="border-t pt-4 space-y-3">
            <h4 class="text-sm font-medium text-gray-900">
                {move || if is_editing.get() { "Edit certification" } else { "Add certification" }}
            </h4>
            <InlineErrorMessage error=Signal::derive(move || messages.get().error) />
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message=messages.get().success.unwrap_or_default() />
            </Show>
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                {field("Name", "text", |s| s.name.clone(), |s, v| s.name = v)}
                {field("Issuer", "text", |s| s.issuer.clone(), |s, v| s.issuer = v)}
                {field("Issued on", "date", |s| s.issued_on.clone(), |s, v| s.issued_on = v)}
                {field("Expires on", "date", |s| s.expires_on.clone(), |s, v| s.expires_on = v)}
                <div class="md:col-span-2 flex gap-2">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 bg-blue-600 text-white rounded disabled:opacity-50"
                    >
                        {move || match (pending.get(), is_editing.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save certification",
                            (false, false) => "Add certification",
                        }}
                    </button>
                    <Show when=move || is_editing.get()>
                        <button
                            type="button"
                            class="px-4 py-2 border rounded text-gray-700"
                            on:click=move |_| vm.cancel_certification_edit()
                        >
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn CertificationsPanel(vm: AdminEmployeesViewModel) -> impl IntoView {
    let selected = vm.selected;
    let state = vm.certifications_state();
    let resource = vm.certifications_resource;
    let pending = vm.review_action.pending();
    let deleting = vm.certification_action.pending();
    let certifications =
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default());

    let review = move |certification_id: String, decision: CertificationDecision| {
        if let Some(employee) = selected.get_untracked() {
            vm.review_action.dispatch(ReviewTarget {
                employee_id: employee.id,
                certification_id,
                decision,
            });
        }
    };

    view! {
        <Show when=move || selected.get().is_some()>
            <div class="bg-white shadow rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-medium text-gray-900">
                        {move || {
                            selected
                                .get()
                                .map(|e| format!("Certifications: {} {}", e.first_name, e.last_name))
                        }}
                    </h3>
                    <button type="button" class="text-sm text-gray-500" on:click=move |_| selected.set(None)>
                        {"Close"}
                    </button>
                </div>
                {move || match state.get() {
                    LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                    LoadState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                    LoadState::Ready if certifications.get().is_empty() => {
                        view! { <EmptyState title="No certifications submitted" /> }.into_view()
                    }
                    LoadState::Ready => view! {
                        <ul class="divide-y divide-gray-200">
                            <For
                                each=move || certifications.get()
                                key=|cert| format!("{}:{:?}", cert.id, cert.status)
                                children=move |cert: Certification| {
                                    let approve_id = cert.id.clone();
                                    let reject_id = cert.id.clone();
                                    let delete_id = cert.id.clone();
                                    let edit_target = cert.clone();
                                    let reviewable = cert.status == CertificationStatus::Pending;
                                    view! {
                                        <li class="py-3 flex items-center justify-between">
                                            <div>
                                                <p class="text-sm font-medium text-gray-900">{cert.name.clone()}</p>
                                                <p class="text-xs text-gray-500">
                                                    {cert.issuer.clone().unwrap_or_default()}
                                                    " "
                                                    {date_range(&cert)}
                                                </p>
                                            </div>
                                            <div class="flex items-center gap-3">
                                                <CertificationBadge status=cert.status />
                                                <Show when=move || reviewable>
                                                    <button type="button"
                                                        class="text-sm text-green-700 hover:underline disabled:opacity-50"
                                                        disabled=move || pending.get()
                                                        on:click={
                                                            let id = approve_id.clone();
                                                            move |_| review(id.clone(), CertificationDecision::Approve)
                                                        }>
                                                        {"Approve"}
                                                    </button>
                                                    <button type="button"
                                                        class="text-sm text-red-700 hover:underline disabled:opacity-50"
                                                        disabled=move || pending.get()
                                                        on:click={
                                                            let id = reject_id.clone();
                                                            move |_| review(id.clone(), CertificationDecision::Reject)
                                                        }>
                                                        {"Reject"}
                                                    </button>
                                                </Show>
                                                <button type="button"
                                                    class="text-sm text-blue-600 hover:underline"
                                                    on:click=move |_| vm.edit_certification(&edit_target)>
                                                    {"Edit"}
                                                </button>
                                                <button type="button"
                                                    class="text-sm text-red-600 hover:underline disabled:opacity-50"
                                                    disabled=move || deleting.get()
                                                    on:click=move |_| vm.delete_certification(delete_id.clone())>
                                                    {"Delete"}
                                                </button>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }
                    .into_view(),
                }}
                <CertificationForm vm=vm />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_range_describes_known_dates() {
        let mut cert = Certification {
            id: "c1".into(),
            name: "CPR".into(),
            issuer: None,
            issued_on: NaiveDate::from_ymd_opt(2024, 1, 2),
            expires_on: NaiveDate::from_ymd_opt(2026, 1, 2),
            status: CertificationStatus::Pending,
        };
        assert_eq!(date_range(&cert), "Jan 2, 2024 to Jan 2, 2026");
        cert.expires_on = None;
        assert_eq!(date_range(&cert), "Issued Jan 2, 2024");
        cert.issued_on = None;
        assert_eq!(date_range(&cert), "");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, Employee};
    use crate::pages::admin_employees::view_model::use_admin_employees_view_model;
    use crate::test_support::ssr::render_with_api;
    use serde_json::json;

    fn render(editing: Option<CertificationFormState>) -> String {
        render_with_api(ApiClient::new_with_base_url("http://localhost:9/api"), move || {
            let vm = use_admin_employees_view_model();
            let employee: Employee = serde_json::from_value(json!({
                "id": "e1",
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com"
            }))
            .unwrap();
            vm.select_employee(employee);
            let certs: Vec<Certification> = serde_json::from_value(json!([
                { "id": "c1", "name": "CPR", "issuer": "Red Cross", "status": "APPROVED" }
            ]))
            .unwrap();
            vm.certifications_resource.set(Ok(certs));
            if let Some(form) = editing {
                vm.certification_form.set(form);
            }
            view! { <CertificationsPanel vm=vm /> }
        })
    }

    #[test]
    fn rows_offer_edit_and_delete_with_add_form() {
        let html = render(None);
        assert!(html.contains("Red Cross"));
        assert!(html.contains("Edit"));
        assert!(html.contains("Delete"));
        assert!(html.contains("Add certification"));
    }

    #[test]
    fn editing_switches_form_heading() {
        let html = render(Some(CertificationFormState {
            editing_id: Some("c1".into()),
            name: "CPR".into(),
            ..Default::default()
        }));
        assert!(html.contains("Edit certification"));
        assert!(html.contains("Save certification"));
    }
}
