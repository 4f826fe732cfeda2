use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, CreateOvertimeRequest, CreateReimbursementRequest,
    RequestKind,
};
use crate::components::notification::{use_notifications, Notifications};
use crate::pages::requests::{
    repository::RequestsRepository,
    types::{merge_requests, RequestLists},
    utils::{
        LeaveFormState, MessageState, OvertimeFormState, ReimbursementFormState,
        RequestListState,
    },
};
use crate::utils::load_state::LoadState;
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelTarget {
    pub kind: RequestKind,
    pub id: String,
}

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub list: RwSignal<RequestListState>,
    pub requests_resource: Resource<u32, Result<RequestLists, ApiError>>,
    pub reload: RwSignal<u32>,
    pub active_form: RwSignal<RequestKind>,
    pub leave_state: LeaveFormState,
    pub overtime_state: OvertimeFormState,
    pub reimbursement_state: ReimbursementFormState,
    pub leave_message: RwSignal<MessageState>,
    pub overtime_message: RwSignal<MessageState>,
    pub reimbursement_message: RwSignal<MessageState>,
    pub leave_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
    pub overtime_action: Action<CreateOvertimeRequest, Result<(), ApiError>>,
    pub reimbursement_action: Action<CreateReimbursementRequest, Result<(), ApiError>>,
    pub cancel_action: Action<CancelTarget, Result<CancelTarget, ApiError>>,
}

/// Replaces the records with a fresh merge, keeping the chosen filter and a
/// clamped page.
fn apply_loaded_requests(
    result: Option<Result<RequestLists, ApiError>>,
    list: RwSignal<RequestListState>,
) {
    if let Some(Ok(lists)) = result {
        list.update(|state| {
            state.requests = merge_requests(&lists);
            let page = state.page;
            state.go_to(page);
        });
    }
}

fn apply_cancel_result(
    result: Option<Result<CancelTarget, ApiError>>,
    list: RwSignal<RequestListState>,
    notifications: Notifications,
) {
    match result {
        Some(Ok(target)) => {
            list.update(|state| {
                state.mark_canceled(target.kind, &target.id);
            });
            notifications.success("Request canceled.");
        }
        Some(Err(err)) => {
            log::warn!("cancel failed: {}", err);
            notifications.error(format!("Could not cancel the request: {}", err.error));
        }
        None => {}
    }
}

fn apply_submit_result(
    result: Option<Result<(), ApiError>>,
    message: RwSignal<MessageState>,
    success: &str,
    reset: impl FnOnce(),
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success(success));
                reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl RequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = store_value(RequestsRepository::new(api));
        let notifications = use_notifications();

        let list = create_rw_signal(RequestListState::new(Vec::new()));
        let reload = create_rw_signal(0u32);
        let active_form = create_rw_signal(RequestKind::Leave);
        let leave_state = LeaveFormState::default();
        let overtime_state = OvertimeFormState::default();
        let reimbursement_state = ReimbursementFormState::default();
        let leave_message = create_rw_signal(MessageState::default());
        let overtime_message = create_rw_signal(MessageState::default());
        let reimbursement_message = create_rw_signal(MessageState::default());

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load_all().await }
            },
        );

        let leave_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_leave(payload).await.map(|_| ()) }
        });
        let overtime_action = create_action(move |payload: &CreateOvertimeRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_overtime(payload).await.map(|_| ()) }
        });
        let reimbursement_action = create_action(move |payload: &CreateReimbursementRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_reimbursement(payload).await.map(|_| ()) }
        });
        let cancel_action = create_action(move |target: &CancelTarget| {
            let repo = repository.get_value();
            let target = target.clone();
            async move { repo.cancel(target.kind, &target.id).await.map(|_| target) }
        });

        create_effect(move |_| apply_loaded_requests(requests_resource.get(), list));
        create_effect(move |_| apply_cancel_result(cancel_action.value().get(), list, notifications));
        create_effect(move |_| {
            apply_submit_result(
                leave_action.value().get(),
                leave_message,
                "Leave request submitted.",
                || leave_state.reset(),
                reload,
            )
        });
        create_effect(move |_| {
            apply_submit_result(
                overtime_action.value().get(),
                overtime_message,
                "Overtime request submitted.",
                || overtime_state.reset(),
                reload,
            )
        });
        create_effect(move |_| {
            apply_submit_result(
                reimbursement_action.value().get(),
                reimbursement_message,
                "Reimbursement request submitted.",
                || reimbursement_state.reset(),
                reload,
            )
        });

        Self {
            list,
            requests_resource,
            reload,
            active_form,
            leave_state,
            overtime_state,
            reimbursement_state,
            leave_message,
            overtime_message,
            reimbursement_message,
            leave_action,
            overtime_action,
            reimbursement_action,
            cancel_action,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.requests_resource;
        Signal::derive(move || {
            LoadState::from_result(
                "requests",
                resource.loading().get(),
                resource.get().as_ref(),
            )
        })
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn cancel(&self, kind: RequestKind, id: String) {
        self.cancel_action.dispatch(CancelTarget { kind, id });
    }
}

impl Default for RequestsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_requests_view_model() -> RequestsViewModel {
    match use_context::<RequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestStatus;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn lists() -> RequestLists {
        serde_json::from_value(json!({
            "overtime": [{ "id": "o1", "date": "2024-05-01", "status": "PENDING" }],
            "leave": [{
                "id": "l1",
                "startDate": "2024-05-03",
                "endDate": "2024-05-04",
                "status": "APPROVED"
            }],
            "reimbursement": [{ "id": "r1", "date": "2024-04-20", "amount": 9.0 }]
        }))
        .unwrap()
    }

    fn loaded() -> RwSignal<RequestListState> {
        let list = create_rw_signal(RequestListState::new(Vec::new()));
        apply_loaded_requests(Some(Ok(lists())), list);
        list
    }

    #[test]
    fn loaded_lists_are_merged_newest_first() {
        with_runtime(|| {
            let list = loaded();
            let keys: Vec<_> = list.get().visible().iter().map(|r| r.key()).collect();
            assert_eq!(keys, vec!["LEAVE:l1", "OVERTIME:o1", "REIMBURSEMENT:r1"]);
        });
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        with_runtime(|| {
            let list = loaded();
            apply_loaded_requests(Some(Err(ApiError::request_failed("offline"))), list);
            assert_eq!(list.get().requests.len(), 3);
        });
    }

    #[test]
    fn successful_cancel_updates_only_target_and_toasts() {
        with_runtime(|| {
            let list = loaded();
            let notifications = use_notifications();
            apply_cancel_result(
                Some(Ok(CancelTarget {
                    kind: RequestKind::Overtime,
                    id: "o1".into(),
                })),
                list,
                notifications,
            );

            let statuses: Vec<_> = list.get().requests.iter().map(|r| r.status).collect();
            assert_eq!(
                statuses,
                vec![
                    RequestStatus::Approved,
                    RequestStatus::Canceled,
                    RequestStatus::Pending
                ]
            );
            assert_eq!(
                notifications.current().map(|t| t.message).as_deref(),
                Some("Request canceled.")
            );
        });
    }

    #[test]
    fn failed_cancel_leaves_records_untouched() {
        with_runtime(|| {
            let list = loaded();
            let before = list.get();
            let notifications = use_notifications();
            apply_cancel_result(
                Some(Err(ApiError::new("HTTP_409", "Already approved"))),
                list,
                notifications,
            );
            assert_eq!(list.get(), before);
            let toast = notifications.current().unwrap();
            assert!(toast.message.contains("Already approved"));
        });
    }

    #[test]
    fn submit_result_resets_form_and_reloads() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            let form = OvertimeFormState::default();
            form.hours_signal().set("2".into());

            apply_submit_result(Some(Ok(())), message, "Sent.", || form.reset(), reload);
            assert_eq!(reload.get(), 1);
            assert_eq!(form.hours_signal().get(), "");
            assert_eq!(message.get().success.as_deref(), Some("Sent."));

            apply_submit_result(
                Some(Err(ApiError::validation("bad"))),
                message,
                "Sent.",
                || form.reset(),
                reload,
            );
            assert_eq!(reload.get(), 1);
            assert!(message.get().error.is_some());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn load_state_follows_resource() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_context(ApiClient::new_with_base_url("http://localhost:9/api"));
            let vm = RequestsViewModel::new();
            vm.requests_resource
                .set(Err(ApiError::request_failed("Network down")));
            assert_eq!(
                vm.load_state().get(),
                LoadState::Failed("Error loading requests: Network down".into())
            );

            vm.requests_resource.set(Ok(RequestLists::default()));
            assert_eq!(vm.load_state().get(), LoadState::Ready);
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
