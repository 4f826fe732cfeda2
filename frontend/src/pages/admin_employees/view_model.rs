use super::{
    repository::{
        AdminEmployeesRepository, CatalogCommand, CertificationCommand, CertificationDecision,
        EmployeeDirectory,
    },
    utils::{CatalogFormState, CertificationFormState, EmployeeFormState},
};
use crate::{
    api::{ApiClient, ApiError, Catalog, CatalogEntry, Certification, Employee, EmployeeUpsert},
    components::notification::{use_notifications, Notifications},
    pages::requests::utils::MessageState,
    utils::load_state::LoadState,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SaveEmployee {
    pub id: Option<String>,
    pub payload: EmployeeUpsert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    pub employee_id: String,
    pub certification_id: String,
    pub decision: CertificationDecision,
}

#[derive(Clone, Copy)]
pub struct AdminEmployeesViewModel {
    pub directory_resource: Resource<u32, Result<EmployeeDirectory, ApiError>>,
    pub reload: RwSignal<u32>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_messages: RwSignal<MessageState>,
    /// Employee whose certifications are shown.
    pub selected: RwSignal<Option<Employee>>,
    pub certifications_resource:
        Resource<(Option<String>, u32), Result<Vec<Certification>, ApiError>>,
    pub save_action: Action<SaveEmployee, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub review_action: Action<ReviewTarget, Result<CertificationDecision, ApiError>>,
    pub catalog_form: RwSignal<CatalogFormState>,
    pub catalog_messages: RwSignal<MessageState>,
    pub catalog_action: Action<CatalogCommand, (CatalogCommand, Result<(), ApiError>)>,
    pub certification_form: RwSignal<CertificationFormState>,
    pub certification_messages: RwSignal<MessageState>,
    pub certification_action:
        Action<CertificationCommand, (CertificationCommand, Result<(), ApiError>)>,
}

fn bump(signal: RwSignal<u32>) {
    signal.update(|value| *value = value.wrapping_add(1));
}

fn apply_save_result(
    result: Option<Result<Employee, ApiError>>,
    form: RwSignal<EmployeeFormState>,
    messages: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(employee)) => {
            let verb = if form.get_untracked().is_editing() {
                "updated"
            } else {
                "created"
            };
            messages.update(|state| {
                state.set_success(format!(
                    "Employee {} {} {}.",
                    employee.first_name, employee.last_name, verb
                ))
            });
            form.update(EmployeeFormState::reset);
            bump(reload);
        }
        Some(Err(err)) => messages.update(|state| state.set_error(err)),
        None => {}
    }
}

fn apply_delete_result(
    result: Option<Result<String, ApiError>>,
    form: RwSignal<EmployeeFormState>,
    selected: RwSignal<Option<Employee>>,
    notifications: Notifications,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(id)) => {
            if form.get_untracked().editing_id.as_deref() == Some(id.as_str()) {
                form.update(EmployeeFormState::reset);
            }
            if selected.get_untracked().map(|e| e.id) == Some(id) {
                selected.set(None);
            }
            notifications.success("Employee deleted.");
            bump(reload);
        }
        Some(Err(err)) => {
            notifications.error(format!("Could not delete the employee: {}", err.error))
        }
        None => {}
    }
}

fn apply_review_result(
    result: Option<Result<CertificationDecision, ApiError>>,
    notifications: Notifications,
    certifications_reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(decision)) => {
            notifications.success(decision.success_message());
            bump(certifications_reload);
        }
        Some(Err(err)) => {
            notifications.error(format!("Could not review the certification: {}", err.error))
        }
        None => {}
    }
}

/// Saves report inline under the form; deletes report through a toast.
fn apply_catalog_result(
    result: Option<(CatalogCommand, Result<(), ApiError>)>,
    form: RwSignal<CatalogFormState>,
    messages: RwSignal<MessageState>,
    notifications: Notifications,
    reload: RwSignal<u32>,
) {
    let Some((command, outcome)) = result else {
        return;
    };
    match (&command, outcome) {
        (CatalogCommand::Save { .. }, Ok(())) => {
            messages.update(|state| state.set_success(command.success_message()));
            form.update(CatalogFormState::reset);
            bump(reload);
        }
        (CatalogCommand::Save { .. }, Err(err)) => messages.update(|state| state.set_error(err)),
        (CatalogCommand::Delete { id, .. }, Ok(())) => {
            if form.get_untracked().editing_id.as_deref() == Some(id.as_str()) {
                form.update(CatalogFormState::reset);
            }
            notifications.success(command.success_message());
            bump(reload);
        }
        (CatalogCommand::Delete { .. }, Err(err)) => {
            notifications.error(format!("Could not delete the entry: {}", err.error))
        }
    }
}

fn apply_certification_result(
    result: Option<(CertificationCommand, Result<(), ApiError>)>,
    form: RwSignal<CertificationFormState>,
    messages: RwSignal<MessageState>,
    notifications: Notifications,
    certifications_reload: RwSignal<u32>,
) {
    let Some((command, outcome)) = result else {
        return;
    };
    match (&command, outcome) {
        (CertificationCommand::Save { .. }, Ok(())) => {
            messages.update(|state| state.set_success(command.success_message()));
            form.update(CertificationFormState::reset);
            bump(certifications_reload);
        }
        (CertificationCommand::Save { .. }, Err(err)) => {
            messages.update(|state| state.set_error(err))
        }
        (CertificationCommand::Delete { id, .. }, Ok(())) => {
            if form.get_untracked().editing_id.as_deref() == Some(id.as_str()) {
                form.update(CertificationFormState::reset);
            }
            notifications.success(command.success_message());
            bump(certifications_reload);
        }
        (CertificationCommand::Delete { .. }, Err(err)) => notifications.error(format!(
            "Could not delete the certification: {}",
            err.error
        )),
    }
}

impl AdminEmployeesViewModel {
    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.directory_resource;
        Signal::derive(move || {
            LoadState::from_result("employees", resource.loading().get(), resource.get().as_ref())
        })
    }

    pub fn directory(&self) -> Signal<EmployeeDirectory> {
        let resource = self.directory_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn certifications_state(&self) -> Signal<LoadState> {
        let resource = self.certifications_resource;
        Signal::derive(move || {
            LoadState::from_result(
                "certifications",
                resource.loading().get(),
                resource.get().as_ref(),
            )
        })
    }

    pub fn retry(&self) {
        bump(self.reload);
    }

    pub fn edit(&self, employee: &Employee) {
        self.form_messages.update(MessageState::clear);
        self.form.set(EmployeeFormState::from_employee(employee));
    }

    pub fn cancel_edit(&self) {
        self.form_messages.update(MessageState::clear);
        self.form.update(EmployeeFormState::reset);
    }

    /// Opens the certifications panel for `employee`.
    pub fn select_employee(&self, employee: Employee) {
        self.certification_messages.update(MessageState::clear);
        self.certification_form.update(CertificationFormState::reset);
        self.selected.set(Some(employee));
    }

    pub fn select_catalog(&self, catalog: Catalog) {
        self.catalog_messages.update(MessageState::clear);
        self.catalog_form.update(|state| state.select(catalog));
    }

    pub fn edit_catalog_entry(&self, entry: &CatalogEntry) {
        let catalog = self.catalog_form.with_untracked(|state| state.catalog);
        self.catalog_messages.update(MessageState::clear);
        self.catalog_form
            .set(CatalogFormState::from_entry(catalog, entry));
    }

    pub fn cancel_catalog_edit(&self) {
        self.catalog_messages.update(MessageState::clear);
        self.catalog_form.update(CatalogFormState::reset);
    }

    pub fn submit_catalog(&self) {
        let form = self.catalog_form.get_untracked();
        match form.to_request() {
            Ok(payload) => {
                self.catalog_messages.update(MessageState::clear);
                self.catalog_action.dispatch(CatalogCommand::Save {
                    catalog: form.catalog,
                    id: form.editing_id,
                    payload,
                });
            }
            Err(err) => self.catalog_messages.update(|state| state.set_error(err)),
        }
    }

    pub fn delete_catalog_entry(&self, id: String) {
        let catalog = self.catalog_form.with_untracked(|state| state.catalog);
        self.catalog_action
            .dispatch(CatalogCommand::Delete { catalog, id });
    }

    pub fn edit_certification(&self, certification: &Certification) {
        self.certification_messages.update(MessageState::clear);
        self.certification_form
            .set(CertificationFormState::from_certification(certification));
    }

    pub fn cancel_certification_edit(&self) {
        self.certification_messages.update(MessageState::clear);
        self.certification_form.update(CertificationFormState::reset);
    }

    pub fn submit_certification(&self) {
        let Some(employee_id) = self.selected.with_untracked(|e| e.as_ref().map(|e| e.id.clone()))
        else {
            return;
        };
        let form = self.certification_form.get_untracked();
        match form.to_request() {
            Ok(payload) => {
                self.certification_messages.update(MessageState::clear);
                self.certification_action.dispatch(CertificationCommand::Save {
                    employee_id,
                    id: form.editing_id,
                    payload,
                });
            }
            Err(err) => self
                .certification_messages
                .update(|state| state.set_error(err)),
        }
    }

    pub fn delete_certification(&self, id: String) {
        if let Some(employee_id) = self.selected.with_untracked(|e| e.as_ref().map(|e| e.id.clone()))
        {
            self.certification_action
                .dispatch(CertificationCommand::Delete { employee_id, id });
        }
    }

    pub fn submit(&self) {
        let form = self.form.get_untracked();
        match form.to_request() {
            Ok(payload) => {
                self.form_messages.update(MessageState::clear);
                self.save_action.dispatch(SaveEmployee {
                    id: form.editing_id,
                    payload,
                });
            }
            Err(err) => self.form_messages.update(|state| state.set_error(err)),
        }
    }
}

pub fn use_admin_employees_view_model() -> AdminEmployeesViewModel {
    if let Some(vm) = use_context::<AdminEmployeesViewModel>() {
        return vm;
    }
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = store_value(AdminEmployeesRepository::new(api));
    let notifications = use_notifications();

    let reload = create_rw_signal(0u32);
    let form = create_rw_signal(EmployeeFormState::default());
    let form_messages = create_rw_signal(MessageState::default());
    let selected = create_rw_signal(None::<Employee>);
    let certifications_reload = create_rw_signal(0u32);
    let catalog_form = create_rw_signal(CatalogFormState::default());
    let catalog_messages = create_rw_signal(MessageState::default());
    let certification_form = create_rw_signal(CertificationFormState::default());
    let certification_messages = create_rw_signal(MessageState::default());

    let directory_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.load_directory().await }
        },
    );
    let certifications_resource = create_resource(
        move || (selected.with(|e| e.as_ref().map(|e| e.id.clone())), certifications_reload.get()),
        move |(employee_id, _)| {
            let repo = repository.get_value();
            async move {
                match employee_id {
                    Some(id) => repo.certifications(&id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let save_action = create_action(move |request: &SaveEmployee| {
        let repo = repository.get_value();
        let request = request.clone();
        async move { repo.save(request.id.as_deref(), request.payload).await }
    });
    let delete_action = create_action(move |id: &String| {
        let repo = repository.get_value();
        let id = id.clone();
        async move { repo.delete(&id).await.map(|_| id) }
    });
    let review_action = create_action(move |target: &ReviewTarget| {
        let repo = repository.get_value();
        let target = target.clone();
        async move {
            repo.review(&target.employee_id, &target.certification_id, target.decision)
                .await
                .map(|_| target.decision)
        }
    });

    let catalog_action = create_action(move |command: &CatalogCommand| {
        let repo = repository.get_value();
        let command = command.clone();
        async move {
            let outcome = repo.apply_catalog(&command).await;
            (command, outcome)
        }
    });
    let certification_action = create_action(move |command: &CertificationCommand| {
        let repo = repository.get_value();
        let command = command.clone();
        async move {
            let outcome = repo.apply_certification(&command).await;
            (command, outcome)
        }
    });

    create_effect(move |_| apply_save_result(save_action.value().get(), form, form_messages, reload));
    create_effect(move |_| {
        apply_delete_result(delete_action.value().get(), form, selected, notifications, reload)
    });
    create_effect(move |_| {
        apply_review_result(review_action.value().get(), notifications, certifications_reload)
    });
    create_effect(move |_| {
        apply_catalog_result(
            catalog_action.value().get(),
            catalog_form,
            catalog_messages,
            notifications,
            reload,
        )
    });
    create_effect(move |_| {
        apply_certification_result(
            certification_action.value().get(),
            certification_form,
            certification_messages,
            notifications,
            certifications_reload,
        )
    });

    let vm = AdminEmployeesViewModel {
        directory_resource,
        reload,
        form,
        form_messages,
        selected,
        certifications_resource,
        save_action,
        delete_action,
        review_action,
        catalog_form,
        catalog_messages,
        catalog_action,
        certification_form,
        certification_messages,
        certification_action,
    };
    provide_context(vm);
    vm
}
