use crate::api::{ApiClient, ApiError, Document, DownloadedFile, FileUpload, NewDocument};
use crate::components::notification::{use_notifications, Notifications};
use crate::pages::documents::{repository::DocumentsRepository, utils::UploadFormState};
use crate::pages::requests::utils::MessageState;
use crate::utils::{download::save_file, load_state::LoadState};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceTarget {
    pub id: String,
    pub file: FileUpload,
}

#[derive(Clone, Copy)]
pub struct DocumentsViewModel {
    pub documents_resource: Resource<u32, Result<Vec<Document>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub upload_state: UploadFormState,
    pub upload_message: RwSignal<MessageState>,
    pub upload_action: Action<(NewDocument, FileUpload), Result<(), ApiError>>,
    pub replace_action: Action<ReplaceTarget, Result<(), ApiError>>,
    pub download_action: Action<String, Result<DownloadedFile, ApiError>>,
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

fn apply_upload_result(
    result: Option<Result<(), ApiError>>,
    state: UploadFormState,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(())) => {
            message.update(|msg| msg.set_success("Document uploaded."));
            state.reset();
            bump(reload);
        }
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        None => {}
    }
}

fn apply_replace_result(
    result: Option<Result<(), ApiError>>,
    notifications: Notifications,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(())) => {
            notifications.success("Document replaced.");
            bump(reload);
        }
        Some(Err(err)) => {
            notifications.error(format!("Could not replace the document: {}", err.error))
        }
        None => {}
    }
}

fn apply_download_result(
    result: Option<Result<DownloadedFile, ApiError>>,
    notifications: Notifications,
) {
    match result {
        Some(Ok(file)) => {
            if let Err(err) = save_file(&file) {
                log::warn!("saving {} failed: {}", file.file_name, err);
                notifications.error(format!("Could not save the file: {}", err));
            }
        }
        Some(Err(err)) => {
            notifications.error(format!("Could not download the document: {}", err.error))
        }
        None => {}
    }
}

impl DocumentsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = store_value(DocumentsRepository::new(api));
        let notifications = use_notifications();

        let reload = create_rw_signal(0u32);
        let upload_state = UploadFormState::default();
        let upload_message = create_rw_signal(MessageState::default());

        let documents_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list().await }
            },
        );
        let upload_action = create_action(move |(meta, file): &(NewDocument, FileUpload)| {
            let repo = repository.get_value();
            let (meta, file) = (meta.clone(), file.clone());
            async move { repo.upload(meta, file).await.map(|_| ()) }
        });
        let replace_action = create_action(move |target: &ReplaceTarget| {
            let repo = repository.get_value();
            let target = target.clone();
            async move { repo.replace(&target.id, target.file).await.map(|_| ()) }
        });
        let download_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.download(&id).await }
        });

        create_effect(move |_| {
            apply_upload_result(upload_action.value().get(), upload_state, upload_message, reload)
        });
        create_effect(move |_| {
            apply_replace_result(replace_action.value().get(), notifications, reload)
        });
        create_effect(move |_| apply_download_result(download_action.value().get(), notifications));

        Self {
            documents_resource,
            reload,
            upload_state,
            upload_message,
            upload_action,
            replace_action,
            download_action,
        }
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let resource = self.documents_resource;
        Signal::derive(move || {
            LoadState::from_result("documents", resource.loading().get(), resource.get().as_ref())
        })
    }

    pub fn documents(&self) -> Signal<Vec<Document>> {
        let resource = self.documents_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn retry(&self) {
        bump(self.reload);
    }
}

impl Default for DocumentsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_documents_view_model() -> DocumentsViewModel {
    use_context::<DocumentsViewModel>().unwrap_or_else(|| {
        let vm = DocumentsViewModel::new();
        provide_context(vm);
        vm
    })
}
