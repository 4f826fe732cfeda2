use crate::api::ApiError;
use leptos::*;

/// Messages listed under `details.errors` in a validation failure.
pub fn detail_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|d| d.get("errors"))
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-medium">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let details = error.get().map(|e| detail_messages(&e)).unwrap_or_default();
                    (!details.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {details.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({ "errors": ["Amount must be positive", "Description is required"] })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Amount must be positive"));
        assert!(html.contains("Description is required"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
