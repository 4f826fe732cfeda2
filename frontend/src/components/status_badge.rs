use crate::api::{CertificationStatus, RequestStatus};
use leptos::*;

fn tone_class(tone: &str) -> &'static str {
    match tone {
        "approved" => "bg-green-100 text-green-800",
        "rejected" => "bg-red-100 text-red-800",
        "canceled" => "bg-gray-100 text-gray-600 line-through",
        _ => "bg-yellow-100 text-yellow-800",
    }
}

pub fn request_status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => tone_class("pending"),
        RequestStatus::Approved => tone_class("approved"),
        RequestStatus::Rejected => tone_class("rejected"),
        RequestStatus::Canceled => tone_class("canceled"),
    }
}

pub fn certification_status_parts(status: CertificationStatus) -> (&'static str, &'static str) {
    match status {
        CertificationStatus::Pending => ("Pending", tone_class("pending")),
        CertificationStatus::Approved => ("Approved", tone_class("approved")),
        CertificationStatus::Rejected => ("Rejected", tone_class("rejected")),
    }
}

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            request_status_class(status),
        )>
            {status.label()}
        </span>
    }
}

#[component]
pub fn CertificationBadge(status: CertificationStatus) -> impl IntoView {
    let (label, class) = certification_status_parts(status);
    view! {
        <span class=format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}", class)>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_request_status_has_distinct_style() {
        let classes: std::collections::HashSet<_> = RequestStatus::ALL
            .iter()
            .map(|s| request_status_class(*s))
            .collect();
        assert_eq!(classes.len(), RequestStatus::ALL.len());
    }

    #[test]
    fn certification_parts_match_request_tones() {
        assert_eq!(
            certification_status_parts(CertificationStatus::Approved).1,
            request_status_class(RequestStatus::Approved)
        );
        assert_eq!(certification_status_parts(CertificationStatus::Pending).0, "Pending");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_label() {
        let html = render_to_string(|| view! { <StatusBadge status=RequestStatus::Canceled /> });
        assert!(html.contains("Canceled"));
        assert!(html.contains("line-through"));
    }
}
