use crate::api::EmployeeProfile;
use crate::pages::dashboard::utils::greeting;
use chrono::Local;
use leptos::*;

#[component]
pub fn GreetingCard(profile: EmployeeProfile) -> impl IntoView {
    let title = greeting(&profile.full_name(), Local::now().time());
    let subtitle = [profile.job_title.clone(), profile.department.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-semibold text-gray-900">{title}</h2>
            {(!subtitle.is_empty())
                .then(|| view! { <p class="mt-1 text-sm text-gray-600">{subtitle}</p> })}
        </div>
    }
}
