use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <div class="px-4 py-5 sm:p-6">
            <dt class="text-sm font-medium text-gray-500 truncate">{label}</dt>
            <dd class="mt-1 text-3xl font-semibold text-gray-900">{move || value.get()}</dd>
            {hint.map(|hint| view! { <p class="mt-1 text-xs text-gray-500">{hint}</p> })}
        </div>
    };

    match href {
        Some(href) => view! {
            <a href=href class="block bg-white overflow-hidden shadow rounded-lg hover:shadow-md">
                {body}
            </a>
        }
        .into_view(),
        None => view! {
            <div class="bg-white overflow-hidden shadow rounded-lg">{body}</div>
        }
        .into_view(),
    }
}
