use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = id.clone();
    let has_error = move || error.get().is_some();

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-1">
                {label}
                {required.then(|| view! { <span class="text-red-600">" *"</span> })}
            </label>
            <input
                id=input_id
                type="text"
                class=move || {
                    if has_error() {
                        "w-full border border-red-400 rounded px-3 py-2 text-sm"
                    } else {
                        "w-full border border-gray-300 rounded px-3 py-2 text-sm"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=has_error>
                <p class="mt-1 text-xs text-red-600">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
