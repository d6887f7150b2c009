use crate::store::AppError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<AppError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let fields = e
                        .details
                        .as_ref()
                        .and_then(|details| details.get("fields"))
                        .and_then(|fields| fields.as_array())
                        .filter(|_| e.code == "VALIDATION_ERROR");
                    if let Some(fields) = fields {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {fields.iter().map(|msg| {
                                    view! { <li>{msg.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    if e.code == "STORAGE_ERROR" {
                        view! { <div class="text-xs opacity-75">{"ブラウザのストレージを確認してください。"}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
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
    fn inline_error_lists_field_messages() {
        let html = render_to_string(move || {
            let error = AppError::validation("入力内容を確認してください。")
                .with_details(json!({ "fields": ["名前は必須です。", "タグが長すぎます。"] }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("入力内容を確認してください。"));
        assert!(html.contains("名前は必須です。"));
        assert!(html.contains("タグが長すぎます。"));
    }

    #[test]
    fn storage_errors_carry_a_hint() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(AppError::storage("保存に失敗しました。")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("保存に失敗しました。"));
        assert!(html.contains("ストレージ"));
    }

    #[test]
    fn nothing_renders_without_an_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<AppError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
