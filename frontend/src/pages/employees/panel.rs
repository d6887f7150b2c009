use super::{repository::EmployeesRepository, utils::validate_employee_name};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::Layout,
    },
    store::{AppError, Employee, StoreClient},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = EmployeesRepository::new_with_store(store);
    let employees = create_rw_signal(Vec::<Employee>::new());
    let new_name = create_rw_signal(String::new());
    let error = create_rw_signal(None::<AppError>);

    {
        let repo = repo.clone();
        create_effect(move |_| employees.set(repo.list()));
    }

    let apply = move |result: Result<Vec<Employee>, AppError>| match result {
        Ok(updated) => {
            error.set(None);
            employees.set(updated);
        }
        Err(err) => error.set(Some(err)),
    };

    let on_add = {
        let repo = repo.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            match validate_employee_name(&new_name.get_untracked()) {
                Ok(name) => {
                    let result = repo.add(name);
                    if result.is_ok() {
                        new_name.set(String::new());
                    }
                    apply(result);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    };

    let on_toggle = Callback::new(move |id: String| apply(repo.toggle_active(&id)));

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"従業員管理"}</h1>
                <form class="bg-white shadow rounded-lg p-4 flex flex-col sm:flex-row gap-3" on:submit=on_add>
                    <label for="employee-name" class="sr-only">{"従業員名"}</label>
                    <input
                        id="employee-name"
                        type="text"
                        class="flex-1 border border-gray-300 rounded px-3 py-2 text-sm"
                        placeholder="従業員名"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <Button submit=true>{"従業員を追加"}</Button>
                </form>
                <InlineErrorMessage error=error.into() />
                <EmployeeTable employees=employees.read_only() on_toggle=on_toggle />
            </div>
        </Layout>
    }
}

#[component]
pub fn EmployeeTable(
    employees: ReadSignal<Vec<Employee>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.with(Vec::is_empty)
            fallback=|| {
                view! {
                    <EmptyState
                        title="従業員が登録されていません"
                        description="上のフォームから従業員を追加してください。"
                    />
                }
            }
        >
            <ul class="bg-white shadow rounded-lg divide-y divide-gray-100">
                <For
                    each=move || employees.get()
                    key=|employee| (employee.id.clone(), employee.active)
                    children=move |employee: Employee| {
                        let id = employee.id.clone();
                        let (label, variant) = if employee.active {
                            ("無効にする", ButtonVariant::Danger)
                        } else {
                            ("有効にする", ButtonVariant::Secondary)
                        };
                        view! {
                            <li class="flex items-center justify-between px-4 py-3">
                                <div>
                                    <p class="font-medium text-gray-900">{employee.name.clone()}</p>
                                    <p class="text-xs text-gray-500">
                                        {employee.id.clone()} " · "
                                        {if employee.active { "有効" } else { "無効" }}
                                    </p>
                                </div>
                                <Button
                                    variant=variant
                                    class="px-3 py-1"
                                    on_click=Callback::new(move |_| on_toggle.call(id.clone()))
                                >
                                    {label}
                                </Button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::sample_employees;
    use crate::test_support::helpers::{admin_principal, provide_session, provide_store};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_lists_employees_with_toggle_labels() {
        let html = render_to_string(move || {
            let mut list = sample_employees();
            list[1].active = false;
            let employees = create_rw_signal(list);
            view! { <EmployeeTable employees=employees.read_only() on_toggle=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("Sample Employee 1"));
        assert!(html.contains("EMP002"));
        assert!(html.contains("無効にする"));
        assert!(html.contains("有効にする"));
    }

    #[test]
    fn page_renders_add_form_and_empty_state() {
        let html = render_to_string(move || {
            provide_store(StoreClient::in_memory());
            provide_session(true, Some(admin_principal()));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("従業員管理"));
        assert!(html.contains("従業員を追加"));
        assert!(html.contains("従業員が登録されていません"));
    }
}
