//! フォームステップ
//!
//! 抽出結果から導出されたプロジェクトレコードを編集する。
//! 入力途中の「新規テクノロジー」欄はこのコンポーネント固有の一時状態で、
//! Add/Enterで確定したときだけ`FieldEdit::Technology`として上へ報告する。

use leptos::prelude::*;

use sow_analyzer_common::{FieldEdit, ProjectForm};

const PRACTICE_OPTIONS: &[&str] = &[
    "Artificial Intelligence",
    "Cloud Engineering",
    "Collaboration",
    "Custom Dev",
    "Dynamics 365",
    "Data Estate and DBA",
    "Human Resource",
    "IT Internal",
    "Modern Workplace",
    "Business Intelligence",
    "UI/UX",
    "Recruitment",
    "Quality Assurance",
    "Security",
    "KPO",
    "Project Management",
    "PMO",
    "Finance",
    "Administration",
    "Network Engg",
    "Business Analysis",
    "Sales & Marketing",
    "Document Management",
    "Resource Management",
    "Learning Management System",
    "Atidan Founders",
];

const CATEGORY_OPTIONS: &[&str] = &[
    "Project",
    "Pursuit",
    "Support",
    "Support Engagement",
    "Training",
];

const BILLING_TYPE_OPTIONS: &[&str] = &[
    "Retainer",
    "Fixed Price",
    "Time and Material",
    "Staff Augumentation",
    "Non-Billable",
];

#[component]
pub fn FormStep<FE, FS, FC>(
    form: Memo<ProjectForm>,
    loading: Memo<bool>,
    error: Memo<Option<String>>,
    on_edit: FE,
    on_submit: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FE: Fn(FieldEdit) + Clone + Send + Sync + 'static,
    FS: Fn(()) + Clone + Send + Sync + 'static,
    FC: Fn(()) + Clone + Send + Sync + 'static,
{
    let (new_tech, set_new_tech) = signal(String::new());

    let add_technology = {
        let on_edit = on_edit.clone();
        move || {
            let entry = new_tech.get_untracked().trim().to_string();
            if entry.is_empty() {
                return;
            }
            let mut technologies = form.get_untracked().technology;
            if technologies.contains(&entry) {
                return;
            }
            technologies.push(entry);
            on_edit(FieldEdit::Technology(technologies));
            set_new_tech.set(String::new());
        }
    };

    let remove_technology = {
        let on_edit = on_edit.clone();
        move |index: usize| {
            let mut technologies = form.get_untracked().technology;
            if index < technologies.len() {
                technologies.remove(index);
                on_edit(FieldEdit::Technology(technologies));
            }
        }
    };

    view! {
        <div class="form-step">
            <div class="form-header">
                <h1>"Add New Project"</h1>
                <p class="text-muted">"Fill in the project details to get employee recommendations"</p>
            </div>

            <div class="form-grid">
                <TextField
                    label="Project Name"
                    placeholder="Enter project name"
                    value=Signal::derive(move || form.get().name)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Name(v))
                    }
                />
                <TextField
                    label="Manager"
                    placeholder="Manager's name"
                    value=Signal::derive(move || form.get().manager)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Manager(v))
                    }
                />
                <TextField
                    label="Client"
                    placeholder="Client company"
                    value=Signal::derive(move || form.get().client)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Client(v))
                    }
                />
                <TextField
                    label="Partner"
                    placeholder="Partner name"
                    value=Signal::derive(move || form.get().partner)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Partner(v))
                    }
                />
                <TextField
                    label="Status"
                    placeholder="Select status"
                    value=Signal::derive(move || form.get().status)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Status(v))
                    }
                />

                <SelectField
                    label="Practice"
                    options=PRACTICE_OPTIONS
                    value=Signal::derive(move || form.get().practice)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Practice(v))
                    }
                />
                <SelectField
                    label="Category"
                    options=CATEGORY_OPTIONS
                    value=Signal::derive(move || form.get().category)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::Category(v))
                    }
                />
                <SelectField
                    label="Billing Type"
                    options=BILLING_TYPE_OPTIONS
                    value=Signal::derive(move || form.get().billing_type)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::BillingType(v))
                    }
                />

                <TextField
                    label="Budgeted Hours"
                    placeholder="Enter hours (e.g., 250 hours per month)"
                    value=Signal::derive(move || form.get().budgeted_hours)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::BudgetedHours(v))
                    }
                />

                // テクノロジータグ編集
                <div class="form-group">
                    <label>"Technology" <span class="required">"*"</span></label>
                    <div class="tech-entry">
                        <input
                            type="text"
                            placeholder="Add a technology..."
                            prop:value=move || new_tech.get()
                            on:input=move |ev| set_new_tech.set(event_target_value(&ev))
                            on:keydown={
                                let add_technology = add_technology.clone();
                                move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_technology();
                                    }
                                }
                            }
                        />
                        <button
                            type="button"
                            class="btn btn-small"
                            disabled=move || new_tech.get().trim().is_empty()
                            on:click={
                                let add_technology = add_technology.clone();
                                move |_| add_technology()
                            }
                        >
                            "Add"
                        </button>
                    </div>
                    <div class="tech-tags">
                        <Show
                            when=move || !form.get().technology.is_empty()
                            fallback=|| view! {
                                <p class="text-muted">"No technologies added yet"</p>
                            }
                        >
                            {
                                let remove_technology = remove_technology.clone();
                                move || {
                                    let remove_technology = remove_technology.clone();
                                    form.get()
                                        .technology
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, tech)| {
                                            let remove_technology = remove_technology.clone();
                                            view! {
                                                <span class="tech-tag">
                                                    {tech}
                                                    <button
                                                        class="tag-remove"
                                                        on:click=move |_| remove_technology(index)
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </Show>
                    </div>
                </div>

                <DateField
                    label="Start Date"
                    value=Signal::derive(move || form.get().start_date)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::StartDate(v))
                    }
                />
                <DateField
                    label="End Date"
                    value=Signal::derive(move || form.get().end_date)
                    on_change={
                        let on_edit = on_edit.clone();
                        move |v| on_edit(FieldEdit::EndDate(v))
                    }
                />
            </div>

            // リソース温存フラグ（boolなのでfalseも有効な回答）
            <div class="form-group keep-resources">
                <label>"Keep Resources Available for Other Projects" <span class="required">"*"</span></label>
                <label class="radio-label">
                    <input
                        type="radio"
                        name="keepResources"
                        prop:checked=move || form.get().keep_resources_available == Some(true)
                        on:change={
                            let on_edit = on_edit.clone();
                            move |_| on_edit(FieldEdit::KeepResourcesAvailable(true))
                        }
                    />
                    "Yes"
                </label>
                <label class="radio-label">
                    <input
                        type="radio"
                        name="keepResources"
                        prop:checked=move || form.get().keep_resources_available == Some(false)
                        on:change={
                            let on_edit = on_edit.clone();
                            move |_| on_edit(FieldEdit::KeepResourcesAvailable(false))
                        }
                    />
                    "No"
                </label>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-box">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click={
                        let on_submit = on_submit.clone();
                        move |_| on_submit(())
                    }
                >
                    {move || if loading.get() { "Getting Recommendations..." } else { "Get Recommendations" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_cancel = on_cancel.clone();
                        move |_| on_cancel(())
                    }
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TextField<F>(
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label>{label} <span class="required">"*"</span></label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SelectField<F>(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label>{label} <span class="required">"*"</span></label>
            <select on:change=move |ev| on_change(event_target_value(&ev)) prop:value=move || value.get()>
                <option value="">{format!("Select {}", label)}</option>
                {options
                    .iter()
                    .map(|option| {
                        view! {
                            <option value=*option selected=move || value.get() == *option>
                                {*option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn DateField<F>(label: &'static str, value: Signal<String>, on_change: F) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label>{label} <span class="required">"*"</span></label>
            <input
                type="date"
                prop:value=move || value.get()
                on:change=move |ev| on_change(event_target_value(&ev))
            />
        </div>
    }
}
