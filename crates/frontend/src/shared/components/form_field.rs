use leptos::prelude::*;

/// Labelled text input of an add form
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <label class="form__group">
            <span class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </span>
            <input
                class="form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled select of an add form; the first option is an empty prompt
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] prompt: String,
    options: Vec<String>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            <span class="form__label">{label}<span class="form__required">" *"</span></span>
            <select
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {options.into_iter().map(|opt| {
                    let selected_opt = opt.clone();
                    let text = opt.clone();
                    view! {
                        <option value=opt selected=move || value.get() == selected_opt>{text}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
