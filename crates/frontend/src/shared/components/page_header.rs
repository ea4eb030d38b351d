use leptos::prelude::*;

/// Title row of a list page with its action buttons on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h2 class="page-header__title">{title}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
