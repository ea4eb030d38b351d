use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline number with an icon and an optional subtitle.
/// Clicking the card runs `on_click` when one is given.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<String>,
    /// Accent colour of the left border and the icon
    #[prop(into)]
    color: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let border_style = format!("border-left-color: {};", color);
    let icon_style = format!("background-color: {}; color: white;", color);

    view! {
        <div
            class="stat-card"
            class:stat-card--clickable=clickable
            style=border_style
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
            <div class="stat-card__icon" style=icon_style>
                {icon(&icon_name)}
            </div>
        </div>
    }
}
