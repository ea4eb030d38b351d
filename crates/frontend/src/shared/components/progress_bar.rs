use leptos::prelude::*;

/// Horizontal bar filled to `percent` (clamped to 0..=100)
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    #[prop(into, optional)] color: Option<String>,
) -> impl IntoView {
    let color = color.unwrap_or_else(|| "#3B82F6".to_string());
    let fill_style = move || {
        format!(
            "width: {:.0}%; background-color: {};",
            percent.get().clamp(0.0, 100.0),
            color
        )
    };

    view! {
        <div class="progress-bar">
            <div class="progress-bar__fill" style=fill_style></div>
        </div>
    }
}
