use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
            <Spinner />
            <span class="loading-spinner__text">{message}</span>
        </Flex>
    }
}
