use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Called on Escape, backdrop click or the close button
    on_close: Callback<()>,
    /// Optional footer with action buttons
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no confirmation, used before deleting records
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label.unwrap_or_else(|| "Delete".to_string()));

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label.get_value()}
                </Button>
            }
        >
            <p class="modal-message">{message}</p>
        </Modal>
    }
}

/// Acknowledgement shown after a record was created
#[component]
pub fn SuccessModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close>
            <div class="modal-success">
                <span class="modal-success__icon">{icon("check-circle")}</span>
                <p class="modal-message">{message}</p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "Continue"
                </Button>
            </div>
        </Modal>
    }
}
