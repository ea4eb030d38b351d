use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Short-lived notifications shown in the corner of the screen
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            duration_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::debug!("toast #{} {:?}: {}", id, kind, message);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
