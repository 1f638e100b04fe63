use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// How long a notice stays on screen
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            NoticeKind::Success => MessageBarIntent::Success,
            NoticeKind::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Transient, auto-dismissing messages shared by the whole app
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Error, title.into(), message.into());
    }

    fn push(&self, kind: NoticeKind, title: String, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title,
                message,
            })
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

/// Stack of active notices, rendered once by the site shell
#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-host" aria-live="polite">
            <For
                each=move || service.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice-host__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=notice.kind.intent()>
                                <div class="notice">
                                    <strong class="notice__title">{notice.title}</strong>
                                    <span class="notice__message">{notice.message}</span>
                                </div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
