//! Floating assistant chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sending appends the user message at once and schedules a single bot reply
//! after `CHAT_REPLY_DELAY`. Reply text is chosen at send time from the
//! active language and the configured `ReplyPolicy`. Pending replies are
//! cancelled when the widget unmounts.

use std::sync::{Arc, Mutex};

use catalog::chat::bot_reply;
use catalog::{ChatSender, DashboardSource, LabelKey, ReplyPolicy};
use leptos::prelude::*;

use crate::state::chat::{CHAT_REPLY_DELAY, ChatState};
use crate::state::ui::UiState;
use crate::state::{SharedSource, use_label};
use crate::util::timer::{TaskHandle, spawn_after};

fn bubble_class(sender: ChatSender) -> &'static str {
    match sender {
        ChatSender::User => "chat__bubble chat__bubble--user",
        ChatSender::Bot => "chat__bubble chat__bubble--bot",
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let policy = use_context::<ReplyPolicy>().unwrap_or_default();
    let title = use_label(LabelKey::ChatTitle);
    let placeholder = use_label(LabelKey::ChatPlaceholder);

    let input = RwSignal::new(String::new());
    let scroll_ref = NodeRef::<leptos::html::Div>::new();
    let replies: Arc<Mutex<Vec<TaskHandle>>> = Arc::new(Mutex::new(Vec::new()));

    let send = Callback::new({
        let replies = replies.clone();
        move |()| {
            let text = input.get_untracked();
            let mut accepted = None;
            chat.update(|c| accepted = c.submit(&text));
            let Some(pending) = accepted else {
                return;
            };
            input.set(String::new());

            let language = ui.get_untracked().language;
            let reply = bot_reply(policy, &pending.prompt, language, source.labels(language), source.knowledge_base());
            let ticket = pending.ticket;
            let task = spawn_after(CHAT_REPLY_DELAY, move || {
                chat.update(|c| {
                    c.deliver(ticket, reply);
                });
            });
            if let Ok(mut tasks) = replies.lock() {
                tasks.retain(TaskHandle::is_active);
                tasks.push(task);
            }
        }
    });

    on_cleanup(move || {
        if let Ok(tasks) = replies.lock() {
            for task in tasks.iter() {
                task.cancel();
            }
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        chat.with(|c| (c.messages.len(), c.open));
        if let Some(list) = scroll_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let messages = move || {
        chat.get()
            .messages
            .into_iter()
            .map(|message| view! { <div class=bubble_class(message.sender)>{message.text}</div> })
            .collect_view()
    };

    view! {
        <div class="chat">
            <Show when=move || chat.get().open>
                <div class="card chat__panel">
                    <div class="chat__head">
                        <span class="chat__title">{move || title.get()}</span>
                        <button
                            class="chat__close"
                            aria-label="Close chat"
                            on:click=move |_| chat.update(|c| c.open = false)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="chat__log" node_ref=scroll_ref>
                        {messages}
                    </div>
                    <div class="chat__compose">
                        <input
                            class="chat__input"
                            type="text"
                            placeholder=move || placeholder.get()
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    send.run(());
                                }
                            }
                        />
                        <button class="chat__send" aria-label="Send" on:click=move |_| send.run(())>
                            "➤"
                        </button>
                    </div>
                </div>
            </Show>
            <button class="chat__toggle" aria-label="Toggle chat" on:click=move |_| chat.update(ChatState::toggle)>
                "💬"
            </button>
        </div>
    }
}
