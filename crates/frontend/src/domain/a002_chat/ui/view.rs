//! Chat - View Component

use super::model::{check_session, send_message};
use super::view_model::{ChatMessage, ChatVm, APOLOGY_TEXT};
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::session::use_chat_session;
use contracts::domain::a002_chat::ChatRole;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let session = use_chat_session();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Restore the session and its history
    Effect::new(move |_| {
        let stored = session.session_id();
        wasm_bindgen_futures::spawn_local(async move {
            match check_session(stored.as_deref()).await {
                Ok(check) => {
                    if let Some(id) = check.session_id.as_deref().filter(|id| !id.is_empty()) {
                        session.remember(id);
                    }
                    if !check.history.is_empty() {
                        vm.messages
                            .set(check.history.iter().map(ChatMessage::from).collect());
                        scroll_to_bottom();
                    }
                }
                Err(e) => log::error!("Failed to fetch chat history: {}", e),
            }
        });
    });

    // Follow new messages and the thinking indicator
    Effect::new(move |_| {
        vm.messages.track();
        vm.is_sending.track();
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_: ()| {
        if vm.is_sending.get_untracked() {
            return;
        }
        let Some(text) = vm.take_draft() else {
            return;
        };

        vm.push(ChatMessage::new(ChatRole::User, text.clone()));
        vm.is_sending.set(true);

        let session_id = session.session_id();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = match send_message(&text, session_id).await {
                Ok(reply) => reply.text(),
                Err(e) => {
                    log::error!("Failed to send message: {}", e);
                    APOLOGY_TEXT.to_string()
                }
            };
            vm.push(ChatMessage::new(ChatRole::Ai, reply));
            vm.is_sending.set(false);
        });
    });

    view! {
        <PageFrame page_id="a002_chat--detail" category=PAGE_CAT_DETAIL class="chat">
            <div class="chat__brand" class:chat__brand--compact=move || vm.has_started()>
                <h1>"Sarah AI"</h1>
                <Show when=move || !vm.has_started()>
                    <p class="chat__tagline">"Your supply chain assistant"</p>
                </Show>
            </div>

            <div class="chat__messages" node_ref=messages_container_ref>
                <For
                    each=move || vm.messages.get()
                    key=|msg| msg.id
                    let:msg
                >
                    {{
                        let row_class = if msg.is_user() {
                            "chat__row chat__row--user"
                        } else {
                            "chat__row chat__row--ai"
                        };
                        let bubble_class = if msg.is_user() {
                            "chat__bubble chat__bubble--user markdown"
                        } else {
                            "chat__bubble chat__bubble--ai markdown"
                        };
                        view! {
                            <div class=row_class>
                                <div class=bubble_class inner_html=render_markdown(&msg.text)></div>
                            </div>
                        }
                    }}
                </For>

                <Show when=move || vm.is_sending.get()>
                    <div class="chat__row chat__row--ai">
                        <div class="chat__bubble chat__bubble--ai chat__thinking">
                            <span>"Thinking"</span>
                            <span class="chat__dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat__input" class:chat__input--docked=move || vm.has_started()>
                <Flex align=FlexAlign::End>
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.new_message
                            placeholder="Ask Sarah anything..."
                            attr:style="width: 100%; min-height: 48px; max-height: 160px; resize: vertical;"
                            disabled=vm.is_sending
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            vm.is_sending.get() || vm.new_message.with(|m| m.trim().is_empty())
                        })
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}
