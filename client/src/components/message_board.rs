//! Message board listing posted messages, newest first.

use leptos::prelude::*;

use crate::state::messages::MessageBoardState;

/// Board view. Takes no parameters; reads `MessageBoardState` from context.
#[component]
pub fn MessageBoard() -> impl IntoView {
    let board = expect_context::<RwSignal<MessageBoardState>>();

    view! {
        <section class="message-board">
            <h3 class="message-board__title">"Message Board"</h3>
            {move || {
                let messages = board.with(MessageBoardState::newest_first);
                if messages.is_empty() {
                    return view! {
                        <p class="message-board__empty">"No messages yet"</p>
                    }
                        .into_any();
                }

                view! {
                    <ul class="message-board__list">
                        {messages
                            .into_iter()
                            .map(|msg| {
                                view! {
                                    <li class="message-board__message">
                                        <span class="message-board__author">{msg.author}</span>
                                        <span class="message-board__content">{msg.content}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
