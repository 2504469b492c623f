//! Modal for composing and posting a board message.
//!
//! The host page mounts this component only while its composer is open and
//! hands it a single capability: `close_modal`. Every exit path (send,
//! cancel, Escape, backdrop click) ends by invoking it.

#[cfg(test)]
#[path = "message_sender_modal_test.rs"]
mod message_sender_modal_test;

use leptos::prelude::*;

use crate::state::messages::{ComposeError, MessageBoardState, now_ms, validate_message};
use crate::state::session::Session;

/// Validate `draft` and post it to `board` attributed to the session's
/// author. Returns the new message id; the board is untouched on error.
pub(crate) fn submit_draft(
    board: &mut MessageBoardState,
    session: &Session,
    draft: &str,
    now: f64,
) -> Result<String, ComposeError> {
    let content = validate_message(draft)?;
    Ok(board.post(session.author_name(), content, now))
}

/// Attribution line shown above the draft.
pub(crate) fn sending_as_label(session: &Session) -> String {
    if session.is_connected() {
        format!("Posting as {}", session.author_name())
    } else {
        format!("Wallet not connected; posting as {}", session.author_name())
    }
}

/// Composer modal with a draft textarea, send and cancel actions.
#[component]
pub fn MessageSenderModal(close_modal: Callback<()>) -> impl IntoView {
    let board = expect_context::<RwSignal<MessageBoardState>>();
    let session = expect_context::<RwSignal<Session>>();

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let do_send = move || {
        let result = board
            .try_update(|b| session.with(|s| draft.with(|d| submit_draft(b, s, d, now_ms()))));
        match result {
            Some(Ok(id)) => {
                log::info!("posted board message {id}");
                close_modal.run(());
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let on_send = move |_| do_send();
    let on_cancel = move |_| close_modal.run(());
    let on_backdrop = move |_| close_modal.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close_modal.run(());
        }
    };

    let sending_as = move || session.with(sending_as_label);
    let can_send = move || !draft.get().trim().is_empty();

    view! {
        <div class="message-sender-modal__backdrop" on:click=on_backdrop>
            <div
                class="message-sender-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="message-sender-modal__header">
                    <h2>"Send a message"</h2>
                </div>
                <div class="message-sender-modal__subtitle">{sending_as}</div>
                <textarea
                    class="message-sender-modal__input"
                    placeholder="Say something to the other tamers..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        draft.set(event_target_value(&ev));
                        error.set(None);
                    }
                ></textarea>
                <Show when=move || error.get().is_some()>
                    <p class="message-sender-modal__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="message-sender-modal__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_send disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
