use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::knowledge::SUGGESTED_QUESTIONS;
use crate::chat::responder::ResponderTable;
use crate::chat::session::{ChatSession, PendingReply, SubmissionId};
use crate::config::SiteConfig;

type Timers = Rc<RefCell<HashMap<SubmissionId, Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub table: Rc<ResponderTable>,
    pub config: SiteConfig,
    pub on_close: Callback<()>,
}

// The timer only holds a weak handle, so a reply that outlives the widget
// finds nothing to write into.
fn schedule_reply(
    session: &Rc<RefCell<ChatSession>>,
    timers: &Timers,
    redraw: UseForceUpdateHandle,
    pending: PendingReply,
    delay_ms: u32,
) {
    let id = pending.id;
    log::debug!("Reply {} to {:?} due in {}ms", id, pending.prompt, delay_ms);
    let weak_session = Rc::downgrade(session);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(session) = weak_session.upgrade() else {
            return;
        };
        let changed = session.borrow_mut().complete(id, Utc::now());
        if changed {
            redraw.force_update();
        }
    });

    let session = session.borrow();
    let mut timers = timers.borrow_mut();
    // fired timers are dropped here, never from inside their own callback
    timers.retain(|pending_id, _| session.is_outstanding(*pending_id));
    timers.insert(id, timeout);
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let session = {
        let table = props.table.clone();
        let shortcut_limit = props.config.shortcuts_max_transcript;
        use_mut_ref(move || ChatSession::open(table, shortcut_limit, Utc::now()))
    };
    let timers: Timers = use_mut_ref(HashMap::new);
    let redraw = use_force_update();
    let messages_end = use_node_ref();

    // Closing the widget cancels every reply still waiting on its delay
    {
        let session = session.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let cancelled = session.borrow_mut().close();
                    if !cancelled.is_empty() {
                        log::debug!("Chat closed with {} replies pending", cancelled.len());
                    }
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let (messages, draft, composing, shows_shortcuts) = {
        let view = session.borrow();
        (
            view.messages().to_vec(),
            view.draft().to_string(),
            view.is_composing(),
            view.shows_shortcuts(),
        )
    };

    // Keep the newest message in view
    {
        let messages_end = messages_end.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = messages_end.cast::<web_sys::Element>() {
                    end.scroll_into_view_with_bool(false);
                }
                || ()
            },
            (messages.len(), composing),
        );
    }

    let on_submit = {
        let session = session.clone();
        let timers = timers.clone();
        let redraw = redraw.clone();
        let delay_ms = props.config.reply_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = session.borrow_mut().submit_draft(Utc::now());
            if let Some(pending) = pending {
                schedule_reply(&session, &timers, redraw.clone(), pending, delay_ms);
            }
            redraw.force_update();
        })
    };

    let on_shortcut = {
        let session = session.clone();
        let timers = timers.clone();
        let redraw = redraw.clone();
        let delay_ms = props.config.reply_delay_ms;
        Callback::from(move |question: &'static str| {
            let pending = session.borrow_mut().submit_shortcut(question, Utc::now());
            if let Some(pending) = pending {
                schedule_reply(&session, &timers, redraw.clone(), pending, delay_ms);
            }
            redraw.force_update();
        })
    };

    let on_input = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session.borrow_mut().set_draft(input.value());
            redraw.force_update();
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="chat-widget">
            <style>{CHAT_CSS}</style>
            <div class="chat-widget-header">
                <div class="chat-widget-title">
                    <i class="fas fa-robot"></i>
                    <h3>{format!("{} Assistant", props.config.brand_name)}</h3>
                </div>
                <button class="chat-widget-close" onclick={on_close} aria-label="Close chat">
                    <i class="fas fa-xmark"></i>
                </button>
            </div>

            <div class="chat-widget-messages">
                { for messages.iter().map(|msg| {
                    let side = if msg.is_user() { "from-user" } else { "from-bot" };
                    let icon = if msg.is_user() { "fas fa-user" } else { "fas fa-robot" };
                    html! {
                        <div class={classes!("chat-row", side)}>
                            <div class="chat-avatar"><i class={icon}></i></div>
                            <div class="chat-bubble" title={msg.timestamp.format("%H:%M").to_string()}>
                                {&msg.text}
                            </div>
                        </div>
                    }
                })}
                if composing {
                    <div class="chat-row from-bot">
                        <div class="chat-avatar"><i class="fas fa-robot"></i></div>
                        <div class="chat-bubble">
                            <div class="typing-indicator">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </div>
                }
                <div ref={messages_end}></div>
            </div>

            if shows_shortcuts {
                <div class="chat-shortcuts">
                    <p>{"Suggested questions:"}</p>
                    <div class="chat-shortcut-list">
                        { for SUGGESTED_QUESTIONS.iter().copied().take(props.config.shortcuts_shown).map(|question| {
                            let on_shortcut = on_shortcut.clone();
                            html! {
                                <button class="chat-shortcut" onclick={move |_| on_shortcut.emit(question)}>
                                    {question}
                                </button>
                            }
                        })}
                    </div>
                </div>
            }

            <form class="chat-widget-input" onsubmit={on_submit}>
                <input
                    type="text"
                    value={draft.clone()}
                    oninput={on_input}
                    placeholder="Type a message..."
                />
                <button type="submit" disabled={draft.trim().is_empty()} aria-label="Send">
                    <i class="fas fa-paper-plane"></i>
                </button>
            </form>
        </div>
    }
}

const CHAT_CSS: &str = r#"
.chat-widget {
    position: fixed;
    bottom: 5rem;
    right: 1.5rem;
    width: 24rem;
    max-width: calc(100vw - 3rem);
    height: 26rem;
    display: flex;
    flex-direction: column;
    overflow: hidden;
    border-radius: 12px;
    border: 1px solid var(--border);
    background: var(--surface);
    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.25);
    z-index: 50;
}
.chat-widget-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem;
    background: var(--accent);
    color: #fff;
}
.chat-widget-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.chat-widget-title h3 {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}
.chat-widget-close {
    background: none;
    border: none;
    color: #fff;
    cursor: pointer;
    border-radius: 50%;
    padding: 0.25rem 0.5rem;
}
.chat-widget-messages {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
}
.chat-row {
    display: flex;
    align-items: flex-start;
    gap: 0.5rem;
    margin-bottom: 1rem;
    max-width: 85%;
}
.chat-row.from-user {
    flex-direction: row-reverse;
    margin-left: auto;
}
.chat-avatar {
    flex-shrink: 0;
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.8rem;
    background: var(--muted-surface);
}
.chat-bubble {
    padding: 0.75rem;
    border-radius: 8px;
    line-height: 1.4;
    border: 1px solid var(--border);
    background: var(--surface);
}
.from-user .chat-bubble {
    background: var(--accent);
    border-color: var(--accent);
    color: #fff;
}
.typing-indicator {
    display: flex;
    gap: 0.25rem;
}
.typing-indicator span {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: var(--muted-text);
    animation: typing-bounce 1s infinite;
}
.typing-indicator span:nth-child(2) { animation-delay: 0.1s; }
.typing-indicator span:nth-child(3) { animation-delay: 0.2s; }
@keyframes typing-bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-4px); }
}
.chat-shortcuts {
    padding: 0.5rem;
    border-top: 1px solid var(--border);
}
.chat-shortcuts p {
    margin: 0 0 0.25rem;
    font-size: 0.75rem;
    color: var(--muted-text);
}
.chat-shortcut-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.25rem;
}
.chat-shortcut {
    font-size: 0.75rem;
    padding: 0.25rem 0.5rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--accent);
    cursor: pointer;
}
.chat-widget-input {
    display: flex;
    padding: 0.5rem;
    border-top: 1px solid var(--border);
}
.chat-widget-input input {
    flex: 1;
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px 0 0 6px;
    background: var(--surface);
    color: var(--text);
}
.chat-widget-input button {
    padding: 0.5rem 0.75rem;
    border: none;
    border-radius: 0 6px 6px 0;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
}
.chat-widget-input button:disabled {
    opacity: 0.5;
    cursor: default;
}
"#;
