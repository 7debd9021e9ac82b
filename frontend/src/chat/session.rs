use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::chat::responder::ResponderTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for a reply the UI has to deliver later via [`ChatSession::complete`].
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    pub id: SubmissionId,
    pub prompt: String,
}

#[derive(Debug)]
struct Outstanding {
    id: SubmissionId,
    prompt: String,
    // Set once the delay for this submission has elapsed.
    ready_at: Option<DateTime<Utc>>,
}

/// One open chat widget: the append-only transcript, the input draft, and the
/// replies still waiting on their typing delay.
#[derive(Debug)]
pub struct ChatSession {
    table: Rc<ResponderTable>,
    messages: Vec<ChatMessage>,
    draft: String,
    outstanding: VecDeque<Outstanding>,
    next_id: u64,
    closed: bool,
    // Shortcuts are offered while the transcript is shorter than this.
    shortcut_limit: usize,
}

impl ChatSession {
    pub fn open(table: Rc<ResponderTable>, shortcut_limit: usize, now: DateTime<Utc>) -> Self {
        let greeting = ChatMessage {
            sender: Sender::Bot,
            text: table.greeting().to_string(),
            timestamp: now,
        };
        Self {
            table,
            messages: vec![greeting],
            draft: String::new(),
            outstanding: VecDeque::new(),
            next_id: 0,
            closed: false,
            shortcut_limit,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// True while at least one reply is still "being typed".
    pub fn is_composing(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn is_outstanding(&self, id: SubmissionId) -> bool {
        self.outstanding.iter().any(|o| o.id == id)
    }

    pub fn shows_shortcuts(&self) -> bool {
        self.messages.len() < self.shortcut_limit
    }

    /// Appends the user's message and returns the reply the caller must
    /// schedule. Blank text (or a closed session) is ignored.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if self.closed || text.trim().is_empty() {
            return None;
        }
        let id = SubmissionId(self.next_id);
        self.next_id += 1;

        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
            timestamp: now,
        });
        self.draft.clear();
        self.outstanding.push_back(Outstanding {
            id,
            prompt: text.to_string(),
            ready_at: None,
        });
        Some(PendingReply {
            id,
            prompt: text.to_string(),
        })
    }

    pub fn submit_draft(&mut self, now: DateTime<Utc>) -> Option<PendingReply> {
        let text = self.draft.clone();
        self.submit(&text, now)
    }

    /// Suggested-question buttons behave like typing the question and
    /// pressing send.
    pub fn submit_shortcut(&mut self, question: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        self.set_draft(question);
        self.submit_draft(now)
    }

    /// Called when the typing delay for `id` has elapsed. Bot replies are
    /// appended in submission order, so an early completion waits for the
    /// ones ahead of it. Returns whether the transcript changed.
    pub fn complete(&mut self, id: SubmissionId, now: DateTime<Utc>) -> bool {
        if self.closed {
            log::debug!("Ignoring reply {} for a closed chat", id);
            return false;
        }
        let Some(entry) = self.outstanding.iter_mut().find(|o| o.id == id) else {
            log::debug!("Ignoring unknown or already delivered reply {}", id);
            return false;
        };
        if entry.ready_at.is_none() {
            entry.ready_at = Some(now);
        }

        let before = self.messages.len();
        while self.outstanding.front().map_or(false, |o| o.ready_at.is_some()) {
            if let Some(done) = self.outstanding.pop_front() {
                let answer = self.table.respond(&done.prompt).to_string();
                self.messages.push(ChatMessage {
                    sender: Sender::Bot,
                    text: answer,
                    timestamp: done.ready_at.unwrap_or(now),
                });
            }
        }
        self.messages.len() != before
    }

    /// Tears the session down. Replies still in flight are returned so the
    /// caller can cancel their timers; any later `complete` is a no-op.
    pub fn close(&mut self) -> Vec<SubmissionId> {
        self.closed = true;
        self.outstanding.drain(..).map(|o| o.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::knowledge::{softsell_table, FALLBACK, GREETING, SELL_ANSWER};
    use crate::config::SiteConfig;
    use chrono::Duration;

    fn session() -> ChatSession {
        let limit = SiteConfig::default().shortcuts_max_transcript;
        ChatSession::open(Rc::new(softsell_table().unwrap()), limit, Utc::now())
    }

    #[test]
    fn fresh_session_starts_with_single_greeting() {
        let s = session();
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].sender, Sender::Bot);
        assert_eq!(s.messages()[0].text, GREETING);
        assert!(!s.is_composing());
        assert!(s.shows_shortcuts());
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut s = session();
        assert!(s.submit("", Utc::now()).is_none());
        assert!(s.submit("   \n\t", Utc::now()).is_none());
        assert_eq!(s.messages().len(), 1);
        assert!(!s.is_composing());
    }

    #[test]
    fn sell_question_gets_user_then_bot_message() {
        let mut s = session();
        s.set_draft("How do I sell my licenses?");
        let t0 = Utc::now();
        let pending = s.submit_draft(t0).unwrap();

        assert_eq!(s.draft(), "");
        assert!(s.is_composing());
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[1].sender, Sender::User);
        assert_eq!(s.messages()[1].text, "How do I sell my licenses?");

        assert!(s.complete(pending.id, t0 + Duration::seconds(1)));
        assert!(!s.is_composing());
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.messages()[2].sender, Sender::Bot);
        assert_eq!(s.messages()[2].text, SELL_ANSWER);
        assert!(!s.shows_shortcuts());
    }

    #[test]
    fn unmatched_question_gets_fallback() {
        let mut s = session();
        let pending = s.submit("What is your refund policy?", Utc::now()).unwrap();
        s.complete(pending.id, Utc::now());
        assert_eq!(s.messages().last().unwrap().text, FALLBACK);
    }

    #[test]
    fn burst_of_submissions_gets_one_reply_each_in_order() {
        let mut s = session();
        let a = s.submit("price?", Utc::now()).unwrap();
        let b = s.submit("who are you", Utc::now()).unwrap();
        let c = s.submit("refund", Utc::now()).unwrap();
        assert_eq!(s.messages().len(), 4);

        // b's timer fires first; it must wait behind a
        assert!(!s.complete(b.id, Utc::now()));
        assert!(s.is_composing());
        assert!(s.complete(a.id, Utc::now()));
        assert_eq!(s.messages().len(), 6);
        assert!(s.is_composing());
        assert!(s.complete(c.id, Utc::now()));
        assert!(!s.is_composing());

        let table = softsell_table().unwrap();
        let bot: Vec<_> = s.messages()[4..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            bot,
            [table.respond("price?"), table.respond("who are you"), FALLBACK]
        );
    }

    #[test]
    fn completing_twice_appends_once() {
        let mut s = session();
        let p = s.submit("price", Utc::now()).unwrap();
        assert!(s.is_outstanding(p.id));
        assert!(s.complete(p.id, Utc::now()));
        assert!(!s.is_outstanding(p.id));
        assert!(!s.complete(p.id, Utc::now()));
        assert_eq!(s.messages().len(), 3);
    }

    #[test]
    fn shortcut_behaves_like_typed_submission() {
        let mut s = session();
        s.set_draft("half typed");
        let p = s.submit_shortcut("How do I sell my licenses?", Utc::now()).unwrap();
        assert_eq!(p.prompt, "How do I sell my licenses?");
        assert_eq!(s.messages()[1].text, "How do I sell my licenses?");
        assert_eq!(s.draft(), "");
    }

    #[test]
    fn completions_after_close_are_ignored() {
        let mut s = session();
        let p = s.submit("price", Utc::now()).unwrap();
        let cancelled = s.close();
        assert_eq!(cancelled, vec![p.id]);
        assert!(!s.complete(p.id, Utc::now()));
        assert!(s.submit("more", Utc::now()).is_none());
        assert_eq!(s.messages().len(), 2);
    }

    #[test]
    fn shortcut_cutoff_follows_the_configured_limit() {
        let table = Rc::new(softsell_table().unwrap());
        let mut s = ChatSession::open(table.clone(), 5, Utc::now());
        let p = s.submit("price", Utc::now()).unwrap();
        s.complete(p.id, Utc::now());
        assert_eq!(s.messages().len(), 3);
        assert!(s.shows_shortcuts());

        let s = ChatSession::open(table, 1, Utc::now());
        assert!(!s.shows_shortcuts());
    }
}
