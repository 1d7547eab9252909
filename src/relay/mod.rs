//! Binds the chat form to the relay task.
//!
//! The UI owns the [`AppState`]; the relay only mutates it from the UI thread
//! and hands submissions to the network side through a channel.

pub mod elements;

pub use elements::{ChatElements, SetupFault};

use tokio::sync::mpsc;

use crate::common::{Message, RelayCommand, Submission};
use crate::config::ElementIds;
use crate::network::FALLBACK_TEXT;
use crate::ui::state::AppState;

pub struct ChatRelay {
    elements: ChatElements,
    command_sender: mpsc::Sender<RelayCommand>,
}

impl ChatRelay {
    /// A setup fault is logged and yields no relay, so the form stays inert.
    pub fn bind(ids: &ElementIds, command_sender: mpsc::Sender<RelayCommand>) -> Option<Self> {
        match ChatElements::resolve(ids) {
            Ok(elements) => Some(Self {
                elements,
                command_sender,
            }),
            Err(fault) => {
                log::error!("Required elements not found: {fault}");
                None
            }
        }
    }

    pub fn elements(&self) -> &ChatElements {
        &self.elements
    }

    /// Handles one form submit. Blank input is ignored and left untouched.
    pub fn submit(&self, state: &mut AppState) -> Option<Submission> {
        let text = state.input_text.trim();
        if text.is_empty() {
            return None;
        }

        let submission = Submission::new(text.to_string());
        state.container.append(Message::you(&submission.text));
        state.input_text.clear();

        log::debug!("Submitting {}", submission.id);
        if let Err(err) = self
            .command_sender
            .try_send(RelayCommand::Submit(submission.clone()))
        {
            // The exchange never starts, so it settles as a failure right away.
            log::error!("Error sending message: {err}");
            render_reply(state, Message::dm(FALLBACK_TEXT));
        }

        Some(submission)
    }
}

/// Appends a DM line and pins the container to its newest message.
pub fn render_reply(state: &mut AppState, message: Message) {
    state.container.append(message);
    state.container.scroll_to_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Sender;

    fn relay() -> (ChatRelay, mpsc::Receiver<RelayCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let relay = ChatRelay::bind(&ElementIds::default(), tx).unwrap();
        (relay, rx)
    }

    #[test]
    fn valid_submit_renders_you_line_then_queues_exchange() {
        let (relay, mut rx) = relay();
        let mut state = AppState::new(10);
        state.input_text = "  open the door \n".to_string();

        let submission = relay.submit(&mut state).unwrap();
        assert_eq!(submission.text, "open the door");

        let lines: Vec<String> = state.container.messages().iter().map(|m| m.to_string()).collect();
        assert_eq!(lines, vec!["You: open the door"]);
        assert!(state.input_text.is_empty());

        let RelayCommand::Submit(queued) = rx.try_recv().unwrap();
        assert_eq!(queued.id, submission.id);
        assert_eq!(queued.text, "open the door");
    }

    #[test]
    fn blank_submit_does_nothing() {
        let (relay, mut rx) = relay();
        for blank in ["", "   ", "\t\n"] {
            let mut state = AppState::new(10);
            state.input_text = blank.to_string();
            assert!(relay.submit(&mut state).is_none());
            assert!(state.container.messages().is_empty());
            assert_eq!(state.input_text, blank);
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn input_is_cleared_before_any_reply() {
        let (relay, _rx) = relay();
        let mut state = AppState::new(10);
        state.input_text = "first".to_string();
        relay.submit(&mut state);
        assert!(state.input_text.is_empty());

        state.input_text = "second".to_string();
        relay.submit(&mut state);
        assert_eq!(state.container.messages().len(), 2);
    }

    #[test]
    fn closed_relay_task_settles_as_fallback() {
        let (relay, rx) = relay();
        drop(rx);
        let mut state = AppState::new(10);
        state.input_text = "hello".to_string();
        relay.submit(&mut state);

        let lines: Vec<String> = state.container.messages().iter().map(|m| m.to_string()).collect();
        assert_eq!(lines, vec!["You: hello", "DM: Failed to send message."]);
    }

    #[test]
    fn dm_reply_scrolls_to_bottom() {
        let mut state = AppState::new(2);
        for i in 0..4 {
            state.container.append(Message::you(format!("move {i}")));
        }
        render_reply(&mut state, Message::dm("You see a goblin."));
        assert_eq!(state.container.messages().last().unwrap().sender, Sender::Dm);
        assert_eq!(state.container.scroll_offset(), state.container.max_scroll_offset());
        assert_eq!(state.container.scroll_offset(), 3);
        // the renderer scrolls the view once per reply
        assert!(state.container.take_scroll_request());
        assert!(!state.container.take_scroll_request());
    }

    #[test]
    fn you_line_does_not_scroll() {
        let (relay, _rx) = relay();
        let mut state = AppState::new(1);
        state.input_text = "wait".to_string();
        relay.submit(&mut state);
        assert!(!state.container.take_scroll_request());
    }

    #[test]
    fn setup_fault_yields_no_relay() {
        let (tx, _rx) = mpsc::channel(1);
        let ids = ElementIds {
            form: String::new(),
            ..ElementIds::default()
        };
        assert!(ChatRelay::bind(&ids, tx).is_none());
    }
}
