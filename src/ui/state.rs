use crate::common::Message;

/// The scrolling message list. Append-only.
///
/// `scroll_offset` models the position in rows, one row per message. The
/// renderer does not read it; it acts on the request raised alongside it and
/// scrolls the egui view to its bottom edge.
pub struct ChatContainer {
    messages: Vec<Message>,
    viewport_rows: usize,
    scroll_offset: usize,
    scroll_requested: bool,
}

impl ChatContainer {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            messages: Vec::new(),
            viewport_rows: viewport_rows.max(1),
            scroll_offset: 0,
            scroll_requested: false,
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> usize {
        self.messages.len().saturating_sub(self.viewport_rows)
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll_offset();
        self.scroll_requested = true;
    }

    /// Consumed by the renderer so it scrolls exactly once per request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

/// Local UI state: what is typed and what has been rendered.
pub struct AppState {
    pub input_text: String,
    pub container: ChatContainer,
}

impl AppState {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            input_text: String::new(),
            container: ChatContainer::new(viewport_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_to_bottom_tracks_growth() {
        let mut container = ChatContainer::new(2);
        for i in 0..5 {
            container.append(Message::dm(format!("line {i}")));
        }
        assert_eq!(container.scroll_offset(), 0);
        assert_eq!(container.max_scroll_offset(), 3);

        container.scroll_to_bottom();
        assert_eq!(container.scroll_offset(), 3);
        assert!(container.take_scroll_request());
        assert!(!container.take_scroll_request());
    }

    #[test]
    fn short_history_never_scrolls() {
        let mut container = ChatContainer::new(10);
        container.append(Message::you("hi"));
        container.scroll_to_bottom();
        assert_eq!(container.scroll_offset(), 0);
    }
}
