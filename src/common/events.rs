use crate::common::types::Message;

/// Events the relay task sends back up to the UI.
#[derive(Debug, Clone)]
pub enum RelayEvent {
    /// A settled exchange: the DM's reply, or the fallback line.
    Reply(Message),
}
