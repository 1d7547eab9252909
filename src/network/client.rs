use tokio::sync::mpsc;

use crate::common::{Message, RelayCommand, RelayEvent, Submission};

use super::transport::HttpTransport;

pub const FALLBACK_TEXT: &str = "Failed to send message.";

pub struct RelayClient {
    transport: HttpTransport,
    event_sender: mpsc::Sender<RelayEvent>,
    command_receiver: mpsc::Receiver<RelayCommand>,
}

impl RelayClient {
    pub fn new(
        transport: HttpTransport,
        event_sender: mpsc::Sender<RelayEvent>,
        command_receiver: mpsc::Receiver<RelayCommand>,
    ) -> Self {
        Self {
            transport,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender. Exchanges overlap freely
    /// and their replies go out in completion order.
    pub async fn run(mut self) {
        log::info!("Relay loop started, posting to {}", self.transport.endpoint());

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                RelayCommand::Submit(submission) => {
                    let transport = self.transport.clone();
                    let events = self.event_sender.clone();
                    tokio::spawn(async move {
                        let reply = exchange(&transport, &submission).await;
                        if let Err(err) = events.send(RelayEvent::Reply(reply)).await {
                            log::warn!("Failed to notify UI about reply to {}: {err}", submission.id);
                        }
                    });
                }
            }
        }

        log::info!("Relay loop stopped");
    }
}

/// One full round trip. Always settles into a DM line.
pub async fn exchange(transport: &HttpTransport, submission: &Submission) -> Message {
    match transport.post_message(&submission.text).await {
        Ok(response) => {
            log::debug!("Reply to {} settled: {response:?}", submission.id);
            Message::dm(response.dm_text())
        }
        Err(err) => {
            log::error!("Error sending message {}: {err}", submission.id);
            Message::dm(FALLBACK_TEXT)
        }
    }
}
