use eframe::egui;
use tokio::sync::mpsc;

use crate::common::RelayEvent;
use crate::relay::{self, ChatElements, ChatRelay};

use super::components::{chat_area, input_bar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    /// `None` after a setup fault: the window draws but the form is inert.
    relay: Option<ChatRelay>,
    event_receiver: mpsc::Receiver<RelayEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        relay: Option<ChatRelay>,
        event_receiver: mpsc::Receiver<RelayEvent>,
        viewport_rows: usize,
    ) -> Self {
        Self {
            state: AppState::new(viewport_rows),
            relay,
            event_receiver,
        }
    }

    fn handle_relay_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                RelayEvent::Reply(message) => relay::render_reply(&mut self.state, message),
            }
        }
    }

    fn element_ids(&self) -> ChatElements {
        match &self.relay {
            Some(relay) => *relay.elements(),
            None => ChatElements {
                form: egui::Id::new("unbound-form"),
                input: egui::Id::new("unbound-input"),
                container: egui::Id::new("unbound-container"),
            },
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_relay_events();
        let elements = self.element_ids();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Dungeon Chat");
            ui.separator();
            chat_area::render(ui, elements.container, &mut self.state.container);

            ui.separator();
            if input_bar::render(ui, elements.form, elements.input, &mut self.state.input_text) {
                if let Some(relay) = &self.relay {
                    relay.submit(&mut self.state);
                }
            }
        });

        ctx.request_repaint();
    }
}
