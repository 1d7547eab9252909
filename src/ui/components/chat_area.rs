use eframe::egui;

use crate::ui::state::ChatContainer;

pub fn render(ui: &mut egui::Ui, container_id: egui::Id, container: &mut ChatContainer) {
    let scroll = container.take_scroll_request();
    egui::ScrollArea::vertical()
        .id_salt(container_id)
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            for message in container.messages() {
                ui.label(message.to_string())
                    .on_hover_text(message.rendered_at.format("%H:%M:%S").to_string());
            }
            if scroll {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}
