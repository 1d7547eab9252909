use eframe::egui;

/// The chat form. Returns true when the user submitted it this frame.
pub fn render(ui: &mut egui::Ui, form_id: egui::Id, input_id: egui::Id, input_text: &mut String) -> bool {
    let mut submitted = false;
    ui.push_id(form_id, |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(input_text)
                    .id(input_id)
                    .hint_text("What do you do?")
                    .desired_width(ui.available_width() - 60.0),
            );
            if ui.button("Send").clicked() {
                submitted = true;
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
                response.request_focus();
            }
        });
    });

    submitted
}
