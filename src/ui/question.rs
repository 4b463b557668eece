// src/ui/question.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_question_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Ask a question about this video");
        ui.add_space(8.0);

        ui.add_sized(
            [ui.available_width(), 100.0],
            egui::TextEdit::multiline(&mut state.question)
                .hint_text("What would you like to know about this video?"),
        );
        ui.add_space(8.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.is_answering() {
                "Generating Answer"
            } else {
                "Ask Question"
            };
            let clicked = ui
                .add_enabled(state.can_submit_question(), egui::Button::new(label))
                .clicked();
            if state.is_answering() {
                ui.spinner();
            }

            if clicked {
                state.submit_question();
            }
        });
    });

    if let Some(answer) = &state.answer {
        ui.add_space(16.0);
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("Answer");
            ui.add_space(8.0);
            ui.label(answer);
        });
    }
}
