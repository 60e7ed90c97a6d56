use egui::{menu, RichText, Ui};

use crate::app::BoardApp;
use crate::ui::theme;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut BoardApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_header()), |ui| {
            if ui.button("  New Board").clicked() {
                app.new_board();
                ui.close_menu();
            }
            if ui.button("  Open...").clicked() {
                app.open_board();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_board();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_board_as();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Board  ").font(theme::font_header()), |ui| {
            if ui.button("  Add Task...").clicked() {
                app.show_add_task = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_header()), |ui| {
            if ui.button("  About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(&app.board.name)
                    .size(12.0)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    });
}
