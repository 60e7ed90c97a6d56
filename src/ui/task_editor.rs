use egui::{Color32, Context, RichText, Window};

use crate::engine::EditDraft;
use crate::ui::dialogs::priority_picker;
use crate::ui::theme;

/// What the edit dialog asked for this frame.
pub enum EditorAction {
    None,
    /// Apply the draft to the board by id.
    Confirm,
    /// Remove the draft's task from the board.
    Delete,
    /// Discard the draft, board untouched.
    Cancel,
}

/// Render the modal task editor for the currently open draft.
///
/// All widgets bind to the draft snapshot; nothing here touches the owned
/// collection. The caller applies Confirm/Delete through the board's
/// functional updater and drops the draft on any non-None action.
pub fn show_task_editor(draft: &mut EditDraft, ctx: &Context) -> EditorAction {
    let mut action = EditorAction::None;

    Window::new(RichText::new("Edit Task").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.visuals_mut().striped = false;

            ui.add_space(4.0);

            egui::Grid::new("edit_task_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut draft.title)
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 48.0],
                        egui::TextEdit::multiline(&mut draft.description)
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Priority").color(theme::TEXT_SECONDARY));
                    priority_picker("edit_task_priority", &mut draft.priority, ui);
                    ui.end_row();

                    ui.label("");
                    ui.checkbox(&mut draft.has_schedule, "Schedule");
                    ui.end_row();

                    if draft.has_schedule {
                        ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut draft.start_date)
                                .id_salt("edit_dp_start"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Due").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut draft.due_date)
                                .id_salt("edit_dp_due"),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let delete_btn = egui::Button::new(
                    RichText::new("Delete Task").color(Color32::WHITE),
                )
                .fill(Color32::from_rgb(180, 50, 50))
                .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([100.0, 28.0], delete_btn).clicked() {
                    action = EditorAction::Delete;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let save_btn =
                        egui::Button::new(RichText::new("Save Changes").color(Color32::WHITE))
                            .fill(theme::ACCENT)
                            .rounding(egui::Rounding::same(4.0));
                    if ui.add_sized([110.0, 28.0], save_btn).clicked() {
                        action = EditorAction::Confirm;
                    }
                    if ui
                        .add_sized([80.0, 28.0], egui::Button::new("Cancel"))
                        .clicked()
                    {
                        action = EditorAction::Cancel;
                    }
                });
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = EditorAction::Cancel;
    }

    action
}
