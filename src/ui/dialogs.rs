use egui::{Color32, Context, RichText, Window};

use crate::app::BoardApp;
use crate::model::Priority;
use crate::ui::theme;

/// Render the "Add Task" dialog.
pub fn show_add_task_dialog(app: &mut BoardApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Add Task").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.visuals_mut().striped = false;

            ui.add_space(4.0);

            egui::Grid::new("add_task_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut app.new_task_title)
                            .hint_text("Task title...")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [220.0, 48.0],
                        egui::TextEdit::multiline(&mut app.new_task_description)
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Priority").color(theme::TEXT_SECONDARY));
                    priority_picker("add_task_priority", &mut app.new_task_priority, ui);
                    ui.end_row();

                    ui.label("");
                    ui.checkbox(&mut app.new_task_scheduled, "Schedule");
                    ui.end_row();

                    if app.new_task_scheduled {
                        ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut app.new_task_start_date)
                                .id_salt("dlg_dp_start"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Due").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut app.new_task_due_date)
                                .id_salt("dlg_dp_due"),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(RichText::new("Create").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], create_btn).clicked() {
                    app.create_task_from_dialog();
                    should_close = true;
                }
                if ui
                    .add_sized([80.0, 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_task = false;
    }
}

/// Inline three-way priority selector shared by the dialogs.
pub fn priority_picker(id: &str, priority: &mut Priority, ui: &mut egui::Ui) {
    ui.push_id(id, |ui| {
        ui.horizontal(|ui| {
            for p in [Priority::Low, Priority::Medium, Priority::High] {
                let selected = *priority == p;
                let text = if selected {
                    RichText::new(p.label())
                        .color(Color32::WHITE)
                        .size(11.0)
                } else {
                    RichText::new(p.label())
                        .color(theme::TEXT_SECONDARY)
                        .size(11.0)
                };
                let mut btn = egui::Button::new(text).rounding(egui::Rounding::same(4.0));
                if selected {
                    btn = btn.fill(theme::priority_color(p));
                }
                if ui.add(btn).clicked() {
                    *priority = p;
                }
            }
        });
    });
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut BoardApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Taskboard").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("A task board with a drag-editable");
                ui.label("timeline, built with Rust and egui.");
                ui.add_space(14.0);
                if ui
                    .add_sized([100.0, 28.0], egui::Button::new("Close"))
                    .clicked()
                {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
