use egui::{Color32, RichText, Ui};
use uuid::Uuid;

use crate::engine::geometry;
use crate::model::Task;
use crate::ui::theme;

/// Actions that the task table can request.
pub enum TaskTableAction {
    None,
    Edit(Uuid),
    Delete(Uuid),
    Add,
}

/// Render the left-side task list panel. Shows every task on the board,
/// including unscheduled ones, in timeline row order.
pub fn show_task_table(tasks: &[Task], ui: &mut Ui) -> TaskTableAction {
    let mut action = TaskTableAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Tasks")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    // Add task button — accent styled
    let btn = egui::Button::new(
        RichText::new(format!("{}  Add Task", egui_phosphor::regular::PLUS))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::ACCENT)
    .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], btn).clicked() {
        action = TaskTableAction::Add;
    }

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(2.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, task) in geometry::timeline_rows(tasks).into_iter().enumerate() {
                let row_bg = if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(6.0, 4.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;

                        // Priority dot
                        let (dot_rect, _) =
                            ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                        ui.painter().circle_filled(
                            dot_rect.center(),
                            3.0,
                            theme::priority_color(task.priority),
                        );

                        ui.add(
                            egui::Label::new(
                                RichText::new(&task.title)
                                    .size(12.0)
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .truncate(),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;

                                let del_btn = ui.add(
                                    egui::Button::new(
                                        RichText::new("✕").size(10.0).color(theme::TEXT_DIM),
                                    )
                                    .frame(false),
                                );
                                if del_btn.on_hover_text("Delete task").clicked() {
                                    action = TaskTableAction::Delete(task.id);
                                }

                                match task.schedule() {
                                    Some((start, due)) => {
                                        ui.label(
                                            RichText::new(due.format("%m/%d").to_string())
                                                .size(10.0)
                                                .color(theme::TEXT_SECONDARY),
                                        );
                                        ui.label(
                                            RichText::new("→").size(9.0).color(theme::TEXT_DIM),
                                        );
                                        ui.label(
                                            RichText::new(start.format("%m/%d").to_string())
                                                .size(10.0)
                                                .color(theme::TEXT_SECONDARY),
                                        );
                                    }
                                    None => {
                                        ui.label(
                                            RichText::new("unscheduled")
                                                .size(10.0)
                                                .italics()
                                                .color(theme::TEXT_DIM),
                                        );
                                    }
                                }
                            },
                        );
                    });
                });

                // Whole row opens the editor
                let row_click = ui.interact(
                    frame_resp.response.rect,
                    egui::Id::new(("task-row", task.id)),
                    egui::Sense::click(),
                );
                if row_click.clicked() {
                    action = TaskTableAction::Edit(task.id);
                }

                ui.add_space(1.0);
            }
        });

    action
}
