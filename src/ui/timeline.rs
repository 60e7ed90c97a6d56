use chrono::Datelike;
use egui::{Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use uuid::Uuid;

use crate::engine::{geometry, BarGeometry, GestureState, TimelineAxis};
use crate::model::{Board, Task};
use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const LABEL_COL_WIDTH: f32 = 200.0;

/// Result details from interactions in the timeline view.
#[derive(Debug, Clone, Default)]
pub struct TimelineInteraction {
    pub changed: bool,
    /// Task the user double-clicked while no gesture was active.
    pub open_editor: Option<Uuid>,
}

/// Render the timeline view (central panel).
pub fn show_timeline(
    board: &mut Board,
    gesture: &mut GestureState,
    ui: &mut Ui,
) -> TimelineInteraction {
    let mut interaction = TimelineInteraction::default();

    let Some(axis) = TimelineAxis::derive(board.tasks()) else {
        // A gesture can outlive its task's schedule (e.g. the editor cleared
        // the dates mid-drag); never leave it dangling.
        gesture.finish();
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No tasks with dates to display")
                    .color(theme::TEXT_SECONDARY),
            );
        });
        return interaction;
    };

    // Row snapshot for painting; mutations go through the board below.
    let rows: Vec<Task> = geometry::scheduled_rows(board.tasks())
        .into_iter()
        .cloned()
        .collect();

    let available = ui.available_size();
    let chart_width = (LABEL_COL_WIDTH + axis.total_width()).max(available.x);
    let chart_height = HEADER_HEIGHT + rows.len() as f32 * (ROW_HEIGHT + ROW_PADDING) + 40.0;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::click(),
            );
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            // Alternating row backgrounds
            for i in 0..rows.len() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING);
                if i % 2 == 0 {
                    painter.rect_filled(
                        Rect::from_min_size(
                            Pos2::new(origin.x, y),
                            Vec2::new(chart_width, ROW_HEIGHT + ROW_PADDING),
                        ),
                        0.0,
                        theme::BG_PANEL,
                    );
                }
                painter.line_segment(
                    [
                        Pos2::new(origin.x, y + ROW_HEIGHT + ROW_PADDING),
                        Pos2::new(origin.x + chart_width, y + ROW_HEIGHT + ROW_PADDING),
                    ],
                    Stroke::new(0.5, theme::BORDER_SUBTLE),
                );
            }

            draw_day_header(&painter, origin, &axis, chart_height.max(available.y));

            for (i, task) in rows.iter().enumerate() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING)
                    + ROW_PADDING;

                draw_row_label(&painter, origin, task, y);

                let Some(geo) = BarGeometry::for_task(task, &axis) else {
                    continue;
                };
                let bar_rect = draw_task_bar(&painter, origin, &geo, task, gesture, y);

                // Trailing-edge affordance, inside the bar's right end.
                let handle_rect = Rect::from_min_max(
                    Pos2::new(
                        bar_rect.right() - theme::RESIZE_HANDLE_WIDTH,
                        bar_rect.top(),
                    ),
                    bar_rect.max,
                );

                // Registered after the bar so the overlapping handle wins
                // the hit test on the trailing edge.
                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("bar-body", task.id)),
                    Sense::click_and_drag(),
                );
                let handle_response = ui.interact(
                    handle_rect,
                    ui.make_persistent_id(("bar-resize", task.id)),
                    Sense::drag(),
                );

                if handle_response.drag_started() {
                    let ptr_x = handle_response
                        .interact_pointer_pos()
                        .map(|p| p.x)
                        .unwrap_or(0.0);
                    gesture.begin_resize(task, ptr_x);
                } else if bar_response.drag_started() {
                    let ptr_x = bar_response
                        .interact_pointer_pos()
                        .map(|p| p.x)
                        .unwrap_or(0.0);
                    gesture.begin_drag(task, ptr_x);
                }

                // A double-click only counts as a click because no gesture
                // ever became active for it.
                if bar_response.double_clicked() && gesture.is_idle() {
                    interaction.open_editor = Some(task.id);
                }

                if handle_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
                } else if bar_response.hovered() && gesture.is_idle() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }

                if bar_response.hovered() || handle_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("bar-tip", task.id)),
                        |ui| {
                            ui.strong(&task.title);
                            if let Some((start, due)) = task.schedule() {
                                ui.label(format!(
                                    "{} → {}",
                                    start.format("%d/%m/%Y"),
                                    due.format("%d/%m/%Y"),
                                ));
                            }
                            ui.label(task.priority.label());
                        },
                    );
                }
            }

            // While a gesture is active the global pointer stream drives it,
            // so moves and releases outside the bar still land here. Both
            // branches funnel into the one teardown path.
            if !gesture.is_idle() {
                let (primary_down, pointer_pos) = ui
                    .ctx()
                    .input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));
                if primary_down {
                    match *gesture {
                        GestureState::Dragging { .. } => {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing)
                        }
                        GestureState::Resizing { .. } => {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal)
                        }
                        GestureState::Idle => {}
                    }
                    if let Some(pos) = pointer_pos {
                        if gesture.pointer_moved(pos.x, board) {
                            interaction.changed = true;
                        }
                    }
                } else {
                    gesture.finish();
                }
            }
        });

    interaction
}

fn draw_day_header(painter: &egui::Painter, origin: Pos2, axis: &TimelineAxis, height: f32) {
    let width = LABEL_COL_WIDTH + axis.total_width();
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    painter.text(
        Pos2::new(origin.x + 8.0, origin.y + HEADER_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        "Task",
        theme::font_header(),
        theme::TEXT_PRIMARY,
    );

    for (i, day) in axis.days().enumerate() {
        let x = origin.x + LABEL_COL_WIDTH + i as f32 * crate::engine::DAY_WIDTH;

        // Day column grid line, full chart height
        painter.line_segment(
            [Pos2::new(x, origin.y + HEADER_HEIGHT), Pos2::new(x, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        painter.line_segment(
            [Pos2::new(x, origin.y), Pos2::new(x, origin.y + HEADER_HEIGHT)],
            Stroke::new(0.5, theme::BORDER_SUBTLE),
        );

        let center_x = x + crate::engine::DAY_WIDTH / 2.0;
        painter.text(
            Pos2::new(center_x, origin.y + 16.0),
            egui::Align2::CENTER_CENTER,
            day.day().to_string(),
            theme::font_header(),
            theme::TEXT_PRIMARY,
        );
        painter.text(
            Pos2::new(center_x, origin.y + 31.0),
            egui::Align2::CENTER_CENTER,
            day.format("%b").to_string(),
            theme::font_small(),
            theme::TEXT_DIM,
        );
    }
}

fn draw_row_label(painter: &egui::Painter, origin: Pos2, task: &Task, y: f32) {
    let clipped = painter.with_clip_rect(Rect::from_min_size(
        Pos2::new(origin.x, y),
        Vec2::new(LABEL_COL_WIDTH - 12.0, ROW_HEIGHT),
    ));
    clipped.text(
        Pos2::new(origin.x + 8.0, y + ROW_HEIGHT * 0.32),
        egui::Align2::LEFT_CENTER,
        &task.title,
        theme::font_bar(),
        theme::TEXT_PRIMARY,
    );
    clipped.text(
        Pos2::new(origin.x + 8.0, y + ROW_HEIGHT * 0.72),
        egui::Align2::LEFT_CENTER,
        task.priority.label(),
        theme::font_small(),
        theme::priority_color(task.priority),
    );
}

fn draw_task_bar(
    painter: &egui::Painter,
    origin: Pos2,
    geo: &BarGeometry,
    task: &Task,
    gesture: &GestureState,
    y: f32,
) -> Rect {
    let inset = theme::BAR_INSET;
    let bar_rect = Rect::from_min_size(
        Pos2::new(origin.x + LABEL_COL_WIDTH + geo.x(), y + inset),
        Vec2::new(geo.width().max(6.0), ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    let is_active = gesture.active_task() == Some(task.id);
    let color = match gesture {
        GestureState::Dragging { .. } if is_active => theme::BAR_DRAGGING,
        GestureState::Resizing { .. } if is_active => theme::BAR_RESIZING,
        _ => theme::BAR_IDLE,
    };

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        egui::Color32::from_black_alpha(35),
    );
    painter.rect_filled(bar_rect, rounding, color);
    if is_active {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Resize grip: a small pill at the trailing edge
    let grip_h = bar_rect.height() * 0.55;
    let grip = Rect::from_min_size(
        Pos2::new(
            bar_rect.right() - 7.0,
            bar_rect.center().y - grip_h / 2.0,
        ),
        Vec2::new(3.0, grip_h),
    );
    painter.rect_filled(
        grip,
        Rounding::same(1.5),
        theme::HANDLE_COLOR.gamma_multiply(0.45),
    );

    // Title on the bar, clipped to its bounds
    if bar_rect.width() > 30.0 {
        let galley =
            painter.layout_no_wrap(task.title.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
        let clipped = painter.with_clip_rect(bar_rect.shrink2(Vec2::new(6.0, 0.0)));
        clipped.galley(
            Pos2::new(
                bar_rect.left() + 6.0,
                bar_rect.center().y - galley.size().y / 2.0,
            ),
            galley,
            egui::Color32::TRANSPARENT,
        );
    }

    bar_rect
}
