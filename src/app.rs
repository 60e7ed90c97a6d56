use std::path::PathBuf;

use chrono::NaiveDate;
use log::warn;
use uuid::Uuid;

use crate::engine::{EditDraft, GestureState};
use crate::model::{Board, Priority, Task};
use crate::ui;

/// Main application state.
pub struct BoardApp {
    pub board: Board,
    pub gesture: GestureState,
    pub edit_draft: Option<EditDraft>,
    pub file_path: Option<PathBuf>,

    // Dialog state
    pub show_add_task: bool,
    pub show_about: bool,
    pub new_task_title: String,
    pub new_task_description: String,
    pub new_task_priority: Priority,
    pub new_task_scheduled: bool,
    pub new_task_start_date: NaiveDate,
    pub new_task_due_date: NaiveDate,

    // Status message
    pub status_message: String,
}

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = chrono::Local::now().date_naive();
        Self {
            board: Self::sample_board(),
            gesture: GestureState::default(),
            edit_draft: None,
            file_path: None,
            show_add_task: false,
            show_about: false,
            new_task_title: String::new(),
            new_task_description: String::new(),
            new_task_priority: Priority::Medium,
            new_task_scheduled: true,
            new_task_start_date: today,
            new_task_due_date: today + chrono::Duration::days(7),
            status_message: "Ready".to_string(),
        }
    }

    /// Generate a sample board for demonstration.
    fn sample_board() -> Board {
        let today = chrono::Local::now().date_naive();
        let day = chrono::Duration::days;

        let mut design = Task::scheduled("Design review", today - day(3), today + day(1));
        design.description = "Walk through the new layout with the team.".to_string();
        design.priority = Priority::High;

        let mut build = Task::scheduled("Build sprint", today, today + day(9));
        build.priority = Priority::Medium;

        let mut docs = Task::scheduled("Update docs", today + day(5), today + day(7));
        docs.priority = Priority::Low;

        // Only a start date: stays off the timeline until a due date is set.
        let mut triage = Task::new("Bug triage");
        triage.start_date = Some(today + day(2));

        let backlog = Task::new("Backlog grooming");

        Board::with_tasks("Sample Board", vec![design, build, docs, triage, backlog])
    }

    // --- File operations ---

    pub fn new_board(&mut self) {
        self.board = Board::default();
        self.file_path = None;
        self.edit_draft = None;
        self.gesture.finish();
        self.status_message = "New board created".to_string();
    }

    pub fn open_board(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task Board", &["board.json", "json"])
            .pick_file()
        {
            match crate::io::load_board(&path) {
                Ok(board) => {
                    self.board = board;
                    self.file_path = Some(path);
                    self.edit_draft = None;
                    self.gesture.finish();
                    self.status_message = "Board loaded".to_string();
                }
                Err(e) => {
                    warn!("failed to load board: {e}");
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_board(&mut self) {
        if let Some(ref path) = self.file_path.clone() {
            self.board.touch();
            match crate::io::save_board(&self.board, path) {
                Ok(()) => self.status_message = "Board saved".to_string(),
                Err(e) => {
                    warn!("failed to save board: {e}");
                    self.status_message = format!("Error saving: {}", e);
                }
            }
        } else {
            self.save_board_as();
        }
    }

    pub fn save_board_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task Board", &["board.json", "json"])
            .set_file_name(format!("{}.board.json", self.board.name))
            .save_file()
        {
            self.file_path = Some(path.clone());
            self.board.touch();
            match crate::io::save_board(&self.board, &path) {
                Ok(()) => self.status_message = "Board saved".to_string(),
                Err(e) => {
                    warn!("failed to save board: {e}");
                    self.status_message = format!("Error saving: {}", e);
                }
            }
        }
    }

    // --- Task operations ---

    pub fn create_task_from_dialog(&mut self) {
        let title = if self.new_task_title.trim().is_empty() {
            "New Task".to_string()
        } else {
            self.new_task_title.clone()
        };

        let mut task = Task::new(title);
        task.description = self.new_task_description.clone();
        task.priority = self.new_task_priority;
        if self.new_task_scheduled {
            let start = self.new_task_start_date;
            let due = self.new_task_due_date.max(start);
            task.start_date = Some(start);
            task.due_date = Some(due);
        }

        self.board
            .update_tasks(|prev| prev.iter().cloned().chain([task]).collect());
        self.reset_dialog_fields();
        self.status_message = "Task added".to_string();
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.board
            .update_tasks(|prev| prev.iter().filter(|t| t.id != id).cloned().collect());
        if self.edit_draft.as_ref().is_some_and(|d| d.id == id) {
            self.edit_draft = None;
        }
        self.status_message = "Task deleted".to_string();
    }

    /// Open the edit dialog on a snapshot of the task. One draft at a time.
    pub fn open_editor(&mut self, id: Uuid) {
        if let Some(task) = self.board.task(id) {
            self.edit_draft = Some(EditDraft::open(task));
        }
    }

    fn reset_dialog_fields(&mut self) {
        let today = chrono::Local::now().date_naive();
        self.new_task_title = String::new();
        self.new_task_description = String::new();
        self.new_task_priority = Priority::Medium;
        self.new_task_scheduled = true;
        self.new_task_start_date = today;
        self.new_task_due_date = today + chrono::Duration::days(7);
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Keyboard shortcuts outside closures to avoid borrow issues
        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save_board();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_sub())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.board.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: task table
        let mut table_action = ui::task_table::TaskTableAction::None;
        egui::SidePanel::left("task_panel")
            .default_width(280.0)
            .min_width(220.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                table_action = ui::task_table::show_task_table(self.board.tasks(), ui);
            });

        match table_action {
            ui::task_table::TaskTableAction::Edit(id) => self.open_editor(id),
            ui::task_table::TaskTableAction::Delete(id) => self.delete_task(id),
            ui::task_table::TaskTableAction::Add => self.show_add_task = true,
            ui::task_table::TaskTableAction::None => {}
        }

        // Central panel: timeline
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let interaction = ui::timeline::show_timeline(&mut self.board, &mut self.gesture, ui);
            if interaction.changed {
                if let Some(task) = self.gesture.active_task().and_then(|id| self.board.task(id)) {
                    if let Some((start, due)) = task.schedule() {
                        self.status_message = format!(
                            "Updated '{}' ({} → {})",
                            task.title,
                            start.format("%Y-%m-%d"),
                            due.format("%Y-%m-%d")
                        );
                    }
                } else {
                    self.status_message = "Timeline updated".to_string();
                }
            }
            if let Some(id) = interaction.open_editor {
                self.open_editor(id);
            }
        });

        // Edit dialog: widgets bind to the snapshot draft; the board changes
        // only on confirm or delete.
        if let Some(mut draft) = self.edit_draft.take() {
            match ui::task_editor::show_task_editor(&mut draft, ctx) {
                ui::task_editor::EditorAction::Confirm => {
                    self.board.update_tasks(|prev| draft.confirm(prev));
                    self.status_message = format!("Updated '{}'", draft.title);
                }
                ui::task_editor::EditorAction::Delete => {
                    self.board.update_tasks(|prev| draft.delete(prev));
                    self.status_message = "Task deleted".to_string();
                }
                ui::task_editor::EditorAction::Cancel => {}
                ui::task_editor::EditorAction::None => {
                    self.edit_draft = Some(draft);
                }
            }
        }

        // Other dialogs
        if self.show_add_task {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
