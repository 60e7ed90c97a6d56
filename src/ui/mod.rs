pub mod dialogs;
pub mod task_editor;
pub mod task_table;
pub mod theme;
pub mod timeline;
pub mod toolbar;
