use std::path::PathBuf;

use crate::model::Board;

/// Save a board to a JSON file.
pub fn save_board(board: &Board, path: &PathBuf) -> Result<(), String> {
    let json = serde_json::to_string_pretty(board).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())
}

/// Load a board from a JSON file.
pub fn load_board(path: &PathBuf) -> Result<Board, String> {
    let json = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("taskboard-{nanos}-{file_name}"))
    }

    #[test]
    fn save_then_load_preserves_the_board() {
        let path = temp_path("roundtrip.json");
        let mut board = Board::new("My Board");
        board.update_tasks(|_| {
            vec![
                Task::scheduled(
                    "dated",
                    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
                ),
                Task::new("undated"),
            ]
        });

        save_board(&board, &path).unwrap();
        let loaded = load_board(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.name, "My Board");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.tasks()[0].schedule(), board.tasks()[0].schedule());
        assert!(!loaded.tasks()[1].is_scheduled());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_board(&temp_path("does-not-exist.json")).unwrap_err();
        assert!(!err.is_empty());
    }
}
