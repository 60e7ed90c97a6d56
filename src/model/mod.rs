pub mod board;
pub mod task;

pub use board::Board;
pub use task::{Priority, Task};
