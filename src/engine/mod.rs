//! The timeline interaction engine: axis derivation, bar geometry, the
//! drag/resize gesture machine and the edit-draft synchronizer. Everything
//! here is UI-free and pure over the task collection; rendering lives in
//! [`crate::ui`].

pub mod axis;
pub mod editor;
pub mod geometry;
pub mod gesture;

pub use axis::{TimelineAxis, BAR_GUTTER, DAY_WIDTH};
pub use editor::EditDraft;
pub use geometry::BarGeometry;
pub use gesture::GestureState;
