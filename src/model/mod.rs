pub mod drag;
pub mod palette;
pub mod store;
pub mod task;
pub mod year_axis;

pub use drag::{BarGeometry, DragController, DragMode, DragSession};
pub use palette::ColorPalette;
pub use store::TaskStore;
pub use task::Task;
pub use year_axis::YearAxis;
