//! HTML rendering. Pure functions from state to markup; no I/O.

pub mod page;
pub mod tasks;
pub mod weather;

pub use page::render_page;
pub use tasks::render_task_section;
pub use weather::render_weather_panel;
