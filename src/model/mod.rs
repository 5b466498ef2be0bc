pub mod config;
pub mod sort;
pub mod task;
pub mod theme;

pub use config::*;
pub use sort::*;
pub use task::*;
pub use theme::*;
