pub mod projection;
pub mod task_store;

pub use projection::*;
pub use task_store::*;
