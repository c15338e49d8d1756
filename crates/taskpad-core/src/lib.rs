pub mod store;
pub mod task;
pub mod view;

pub use store::TaskStore;
pub use task::{Draft, Priority, Task};
