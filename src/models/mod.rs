pub mod frame;
pub mod project;
pub mod state;
pub mod task;

pub use frame::Frame;
pub use project::Project;
pub use state::State;
pub use task::Task;
