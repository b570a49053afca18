pub mod add;
pub mod daily;
pub mod frames;
pub mod projects;
pub mod report;
pub mod start;
pub mod state;
pub mod stop;
pub mod tasks;
pub mod timeline;
