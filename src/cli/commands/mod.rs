pub mod add;
pub mod cancel;
pub mod current;
pub mod daily;
pub mod frame;
pub mod log;
pub mod project;
pub mod report;
pub mod shift;
pub mod start;
pub mod status;
pub mod stop;
pub mod task;
pub mod timeline;
