pub mod date;
pub mod duration;
pub mod format;

pub use format::hours;
