mod visualization;
pub use visualization::*;
pub mod time_space;
pub mod time_speed;

pub use time_space::TimeSpaceStyle;
