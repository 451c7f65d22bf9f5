pub mod trajectory_reader;

pub use trajectory_reader::TrajectoryReader;
