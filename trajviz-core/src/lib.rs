mod record;
pub use record::*;
mod range;
pub use range::*;
mod query;
pub use query::*;
mod aggregate;
pub use aggregate::*;
pub mod units;

pub type Real = f64;
pub type CarId = u64;
pub type FrameNumber = u64;
