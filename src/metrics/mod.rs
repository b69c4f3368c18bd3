pub mod statistics;

pub use statistics::{improvement_percentage, moving_average, Histogram, Statistics};
