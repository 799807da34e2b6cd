mod batch;
mod rate_limiter;
mod report;

pub use batch::{BatchScheduler, BatchSettings};
pub use rate_limiter::SlidingWindowLimiter;
pub use report::BatchReport;
