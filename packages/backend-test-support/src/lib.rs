//! Shared helpers for the backend's integration tests: logging setup,
//! Problem Details assertions and collision-free chat/user ids.

pub mod problem_details;
pub mod test_logging;
pub mod unique_helpers;
