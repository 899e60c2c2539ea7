//! Constants for the download module (timeouts, budget).

/// HTTP connect timeout applied to the request phase (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout for each body chunk (30 seconds).
///
/// Bounds how far a single blocked chunk read can overshoot the global
/// budget, since the budget is only polled between chunks.
pub const READ_TIMEOUT_SECS: u64 = 30;

/// Default global wall-clock budget for the whole download (10 minutes).
pub const DEFAULT_GLOBAL_TIMEOUT_SECS: u64 = 600;
