//! Subnet calculation logic.
//!
//! - [`split`] - subdividing a network into more specific subnets

mod split;

// Re-export public functions
pub use split::{broadcast_addr, compute_split, cut_addr, host_range};
