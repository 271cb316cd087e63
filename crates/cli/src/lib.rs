use fibbench_core::TrackingAllocator;

pub mod commands;
pub mod config;
pub mod util;

/// Counts heap traffic so `compare` can report allocations per algorithm.
#[global_allocator]
pub static ALLOCATOR: TrackingAllocator = TrackingAllocator::new();
