//! Allocation accounting for measuring what each algorithm allocates.
//!
//! Install [`TrackingAllocator`] with `#[global_allocator]`, then diff two
//! [`MemoryStats`] snapshots around the code under test.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicUsize, Ordering},
};

use serde::{Deserialize, Serialize};

/// Wraps the system allocator and counts allocations and bytes.
#[derive(Debug, Default)]
pub struct TrackingAllocator {
    allocations: AtomicUsize,
    allocated_bytes: AtomicUsize,
    current_bytes: AtomicUsize,
}

impl TrackingAllocator {
    pub const fn new() -> Self {
        Self {
            allocations: AtomicUsize::new(0),
            allocated_bytes: AtomicUsize::new(0),
            current_bytes: AtomicUsize::new(0),
        }
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            allocations: self.allocations.load(Ordering::Relaxed),
            allocated_bytes: self.allocated_bytes.load(Ordering::Relaxed),
            current_bytes: self.current_bytes.load(Ordering::Relaxed),
        }
    }

    /// Runs `f` and returns its result with the allocations made meanwhile.
    ///
    /// Counters are process-wide, so allocations from other threads are included.
    pub fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, MemoryStats) {
        let start = self.stats();
        let value = f();
        (value, self.stats().delta(&start))
    }

    fn record_alloc(&self, size: usize) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.allocated_bytes.fetch_add(size, Ordering::Relaxed);
        self.current_bytes.fetch_add(size, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.current_bytes.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.current_bytes.fetch_sub(layout.size(), Ordering::Relaxed);
            self.record_alloc(new_size);
        }
        new_ptr
    }
}

/// Counters of a [`TrackingAllocator`] at one point in time, or the difference
/// between two such snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Calls to `alloc`, `alloc_zeroed` and `realloc`
    pub allocations: usize,
    /// Bytes requested in total
    pub allocated_bytes: usize,
    /// Bytes live right now
    pub current_bytes: usize,
}

impl MemoryStats {
    /// Growth since `start`. Live bytes that shrank count as zero.
    pub fn delta(&self, start: &MemoryStats) -> Self {
        Self {
            allocations: self.allocations.saturating_sub(start.allocations),
            allocated_bytes: self.allocated_bytes.saturating_sub(start.allocated_bytes),
            current_bytes: self.current_bytes.saturating_sub(start.current_bytes),
        }
    }
}
