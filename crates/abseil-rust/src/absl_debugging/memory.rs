//! Memory region and profiling support.

use alloc::string::String;
use alloc::vec::Vec;

/// Memory permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryPermissions {
    /// Readable.
    pub read: bool,
    /// Writable.
    pub write: bool,
    /// Executable.
    pub execute: bool,
}

impl MemoryPermissions {
    /// Creates new permissions.
    pub const fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }

    /// Read-only memory.
    pub const fn read_only() -> Self {
        Self {
            read: true,
            write: false,
            execute: false,
        }
    }

    /// Read-write memory.
    pub const fn read_write() -> Self {
        Self {
            read: true,
            write: true,
            execute: false,
        }
    }

    /// Read-execute memory.
    pub const fn read_execute() -> Self {
        Self {
            read: true,
            write: false,
            execute: true,
        }
    }

    /// All permissions.
    pub const fn all() -> Self {
        Self {
            read: true,
            write: true,
            execute: true,
        }
    }

    /// No permissions.
    pub const fn none() -> Self {
        Self {
            read: false,
            write: false,
            execute: false,
        }
    }
}

/// Memory region information.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRegion {
    /// Start address.
    pub start: usize,
    /// End address.
    pub end: usize,
    /// Memory permissions.
    pub permissions: MemoryPermissions,
    /// Region name or label.
    pub name: Option<String>,
}

impl MemoryRegion {
    /// Creates a new memory region.
    pub fn new(start: usize, end: usize, permissions: MemoryPermissions) -> Self {
        Self {
            start,
            end,
            permissions,
            name: None,
        }
    }

    /// Sets the region name.
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Returns the size of this region.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the given address is within this region.
    pub fn contains(&self, address: usize) -> bool {
        address >= self.start && address < self.end
    }

    /// Returns true if this region overlaps with another.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Memory map for debugging.
#[derive(Clone, Debug, Default)]
pub struct MemoryMap {
    regions: Vec<MemoryRegion>,
}

impl MemoryMap {
    /// Creates a new memory map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region to the map.
    pub fn add(&mut self, region: MemoryRegion) {
        self.regions.push(region);
    }

    /// Finds the region containing the given address.
    pub fn find_region(&self, address: usize) -> Option<&MemoryRegion> {
        self.regions.iter().find(|r| r.contains(address))
    }

    /// Returns all regions.
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Sorts regions by start address.
    pub fn sort(&mut self) {
        self.regions.sort_by_key(|r| r.start);
    }

    /// Merges adjacent regions with the same permissions.
    pub fn merge(&mut self) {
        if self.regions.is_empty() {
            return;
        }

        self.regions.sort_by_key(|r| r.start);
        let mut merged = Vec::new();
        let mut current = self.regions[0].clone();

        for region in &self.regions[1..] {
            if region.start == current.end && region.permissions == current.permissions {
                // Merge adjacent regions with same permissions
                current.end = region.end;
            } else {
                merged.push(current);
                current = region.clone();
            }
        }
        merged.push(current);
        self.regions = merged;
    }

    /// Returns the total memory size.
    pub fn total_size(&self) -> usize {
        self.regions.iter().map(|r| r.size()).sum()
    }
}

/// Performance profiling data.
#[derive(Clone, Debug)]
pub struct ProfilingData {
    /// Function name or label.
    pub name: String,
    /// Number of calls.
    pub call_count: u64,
    /// Total time in nanoseconds.
    pub total_time_ns: u64,
    /// Self time (excluding children) in nanoseconds.
    pub self_time_ns: u64,
    /// Average time per call.
    pub avg_time_ns: u64,
}

impl ProfilingData {
    /// Creates new profiling data.
    pub fn new(name: String) -> Self {
        Self {
            name,
            call_count: 0,
            total_time_ns: 0,
            self_time_ns: 0,
            avg_time_ns: 0,
        }
    }

    /// Records a call.
    pub fn record_call(&mut self, duration_ns: u64) {
        self.call_count = self.call_count.saturating_add(1);
        self.total_time_ns = self.total_time_ns.saturating_add(duration_ns);
        self.avg_time_ns = self.total_time_ns / self.call_count.max(1);
    }
}

/// A performance profiler.
#[derive(Clone, Debug, Default)]
pub struct Profiler {
    entries: Vec<ProfilingData>,
    enabled: bool,
}

impl Profiler {
    /// Creates a new profiler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables profiling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if profiling is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records a function call.
    pub fn record(&mut self, name: &str, duration_ns: u64) {
        if !self.enabled {
            return;
        }

        let entry = self.entries.iter_mut().find(|e| e.name == name);
        if let Some(entry) = entry {
            entry.record_call(duration_ns);
        } else {
            let mut new_entry = ProfilingData::new(name.to_string());
            new_entry.record_call(duration_ns);
            self.entries.push(new_entry);
        }
    }

    /// Returns all profiling entries.
    pub fn entries(&self) -> &[ProfilingData] {
        &self.entries
    }

    /// Clears all profiling data.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resets profiling data (keeps entries but resets counters).
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.call_count = 0;
            entry.total_time_ns = 0;
            entry.self_time_ns = 0;
            entry.avg_time_ns = 0;
        }
    }

    /// Returns profiling data for a specific function.
    pub fn get(&self, name: &str) -> Option<&ProfilingData> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Sorts entries by total time (descending).
    pub fn sort_by_total_time(&mut self) {
        self.entries.sort_by(|a, b| b.total_time_ns.cmp(&a.total_time_ns));
    }

    /// Sorts entries by call count (descending).
    pub fn sort_by_call_count(&mut self) {
        self.entries.sort_by(|a, b| b.call_count.cmp(&a.call_count));
    }
}
