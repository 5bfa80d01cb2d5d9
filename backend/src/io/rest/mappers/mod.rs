pub mod allocation_mapper;

pub use allocation_mapper::AllocationMapper;
