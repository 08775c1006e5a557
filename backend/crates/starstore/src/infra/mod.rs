//! Infrastructure Layer - Document-store implementations

pub mod mongo;
