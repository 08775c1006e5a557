//! Starstore Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Document-store implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - Each purchase item fans out into a full `Purchase` record and a
//!   redacted `History` projection sharing one server-generated id
//! - History is written only after the Purchase write succeeded
//! - Batches are not atomic; outcomes are reported per item

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use infra::mongo::MongoStoreRepository;
pub use presentation::router::starstore_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
