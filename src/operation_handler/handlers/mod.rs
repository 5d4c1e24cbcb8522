//! Operation handler modules
//!
//! - CRUD operations (create, read, update, delete)
//! - Query operations (list)

pub mod crud;
pub mod query;

// Handler functions are accessed directly by the core dispatcher
// No re-exports needed since they're called via super::handlers::module::function
