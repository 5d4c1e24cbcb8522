//! Builder utilities for operation handler types
//!
//! This module provides convenient builder methods for constructing
//! OrderOperationRequest values, either per operation or from an HTTP route.

pub mod request;
pub mod routing;

// Builder implementations are available through impl blocks on core types
