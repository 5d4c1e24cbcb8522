//! Request validation for order operations.
//!
//! Each operation runs an ordered [`Pipeline`] of [`Check`]s before its
//! terminal handler. The first failing check ends the request with its
//! [`OrderError`](crate::error::OrderError); later checks and the handler do
//! not run.
//!
//! | Operation | Checks |
//! |-----------|--------|
//! | create    | deliverTo, mobileNumber, dishes present → dish quantities |
//! | read      | order exists |
//! | update    | order exists → deliverTo, mobileNumber, dishes, status present → dish quantities → status valid → not delivered |
//! | delete    | order exists → pending |
//! | list      | (none) |

mod checks;
mod pipeline;

pub use checks::{
    Check, describe_value, is_truthy, reject_delivered, require_field, require_pending,
    resolve_order, validate_dish_quantities, validate_status,
};
pub use pipeline::{Pipeline, PipelineContext};
