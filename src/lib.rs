//! Casechain - chained integration tests for remote serverless functions
//!
//! Cases are registered in order and executed one at a time; each case's
//! request is computed from the previous case's response by a user-supplied
//! generator, evaluated pass/fail, and recorded in a run report. Per-case
//! continuation policies decide whether the chain keeps going after a
//! success or a failure.

pub mod chain;
pub mod client;
pub mod common;

// Re-export commonly used types
pub use chain::{
    BatchResult, CaseChain, CaseHandle, CaseStatus, Continuation, ReportEntry, RequestSpec,
};
pub use client::{HttpInvokeClient, InvokeClient, InvokeOutput};
pub use common::{ChainConfig, Error, Result};
