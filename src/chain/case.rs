//! Case registry types

use serde::{Deserialize, Serialize};

use super::request::Generator;

/// Whether the chain proceeds after a case completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continuation {
    /// Stop the run after this case
    Break,
    /// Proceed to the next case
    #[default]
    Continue,
}

/// Terminal outcome of a single case
///
/// `Fail` is a business failure (the response was unacceptable), `Error`
/// an infrastructure one (the invocation itself raised). Both are normal
/// report rows, never exceptions out of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Success,
    Fail,
    Error,
}

/// Handle identifying a registered case
///
/// Returned from [`CaseChain::register`](super::CaseChain::register) and
/// accepted by [`CaseChain::run_selected`](super::CaseChain::run_selected)
/// for selective re-running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseHandle(pub(crate) u64);

impl CaseHandle {
    /// The case's registry id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One registered unit of work: a target function, a title, and the
/// generator computing its request from the previous case's result
pub(crate) struct Case {
    pub id: u64,
    pub function_name: String,
    pub title: String,
    pub generator: Generator,
}
