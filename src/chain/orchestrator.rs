//! Chain registration and sequential execution

use serde_json::Value;

use crate::client::InvokeClient;
use crate::common::ChainConfig;

use super::case::{Case, CaseHandle, CaseStatus, Continuation};
use super::console;
use super::executor::{self, CaseOutcome};
use super::report::{BatchResult, ReportAggregator};
use super::request::RequestSpec;

/// An ordered chain of test cases against a remote deployment
///
/// ```no_run
/// use casechain::{CaseChain, ChainConfig, Continuation, HttpInvokeClient, RequestSpec};
/// use serde_json::json;
///
/// # async fn demo() {
/// let mut chain = CaseChain::new(
///     ChainConfig::new("orders").stage("dev"),
///     HttpInvokeClient::new("http://localhost:4566"),
/// );
///
/// let create = chain.register("create", "create an order", |_, _| {
///     RequestSpec::new()
///         .field("body", json!({ "item": "book" }))
///         .on_failure(Continuation::Break)
/// });
///
/// chain.register("get", "fetch it back", |prev, _| {
///     let id = prev.unwrap()["body"]["id"].clone();
///     RequestSpec::new()
///         .field("pathParameters", json!({ "id": id }))
///         .valid(|data, _| data["statusCode"] == 200)
/// });
///
/// let result = chain.run().await;
/// assert_eq!(result.failure, 0);
///
/// // Replay a single case
/// chain.run_selected(&[create]).await;
/// # }
/// ```
pub struct CaseChain<C> {
    config: ChainConfig,
    client: C,
    cases: Vec<Case>,
    next_id: u64,
}

impl<C: InvokeClient> CaseChain<C> {
    /// Create an empty chain over the given transport
    pub fn new(config: ChainConfig, client: C) -> Self {
        Self {
            config,
            client,
            cases: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a case to the end of the chain
    ///
    /// The generator receives the previous case's normalized response data
    /// and raw payload (`None` for both on the first case) and returns the
    /// request to send. Registration order is the default execution order.
    pub fn register(
        &mut self,
        function_name: impl Into<String>,
        title: impl Into<String>,
        generator: impl Fn(Option<&Value>, Option<&str>) -> RequestSpec + Send + Sync + 'static,
    ) -> CaseHandle {
        self.next_id += 1;
        self.cases.push(Case {
            id: self.next_id,
            function_name: function_name.into(),
            title: title.into(),
            generator: Box::new(generator),
        });
        CaseHandle(self.next_id)
    }

    /// Run every registered case in registration order
    pub async fn run(&self) -> BatchResult {
        self.batch(self.cases.iter().collect()).await
    }

    /// Run only the cases named by `selection`
    ///
    /// Handles that do not match a registered case are skipped. Cases run
    /// in the iteration order of `selection`, not registration order;
    /// callers wanting the registered sequence must pass handles in that
    /// order.
    pub async fn run_selected(&self, selection: &[CaseHandle]) -> BatchResult {
        let cases = selection
            .iter()
            .filter_map(|handle| self.cases.iter().find(|case| case.id == handle.0))
            .collect();
        self.batch(cases).await
    }

    async fn batch(&self, cases: Vec<&Case>) -> BatchResult {
        let total = cases.len();
        let mut aggregator = ReportAggregator::default();
        let mut prev = CaseOutcome::default();

        if !self.config.quiet {
            console::banner_start(total);
        }
        tracing::info!(total, "chain run started");

        for (index, case) in cases.into_iter().enumerate() {
            let execution = executor::invoke(&self.client, &self.config, case, &prev).await;
            prev = execution.outcome;

            if !self.config.quiet {
                console::case_line(index + 1, &execution.report, prev.data.as_ref());
            }

            let status = execution.report.status;
            aggregator.push(execution.report);

            let policy = match status {
                CaseStatus::Success => execution.on_success,
                CaseStatus::Fail | CaseStatus::Error => execution.on_failure,
            };
            if policy == Continuation::Break {
                tracing::info!(case = case.id, ?status, "continuation policy stopped the run");
                break;
            }
        }

        if !self.config.quiet {
            console::banner_finish(aggregator.success(), aggregator.failure());
        }
        tracing::info!(
            success = aggregator.success(),
            failure = aggregator.failure(),
            "chain run finished"
        );

        aggregator.finish(total)
    }
}
