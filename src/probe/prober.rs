//! Prober trait.

use std::future::Future;

/// Issues a single reachability test against one address.
///
/// # Contract
///
/// - Resolves to `true` only if the target answered exactly one echo request
/// - Never fails: an unanswered request, an explicit "unreachable" reply and
///   a tool that could not be run all resolve to `false`
/// - Performs no retries; one negative answer is authoritative for a cycle
///
/// # Example
///
/// ```ignore
/// use topo_watch::probe::Prober;
///
/// struct AlwaysUp;
///
/// impl Prober for AlwaysUp {
///     async fn probe(&self, _address: &str) -> bool {
///         true
///     }
/// }
/// ```
pub trait Prober: Send + Sync {
    /// Probes `address` once.
    fn probe(&self, address: &str) -> impl Future<Output = bool> + Send;
}
