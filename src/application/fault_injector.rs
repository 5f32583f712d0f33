// Failure injection hook for the HTTP layer

/// Endpoints that may be made to fail on purpose so clients can rehearse
/// their error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultSite {
    Stores,
    Date,
}

pub trait FaultInjector: Send + Sync {
    fn should_fail(&self, site: FaultSite) -> bool;
}

/// Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaults;

impl FaultInjector for NoFaults {
    fn should_fail(&self, _site: FaultSite) -> bool {
        false
    }
}
