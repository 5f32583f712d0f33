// Random fault injection
use crate::application::fault_injector::{FaultInjector, FaultSite};
use rand::Rng;

/// Fails each flaky request with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct RandomFaults {
    failure_rate: f64,
}

impl RandomFaults {
    pub fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl FaultInjector for RandomFaults {
    fn should_fail(&self, site: FaultSite) -> bool {
        let fail = rand::thread_rng().gen_bool(self.failure_rate);
        if fail {
            tracing::warn!("Injecting fault at {:?}", site);
        }
        fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_rates() {
        let never = RandomFaults::new(0.0);
        let always = RandomFaults::new(1.0);
        for _ in 0..100 {
            assert!(!never.should_fail(FaultSite::Stores));
            assert!(always.should_fail(FaultSite::Date));
        }
    }

    #[test]
    fn test_rate_is_clamped() {
        assert!(RandomFaults::new(7.0).should_fail(FaultSite::Stores));
        assert!(!RandomFaults::new(-1.0).should_fail(FaultSite::Stores));
    }
}
