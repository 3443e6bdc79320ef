use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{Metrics, HEALTHY};

pub const USERS_RANGE: RangeInclusive<u32> = 100..=1000;
pub const REQUESTS_RANGE: RangeInclusive<u32> = 1000..=10000;

// Draw a fresh set of metrics; users and requests are sampled independently
pub fn generate_metrics<R: Rng>(rng: &mut R) -> Metrics {
    Metrics {
        users: rng.random_range(USERS_RANGE),
        requests: rng.random_range(REQUESTS_RANGE),
        status: HEALTHY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_metrics_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let metrics = generate_metrics(&mut rng);
            assert!(USERS_RANGE.contains(&metrics.users), "users out of range: {}", metrics.users);
            assert!(
                REQUESTS_RANGE.contains(&metrics.requests),
                "requests out of range: {}",
                metrics.requests
            );
            assert_eq!(metrics.status, "healthy");
        }
    }

    #[test]
    fn test_metrics_vary_between_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = generate_metrics(&mut rng);

        let varied = (0..100).any(|_| generate_metrics(&mut rng) != first);
        assert!(varied);
    }

    #[test]
    fn test_same_seed_same_metrics() {
        let a = generate_metrics(&mut StdRng::seed_from_u64(1));
        let b = generate_metrics(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
