// Deterministic weekly series generation
use crate::application::seeded_sampler::SeededSampler;
use crate::domain::series::{Data, SeriesRequest};

const VISITORS_MEAN: f64 = 1200.0;
const VISITORS_STD_DEV: f64 = 300.0;
const TURNOVER_MEAN: f64 = 50000.0;
const TURNOVER_STD_DEV: f64 = 5000.0;

/// Generate one visitors/turnover sample per week of the request.
///
/// The request must already be validated. The sampler is seeded from the
/// request and dropped at the end of the call, so the output depends on
/// nothing but the request.
pub fn generate<S: SeededSampler>(request: &SeriesRequest) -> Data {
    let seed = request.seed();
    let mut sampler = S::from_seed_str(&seed);
    let mut data = Data::default();

    for week in request.weeks() {
        // Draw order is part of the output contract: visitors, then turnover
        let visitors = sampler.normal(VISITORS_MEAN, VISITORS_STD_DEV).round() as i64;
        let turnover = round_cents(sampler.normal(TURNOVER_MEAN, TURNOVER_STD_DEV));
        data.insert(week, visitors, turnover);
    }

    tracing::debug!("Generated {} weeks for seed {}", data.len(), seed);
    data
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Returns `mean + n` for the n-th draw so the draw order is visible.
    struct CountingSampler {
        draws: u32,
    }

    impl SeededSampler for CountingSampler {
        fn from_seed_str(_seed: &str) -> Self {
            Self { draws: 0 }
        }

        fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
            let value = mean + self.draws as f64 + 0.004;
            self.draws += 1;
            value
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draw_order_alternates_visitors_and_turnover() {
        let request = SeriesRequest::new(1, date(2023, 4, 10), date(2023, 4, 24));
        let data = generate::<CountingSampler>(&request);

        assert_eq!(data.visitors_per_week[&date(2023, 4, 10)], 1200);
        assert_eq!(data.turnover_per_week[&date(2023, 4, 10)], 50001.0);
        assert_eq!(data.visitors_per_week[&date(2023, 4, 17)], 1202);
        assert_eq!(data.turnover_per_week[&date(2023, 4, 17)], 50003.0);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(50123.456), 50123.46);
        assert_eq!(round_cents(49999.994), 49999.99);
    }
}
