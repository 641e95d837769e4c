/// Exponential moving average with a configurable seed.
///
/// Crossover rules seed with the simple average of the first `period`
/// samples. Volatility smoothing seeds from the first sample so the blend
/// starts contributing immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmaSeed {
    /// Wait for `period` samples and start from their mean.
    MeanOfPeriod,
    /// Start from the first sample.
    FirstValue,
}

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
    seed: EmaSeed,
    value: Option<f64>,
    warmup_sum: f64,
    samples: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self::with_seed(period, EmaSeed::MeanOfPeriod)
    }

    /// Span-based smoother that emits from the first sample.
    pub fn smoothing(period: usize) -> Self {
        Self::with_seed(period, EmaSeed::FirstValue)
    }

    pub fn with_seed(period: usize, seed: EmaSeed) -> Self {
        assert!(period > 0, "EMA period must be > 0");
        Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            seed,
            value: None,
            warmup_sum: 0.0,
            samples: 0,
        }
    }

    /// Push a new value, return the current EMA if enough data.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.samples += 1;
        match (self.value, self.seed) {
            (Some(prev), _) => {
                self.value = Some((value - prev) * self.multiplier + prev);
            }
            (None, EmaSeed::FirstValue) => {
                self.value = Some(value);
            }
            (None, EmaSeed::MeanOfPeriod) => {
                self.warmup_sum += value;
                if self.samples >= self.period {
                    self.value = Some(self.warmup_sum / self.period as f64);
                }
            }
        }
        self.value
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_ready(&self) -> bool {
        self.value.is_some()
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_seed_waits_for_full_period() {
        let mut ema = Ema::new(3);
        assert_eq!(ema.push(1.0), None);
        assert_eq!(ema.push(2.0), None);
        assert!(!ema.is_ready());

        let v = ema.push(3.0).unwrap();
        assert!((v - 2.0).abs() < f64::EPSILON);
        assert!(ema.is_ready());

        // multiplier = 2/(3+1) = 0.5
        let v = ema.push(4.0).unwrap();
        assert!((v - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_value_seed_emits_immediately() {
        let mut ema = Ema::smoothing(10);
        assert!((ema.push(5.0).unwrap() - 5.0).abs() < f64::EPSILON);
        assert!(ema.is_ready());
    }

    #[test]
    fn converges_towards_constant_input() {
        let mut ema = Ema::new(5);
        for _ in 0..200 {
            ema.push(42.0);
        }
        assert!((ema.value().unwrap() - 42.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "EMA period must be > 0")]
    fn zero_period_panics() {
        Ema::new(0);
    }
}
