use std::collections::VecDeque;

/// Rolling minimum and maximum of the last `window` values.
#[derive(Debug, Clone)]
pub struct RollingExtrema {
    window: usize,
    values: VecDeque<f64>,
}

impl RollingExtrema {
    pub fn new(window: usize) -> Self {
        assert!(window > 1, "extrema window must be > 1");
        Self {
            window,
            values: VecDeque::with_capacity(window + 1),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
        while self.values.len() > self.window {
            let _ = self.values.pop_front();
        }
    }

    pub fn min(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().fold(f64::MAX, |acc, v| acc.min(*v)))
    }

    pub fn max(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().fold(f64::MIN, |acc, v| acc.max(*v)))
    }

    pub fn is_ready(&self) -> bool {
        self.values.len() >= self.window
    }

    pub fn window(&self) -> usize {
        self.window
    }
}
