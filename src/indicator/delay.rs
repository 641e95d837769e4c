use std::collections::VecDeque;

/// Fixed-lag delay line: after warm-up, `value()` is the input from
/// `period` pushes ago.
#[derive(Debug, Clone)]
pub struct Delay {
    period: usize,
    buffer: VecDeque<f64>,
    value: Option<f64>,
}

impl Delay {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "delay period must be > 0");
        Self {
            period,
            buffer: VecDeque::with_capacity(period + 1),
            value: None,
        }
    }

    /// Push a new value, return the value from `period` pushes ago once
    /// available.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.buffer.push_back(value);
        if self.buffer.len() > self.period {
            self.value = self.buffer.pop_front();
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
