/// Rolling population standard deviation over a bounded window, using a
/// ring buffer for O(1) push.
///
/// Emits a value as soon as two samples exist, computed over whatever part
/// of the window is filled; `is_full()` reports when the whole window
/// contributes.
#[derive(Debug, Clone)]
pub struct RollingStdDev {
    window: usize,
    buffer: Vec<f64>,
    head: usize,
    count: usize,
    sum: f64,
    sum_sq: f64,
}

impl RollingStdDev {
    pub fn new(window: usize) -> Self {
        assert!(window > 1, "stdev window must be > 1");
        Self {
            window,
            buffer: vec![0.0; window],
            head: 0,
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Push a new value, return the stdev over the filled part of the window.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.count >= self.window {
            let evicted = self.buffer[self.head];
            self.sum -= evicted;
            self.sum_sq -= evicted * evicted;
        }
        self.buffer[self.head] = value;
        self.sum += value;
        self.sum_sq += value * value;
        self.head = (self.head + 1) % self.window;
        if self.count < self.window {
            self.count += 1;
        }
        self.value()
    }

    pub fn value(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);
        Some(variance.sqrt())
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.window
    }

    pub fn samples(&self) -> usize {
        self.count
    }

    pub fn window(&self) -> usize {
        self.window
    }
}
