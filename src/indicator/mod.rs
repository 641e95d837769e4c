pub mod delay;
pub mod ema;
pub mod minmax;
pub mod stdev;
