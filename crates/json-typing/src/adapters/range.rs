use super::{expect_array, expect_i64};
use crate::error::AdapterError;
use crate::registry::Adapter;
use crate::value::Value;

/// Half-open integer range with a non-zero step, negative steps counting
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange {
    start: i64,
    stop: i64,
    step: i64,
}

impl StepRange {
    pub fn new(start: i64, stop: i64, step: i64) -> Result<Self, AdapterError> {
        if step == 0 {
            return Err(AdapterError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// `start..stop` with step 1.
    pub fn up_to(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn len(&self) -> usize {
        let (start, stop, step) = (self.start as i128, self.stop as i128, self.step as i128);
        let span = if step > 0 { stop - start } else { start - stop };
        if span <= 0 {
            return 0;
        }
        let step = step.abs();
        ((span + step - 1) / step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, n: i64) -> bool {
        let in_bounds = if self.step > 0 {
            self.start <= n && n < self.stop
        } else {
            self.stop < n && n <= self.start
        };
        in_bounds && (n as i128 - self.start as i128) % self.step as i128 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> {
        let Self { start, step, .. } = *self;
        (0..self.len()).map(move |i| (start as i128 + i as i128 * step as i128) as i64)
    }
}

/// [`StepRange`] as `range`, carried as `[start, stop, step]`.
pub fn ranges() -> Adapter {
    Adapter::new(
        "range",
        |r: &StepRange| {
            Ok(Value::Array(vec![
                Value::from(r.start),
                Value::from(r.stop),
                Value::from(r.step),
            ]))
        },
        |payload| match expect_array(payload)?.as_slice() {
            [start, stop, step] => {
                StepRange::new(expect_i64(start)?, expect_i64(stop)?, expect_i64(step)?)
            }
            other => Err(AdapterError::Custom(format!(
                "range payload needs 3 integers, found {}",
                other.len()
            ))),
        },
    )
}
