//! The fixed number sample used by the computation step

#[derive(Debug, Clone, Copy)]
pub struct NumberSample {
    values: &'static [i64],
}

impl Default for NumberSample {
    fn default() -> Self {
        Self {
            values: &[1, 2, 3, 4, 5],
        }
    }
}

impl NumberSample {
    pub fn values(&self) -> &[i64] {
        self.values
    }

    pub fn sum(&self) -> i64 {
        self.values.iter().sum()
    }

    pub fn average(&self) -> f64 {
        self.sum() as f64 / self.values.len() as f64
    }
}
