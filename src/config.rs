//! Tunable limits for line assembly

/// Retry budget for rejected duplicate picks on a single line.
pub const DEFAULT_MAX_DUPLICATE_RETRIES: u32 = 10;

/// Hard cap on sampling iterations per line before assembly gives up.
pub const DEFAULT_MAX_LINE_ITERATIONS: u32 = 100;

/// Limits applied while assembling each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// While a line's iteration count stays below this budget, a pick whose
    /// surface was already used in the poem is rejected and redrawn. Once
    /// the budget is spent, repeats are accepted so thin pools can still
    /// finish a line.
    pub max_duplicate_retries: u32,

    /// Upper bound on sampling iterations for one line. Reaching it means
    /// the pools cannot fill the remaining syllables and assembly stops
    /// with a starvation error instead of spinning.
    pub max_line_iterations: u32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_duplicate_retries: DEFAULT_MAX_DUPLICATE_RETRIES,
            max_line_iterations: DEFAULT_MAX_LINE_ITERATIONS,
        }
    }
}

impl AssemblerConfig {
    pub fn with_max_duplicate_retries(mut self, retries: u32) -> Self {
        self.max_duplicate_retries = retries;
        self
    }

    pub fn with_max_line_iterations(mut self, iterations: u32) -> Self {
        self.max_line_iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_limits() {
        let config = AssemblerConfig::default();
        assert_eq!(config.max_duplicate_retries, 10);
        assert_eq!(config.max_line_iterations, 100);
    }
}
