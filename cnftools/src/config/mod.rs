/*!
Analyzer configuration: which classification stages run, and how many root-estimation passes to
attempt.
*/

/// Configuration for one [GateAnalyzer](crate::gates::analyzer::GateAnalyzer) run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Whether structural [pattern classification](crate::gates::analyzer) runs.
    pub patterns: bool,

    /// Whether the [semantic oracle](crate::oracle) is consulted when patterns don't classify.
    pub semantic: bool,

    /// The maximum number of root-estimation passes. An input of `0` is invalid and is clamped
    /// to `1`.
    repeat: usize,
}

impl AnalyzerConfig {
    /// Builds a configuration, clamping an invalid (zero) `repeat` to `1`.
    pub fn new(patterns: bool, semantic: bool, repeat: usize) -> Self {
        Self {
            patterns,
            semantic,
            repeat: repeat.max(1),
        }
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            patterns: true,
            semantic: true,
            repeat: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_repeat_clamps_to_one() {
        assert_eq!(AnalyzerConfig::new(true, true, 0).repeat(), 1);
    }

    #[test]
    fn default_enables_both_stages() {
        let cfg = AnalyzerConfig::default();
        assert!(cfg.patterns);
        assert!(cfg.semantic);
        assert_eq!(cfg.repeat(), 1);
    }
}
