//! Runtime settings for a console run.

use clap::ValueEnum;

use crate::DEFAULT_CAPACITY;

/// What the reader does once more than `capacity` values arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverflowPolicy {
    /// Fail with an out-of-range error.
    Reject,
    /// Keep the first `capacity` values and warn about the rest.
    Truncate,
    /// Keep every value, spilling into further plane groups.
    #[default]
    Extend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Values accepted before `policy` applies. Under
    /// [`OverflowPolicy::Extend`] it only decides when the overflow is logged.
    pub capacity: usize,
    pub policy: OverflowPolicy,
    /// Print the bit-planes before and after the increment.
    pub show_planes: bool,
    /// Increment plane groups on the rayon pool.
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: OverflowPolicy::default(),
            show_planes: false,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.capacity, 64);
        assert_eq!(config.policy, OverflowPolicy::Extend);
        assert!(!config.show_planes);
        assert!(!config.parallel);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            OverflowPolicy::from_str("truncate", true),
            Ok(OverflowPolicy::Truncate)
        );
        assert_eq!(
            OverflowPolicy::from_str("REJECT", true),
            Ok(OverflowPolicy::Reject)
        );
        assert!(OverflowPolicy::from_str("drop", true).is_err());
    }
}
