//! Decoder configuration

/// What to do with an entry line whose value is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPolicy {
    /// Accept the line but store nothing; an earlier entry at the same
    /// coordinate is removed
    #[default]
    Drop,
    /// Treat the line as a format error
    Reject,
}

/// What to do when a coordinate appears on more than one entry line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The last occurrence overwrites earlier ones
    #[default]
    LastWins,
    /// Treat the repeated line as a format error
    Reject,
}

/// Configuration for decoding the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub zero_policy: ZeroPolicy,
    pub duplicate_policy: DuplicatePolicy,
}

impl DecodeConfig {
    /// Reject both zero entries and repeated coordinates
    pub fn strict() -> Self {
        Self {
            zero_policy: ZeroPolicy::Reject,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// Set the zero entry policy
    pub fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    /// Set the duplicate coordinate policy
    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient() {
        let config = DecodeConfig::default();
        assert_eq!(config.zero_policy, ZeroPolicy::Drop);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWins);
    }

    #[test]
    fn test_builder() {
        let config = DecodeConfig::default().with_zero_policy(ZeroPolicy::Reject);
        assert_eq!(config.zero_policy, ZeroPolicy::Reject);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWins);
        assert_eq!(
            DecodeConfig::strict(),
            config.with_duplicate_policy(DuplicatePolicy::Reject)
        );
    }
}
