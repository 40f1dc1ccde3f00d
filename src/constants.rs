//! Configuration constants for looped-list
//!
//! Defaults for command line arguments that have no value on the command
//! line or in the environment.

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Sequence construction defaults
pub mod sequence {
    /// Default representation when `--variant` is not given
    pub const DEFAULT_VARIANT: &str = "shared";
}

/// Walk command configuration
pub mod walk {
    /// Elements printed before a looped walk is cut off
    pub const DEFAULT_LIMIT: usize = 200;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_sequence_constants() {
        assert_eq!(sequence::DEFAULT_VARIANT, "shared");
        assert_eq!(walk::DEFAULT_LIMIT, 200);
    }
}
