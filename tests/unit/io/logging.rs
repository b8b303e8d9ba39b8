//! Tests for verbosity to filter directive mapping

#[cfg(test)]
mod tests {
    use burg2d::io::logging::{default_directive, init};

    // Tests each verbosity level maps to its tracing level
    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0, false), "burg2d=info");
        assert_eq!(default_directive(1, false), "burg2d=debug");
        assert_eq!(default_directive(2, false), "burg2d=trace");
        assert_eq!(default_directive(7, false), "burg2d=trace");
    }

    // Tests quiet wins over any verbosity
    #[test]
    fn test_quiet_overrides_verbosity() {
        assert_eq!(default_directive(0, true), "burg2d=warn");
        assert_eq!(default_directive(3, true), "burg2d=warn");
    }

    // Tests repeated initialization is harmless
    #[test]
    fn test_init_is_idempotent() {
        init(0, true);
        init(2, false);
    }
}
