use coin_core::errors::{CoinError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("num_flips", -3)
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = CoinError::InvalidArgument(sample_info("num_flips_negative", "negative"));
    assert_eq!(err.code(), "num_flips_negative");
    assert_eq!(err.info().context["num_flips"], "-3");
}

#[test]
fn config_error_surface() {
    let err = CoinError::Config(sample_info("max_flips_out_of_range", "too large"));
    assert_eq!(err.info().code, "max_flips_out_of_range");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_and_io_error_surface() {
    let serde = CoinError::Serde(sample_info("json_write", "broken pipe"));
    let io = CoinError::Io(sample_info("config_read", "missing"));
    assert_eq!(serde.code(), "json_write");
    assert_eq!(io.code(), "config_read");
}

#[test]
fn display_includes_context_and_hint() {
    let err = CoinError::InvalidArgument(
        ErrorInfo::new("num_flips_above_ceiling", "too many flips")
            .with_context("ceiling", 20)
            .with_context("num_flips", 30)
            .with_hint("raise max_flips"),
    );
    assert_eq!(
        err.to_string(),
        "invalid argument: too many flips (code: num_flips_above_ceiling) \
         | context: [ceiling=20, num_flips=30] | hint: raise max_flips"
    );
}
