// Host-side tests for configuration defaults and validation.

use heart_core::*;

#[test]
fn defaults_are_valid() {
    assert_eq!(GreetingConfig::default().validate(), Ok(()));
}

#[test]
fn inverted_range_is_rejected() {
    let mut cfg = GreetingConfig::default();
    cfg.field.hue = Span::new(360.0, 330.0);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::EmptyRange { name: "hue", .. })
    ));
}

#[test]
fn non_positive_size_and_timing_are_rejected() {
    let mut cfg = GreetingConfig::default();
    cfg.field.size = Span::new(0.0, 5.0);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive { name: "size" })
    );

    let mut cfg = GreetingConfig::default();
    cfg.sequence.fade_ms = 0.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive { name: "fade_ms" })
    );
}

#[test]
fn opacity_outside_unit_interval_is_rejected() {
    let mut cfg = GreetingConfig::default();
    cfg.field.opacity = Span::new(0.5, 1.5);
    assert_eq!(cfg.validate(), Err(ConfigError::OpacityOutOfUnit));
}

#[test]
fn relabel_threshold_cannot_exceed_max_tries() {
    let mut cfg = GreetingConfig::default();
    cfg.question.relabel_after = 11;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::RelabelAfterMax {
            relabel_after: 11,
            max_tries: 10
        })
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NonPositive { name: "show_ms" };
    assert_eq!(err.to_string(), "`show_ms` must be positive");
}
