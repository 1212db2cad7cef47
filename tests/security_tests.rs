#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use ssmlparse::test_utils::*;

#[test]
fn test_max_input_size() {
    // Create input exactly larger than max size (1MB)
    let filler = "a".repeat(DEFAULT_MAX_SIZE);
    let large_input = format!("<speak>{}</speak>", filler);

    let result = parse_ssml(&large_input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxSizeExceeded)
        ));
    }
}

#[test]
fn test_custom_max_size() {
    let config = ParserConfig::default().with_max_size(20);
    assert!(parse_ssml_with_config("<speak>hi</speak>", config.clone()).is_ok());

    let result = parse_ssml_with_config("<speak>hello there</speak>", config);
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::Security(SecurityError::MaxSizeExceeded)
    ));
}

#[test]
fn test_max_nesting_depth() {
    // The root counts as one level
    let input = nested_ssml(DEFAULT_MAX_DEPTH, "deep");

    let result = parse_ssml(&input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(
            matches!(
                e.kind(),
                ParseErrorKind::Security(SecurityError::MaxDepthExceeded)
            ),
            "Expected MaxDepthExceeded, got {:?}",
            e.kind()
        );
        assert!(e.location().is_some());
    }
}

#[test]
fn test_nesting_at_limit() {
    let input = nested_ssml(DEFAULT_MAX_DEPTH - 1, "deep");
    assert!(parse_ssml(&input).is_ok());
}

#[test]
fn test_stack_overflow_prevention() {
    // Far deeper than the default limit; must fail cleanly, not overflow
    let input = "<p>".repeat(100_000);
    let result = parse_ssml(&format!("<speak>{}", input));
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::Security(SecurityError::MaxDepthExceeded)
    ));
}

#[test]
fn test_self_closing_does_not_count_towards_depth() {
    let config = ParserConfig::default().with_max_depth(1);
    let input = format!("<speak>{}</speak>", "<break/>".repeat(1000));
    let doc = parse_ssml_with_config(&input, config).unwrap();
    assert_eq!(doc.root().children.len(), 1000);
}

#[test]
fn test_failed_parse_does_not_leak_depth() {
    let config = ParserConfig::default().with_max_depth(2);
    let mut parser = SsmlParser::new("<speak><p>x</speak>").with_config(config);

    for _ in 0..3 {
        let err = parser.parse().unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Syntax(SyntaxError::UnclosedTag("p".to_string())),
            "depth limit should not trip on a repeated parse"
        );
    }
}
