use crate::filter::Pattern;

#[test]
fn empty_option_means_no_filter() {
    assert!(Pattern::parse("").unwrap().is_none());
}

#[test]
fn bang_prefix_is_stripped_and_negates() {
    // Act
    let pattern = Pattern::parse("!/health").unwrap().unwrap();

    // Assert
    assert!(pattern.is_negated());
    assert_eq!(pattern.as_str(), "/health");
    assert!(!pattern.passes("/health"));
    assert!(pattern.passes("/api/x"));
}

#[test]
fn negated_pattern_is_exact_complement() {
    // Arrange
    let positive = Pattern::parse("^/api/").unwrap().unwrap();
    let negative = Pattern::parse("!^/api/").unwrap().unwrap();
    let inputs = ["/api/x", "/api/", "/health", "", "/v1/api/x", "API"];

    // Assert
    for input in inputs {
        assert_ne!(
            positive.passes(input),
            negative.passes(input),
            "exactly one form must pass for {input:?}"
        );
    }
}

#[test]
fn match_is_unanchored() {
    let pattern = Pattern::parse("5..").unwrap().unwrap();

    assert!(pattern.passes("502 Bad Gateway"));
    assert!(!pattern.passes("404 Not Found"));
}

#[test]
fn invalid_regex_is_an_error() {
    assert!(Pattern::parse("(unclosed").is_err());
    assert!(Pattern::parse("!(unclosed").is_err());
}
