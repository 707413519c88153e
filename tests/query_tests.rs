//! Tests for query parameter updates.

use url_helper::*;

#[test]
fn test_set_query_params_upsert() {
    let test_cases = vec![
        ("http://example.com?x=1", vec![("x", "2"), ("y", "3")], "http://example.com/?x=2&y=3"),
        ("http://example.com", vec![("a", "1")], "http://example.com/?a=1"),
        ("http://example.com?b=1&a=9", vec![("a", "2")], "http://example.com/?b=1&a=2"),
        ("http://example.com?a=1&b=2&a=3", vec![("a", "9")], "http://example.com/?a=9&b=2"),
        ("http://example.com?a=1&a=2&a=3", vec![("a", "x")], "http://example.com/?a=x"),
        ("http://example.com/p?q=old#frag", vec![("q", "new")], "http://example.com/p?q=new#frag"),
    ];

    for (url, params, expected) in test_cases {
        let result = set_query_params(url, &params, Options::default()).unwrap();
        assert_eq!(result, expected, "Update mismatch for: {}", url);
    }
}

#[test]
fn test_set_query_params_appends_in_order() {
    let url = set_query_params(
        "http://example.com?a=1",
        &[("c", "3"), ("d", "4")],
        Options::default(),
    )
    .unwrap();

    assert_eq!(url, "http://example.com/?a=1&c=3&d=4");
}

#[test]
fn test_set_query_params_encoding() {
    let test_cases = vec![
        (vec![("q", "a b&c=d")], "http://example.com/?q=a+b%26c%3Dd"),
        (vec![("key with space", "v")], "http://example.com/?key+with+space=v"),
        (vec![("q", "caf\u{e9}")], "http://example.com/?q=caf%C3%A9"),
        (vec![("a", "")], "http://example.com/?a="),
    ];

    for (params, expected) in test_cases {
        let url = set_query_params("http://example.com", &params, Options::default()).unwrap();
        assert_eq!(url, expected, "Encoding mismatch for: {:?}", params);
    }
}

#[test]
fn test_set_query_params_reserializes_existing_query() {
    let test_cases = vec![
        // Touching the query rewrites the whole thing in form-urlencoded form.
        ("http://example.com?q=hello%20world", "http://example.com/?q=hello+world&x=1"),
        ("http://example.com?a=b+c", "http://example.com/?a=b+c&x=1"),
        ("http://example.com?%61=1", "http://example.com/?a=1&x=1"),
    ];

    for (input, expected) in test_cases {
        let url = set_query_params(input, &[("x", "1")], Options::default()).unwrap();
        assert_eq!(url, expected, "Re-serialization mismatch for: {}", input);
    }
}

#[test]
fn test_set_query_params_empty_params_leave_query_alone() {
    let params: &[(&str, &str)] = &[];
    let test_cases = vec![
        ("http://example.com/p?q=hello%20world", "http://example.com/p?q=hello%20world"),
        ("https://example.com?%61=1", "https://example.com/?%61=1"),
        ("example.com", "http://example.com/"),
    ];

    for (input, expected) in test_cases {
        let url = set_query_params(input, params, Options::default()).unwrap();
        assert_eq!(url, expected, "Empty update mismatch for: {}", input);
    }
}

#[test]
fn test_set_query_params_scheme_defaulting() {
    let url = set_query_params("example.com?a=1", &[("b", "2")], Options::default()).unwrap();
    assert_eq!(url, "http://example.com/?a=1&b=2");

    let url = set_query_params("example.com?a=1", &[("b", "2")], Options::https()).unwrap();
    assert_eq!(url, "https://example.com/?a=1&b=2");
}

#[test]
fn test_set_query_params_invalid_url() {
    let err = set_query_params("http://", &[("a", "1")], Options::default()).unwrap_err();
    assert!(matches!(err, UrlHelperError::InvalidUrl(_)));
    assert_eq!(err.to_string(), "Invalid URL");
}
