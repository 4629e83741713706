//! Unit tests for macro argument substitution

use texkit_preprocess::options::DEFAULT_MAX_BUFFER;
use texkit_preprocess::{
    concatenate, substitute_args, Error, ErrorKind, PreprocessOptions, Substitutor,
};

#[test]
fn test_positional_arguments() {
    assert_eq!(substitute_args(&["X", "Y"], "#1-#2-##").unwrap(), "X-Y-#");
    assert_eq!(substitute_args(&["a"], "#1#1#1").unwrap(), "aaa");
    assert_eq!(substitute_args::<&str>(&[], "no params").unwrap(), "no params");
    assert_eq!(
        substitute_args(&["1", "2", "3", "4", "5", "6", "7", "8", "9"], "#9#5#1").unwrap(),
        "951"
    );
}

#[test]
fn test_owned_arguments() {
    let args = vec![String::from("x^2"), String::from("y")];
    assert_eq!(substitute_args(&args, "\\frac{#1}{#2}").unwrap(), "\\frac{x^2}{y}");
}

#[test]
fn test_escaped_characters_are_opaque() {
    assert_eq!(substitute_args(&["X"], "\\#1").unwrap(), "\\#1");
    assert_eq!(substitute_args(&["X"], "\\\\#1").unwrap(), "\\\\X");
    assert_eq!(substitute_args(&["X"], "a\\").unwrap(), "a\\");
}

#[test]
fn test_illegal_parameters() {
    let err = substitute_args(&["X"], "#2").unwrap_err();
    assert_eq!(
        err,
        Error::IllegalMacroParameter {
            offset: 0,
            available: 1
        }
    );
    assert_eq!(err.kind(), ErrorKind::IllegalMacroParameter);
    assert_eq!(err.template_key(), "IllegalMacroParam");

    assert!(matches!(
        substitute_args(&["X"], "ab#0"),
        Err(Error::IllegalMacroParameter { offset: 2, .. })
    ));
    assert!(substitute_args(&["X"], "#a").is_err());
    assert!(substitute_args(&["X"], "trailing #").is_err());
}

#[test]
fn test_control_words_stay_separated() {
    assert_eq!(substitute_args(&["x"], "\\alpha#1").unwrap(), "\\alpha x");
    assert_eq!(substitute_args(&["\\beta"], "#1y").unwrap(), "\\beta y");
    assert_eq!(substitute_args(&["1"], "\\alpha#1").unwrap(), "\\alpha1");
    assert_eq!(substitute_args(&["x"], "\\\\#1").unwrap(), "\\\\x");
    assert_eq!(substitute_args(&["x"], "\\,#1").unwrap(), "\\,x");
}

#[test]
fn test_concatenate() {
    assert_eq!(concatenate("\\sin", "x").unwrap(), "\\sin x");
    assert_eq!(concatenate("\\sin", "1").unwrap(), "\\sin1");
    assert_eq!(concatenate("\\sin ", "x").unwrap(), "\\sin x");
    assert_eq!(concatenate("a", "b").unwrap(), "ab");
    assert_eq!(concatenate("", "").unwrap(), "");
}

#[test]
fn test_buffer_overflow() {
    let long = "x".repeat(3000);
    let err = substitute_args(&[long.as_str()], "#1#1").unwrap_err();
    assert_eq!(
        err,
        Error::MacroBufferOverflow {
            limit: DEFAULT_MAX_BUFFER
        }
    );
    assert_eq!(err.template_key(), "MaxBufferSize");
}

#[test]
fn test_buffer_limit_is_inclusive() {
    let half = "x".repeat(DEFAULT_MAX_BUFFER / 2);
    let expanded = substitute_args(&[half.as_str()], "#1#1").unwrap();
    assert_eq!(expanded.len(), DEFAULT_MAX_BUFFER);

    let err = substitute_args(&[half.as_str()], "#1#1!").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroBufferOverflow);
}

#[test]
fn test_buffer_counts_characters_not_bytes() {
    let substitutor = Substitutor::new(PreprocessOptions {
        max_buffer: 4,
        ..PreprocessOptions::default()
    });
    assert_eq!(substitutor.substitute(&["éé"], "#1#1").unwrap(), "éééé");
    assert!(substitutor.substitute(&["éé"], "#1#1#1").is_err());
}

#[test]
fn test_custom_limit() {
    let substitutor = Substitutor::new(PreprocessOptions {
        max_buffer: 8,
        ..PreprocessOptions::default()
    });
    assert_eq!(substitutor.options().max_buffer, 8);
    assert_eq!(substitutor.substitute(&["abcd"], "#1#1").unwrap(), "abcdabcd");
    assert!(matches!(
        substitutor.substitute(&["abcde"], "#1#1"),
        Err(Error::MacroBufferOverflow { limit: 8 })
    ));
    assert!(substitutor.concatenate("\\a", "bcdefg").is_err());
}

#[test]
fn test_runaway_expansion_is_stopped() {
    // Re-expanding a self-referencing body doubles the text each round.
    let mut body = String::from("#1#1");
    let result = loop {
        match substitute_args(&[body.as_str()], "#1#1") {
            Ok(expanded) => body = expanded,
            Err(err) => break err,
        }
    };
    assert_eq!(result.kind(), ErrorKind::MacroBufferOverflow);
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: PreprocessOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, PreprocessOptions::default());

    let options: PreprocessOptions = serde_json::from_str(r#"{"max_buffer": 10}"#).unwrap();
    assert_eq!(options.max_buffer, 10);
    assert_eq!(options.max_nesting, PreprocessOptions::default().max_nesting);
}
