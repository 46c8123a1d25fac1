//! Catalog integration tests
//!
//! Exercises the public API the way a UI layer would: look a tool up by
//! selection key, apply it, and handle unknown keys without failing.

use transform_text::transform::{self, CaseSource, sarcastic_spongebob_with};
use transform_text::{Result, Tool, ToolCatalog, Transform, TransformError};

const FOX: &str = "the quick brown fox jumps over the lazy dog";

/// Integration test: the documented examples hold through the catalog
#[test]
fn test_documented_examples_via_catalog() -> Result<()> {
    let catalog = ToolCatalog::builtin();

    assert_eq!(catalog.apply("escape", "Hello\nWorld\n")?, r"Hello\nWorld");
    assert_eq!(catalog.apply("escape", "Line 1\r\nLine 2")?, r"Line 1\nLine 2");
    assert_eq!(catalog.apply("snakeCase", "Hello World")?, "hello_world");
    assert_eq!(catalog.apply("kebabCase", "Hello World")?, "hello-world");
    assert_eq!(catalog.apply("pascalCase", "hello world")?, "HelloWorld");
    assert_eq!(catalog.apply("camelCase", "Hello World")?, "helloWorld");
    assert_eq!(catalog.apply("titleCaseMla", FOX)?, "The Quick Brown Fox Jumps over the Lazy Dog");
    assert_eq!(catalog.apply("titleCaseAp", FOX)?, "The Quick Brown Fox Jumps Over the Lazy Dog");
    assert_eq!(catalog.apply("sentenceCase", "HELLO WORLD")?, "Hello world");
    assert_eq!(catalog.apply("uppercase", "hello")?, "HELLO");
    assert_eq!(catalog.apply("lowercase", "HELLO")?, "hello");

    Ok(())
}

/// Integration test: unknown keys are a recoverable lookup failure
#[test]
fn test_unknown_key_is_recoverable() {
    let catalog = ToolCatalog::builtin();

    assert!(catalog.get("reverse").is_none());
    match catalog.apply("reverse", "text") {
        Err(TransformError::UnknownTool(key)) => assert_eq!(key, "reverse"),
        other => panic!("expected UnknownTool, got {:?}", other),
    }

    // the catalog is still usable afterwards
    assert_eq!(catalog.apply("uppercase", "ok").unwrap(), "OK");
}

/// Integration test: every tool is total over awkward inputs
#[test]
fn test_every_tool_total() {
    let catalog = ToolCatalog::builtin();
    let inputs = ["", "   ", "\r\n\u{2028}", "__--__", "?!.,", r"\\n", "123", "ÀÉÎ õü"];
    for tool in catalog.tools() {
        for input in inputs {
            let _ = tool.apply(input);
        }
    }
}

/// Integration test: unescape is idempotent, including after escape
#[test]
fn test_unescape_idempotent() {
    let samples = ["a\nb", "a\r\n\r\nb\n", r"already \n escaped", r"\\n", "plain"];
    for s in samples {
        let once = transform::unescape_newlines(&transform::escape_newlines(s));
        assert_eq!(transform::unescape_newlines(&once), once);
    }
}

/// Integration test: camelCase settles after one pass
#[test]
fn test_camel_idempotent() {
    for x in ["Hello World", "hello", "someVariableName", "XML parser config", FOX] {
        let once = transform::camel_case(x);
        assert_eq!(transform::camel_case(&once), once, "input: {:?}", x);
    }
}

/// Integration test: sarcastic output keeps letters, positions and split
#[test]
fn test_sarcastic_invariants() {
    let catalog = ToolCatalog::builtin();
    let input = "Hello, World! It's 2024.";
    for _ in 0..50 {
        let out = catalog.apply("sarcasticSpongeBob", input).unwrap();
        assert_eq!(out.to_lowercase(), input.to_lowercase());
        assert_eq!(out.chars().count(), input.chars().count());
        for (a, b) in input.chars().zip(out.chars()) {
            if !a.is_alphabetic() {
                assert_eq!(a, b);
            }
        }
        let upper = out.chars().filter(|c| c.is_uppercase()).count();
        let lower = out.chars().filter(|c| c.is_lowercase()).count();
        assert_eq!((upper, lower), (7, 6));
    }
}

/// Integration test: uncased letters do not eat into the uppercase quota
#[test]
fn test_sarcastic_mixed_scripts() {
    struct AlwaysUpper;
    impl CaseSource for AlwaysUpper {
        fn next_is_upper(&mut self) -> bool {
            true
        }
    }

    assert_eq!(sarcastic_spongebob_with("中文ab", &mut AlwaysUpper), "中文Ab");
    assert_eq!(sarcastic_spongebob_with("ßßab", &mut AlwaysUpper), "ßßAb");
    assert_eq!(sarcastic_spongebob_with("東京 tokyo", &mut AlwaysUpper), "東京 TOKyo");
}

/// Integration test: an injected source gives exact output
#[test]
fn test_sarcastic_injected_source() {
    struct Alternate(bool);
    impl CaseSource for Alternate {
        fn next_is_upper(&mut self) -> bool {
            self.0 = !self.0;
            self.0
        }
    }

    let out = sarcastic_spongebob_with("spongebob says", &mut Alternate(false));
    assert_eq!(out, "SpOnGeBoB sAyS");
}

/// Integration test: a configured catalog is data, not code
#[test]
fn test_custom_catalog_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tools.yml");
    std::fs::write(
        &path,
        "tool:\n  - label: Escape Newlines\n    key: escape\n  - label: Unescape Newlines\n    key: unescape\n  - label: Yell\n    key: yell\n    rule: uppercase\n",
    )?;

    let catalog = ToolCatalog::from_file(&path)?;
    assert_eq!(catalog.keys(), vec!["escape", "unescape", "yell"]);
    assert_eq!(catalog.apply("yell", "quiet please")?, "QUIET PLEASE");
    assert!(catalog.apply("snakeCase", "x").is_err());
    Ok(())
}

/// Integration test: tools built in code behave like loaded ones
#[test]
fn test_catalog_built_in_code() -> Result<()> {
    let mut catalog = ToolCatalog::new();
    catalog.add(Tool::new("MLA", Transform::TitleCaseMla))?;
    catalog.add(Tool::new("AP", Transform::TitleCaseAp))?;

    assert_eq!(catalog.position("titleCaseAp"), Some(1));
    assert_eq!(catalog.apply("titleCaseMla", "a tale of two cities")?, "A Tale of Two Cities");
    Ok(())
}
