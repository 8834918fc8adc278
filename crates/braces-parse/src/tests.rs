use std::fs;
use std::path::{Path, PathBuf};

use braces_errors::{Error, TextSize};
use braces_syntax::{ParseFlags, SyntaxKind};
use expect_test::{expect, expect_file};

use crate::{Parser, parse};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "braces" {
                    let expected = path.with_extension("tree");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

#[test]
fn parse_test_data() {
    let mut parser = Parser::default();

    for case in TestCase::list() {
        let pattern = case.text.trim_end_matches('\n');
        let tree = parser
            .parse(pattern)
            .unwrap_or_else(|err| panic!("{}: {err}", case.input.display()));
        expect_file![&case.expected].assert_eq(&tree.to_string());
    }
}

fn tree(pattern: &str, flags: ParseFlags) -> String {
    parse(pattern, flags).unwrap().to_string()
}

#[test]
fn ignore_escape() {
    expect![[r#"
        - Concat
          - Literal "\\"
          - CharRange 'a'..'b'
    "#]]
    .assert_eq(&tree(r"\{a..b}", ParseFlags::IGNORE_ESCAPE));
}

#[test]
fn ignore_quote() {
    expect![[r#"
        - Concat
          - Literal "\""
          - CharRange 'a'..'b'
          - Literal "\""
    "#]]
    .assert_eq(&tree(r#""{a..b}""#, ParseFlags::IGNORE_QUOTE));
}

#[test]
fn any_char_range() {
    expect![[r#"
        - CharRange 'Z'..'a'
    "#]]
    .assert_eq(&tree("{Z..a}", ParseFlags::ANY_CHAR_RANGE));

    expect![[r#"
        - Literal "{Z..a}"
    "#]]
    .assert_eq(&tree("{Z..a}", ParseFlags::empty()));

    expect![[r#"
        - Literal "{你x..好}"
    "#]]
    .assert_eq(&tree("{你x..好}", ParseFlags::ANY_CHAR_RANGE));
}

#[test]
fn escaped_endpoints() {
    expect![[r#"
        - IntegerRange 1..3
    "#]]
    .assert_eq(&tree(r"{\1..3}", ParseFlags::empty()));
}

#[test]
fn range_limits() {
    expect![[r#"
        - IntegerRange 1..1
    "#]]
    .assert_eq(&tree("{1..2..9223372036854775807}", ParseFlags::empty()));

    expect![[r#"
        - Literal "{1..2..-9223372036854775808}"
    "#]]
    .assert_eq(&tree("{1..2..-9223372036854775808}", ParseFlags::empty()));

    expect![[r#"
        - Literal "{0..9223372036854775807}"
    "#]]
    .assert_eq(&tree("{0..9223372036854775807}", ParseFlags::empty()));
}

#[test]
fn strict_errors() {
    assert_eq!(
        parse(r"ab\", ParseFlags::STRICT),
        Err(Error::TrailingEscape { offset: TextSize::new(2) })
    );
    assert_eq!(
        parse(r"'ab\", ParseFlags::STRICT),
        Err(Error::TrailingEscape { offset: TextSize::new(3) })
    );
    assert_eq!(
        parse("x{a,'b}", ParseFlags::STRICT),
        Err(Error::UnterminatedQuote { offset: TextSize::new(4), quote: '\'' })
    );
    assert_eq!(
        parse([b'{', 0xFF, b'}'], ParseFlags::STRICT),
        Err(Error::InvalidEncoding { offset: TextSize::new(1) })
    );
}

#[test]
fn permissive_encoding() {
    let tree = parse([b'{', 0xC3, b',', b'b', b'}'], ParseFlags::empty()).unwrap();
    let root = &tree[tree.root()];
    assert_eq!(root.kind(), SyntaxKind::ALTERNATE);

    let values: Vec<_> = root.children().iter().map(|&child| tree[child].value()).collect();
    assert_eq!(values, [b"\xC3".as_slice(), b"b".as_slice()]);
}

#[test]
fn parser_is_reusable() {
    let patterns = ["a{1,2}b", "{a..e..2}", "{,{,a,b}z}{,c}", "{a,'b}c", "x{{,,a}}y"];

    let mut parser = Parser::new(ParseFlags::empty());
    for _ in 0..2 {
        for pattern in patterns {
            let reused = parser.parse(pattern).unwrap();
            let fresh = parse(pattern, ParseFlags::empty()).unwrap();
            assert_eq!(reused, fresh, "{pattern}");
            assert_eq!(reused.to_string(), fresh.to_string(), "{pattern}");
        }
    }
}

#[test]
fn structural_equality() {
    let compile = |pattern: &str| parse(pattern, ParseFlags::empty()).unwrap();

    assert_eq!(compile("aaaa"), compile("aaaa"));
    assert_ne!(compile("aaaa"), compile("aaa"));
    assert_eq!(compile("{1..9}"), compile("{1..9..1}"));
    assert_ne!(compile("{1..9}"), compile("{1..9..2}"));
    assert_ne!(compile("{1..2}"), compile("{1,2}"));
    assert_ne!(compile("a{1..2}b"), compile("a{1,2}b"));
}

#[test]
fn deep_nesting() {
    let depth = 20_000;
    let pattern = format!("{}{}", "{a,b".repeat(depth), "}".repeat(depth));
    let tree = parse(&pattern, ParseFlags::empty()).unwrap();
    assert_eq!(tree.len(), 4 * depth - 1);
}
