//! Tests for the scanner state machine.

use crate::comments::{CommentKind, CommentRange};
use crate::scanner::*;
use crate::syntax::Language;

fn segments(text: &str, language: Language) -> Vec<Segment> {
    Scanner::new(text, language.profile()).collect()
}

/// Run the scanner to the end and return it for state inspection.
fn scan_all(text: &str) -> Scanner<'_> {
    let mut scanner = Scanner::new(text, Language::CLike.profile());
    while scanner.next().is_some() {}
    scanner
}

#[test]
fn test_scan_empty() {
    assert!(segments("", Language::CLike).is_empty());
}

#[test]
fn test_scan_code_only() {
    assert_eq!(
        segments("const x = 1;", Language::CLike),
        vec![Segment::Code(0..12)]
    );
}

#[test]
fn test_scan_line_comment() {
    assert_eq!(
        segments("a // c\nb", Language::CLike),
        vec![
            Segment::Code(0..2),
            Segment::Comment(CommentRange::new(2, 6, CommentKind::Line, true)),
            Segment::Code(6..8),
        ]
    );
}

#[test]
fn test_scan_block_comment() {
    assert_eq!(
        segments("x /* y */ z", Language::CLike),
        vec![
            Segment::Code(0..2),
            Segment::Comment(CommentRange::new(2, 9, CommentKind::Block, true)),
            Segment::Code(9..11),
        ]
    );
}

#[test]
fn test_scan_leading_comment_has_no_empty_code_segment() {
    assert_eq!(
        segments("/**/x", Language::CLike),
        vec![
            Segment::Comment(CommentRange::new(0, 4, CommentKind::Block, true)),
            Segment::Code(4..5),
        ]
    );
}

#[test]
fn test_scan_unterminated_block_comment() {
    assert_eq!(
        segments("/* open", Language::CLike),
        vec![Segment::Comment(CommentRange::new(
            0,
            7,
            CommentKind::Block,
            false
        ))]
    );
}

#[test]
fn test_scan_comment_opener_is_not_reused_as_closer() {
    // The `*` of `/*` cannot also be the `*` of `*/`.
    let result = segments("/*/ x", Language::CLike);
    assert_eq!(
        result,
        vec![Segment::Comment(CommentRange::new(
            0,
            5,
            CommentKind::Block,
            false
        ))]
    );
}

#[test]
fn test_scan_markup_comment() {
    assert_eq!(
        segments("<p><!-- c --></p>", Language::Markup),
        vec![
            Segment::Code(0..3),
            Segment::Comment(CommentRange::new(3, 13, CommentKind::Markup, true)),
            Segment::Code(13..17),
        ]
    );
}

#[test]
fn test_segments_cover_input() {
    let text = "let a = 1; // one\n/* two */ let b = `${a /* three */}`;\n";
    let mut next = 0;
    for segment in segments(text, Language::CLike) {
        let range = match segment {
            Segment::Code(range) => range,
            Segment::Comment(comment) => comment.pos..comment.end,
        };
        assert_eq!(range.start, next, "segments must be contiguous");
        next = range.end;
    }
    assert_eq!(next, text.len());
}

#[test]
fn test_mode_inside_unterminated_string() {
    let scanner = scan_all("x = 'abc");
    assert_eq!(scanner.mode(), Mode::StringLiteral(b'\''));
}

#[test]
fn test_mode_inside_unterminated_template() {
    let scanner = scan_all("x = `abc");
    assert_eq!(scanner.mode(), Mode::TemplateLiteral);
}

#[test]
fn test_mode_inside_regex_class() {
    let scanner = scan_all("x = /[abc");
    assert_eq!(scanner.mode(), Mode::RegexLiteral { in_class: true });
}

#[test]
fn test_mode_returns_to_code() {
    let scanner = scan_all("x = 'a' + `b` + /c/g;");
    assert_eq!(scanner.mode(), Mode::Code);
    assert_eq!(scanner.interpolation_depth(), 0);
}

#[test]
fn test_last_token_classes() {
    assert_eq!(scan_all("").last_token(), TokenClass::None);
    assert_eq!(scan_all("foo").last_token(), TokenClass::Identifier);
    assert_eq!(scan_all("return").last_token(), TokenClass::Keyword);
    assert_eq!(scan_all("42").last_token(), TokenClass::Literal);
    assert_eq!(scan_all("'s'").last_token(), TokenClass::Literal);
    assert_eq!(scan_all("/re/g").last_token(), TokenClass::Literal);
    assert_eq!(scan_all("f(").last_token(), TokenClass::OpenBracket);
    assert_eq!(scan_all("f()").last_token(), TokenClass::CloseBracket);
    assert_eq!(scan_all("a =").last_token(), TokenClass::Operator);
    assert_eq!(scan_all("<").last_token(), TokenClass::LessThan);
    assert_eq!(scan_all("a <=").last_token(), TokenClass::Operator);
}

#[test]
fn test_comments_do_not_change_last_token() {
    assert_eq!(scan_all("a /* c */").last_token(), TokenClass::Identifier);
    assert_eq!(scan_all("= // c\n").last_token(), TokenClass::Operator);
}

#[test]
fn test_allows_regex() {
    assert!(TokenClass::None.allows_regex());
    assert!(TokenClass::Operator.allows_regex());
    assert!(TokenClass::Keyword.allows_regex());
    assert!(TokenClass::OpenBracket.allows_regex());
    assert!(!TokenClass::Identifier.allows_regex());
    assert!(!TokenClass::Literal.allows_regex());
    assert!(!TokenClass::CloseBracket.allows_regex());
    assert!(!TokenClass::LessThan.allows_regex());
}

#[test]
fn test_slash_after_less_than_is_not_regex() {
    let scanner = scan_all("(<b>x</b>);\n// it's\n");
    assert_eq!(scanner.mode(), Mode::Code);
    assert_eq!(scanner.last_token(), TokenClass::Operator);
}

#[test]
fn test_template_interpolation_stack() {
    let scanner = scan_all("`a ${");
    assert_eq!(scanner.mode(), Mode::Code);
    assert_eq!(scanner.interpolation_depth(), 1);

    let scanner = scan_all("`a ${ `b ${");
    assert_eq!(scanner.interpolation_depth(), 2);

    let scanner = scan_all("`a ${ {b: 1} ");
    assert_eq!(scanner.mode(), Mode::Code);
    assert_eq!(scanner.interpolation_depth(), 1);

    let scanner = scan_all("`a ${ {b: 1} } c");
    assert_eq!(scanner.mode(), Mode::TemplateLiteral);
    assert_eq!(scanner.interpolation_depth(), 0);
}

#[test]
fn test_dollar_without_brace_stays_in_template() {
    let scanner = scan_all("`cost: $5 // not a comment");
    assert_eq!(scanner.mode(), Mode::TemplateLiteral);
    assert_eq!(scanner.interpolation_depth(), 0);
}

#[test]
fn test_deeply_nested_templates_do_not_recurse() {
    let depth = 10_000;
    let mut text = String::new();
    for _ in 0..depth {
        text.push_str("`${");
    }
    let scanner = scan_all(&text);
    assert_eq!(scanner.interpolation_depth(), depth);
}

#[test]
fn test_shebang_is_skipped_as_code() {
    let scanner = Scanner::new("#!/usr/bin/env node\nx", Language::CLike.profile());
    assert_eq!(scanner.pos(), 19);
    assert_eq!(scanner.last_token(), TokenClass::None);
}

#[test]
fn test_escape_at_end_of_input() {
    let scanner = scan_all("'abc\\");
    assert_eq!(scanner.pos(), 5);
    assert_eq!(scanner.mode(), Mode::StringLiteral(b'\''));
}
