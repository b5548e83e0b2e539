//! Engine-level tests: whole documents through the recognizer chain.
//!
//! Trees are compared structurally; expected trees are built with the public
//! node constructors.

use pretty_assertions::assert_eq;

use crate::ast::{Heading, Node, Root, Text, ThematicBreak};
use crate::parsing::{
    Engine, parse,
    blocks::{Recognizer, RecognizerKind, kinds::BlankLine},
    queue::LineQueue,
};

fn h(level: u8, text: &str) -> Node {
    Heading::new(level, Some(Text::new(text))).unwrap().into()
}

fn t(text: &str) -> Node {
    Text::new(text).into()
}

fn hr() -> Node {
    ThematicBreak::default().into()
}

fn root(children: Vec<Node>) -> Root {
    Root::from(children)
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n\t\n").is_empty());
}

#[test]
fn heading_level_from_opening_run() {
    assert_eq!(parse("### foo"), root(vec![h(3, "foo")]));
}

#[test]
fn seven_hashes_is_text() {
    assert_eq!(parse("####### foo"), root(vec![t("####### foo")]));
}

#[test]
fn escaped_opener_is_text() {
    assert_eq!(parse("\\## foo"), root(vec![t("## foo")]));
}

#[test]
fn empty_heading_with_trailing_newline() {
    assert_eq!(parse("##\n"), root(vec![h(2, "")]));
}

#[test]
fn thematic_breaks() {
    assert_eq!(parse("***\n---\n___"), root(vec![hr(), hr(), hr()]));
}

#[test]
fn setext_heading_level_one() {
    assert_eq!(
        parse("Foo *bar*\n=========\n"),
        root(vec![h(1, "Foo *bar*")])
    );
}

#[test]
fn closing_sequence_needs_preceding_whitespace() {
    assert_eq!(parse("### foo ### b"), root(vec![h(3, "foo ### b")]));
}

#[test]
fn all_six_atx_levels() {
    let actual = parse("# foo\n## foo\n### foo\n#### foo\n##### foo\n###### foo\n");
    assert_eq!(
        actual,
        root(vec![
            h(1, "foo"),
            h(2, "foo"),
            h(3, "foo"),
            h(4, "foo"),
            h(5, "foo"),
            h(6, "foo"),
        ])
    );
}

#[test]
fn opening_run_needs_space_or_tab() {
    assert_eq!(
        parse("#5 bolt\n\n#hashtag"),
        root(vec![t("#5 bolt"), t("#hashtag")])
    );
}

#[test]
fn heading_contents_are_not_inline_parsed() {
    assert_eq!(
        parse("# foo *bar* \\*baz\\*"),
        root(vec![h(1, "foo *bar* *baz*")])
    );
}

#[test]
fn four_spaces_of_indentation_is_text() {
    assert_eq!(
        parse("    # foo\nfoo\n    # bar"),
        root(vec![t("    # foo"), t("foo"), t("    # bar")])
    );
}

#[test]
fn escaped_hashes_do_not_close() {
    assert_eq!(
        parse("### foo \\###\n## foo #\\##\n# foo \\#\n"),
        root(vec![h(3, "foo ###"), h(2, "foo ###"), h(1, "foo #")])
    );
}

#[test]
fn headings_need_no_surrounding_blank_lines() {
    assert_eq!(
        parse("****\n## foo \n****"),
        root(vec![hr(), h(2, "foo"), hr()])
    );
}

#[test]
fn headings_interrupt_text_lines() {
    assert_eq!(
        parse("Foo bar\n# baz\nBar foo"),
        root(vec![t("Foo bar"), h(1, "baz"), t("Bar foo")])
    );
}

#[test]
fn empty_headings() {
    assert_eq!(
        parse("##\n#\n### ###"),
        root(vec![h(2, ""), h(1, ""), h(3, "")])
    );
}

#[test]
fn setext_both_levels_separated_by_blank() {
    assert_eq!(
        parse("Foo *bar*\n=========\n\nFoo *bar*\n---------\n"),
        root(vec![h(1, "Foo *bar*"), h(2, "Foo *bar*")])
    );
}

#[test]
fn setext_multi_line_content() {
    assert_eq!(
        parse("Foo *bar\nbaz*\n====\n"),
        root(vec![h(1, "Foo *bar\nbaz*")])
    );
}

#[test]
fn dashes_under_text_are_an_underline_not_a_break() {
    assert_eq!(parse("Foo\n---\nbar"), root(vec![h(2, "Foo"), t("bar")]));
}

#[test]
fn setext_is_tried_before_atx() {
    assert_eq!(parse("# Title\n---"), root(vec![h(2, "# Title")]));
}

#[test]
fn dashes_after_blank_are_a_break() {
    assert_eq!(parse("Foo\n\n---"), root(vec![t("Foo"), hr()]));
}

#[test]
fn failed_setext_lookahead_leaves_lines_for_later_stages() {
    // The scan passes "# Title" and "body" before hitting the blank line; both
    // must still be there for the ATX and text stages.
    assert_eq!(
        parse("# Title\nbody\n\n==="),
        root(vec![h(1, "Title"), t("body"), t("===")])
    );
}

#[test]
fn each_unmatched_line_is_its_own_text_node() {
    assert_eq!(
        parse("one\ntwo\nthree"),
        root(vec![t("one"), t("two"), t("three")])
    );
}

#[test]
fn crlf_documents_parse_like_lf() {
    assert_eq!(
        parse("# foo\r\nbar\r\n***\r\n"),
        parse("# foo\nbar\n***\n")
    );
}

#[test]
fn engine_is_reusable() {
    let engine = Engine::default();
    let first = engine.parse("# a");
    let second = engine.parse("# a");
    assert_eq!(first, second);
    assert_eq!(engine.recognizers().len(), 5);
}

#[test]
fn commonmark_preset_order() {
    let kinds: Vec<_> = Engine::commonmark()
        .recognizers()
        .iter()
        .map(Recognizer::kind)
        .collect();
    assert_eq!(kinds, RecognizerKind::COMMONMARK.to_vec());
}

#[test]
fn custom_chain_without_setext() {
    let engine = Engine::from_kinds(&[
        RecognizerKind::BlankLine,
        RecognizerKind::ThematicBreak,
        RecognizerKind::AtxHeading,
        RecognizerKind::Text,
    ]);
    assert_eq!(engine.parse("Foo\n---"), root(vec![t("Foo"), hr()]));
}

#[test]
fn custom_chain_without_text_stage_still_terminates() {
    let engine = Engine::new(vec![Recognizer::BlankLine(BlankLine)]);
    assert_eq!(
        engine.parse("a\n\n# b"),
        root(vec![t("a"), t("# b")])
    );
}

#[test]
fn empty_chain_still_terminates() {
    let engine = Engine::new(vec![]);
    assert_eq!(engine.parse("x\n***"), root(vec![t("x"), t("***")]));
}

#[test]
fn parse_queue_drains_the_queue() {
    let mut queue = LineQueue::from_text("# a\nb\n");
    let root = Engine::commonmark().parse_queue(&mut queue);
    assert!(queue.is_empty());
    assert_eq!(root.len(), 2);
}

#[test]
fn never_more_nodes_than_lines() {
    let inputs = [
        "",
        "\\",
        "#",
        "=",
        "-",
        "a\n=\nb\n-\n",
        "   \t\n***\n\\\\#\n#######\n",
        "é\n===\n# ü #\n",
    ];
    for input in inputs {
        let lines = LineQueue::from_text(input).len();
        let root = parse(input);
        assert!(root.len() <= lines, "{input:?}");
    }
}

#[test]
fn long_document_without_blank_lines() {
    let lines = 20_000;
    let mut doc = "plain line\n".repeat(lines);
    doc.push_str("Closing\n===\n");

    let root = parse(&doc);
    assert_eq!(root.len(), 1);
    assert_eq!(
        root.children()[0],
        h(1, &format!("{}Closing", "plain line\n".repeat(lines)))
    );
}

#[test]
fn long_text_run_stays_one_node_per_line() {
    let root = parse(&"plain line\n".repeat(20_000));
    assert_eq!(root.len(), 20_000);
    assert!(root.children().iter().all(|n| *n == t("plain line")));
}
