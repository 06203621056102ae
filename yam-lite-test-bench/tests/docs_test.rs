use yam_lite_test_bench::assert_eq_value;
use yam_lite_test_bench::consts::*;

#[test]
fn docs_multiple() {
    assert_eq_value(DOCS_TWO_INPUT, DOCS_TWO_EVENTS);
    assert_eq_value(DOCS_THREE_INPUT, DOCS_THREE_EVENTS);
}

#[test]
fn docs_end_marker() {
    assert_eq_value(DOCS_END_INPUT, DOCS_END_EVENTS);
}

#[test]
fn docs_empty() {
    assert_eq_value("", EMPTY_EVENTS);
    assert_eq_value("# only a comment\n", EMPTY_EVENTS);
    assert_eq_value("---\n", EMPTY_EVENTS);
    assert_eq_value(DOCS_EMPTY_FIRST_INPUT, DOCS_EMPTY_FIRST_EVENTS);
}

#[test]
fn docs_share_anchors() {
    assert_eq_value(DOCS_SHARED_ANCHOR_INPUT, DOCS_SHARED_ANCHOR_EVENTS);
}
