use yam_lite_test_bench::assert_eq_value;
use yam_lite_test_bench::consts::*;

#[test]
fn block_map() {
    assert_eq_value(MAP_SIMPLE_INPUT, MAP_SIMPLE_EVENTS);
    assert_eq_value(MAP_DUPLICATE_INPUT, MAP_DUPLICATE_EVENTS);
    assert_eq_value(QUOTED_KEY_INPUT, QUOTED_KEY_EVENTS);
}

#[test]
fn block_seq() {
    assert_eq_value(SEQ_SIMPLE_INPUT, SEQ_SIMPLE_EVENTS);
    assert_eq_value(NESTED_SEQ_INPUT, NESTED_SEQ_EVENTS);
}

#[test]
fn block_nested() {
    assert_eq_value(NESTED_INPUT, NESTED_EVENTS);
    assert_eq_value(SEQ_OF_MAPS_INPUT, SEQ_OF_MAPS_EVENTS);
}

#[test]
fn block_empty_entries() {
    assert_eq_value(EMPTY_VALUES_INPUT, EMPTY_VALUES_EVENTS);
    assert_eq_value(TRAILING_NULL_INPUT, TRAILING_NULL_EVENTS);
}

#[test]
fn block_plain_scalar() {
    assert_eq_value(PLAIN_MULTI_INPUT, PLAIN_MULTI_EVENTS);
    assert_eq_value(COMMENTS_INPUT, COMMENTS_EVENTS);
}

#[test]
fn block_seq_under_key_needs_indent() {
    assert_eq_value(SEQ_UNDER_KEY_ERR_INPUT, ERR_EVENTS);
}
