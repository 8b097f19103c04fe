/// Behavioural tests for the comparator.
///
/// Covers each coercion branch (null, numeric, deferred numeric text, string,
/// boolean, mixed kinds), the `!=` negation contract, and the fail-fast path
/// for unknown operator tokens.
use relop_core::{
    compare, compare_with, equal_to, greater_or_equal, greater_than, less_or_equal, less_than,
    not_equal_to, try_compare, DynValue, Operand, Operator, RelopError,
};
use serde_json::json;

fn null() -> DynValue {
    DynValue::Null
}

// ============================================================================
// 1. Null handling
// ============================================================================

#[test]
fn null_equals_null() {
    assert!(compare("==", &null(), &null()));
    assert!(!compare("!=", &null(), &null()));
}

#[test]
fn null_is_never_ordered_against_null() {
    for op in ["<", "<=", ">", ">="] {
        assert!(!compare(op, &null(), &null()), "null {op} null");
    }
}

#[test]
fn null_vs_non_null_is_unequal() {
    let others: Vec<DynValue> = vec![
        DynValue::from(0),
        DynValue::from(""),
        DynValue::from(false),
        DynValue::deferred("0"),
    ];
    for other in &others {
        assert!(!compare("==", &null(), other), "null == {other:?}");
        assert!(!compare("==", other, &null()), "{other:?} == null");
        assert!(compare("!=", &null(), other), "null != {other:?}");
        for op in ["<", "<=", ">", ">="] {
            assert!(!compare(op, &null(), other), "null {op} {other:?}");
        }
    }
}

#[test]
fn none_and_json_null_behave_as_null() {
    assert!(compare("==", &None::<i32>, &json!(null)));
    assert!(compare("!=", &None::<i32>, &1));
}

// ============================================================================
// 2. Numeric coercion
// ============================================================================

#[test]
fn native_integers_compare_numerically() {
    assert!(compare("<", &3, &4));
    assert!(!compare(">=", &1, &2));
    assert!(compare("<=", &2, &2));
    assert!(compare(">", &10u64, &-10i8));
}

#[test]
fn int_equals_float_of_same_value() {
    assert!(compare("==", &5, &5.0));
    assert!(compare("==", &5u16, &5.0f32));
    assert!(!compare("!=", &5i64, &5.0));
}

#[test]
fn mixed_widths_and_signedness() {
    assert!(compare("<", &-1i32, &0u8));
    assert!(compare(">=", &u32::MAX, &i16::MAX));
    assert!(compare("<", &0.5f32, &1usize));
}

#[test]
fn nan_is_never_equal_or_ordered() {
    assert!(!compare("==", &f64::NAN, &f64::NAN));
    assert!(compare("!=", &f64::NAN, &f64::NAN));
    assert!(!compare("<", &f64::NAN, &1));
    assert!(!compare(">=", &f64::NAN, &1));
}

// ============================================================================
// 3. Deferred numeric text
// ============================================================================

#[test]
fn deferred_text_equals_native_number() {
    assert!(compare("==", &DynValue::deferred("5"), &5));
    assert!(compare("==", &5, &DynValue::deferred("5.0")));
    assert!(compare("<", &DynValue::deferred("1e2"), &101));
}

#[test]
fn deferred_text_compares_with_deferred_text() {
    assert!(compare(
        "<",
        &DynValue::deferred("9"),
        &DynValue::deferred("10")
    ));
    assert!(compare(
        "==",
        &DynValue::deferred("-0"),
        &DynValue::deferred("0")
    ));
}

#[test]
fn unparsable_deferred_text_is_false_for_every_positive_operator() {
    let bad = DynValue::deferred("notanumber");
    for op in [">", ">=", "<", "<=", "=="] {
        assert!(!compare(op, &bad, &5), "bad {op} 5");
        assert!(!compare(op, &5, &bad), "5 {op} bad");
        assert!(!compare(op, &bad, &bad), "bad {op} bad");
    }
    assert!(compare("!=", &bad, &5));
}

#[test]
fn overflowing_deferred_text_is_not_a_number() {
    let huge = DynValue::deferred("1e400");
    assert!(!compare(">", &huge, &5));
    assert!(!compare("<", &DynValue::deferred("-1e400"), &5));
    assert!(!compare("==", &huge, &f64::INFINITY));
    assert!(!compare("==", &huge, &DynValue::deferred("1e500")));
    assert!(compare("!=", &huge, &5));
}

#[test]
fn literal_infinity_text_is_a_number() {
    assert!(compare("==", &DynValue::deferred("inf"), &f64::INFINITY));
    assert!(compare("<", &DynValue::deferred("-Infinity"), &i64::MIN));
}

#[test]
fn deferred_text_is_not_a_string() {
    assert!(!compare("==", &DynValue::deferred("5"), &"5"));
}

#[test]
fn json_numbers_compare_with_natives() {
    assert!(compare("==", &json!(42), &42u8));
    assert!(compare(">", &json!(1.5), &1));
    assert!(compare("==", &DynValue::from(json!(7)), &json!(7.0)));
}

// ============================================================================
// 4. Strings
// ============================================================================

#[test]
fn strings_order_lexicographically() {
    assert!(compare("<", &"apple", &"banana"));
    assert!(compare(">", &"b", &"abc"));
    assert!(compare("<", &"Z", &"a"), "uppercase sorts before lowercase");
    assert!(compare("<=", &"same", &String::from("same")));
    assert!(compare("<", &"", &"a"));
}

#[test]
fn numeric_looking_strings_stay_strings() {
    assert!(compare("<", &"10", &"9"));
}

// ============================================================================
// 5. Booleans
// ============================================================================

#[test]
fn booleans_support_equality_only() {
    assert!(compare("==", &true, &true));
    assert!(compare("==", &false, &false));
    assert!(!compare("==", &true, &false));
    assert!(compare("!=", &true, &false));
    for op in ["<", "<=", ">", ">="] {
        assert!(!compare(op, &true, &false), "true {op} false");
        assert!(!compare(op, &false, &true), "false {op} true");
        assert!(!compare(op, &true, &true), "true {op} true");
    }
}

// ============================================================================
// 6. Mixed and unsupported kinds
// ============================================================================

#[test]
fn string_vs_number_is_a_soft_mismatch() {
    assert!(!compare("==", &"5", &5));
    assert!(compare("!=", &"5", &5));
    assert!(!compare("<", &"5", &6));
}

#[test]
fn bool_vs_number_is_a_soft_mismatch() {
    assert!(!compare("==", &true, &1));
    assert!(!compare(">", &1, &false));
    assert!(compare("!=", &false, &0));
}

#[test]
fn containers_never_compare() {
    let arr = json!([1, 2]);
    let obj = json!({"a": 1});
    assert!(!compare("==", &arr, &arr));
    assert!(!compare("==", &obj, &obj));
    assert!(compare("!=", &arr, &arr));
    assert!(!compare("<", &arr, &json!([1, 3])));
}

// ============================================================================
// 7. Named predicates and dispatch
// ============================================================================

#[test]
fn named_predicates_match_compare() {
    assert!(equal_to(&1, &1.0));
    assert!(not_equal_to(&1, &2));
    assert!(less_than(&1, &2));
    assert!(greater_than(&"b", &"a"));
    assert!(less_or_equal(&DynValue::deferred("3"), &3));
    assert!(greater_or_equal(&4, &json!(3)));
}

#[test]
fn dispatch_table_agrees_with_compare() {
    let values: Vec<Box<dyn Operand>> = vec![
        Box::new(DynValue::Null),
        Box::new(3),
        Box::new(3.5),
        Box::new(DynValue::deferred("3")),
        Box::new(DynValue::deferred("x")),
        Box::new("3"),
        Box::new(true),
        Box::new(json!([3])),
    ];
    for op in Operator::ALL {
        for left in &values {
            for right in &values {
                assert_eq!(
                    compare(op.token(), left.as_ref(), right.as_ref()),
                    compare_with(op, left.as_ref(), right.as_ref()),
                );
            }
        }
    }
}

// ============================================================================
// 8. Invalid operators
// ============================================================================

#[test]
#[should_panic(
    expected = "Invalid operator! The parsed operator should be in ['>','>=','<','<=','==','!='], received ['<<']"
)]
fn unknown_operator_panics_with_valid_set() {
    compare("<<", &1, &2);
}

#[test]
#[should_panic(expected = "received ['lt']")]
fn word_aliases_are_not_operators() {
    compare("lt", &"apple", &"banana");
}

#[test]
fn try_compare_reports_unknown_operator() {
    let err = try_compare("=>", &1, &2).unwrap_err();
    match &err {
        RelopError::InvalidOperator { received } => assert_eq!(received, "=>"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("'!='"));
}

#[test]
fn try_compare_succeeds_for_valid_tokens() {
    assert!(try_compare("<", &1, &2).unwrap());
    assert!(!try_compare("==", &"5", &5).unwrap());
}
