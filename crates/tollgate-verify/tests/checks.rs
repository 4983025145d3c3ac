use std::collections::{HashMap, VecDeque};

use chrono::TimeDelta;
use tollgate_verify::{
    is_instantiable, is_strictly_in_range, is_strictly_positive, messages, not_empty,
    not_empty_str, not_null, NotInstantiableReason, Scalar, TypeDescriptor, Violation,
    ViolationKind,
};

#[test]
fn not_null_accepts_present_value() {
    let name = String::from("abc");
    assert!(not_null(Some(&name), "name").is_ok());
    assert!(not_null(Some("abc"), "name").is_ok());
}

#[test]
fn not_null_rejects_absent_value() {
    let err = not_null(None::<&String>, "name").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
    assert_eq!(err.param_name(), Some("name"));
    assert!(err.message().starts_with(messages::NULL));
    assert!(err.to_string().contains("name"));
    assert!(err.cause().is_none());
}

#[test]
fn not_empty_str_distinguishes_absent_and_empty() {
    assert!(not_empty_str(Some("abc"), "name").is_ok());

    let absent = not_empty_str(None, "name").unwrap_err();
    assert_eq!(absent.kind(), ViolationKind::Null);

    let empty = not_empty_str(Some(""), "name").unwrap_err();
    assert_eq!(empty.kind(), ViolationKind::EmptyString);
    assert_eq!(empty.message(), messages::EMPTY_STRING);
    assert_eq!(empty.param_name(), Some("name"));
}

#[test]
fn not_empty_rejects_absent_sequence_of_any_element_type() {
    assert_eq!(
        not_empty(None::<&[i32]>, "p").unwrap_err().kind(),
        ViolationKind::Null
    );
    assert_eq!(
        not_empty(None::<Vec<String>>, "p").unwrap_err().kind(),
        ViolationKind::Null
    );
}

#[test]
fn not_empty_rejects_sequence_without_elements() {
    let empty: Vec<u8> = Vec::new();
    let err = not_empty(Some(&empty), "p").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::EmptyCollection);
    assert_eq!(err.message(), messages::EMPTY_COLLECTION);
    assert_eq!(err.param_name(), Some("p"));

    assert_eq!(
        not_empty(Some(std::iter::empty::<u8>()), "p").unwrap_err().kind(),
        ViolationKind::EmptyCollection
    );
}

#[test]
fn not_empty_accepts_sequences_with_elements() {
    assert!(not_empty(Some(&[1]), "p").is_ok());
    assert!(not_empty(Some(&vec!["a", "b"]), "p").is_ok());
    assert!(not_empty(Some(&VecDeque::from([1, 2])), "p").is_ok());
    assert!(not_empty(Some(&HashMap::from([(1, 'a')])), "p").is_ok());
    assert!(not_empty(Some((0..10).filter(|n| n % 7 == 6)), "p").is_ok());
}

#[test]
fn not_empty_leaves_exact_size_iterator_intact() {
    let mut iter = vec![1, 2, 3].into_iter();
    assert!(not_empty(Some(&mut iter), "p").is_ok());
    assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn not_empty_probe_consumes_one_element_of_lazy_iterator() {
    let mut iter = (1..=3).filter(|_| true);
    assert!(not_empty(Some(&mut iter), "p").is_ok());
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn is_strictly_positive_for_integers() {
    assert!(is_strictly_positive(1, "p").is_ok());
    assert!(is_strictly_positive(i32::MAX, "p").is_ok());
    assert!(is_strictly_positive(1_i64, "p").is_ok());

    let zero = is_strictly_positive(0, "p").unwrap_err();
    assert_eq!(zero.kind(), ViolationKind::RangeLower);
    assert_eq!(zero.actual_value(), Some(&Scalar::I32 { v: 0 }));
    assert_eq!(zero.lower_limit(), Some(&Scalar::I32 { v: 0 }));
    assert_eq!(zero.message(), messages::STRICTLY_POSITIVE);

    let negative = is_strictly_positive(-1_i64, "p").unwrap_err();
    assert_eq!(negative.actual_value(), Some(&Scalar::I64 { v: -1 }));
    assert_eq!(negative.limit(), Some(&Scalar::I64 { v: 0 }));
}

#[test]
fn is_strictly_positive_for_unsigned_and_float() {
    assert!(is_strictly_positive(3_usize, "p").is_ok());
    assert_eq!(
        is_strictly_positive(0_u32, "p").unwrap_err().kind(),
        ViolationKind::RangeLower
    );

    assert!(is_strictly_positive(0.001_f64, "p").is_ok());
    assert!(is_strictly_positive(0.0_f64, "p").is_err());
    assert!(is_strictly_positive(-0.0_f64, "p").is_err());
    assert!(is_strictly_positive(-2.5_f32, "p").is_err());
}

#[test]
fn is_strictly_positive_passes_nan() {
    assert!(is_strictly_positive(f64::NAN, "p").is_ok());
}

#[test]
fn is_strictly_positive_for_durations() {
    assert!(is_strictly_positive(TimeDelta::nanoseconds(1), "p").is_ok());
    assert!(is_strictly_positive(TimeDelta::zero(), "p").is_err());

    let err = is_strictly_positive(TimeDelta::seconds(-5), "timeout").unwrap_err();
    assert_eq!(
        err.actual_value().and_then(Scalar::as_time_delta),
        Some(TimeDelta::seconds(-5))
    );
    assert_eq!(
        err.limit().and_then(Scalar::as_time_delta),
        Some(TimeDelta::zero())
    );
}

#[test]
fn infinite_float_violations_survive_round_trip() {
    let positive = is_strictly_positive(f64::NEG_INFINITY, "rate").unwrap_err();
    let restored = Violation::from_json(&positive.to_json().unwrap()).unwrap();
    assert_eq!(restored.kind(), ViolationKind::RangeLower);
    assert_eq!(restored.actual_value(), Some(&Scalar::F64 { v: f64::NEG_INFINITY }));
    assert_eq!(restored.limit(), Some(&Scalar::F64 { v: 0.0 }));

    let ranged = is_strictly_in_range(f64::INFINITY, 0.0, 1.0, "ratio").unwrap_err();
    let restored = Violation::from_json(&ranged.to_json().unwrap()).unwrap();
    assert_eq!(restored.kind(), ViolationKind::RangeUpper);
    assert_eq!(restored.actual_value(), Some(&Scalar::F64 { v: f64::INFINITY }));
    assert_eq!(restored.upper_limit(), Some(&Scalar::F64 { v: 1.0 }));
    assert_eq!(restored.to_string(), ranged.to_string());
}

#[test]
fn is_strictly_in_range_accepts_interior_values() {
    assert!(is_strictly_in_range(5, 0, 10, "p").is_ok());
    assert!(is_strictly_in_range(1, 0, 2, "p").is_ok());
    assert!(is_strictly_in_range(0.5_f64, 0.0, 1.0, "p").is_ok());
    assert!(is_strictly_in_range(
        TimeDelta::seconds(30),
        TimeDelta::zero(),
        TimeDelta::minutes(1),
        "p"
    )
    .is_ok());
}

#[test]
fn is_strictly_in_range_bounds_are_exclusive() {
    let lower = is_strictly_in_range(0, 0, 10, "p").unwrap_err();
    assert_eq!(lower.kind(), ViolationKind::RangeLower);
    assert_eq!(lower.lower_limit(), Some(&Scalar::I32 { v: 0 }));
    assert_eq!(lower.message(), messages::STRICTLY_GREATER_THAN);

    let upper = is_strictly_in_range(10, 0, 10, "p").unwrap_err();
    assert_eq!(upper.kind(), ViolationKind::RangeUpper);
    assert_eq!(upper.upper_limit(), Some(&Scalar::I32 { v: 10 }));
    assert_eq!(upper.actual_value(), Some(&Scalar::I32 { v: 10 }));
    assert_eq!(upper.message(), messages::STRICTLY_LESS_THAN);
}

#[test]
fn is_strictly_in_range_reports_lower_bound_first() {
    // Inverted limits: 5 violates both, only the lower limit is reported.
    let err = is_strictly_in_range(5, 10, 0, "p").unwrap_err();
    assert_eq!(err.kind(), ViolationKind::RangeLower);
    assert_eq!(err.limit(), Some(&Scalar::I32 { v: 10 }));
}

#[test]
fn is_strictly_in_range_message_names_value_and_limit() {
    let err = is_strictly_in_range(123_i64, 0, 100, "PARAM").unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("PARAM"));
    assert!(rendered.contains("Actual value was 123."));
    assert!(rendered.contains("Upper limit: 100"));
}

#[test]
fn is_instantiable_accepts_concrete_types() {
    assert!(is_instantiable(Some(&TypeDescriptor::of::<String>()), "name").is_ok());
    assert!(is_instantiable(Some(&TypeDescriptor::of::<i32>()), "name").is_ok());

    let closed = TypeDescriptor::generic_definition("Action", ["T"])
        .bind([TypeDescriptor::of::<String>()]);
    assert!(is_instantiable(Some(&closed), "name").is_ok());
}

#[test]
fn is_instantiable_rejects_absent_descriptor() {
    let err = is_instantiable(None, "name").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
    assert!(err.message().starts_with(messages::NULL));
    assert_eq!(err.param_name(), Some("name"));
}

#[test]
fn is_instantiable_rejects_interface() {
    let descriptor = TypeDescriptor::interface("Comparable");
    let err = is_instantiable(Some(&descriptor), "name").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::NotInstantiable);
    assert_eq!(err.reason(), Some(NotInstantiableReason::Interface));
    assert_eq!(err.type_descriptor(), Some(&descriptor));
    assert!(err.to_string().starts_with(messages::INSTANTIABLE));
    assert!(err.to_string().contains(messages::INTERFACE_OR_ABSTRACT));
    assert_eq!(err.param_name(), Some("name"));
}

#[test]
fn is_instantiable_rejects_abstract_class() {
    let err = is_instantiable(Some(&TypeDescriptor::abstract_class("Stream")), "name").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::NotInstantiable);
    assert_eq!(err.reason(), Some(NotInstantiableReason::Abstract));
}

#[test]
fn is_instantiable_rejects_open_generic_definition() {
    let err = is_instantiable(
        Some(&TypeDescriptor::generic_definition("Action", ["T"])),
        "name",
    )
    .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::NotInstantiable);
    assert_eq!(err.reason(), Some(NotInstantiableReason::OpenGeneric));
    assert!(err.to_string().contains(messages::OPEN_GENERIC));
}

#[test]
fn violations_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<tollgate_verify::Violation>();
}
