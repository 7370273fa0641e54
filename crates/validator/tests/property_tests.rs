//! Property-based tests for pomoshtnik-validator.

use pomoshtnik_validator::prelude::*;
use proptest::prelude::*;
use proptest::prelude::any;
use serde_json::{Value, json};

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn decoding_is_deterministic(value in json_value()) {
        let v = string().array().optional();
        prop_assert_eq!(v.validate(&value), v.validate(&value));
    }
}

// ============================================================================
// PREDICATES: matches(x) == validate(x).is_ok()
// ============================================================================

proptest! {
    #[test]
    fn predicates_agree_with_validators(value in json_value()) {
        prop_assert_eq!(is_string(&value), string().validate(&value).is_ok());
        prop_assert_eq!(is_number(&value), number().validate(&value).is_ok());
        prop_assert_eq!(is_integer(&value), integer().validate(&value).is_ok());
        prop_assert_eq!(is_boolean(&value), boolean().validate(&value).is_ok());
        prop_assert_eq!(is_null(&value), null().validate(&value).is_ok());

        let nested = integer().array().optional();
        prop_assert_eq!(nested.matches(&value), nested.validate(&value).is_ok());
    }

    #[test]
    fn strings_are_never_coerced(s in ".{0,20}") {
        let value = json!(s.clone());
        prop_assert!(integer().validate(&value).is_err());
        prop_assert!(number().validate(&value).is_err());
        prop_assert!(boolean().validate(&value).is_err());
        prop_assert_eq!(string().validate(&value), Ok(s));
    }
}

// ============================================================================
// ARRAYS: every bad element is reported at its own index
// ============================================================================

proptest! {
    #[test]
    fn array_reports_each_bad_index(items in prop::collection::vec(prop::option::of(any::<i64>()), 0..12)) {
        let input = Value::from(
            items
                .iter()
                .map(|item| item.map_or_else(|| json!("bad"), Value::from))
                .collect::<Vec<_>>(),
        );
        let expected_bad: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_none())
            .map(|(i, _)| format!("[{i}]"))
            .collect();

        match integer().array().validate(&input) {
            Ok(decoded) => {
                prop_assert!(expected_bad.is_empty());
                prop_assert_eq!(decoded, items.iter().flatten().copied().collect::<Vec<_>>());
            }
            Err(error) => {
                let found: Vec<String> = error.entries().into_iter().map(|(at, _)| at).collect();
                prop_assert_eq!(found, expected_bad);
            }
        }
    }
}

// ============================================================================
// RECORDS: one error per missing required field
// ============================================================================

proptest! {
    #[test]
    fn record_reports_every_missing_field(present in prop::collection::vec(any::<bool>(), 4)) {
        const NAMES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];
        let mut fields = serde_json::Map::new();
        for (name, keep) in NAMES.iter().zip(&present) {
            if *keep {
                fields.insert((*name).to_owned(), json!(1));
            }
        }
        let input = Value::Object(fields);

        let mut record = Record::open(&input).unwrap();
        for name in NAMES {
            let _ = record.field(name, &integer());
        }
        let missing = present.iter().filter(|keep| !**keep).count();

        match record.finish() {
            Ok(()) => prop_assert_eq!(missing, 0),
            Err(error) => {
                prop_assert_eq!(error.leaves().len(), missing);
                prop_assert!(error.leaves().iter().all(|leaf| leaf.code == codes::REQUIRED));
            }
        }
    }
}

// ============================================================================
// OR: a.or(b) passes iff a passes or b passes
// ============================================================================

proptest! {
    #[test]
    fn or_passes_iff_either_passes(value in json_value()) {
        let a = string().map(|_| ());
        let b = integer().map(|_| ());
        let a_ok = a.validate(&value).is_ok();
        let b_ok = b.validate(&value).is_ok();
        prop_assert_eq!(a.or(b).validate(&value).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn optional_accepts_null_and_inner(value in json_value()) {
        let inner_ok = string().validate(&value).is_ok();
        let outcome = string().optional().validate(&value);
        prop_assert_eq!(outcome.is_ok(), inner_ok || value.is_null());
    }
}
