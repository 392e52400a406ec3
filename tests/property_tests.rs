//! Property-based tests for schemaful.

use proptest::prelude::*;
use schemaful::prelude::*;
use serde_json::Value;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        ".{0,16}".prop_map(Value::from),
    ]
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_idempotent(value in arb_value()) {
        let schema = Schema::numeric().rule(Predicate::Even);
        let r1 = schema.validate(&value);
        let r2 = schema.validate(&value);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn interval_validate_idempotent(n in any::<i64>()) {
        let schema = Schema::numeric().rule(Interval::closed(-1000.0, 1000.0));
        let value = Value::from(n);
        let r1 = schema.validate(&value);
        let r2 = schema.validate(&value);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }
}

// ============================================================================
// ORDERING: acceptance is independent of rule order
// ============================================================================

proptest! {
    #[test]
    fn rule_order_independent_acceptance(value in arb_value()) {
        let forward = Schema::any().rule(Predicate::Even).rule(Predicate::Positive);
        let backward = Schema::any().rule(Predicate::Positive).rule(Predicate::Even);
        prop_assert_eq!(
            forward.validate(&value).is_ok(),
            backward.validate(&value).is_ok()
        );
    }
}

// ============================================================================
// GATE: a bare type-gated schema accepts exactly the category members
// ============================================================================

proptest! {
    #[test]
    fn type_gate_matches_category_membership(value in arb_value()) {
        for category in [Category::Any, Category::Boolean, Category::Numeric, Category::Text] {
            let schema = Schema::new(category);
            prop_assert_eq!(schema.validate(&value).is_ok(), category.contains(&value));
        }
    }

    #[test]
    fn open_conformity_accepts_everything(value in arb_value()) {
        let schema = Schema::numeric().with_conformity(Conformity::Open);
        prop_assert!(schema.validate(&value).is_ok());
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(value in arb_value()) {
        let a = Schema::numeric();
        let b = Schema::any().rule(Predicate::Positive);
        let combined = a.clone().and(b.clone());

        let a_ok = a.validate(&value).is_ok();
        let b_ok = b.validate(&value).is_ok();
        prop_assert_eq!(combined.validate(&value).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(value in arb_value()) {
        let a = Schema::boolean();
        let b = Schema::numeric();
        let combined = a.clone().or(b.clone());

        let a_ok = a.validate(&value).is_ok();
        let b_ok = b.validate(&value).is_ok();
        prop_assert_eq!(combined.validate(&value).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn not_inverts(value in arb_value()) {
        let inner = Schema::string();
        let inverted = inner.clone().not();
        prop_assert_eq!(inverted.validate(&value).is_ok(), inner.validate(&value).is_err());
    }
}
