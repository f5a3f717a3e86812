use proptest::prelude::*;

use crate::types::LambdaType;

/// Any type with a parameter form.
pub(crate) fn arb_value_type() -> impl Strategy<Value = LambdaType> {
    any::<LambdaType>().prop_filter("the predicate marker has no parameter form", |it| {
        *it != LambdaType::Predicate
    })
}

/// Between one and four parameter types.
pub(crate) fn arb_params() -> impl Strategy<Value = Vec<LambdaType>> {
    prop::collection::vec(arb_value_type(), 1..=4)
}

/// Two lists of parameter types of the same length.
pub(crate) fn arb_param_pair() -> impl Strategy<Value = (Vec<LambdaType>, Vec<LambdaType>)> {
    (1usize..=4).prop_flat_map(|len| {
        (
            prop::collection::vec(arb_value_type(), len),
            prop::collection::vec(arb_value_type(), len),
        )
    })
}

/// The return type of a lambda-family signature, spelled the way class names decode it:
/// consumers have none, and predicates use [`LambdaType::Predicate`] rather than `boolean`.
pub(crate) fn arb_lambda_return() -> impl Strategy<Value = Option<LambdaType>> {
    prop_oneof![
        Just(None),
        Just(Some(LambdaType::Predicate)),
        arb_value_type()
            .prop_filter("boolean returns make predicates", |it| !it.is_predicate())
            .prop_map(Some),
    ]
}
