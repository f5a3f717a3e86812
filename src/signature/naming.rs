//! Class naming scheme of the generated interfaces.
//!
//! A lambda-family name reads `<Arity><Kind><Params>[To<Return>][Throw]`, for example
//! `TwiceFunctionObjectIntToChar`. The parameter fragment groups consecutive identical
//! types into runs prefixed by a count marker (`TwBooleanTwLong`), and collapses to the
//! bare type name when every parameter shares one type (`QuadruplePredicateLong`).
//! Operators read `<Type><Arity>Operator[Throw]`, for example `ByteTwiceOperator`.

use itertools::Itertools;

use crate::{
    errors::SignatureError,
    types::{LambdaKind, LambdaType},
};

const ARITY_PREFIXES: [(usize, &str); 4] = [
    (1, "Single"),
    (2, "Twice"),
    (3, "Triple"),
    (4, "Quadruple"),
];

// Longest first, so that decoding never stops at a shorter marker.
const RUN_MARKERS: [(usize, &str); 3] = [(4, "Quad"), (3, "Tri"), (2, "Tw")];

const RETURN_SEPARATOR: &str = "To";

/// The suffix appended to the class name of the throwing variant.
pub const THROW_SUFFIX: &str = "Throw";

/// The prefix naming the number of parameters.
///
/// # Errors
/// - [`SignatureError::InvalidArity`] if `arity` is not between 1 and 4.
pub fn arity_prefix(arity: usize) -> Result<&'static str, SignatureError> {
    ARITY_PREFIXES
        .iter()
        .find(|(it, _)| *it == arity)
        .map(|(_, prefix)| *prefix)
        .ok_or(SignatureError::InvalidArity(arity))
}

/// The marker preceding a run of `len` identical parameter types.
///
/// # Errors
/// - [`SignatureError::InvalidRunLength`] if `len` is not between 1 and 4.
pub fn run_marker(len: usize) -> Result<&'static str, SignatureError> {
    match len {
        1 => Ok(""),
        _ => RUN_MARKERS
            .iter()
            .find(|(it, _)| *it == len)
            .map(|(_, marker)| *marker)
            .ok_or(SignatureError::InvalidRunLength(len)),
    }
}

/// Encodes parameter types into the run-length grouped name fragment.
///
/// # Errors
/// - [`SignatureError::InvalidArity`] if `params` is empty.
/// - [`SignatureError::InvalidRunLength`] if a run is longer than 4.
pub fn encode_param_fragment(params: &[LambdaType]) -> Result<String, SignatureError> {
    let runs: Vec<_> = params.iter().dedup_with_count().collect();
    match runs.as_slice() {
        [] => Err(SignatureError::InvalidArity(0)),
        [(len, single)] => {
            run_marker(*len)?;
            Ok(single.capitalized_name().to_owned())
        }
        _ => runs
            .iter()
            .map(|(len, it)| {
                run_marker(*len).map(|marker| marker.to_owned() + it.capitalized_name())
            })
            .collect(),
    }
}

/// Decodes a name fragment produced by [`encode_param_fragment`] for `arity` parameters.
///
/// # Errors
/// - [`SignatureError::InvalidArity`] if `arity` is not between 1 and 4.
/// - [`SignatureError::UndecodableFragment`] if `fragment` is not the encoding of exactly
///   `arity` parameter types.
pub fn decode_param_fragment(
    fragment: &str,
    arity: usize,
) -> Result<Vec<LambdaType>, SignatureError> {
    arity_prefix(arity)?;
    let undecodable = || SignatureError::UndecodableFragment(fragment.to_owned());

    let mut runs = Vec::new();
    let mut remaining = fragment;
    while !remaining.is_empty() {
        let (len, after_marker) = RUN_MARKERS
            .iter()
            .find_map(|(len, marker)| remaining.strip_prefix(marker).map(|rest| (*len, rest)))
            .unwrap_or((1, remaining));
        let (lambda_type, rest) = LambdaType::VALUE_TYPES
            .into_iter()
            .find_map(|it| {
                after_marker
                    .strip_prefix(it.capitalized_name())
                    .map(|rest| (it, rest))
            })
            .ok_or_else(undecodable)?;
        runs.push((len, lambda_type));
        remaining = rest;
    }

    let params = match runs.as_slice() {
        [(1, single)] => vec![*single; arity],
        _ => runs
            .iter()
            .flat_map(|(len, it)| std::iter::repeat_n(*it, *len))
            .collect(),
    };
    // Only the canonical spelling is accepted, e.g., `IntInt` or a lone `TwInt` are not.
    if params.len() == arity && encode_param_fragment(&params)? == fragment {
        Ok(params)
    } else {
        Err(undecodable())
    }
}

/// Builds the class name of a Function, Consumer or Predicate interface.
///
/// # Errors
/// See [`arity_prefix`] and [`encode_param_fragment`].
pub fn lambda_class_name(
    kind: LambdaKind,
    return_type: Option<LambdaType>,
    params: &[LambdaType],
    throwing: bool,
) -> Result<String, SignatureError> {
    let arity = arity_prefix(params.len())?;
    let fragment = encode_param_fragment(params)?;
    let return_suffix = match (kind, return_type) {
        (LambdaKind::Function, Some(it)) => [RETURN_SEPARATOR, it.capitalized_name()].concat(),
        _ => String::new(),
    };
    let throw_suffix = if throwing { THROW_SUFFIX } else { "" };
    Ok(format!("{arity}{kind}{fragment}{return_suffix}{throw_suffix}"))
}

/// Builds the class name of an Operator interface.
///
/// # Errors
/// See [`arity_prefix`].
pub fn operator_class_name(
    element: LambdaType,
    arity: usize,
    throwing: bool,
) -> Result<String, SignatureError> {
    let arity = arity_prefix(arity)?;
    let throw_suffix = if throwing { THROW_SUFFIX } else { "" };
    Ok(format!(
        "{}{arity}{}{throw_suffix}",
        element.capitalized_name(),
        LambdaKind::Operator
    ))
}

/// The parts of a decoded lambda-family class name.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DecodedName {
    /// The return type, [`None`] for consumers and [`LambdaType::Predicate`] for predicates.
    pub return_type: Option<LambdaType>,
    /// The parameter types.
    pub param_types: Vec<LambdaType>,
    /// Whether the name is the throwing variant.
    pub throwing: bool,
}

/// Decodes a class name produced by [`lambda_class_name`].
///
/// # Errors
/// - [`SignatureError::UndecodableFragment`] if `class_name` does not follow the scheme.
pub fn decode_class_name(class_name: &str) -> Result<DecodedName, SignatureError> {
    let undecodable = || SignatureError::UndecodableFragment(class_name.to_owned());

    let (name, throwing) = match class_name.strip_suffix(THROW_SUFFIX) {
        Some(name) => (name, true),
        None => (class_name, false),
    };
    let (arity, name) = ARITY_PREFIXES
        .iter()
        .find_map(|(arity, prefix)| name.strip_prefix(prefix).map(|rest| (*arity, rest)))
        .ok_or_else(undecodable)?;

    let (return_type, fragment) =
        if let Some(rest) = name.strip_prefix(LambdaKind::Consumer.to_string().as_str()) {
            (None, rest)
        } else if let Some(rest) = name.strip_prefix(LambdaKind::Predicate.to_string().as_str()) {
            (Some(LambdaType::Predicate), rest)
        } else if let Some(rest) = name.strip_prefix(LambdaKind::Function.to_string().as_str()) {
            let (fragment, return_name) = rest
                .rsplit_once(RETURN_SEPARATOR)
                .ok_or_else(undecodable)?;
            let return_type = LambdaType::from_capitalized(return_name)
                .filter(|it| !it.is_predicate())
                .ok_or_else(undecodable)?;
            (Some(return_type), fragment)
        } else {
            return Err(undecodable());
        };

    let param_types = decode_param_fragment(fragment, arity).map_err(|_| undecodable())?;
    Ok(DecodedName {
        return_type,
        param_types,
        throwing,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    use crate::tests::{arb_lambda_return, arb_param_pair, arb_params};
    use LambdaType::*;

    #[test]
    fn fragment_examples() {
        assert_eq!(
            encode_param_fragment(&[Boolean, Boolean, Long, Long]).unwrap(),
            "TwBooleanTwLong"
        );
        assert_eq!(
            encode_param_fragment(&[Object, Object, Object, Int]).unwrap(),
            "TriObjectInt"
        );
        assert_eq!(encode_param_fragment(&[Int]).unwrap(), "Int");
        assert_eq!(encode_param_fragment(&[Long, Long, Long, Long]).unwrap(), "Long");
        assert_eq!(
            encode_param_fragment(&[Object, Int, Long, Long]).unwrap(),
            "ObjectIntTwLong"
        );
    }

    #[test]
    fn empty_fragment_is_rejected() {
        assert_eq!(
            encode_param_fragment(&[]),
            Err(SignatureError::InvalidArity(0))
        );
    }

    #[test]
    fn long_run_is_rejected() {
        assert_eq!(
            encode_param_fragment(&[Int, Int, Int, Int, Int, Long]),
            Err(SignatureError::InvalidRunLength(5))
        );
    }

    #[test]
    fn arity_prefixes() {
        assert_eq!(arity_prefix(1), Ok("Single"));
        assert_eq!(arity_prefix(4), Ok("Quadruple"));
        assert_eq!(arity_prefix(0), Err(SignatureError::InvalidArity(0)));
        assert_eq!(arity_prefix(5), Err(SignatureError::InvalidArity(5)));
    }

    #[test]
    fn class_names() {
        assert_eq!(
            lambda_class_name(LambdaKind::Function, Some(Int), &[Boolean], false).unwrap(),
            "SingleFunctionBooleanToInt"
        );
        assert_eq!(
            lambda_class_name(LambdaKind::Function, Some(Int), &[Boolean], true).unwrap(),
            "SingleFunctionBooleanToIntThrow"
        );
        assert_eq!(
            lambda_class_name(LambdaKind::Consumer, None, &[Object, Long], false).unwrap(),
            "TwiceConsumerObjectLong"
        );
        assert_eq!(
            lambda_class_name(
                LambdaKind::Predicate,
                Some(Predicate),
                &[Long, Long, Long, Long],
                false
            )
            .unwrap(),
            "QuadruplePredicateLong"
        );
        assert_eq!(operator_class_name(Byte, 2, false).unwrap(), "ByteTwiceOperator");
        assert_eq!(
            operator_class_name(Byte, 2, true).unwrap(),
            "ByteTwiceOperatorThrow"
        );
    }

    #[test]
    fn non_canonical_fragments_are_rejected() {
        assert!(decode_param_fragment("IntInt", 2).is_err());
        assert!(decode_param_fragment("TwInt", 2).is_err());
        assert!(decode_param_fragment("Int", 5).is_err());
        assert!(decode_param_fragment("IntLong", 3).is_err());
        assert!(decode_param_fragment("Integer", 1).is_err());
    }

    #[test]
    fn decode_examples() {
        assert_eq!(
            decode_class_name("QuadrupleConsumerTwObjectBooleanLongThrow").unwrap(),
            DecodedName {
                return_type: None,
                param_types: vec![Object, Object, Boolean, Long],
                throwing: true,
            }
        );
        assert_eq!(
            decode_class_name("TwiceFunctionObjectIntToChar").unwrap(),
            DecodedName {
                return_type: Some(Char),
                param_types: vec![Object, Int],
                throwing: false,
            }
        );
        assert!(decode_class_name("ByteTwiceOperator").is_err());
        assert!(decode_class_name("SingleFunctionIntToBoolean").is_err());
    }

    proptest! {
        #[test]
        fn fragment_round_trip(params in arb_params()) {
            let fragment = encode_param_fragment(&params).unwrap();
            let decoded = decode_param_fragment(&fragment, params.len()).unwrap();
            prop_assert_eq!(decoded, params);
        }

        #[test]
        fn class_name_round_trip(
            return_type in arb_lambda_return(),
            params in arb_params(),
            throwing in any::<bool>(),
        ) {
            let kind = match return_type {
                None => LambdaKind::Consumer,
                Some(it) if it.is_predicate() => LambdaKind::Predicate,
                Some(_) => LambdaKind::Function,
            };
            let name = lambda_class_name(kind, return_type, &params, throwing).unwrap();
            let decoded = decode_class_name(&name).unwrap();
            prop_assert_eq!(decoded.return_type, return_type);
            prop_assert_eq!(decoded.param_types, params);
            prop_assert_eq!(decoded.throwing, throwing);
        }

        #[test]
        fn distinct_params_have_distinct_fragments((lhs, rhs) in arb_param_pair()) {
            prop_assume!(lhs != rhs);
            prop_assert_ne!(
                encode_param_fragment(&lhs).unwrap(),
                encode_param_fragment(&rhs).unwrap()
            );
        }
    }
}
