//! The set of interfaces produced by one generation run.

use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    emitter::{
        InterfaceTemplate, ParameterTemplate, SupplierTemplate, Template,
        parameter::MAX_PARAMETER_ARITY,
    },
    errors::GenerationError,
    signature::Signature,
    types::{LambdaKind, LambdaType},
};

use LambdaType::*;

/// Return types of the generated functions.
/// Consumers and predicates are generated for every parameter list as well.
pub const FUNCTION_RESULTS: [LambdaType; 8] = [Object, Char, Byte, Short, Int, Long, Float, Double];

/// Parameter types drawn by a [`Pool::Generic`] position.
pub const GENERIC_PARAMS: [LambdaType; 1] = [Object];

/// Parameter types drawn by a [`Pool::Primitive`] position.
pub const PRIMITIVE_PARAMS: [LambdaType; 4] = [Boolean, Int, Long, Double];

/// The largest arity of a generated interface.
pub const MAX_ARITY: usize = 4;

/// The set of types a parameter position draws from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Pool {
    /// [`GENERIC_PARAMS`].
    Generic,
    /// [`PRIMITIVE_PARAMS`].
    Primitive,
}

impl Pool {
    /// The types in this pool.
    #[must_use]
    pub const fn types(&self) -> &'static [LambdaType] {
        match self {
            Self::Generic => &GENERIC_PARAMS,
            Self::Primitive => &PRIMITIVE_PARAMS,
        }
    }
}

/// The pools of the four parameter positions, one row per policy.
/// Generic parameters always come before primitive ones.
pub const POLICIES: [[Pool; MAX_ARITY]; 5] = {
    use Pool::{Generic as G, Primitive as P};
    [
        [G, G, G, G],
        [P, P, P, P],
        [G, P, P, P],
        [G, G, P, P],
        [G, G, G, P],
    ]
};

/// The parameter lists of the lambda family, without duplicates.
/// Every prefix of every policy is expanded into the cartesian product of its pools.
pub fn lambda_param_lists() -> impl Iterator<Item = Vec<LambdaType>> {
    POLICIES
        .into_iter()
        .flat_map(|policy| {
            (1..=MAX_ARITY).map(move |arity| {
                policy[..arity]
                    .iter()
                    .map(|pool| pool.types().iter().copied())
                    .multi_cartesian_product()
            })
        })
        .flatten()
        .unique()
}

/// An ordered list of templates whose classes are pairwise distinct.
#[derive(Debug, Default)]
pub struct Plan {
    templates: Vec<Box<dyn Template>>,
    class_names: HashMap<(LambdaKind, String), usize>,
}

impl Plan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the plan of every function, consumer, predicate, operator, supplier and
    /// parameter container.
    ///
    /// # Errors
    /// - [`GenerationError::Signature`] if a combination cannot be encoded.
    /// - [`GenerationError::NameCollision`] if two combinations share a class name.
    pub fn standard() -> Result<Self, GenerationError> {
        let mut plan = Self::new();
        let returns = FUNCTION_RESULTS
            .into_iter()
            .map(Some)
            .chain([None, Some(Predicate)])
            .collect_vec();
        for params in lambda_param_lists() {
            for &return_type in &returns {
                let signature = Signature::lambda(return_type, params.iter().copied())?;
                plan.push(InterfaceTemplate::new(signature))?;
            }
        }
        for element in LambdaType::VALUE_TYPES {
            for arity in 1..=MAX_ARITY {
                plan.push(InterfaceTemplate::new(Signature::operator(element, arity)?))?;
            }
        }
        for element in LambdaType::VALUE_TYPES {
            plan.push(SupplierTemplate::new(element)?)?;
        }
        for arity in 0..=MAX_PARAMETER_ARITY {
            plan.push(ParameterTemplate::new(arity)?)?;
        }
        Ok(plan)
    }

    /// Appends a template.
    ///
    /// # Errors
    /// [`GenerationError::NameCollision`] if the plain or the throwing class of the template
    /// is already planned in the same sub-package.
    pub fn push(&mut self, template: impl Template + 'static) -> Result<(), GenerationError> {
        let kind = template.kind();
        let index = self.templates.len();
        for throwing in [false, true] {
            let class_name = template.class_name(throwing).to_owned();
            if self.class_names.contains_key(&(kind, class_name.clone())) {
                return Err(GenerationError::NameCollision {
                    package: kind.package(),
                    class_name,
                });
            }
        }
        for throwing in [false, true] {
            self.class_names
                .insert((kind, template.class_name(throwing).to_owned()), index);
        }
        self.templates.push(Box::new(template));
        Ok(())
    }

    /// The planned templates, in insertion order.
    #[must_use]
    pub fn templates(&self) -> &[Box<dyn Template>] {
        &self.templates
    }

    /// Looks up the template of a class.
    #[must_use]
    pub fn find(&self, kind: LambdaKind, class_name: &str) -> Option<&dyn Template> {
        let index = *self.class_names.get(&(kind, class_name.to_owned()))?;
        self.templates.get(index).map(|it| &**it)
    }

    /// The number of planned templates of the given kind.
    #[must_use]
    pub fn count(&self, kind: LambdaKind) -> usize {
        self.templates.iter().filter(|it| it.kind() == kind).count()
    }

    /// The number of planned templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Checks if nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn param_lists_are_unique() {
        let lists = lambda_param_lists().collect_vec();
        // 4 all-generic, 340 all-primitive, then 84, 20 and 4 new lists from the mixed policies
        assert_eq!(lists.len(), 452);
        assert_eq!(lists.iter().unique().count(), lists.len());
        assert!(lists.iter().all(|it| (1..=MAX_ARITY).contains(&it.len())));
    }

    #[test]
    fn generics_precede_primitives() {
        for list in lambda_param_lists() {
            let first_primitive = list.iter().position(|it| !it.is_generic());
            if let Some(position) = first_primitive {
                assert!(list[position..].iter().all(|it| !it.is_generic()));
            }
        }
    }

    #[test]
    fn standard_plan_counts() {
        let plan = Plan::standard().unwrap();
        assert_eq!(plan.count(LambdaKind::Function), 452 * 8);
        assert_eq!(plan.count(LambdaKind::Consumer), 452);
        assert_eq!(plan.count(LambdaKind::Predicate), 452);
        assert_eq!(plan.count(LambdaKind::Operator), 36);
        assert_eq!(plan.count(LambdaKind::Supplier), 9);
        assert_eq!(plan.count(LambdaKind::Parameter), 5);
        assert_eq!(plan.len(), 4570);
    }

    #[test]
    fn standard_plan_contains_known_classes() {
        let plan = Plan::standard().unwrap();
        for (kind, class_name) in [
            (LambdaKind::Function, "SingleFunctionBooleanToInt"),
            (LambdaKind::Function, "QuadrupleFunctionTriObjectIntToDoubleThrow"),
            (LambdaKind::Consumer, "TwiceConsumerObjectLong"),
            (LambdaKind::Predicate, "QuadruplePredicateLong"),
            (LambdaKind::Predicate, "QuadruplePredicateTwBooleanTwLongThrow"),
            (LambdaKind::Operator, "ByteTwiceOperatorThrow"),
            (LambdaKind::Supplier, "IntSupplier"),
            (LambdaKind::Parameter, "NonParameter"),
            (LambdaKind::Parameter, "QuadrupleParameterThrow"),
        ] {
            let template = plan.find(kind, class_name);
            assert!(template.is_some(), "missing {kind} {class_name}");
        }
        assert!(plan.find(LambdaKind::Function, "SingleFunctionCharToInt").is_none());
    }

    #[test]
    fn collisions_are_rejected() {
        let mut plan = Plan::new();
        let signature = Signature::lambda(Some(Int), [Long]).unwrap();
        plan.push(InterfaceTemplate::new(signature.clone())).unwrap();
        let error = plan.push(InterfaceTemplate::new(signature)).unwrap_err();
        assert!(matches!(
            error,
            GenerationError::NameCollision { package: "function", ref class_name }
                if class_name == "SingleFunctionLongToInt"
        ));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn boolean_and_predicate_returns_collide() {
        let mut plan = Plan::new();
        let predicate = Signature::lambda(Some(Predicate), [Long; 4]).unwrap();
        plan.push(InterfaceTemplate::new(predicate)).unwrap();
        let boolean = Signature::lambda(Some(Boolean), [Long; 4]).unwrap();
        let error = plan.push(InterfaceTemplate::new(boolean)).unwrap_err();
        assert!(matches!(
            error,
            GenerationError::NameCollision { package: "predicate", ref class_name }
                if class_name == "QuadruplePredicateLong"
        ));
    }

    #[test]
    fn same_name_in_different_packages_is_allowed() {
        let mut plan = Plan::new();
        plan.push(SupplierTemplate::new(Int).unwrap()).unwrap();
        plan.push(InterfaceTemplate::new(Signature::operator(Int, 1).unwrap()))
            .unwrap();
        assert!(!plan.is_empty());
        assert_eq!(plan.templates().len(), 2);
    }
}
