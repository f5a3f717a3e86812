//! Signatures of the generated interfaces.
//!
//! A [`Signature`] derives every textual fragment needed to emit one interface: its class
//! name, its generic clauses and its parameter lists. Both the plain and the throwing
//! variant are computed when the signature is built.

use itertools::Itertools;

use crate::{
    errors::SignatureError,
    types::{LambdaKind, LambdaType},
};

pub(crate) mod generics;
pub mod naming;

use generics::GenericParams;

/// The family a signature belongs to, which decides its naming scheme.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Family {
    /// Functions, consumers and predicates over arbitrary parameter types.
    Lambda,
    /// Operators whose parameters and return value share one type.
    Operator,
}

/// A value computed for both the plain and the throwing variant.
#[derive(Debug, PartialEq, Eq, Clone)]
struct ThrowVariants<T> {
    plain: T,
    throwing: T,
}

impl<T> ThrowVariants<T> {
    fn try_from_fn<E>(f: impl Fn(bool) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            plain: f(false)?,
            throwing: f(true)?,
        })
    }

    fn from_fn(f: impl Fn(bool) -> T) -> Self {
        Self {
            plain: f(false),
            throwing: f(true),
        }
    }

    fn get(&self, throwing: bool) -> &T {
        if throwing { &self.throwing } else { &self.plain }
    }
}

/// A parameter of a generated method.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Param {
    /// The type written in the method signature, e.g., `int` or `T`.
    pub java_type: &'static str,
    /// The name of the parameter, e.g., `v1`.
    pub name: &'static str,
}

/// The signature of a generated interface.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Signature {
    family: Family,
    kind: LambdaKind,
    method_name: &'static str,
    return_type: Option<LambdaType>,
    param_types: Vec<LambdaType>,
    params: Vec<Param>,
    generics: GenericParams,
    generic_count: usize,
    class_names: ThrowVariants<String>,
    generic_declarations: ThrowVariants<String>,
    generic_definitions: ThrowVariants<String>,
    generic_wildcards: ThrowVariants<String>,
    param_declaration: String,
    param_invocation: String,
}

impl Signature {
    /// Creates the signature of a function, consumer or predicate.
    ///
    /// A missing `return_type` makes a consumer; a boolean return type or
    /// [`LambdaType::Predicate`] makes a predicate; any other return type makes a function.
    /// Missing parameters (`None`) are skipped.
    ///
    /// # Errors
    /// - [`SignatureError::InvalidArity`] if there are not between 1 and 4 parameters.
    /// - [`SignatureError::NoParameterForm`] if a parameter is [`LambdaType::Predicate`].
    pub fn lambda<I>(
        return_type: Option<LambdaType>,
        param_types: I,
    ) -> Result<Self, SignatureError>
    where
        I: IntoIterator,
        I::Item: Into<Option<LambdaType>>,
    {
        let param_types: Vec<LambdaType> =
            param_types.into_iter().filter_map(Into::into).collect();
        let (kind, method_name) = match return_type {
            None => (LambdaKind::Consumer, "accept"),
            Some(it) if it.is_predicate() => (LambdaKind::Predicate, "test"),
            Some(_) => (LambdaKind::Function, "apply"),
        };
        let class_names = ThrowVariants::try_from_fn(|throwing| {
            naming::lambda_class_name(kind, return_type, &param_types, throwing)
        })?;
        Self::new(
            Family::Lambda,
            kind,
            method_name,
            return_type,
            param_types,
            class_names,
        )
    }

    /// Creates the signature of an operator taking `arity` parameters of type `element` and
    /// returning the same type.
    ///
    /// # Errors
    /// - [`SignatureError::MissingReturnType`] if `element` is [`None`].
    /// - [`SignatureError::InvalidArity`] if `arity` is not between 1 and 4.
    /// - [`SignatureError::NoParameterForm`] if `element` is [`LambdaType::Predicate`].
    pub fn operator(
        element: impl Into<Option<LambdaType>>,
        arity: usize,
    ) -> Result<Self, SignatureError> {
        let element = element.into().ok_or(SignatureError::MissingReturnType)?;
        let class_names = ThrowVariants::try_from_fn(|throwing| {
            naming::operator_class_name(element, arity, throwing)
        })?;
        Self::new(
            Family::Operator,
            LambdaKind::Operator,
            "apply",
            Some(element),
            vec![element; arity],
            class_names,
        )
    }

    /// Rebuilds the signature named by a lambda-family class name.
    /// Returns the signature and whether the name is the throwing variant.
    ///
    /// # Errors
    /// See [`naming::decode_class_name`].
    pub fn decode_class_name(class_name: &str) -> Result<(Self, bool), SignatureError> {
        let decoded = naming::decode_class_name(class_name)?;
        let signature = Self::lambda(decoded.return_type, decoded.param_types)?;
        Ok((signature, decoded.throwing))
    }

    fn new(
        family: Family,
        kind: LambdaKind,
        method_name: &'static str,
        return_type: Option<LambdaType>,
        param_types: Vec<LambdaType>,
        class_names: ThrowVariants<String>,
    ) -> Result<Self, SignatureError> {
        naming::arity_prefix(param_types.len())?;
        let params = param_types
            .iter()
            .enumerate()
            .map(|(index, it)| {
                Ok(Param {
                    java_type: it.param_type(index)?,
                    name: it.param_name(index)?,
                })
            })
            .collect::<Result<Vec<_>, SignatureError>>()?;
        let generics = GenericParams::new(return_type, &param_types)?;
        let param_declaration = params
            .iter()
            .map(|it| format!("{} {}", it.java_type, it.name))
            .join(", ");
        let param_invocation = params.iter().map(|it| it.name).join(", ");
        Ok(Self {
            family,
            kind,
            method_name,
            return_type,
            generic_count: param_types.iter().filter(|it| it.is_generic()).count(),
            param_types,
            params,
            class_names,
            generic_declarations: ThrowVariants::from_fn(|it| generics.declaration(it)),
            generic_definitions: ThrowVariants::from_fn(|it| generics.definition(it)),
            generic_wildcards: ThrowVariants::from_fn(|it| generics.wildcard(it)),
            generics,
            param_declaration,
            param_invocation,
        })
    }

    /// The family of the signature.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// The kind of the interface.
    #[must_use]
    pub fn kind(&self) -> LambdaKind {
        self.kind
    }

    /// The name of the abstract method of the plain variant: `accept`, `test` or `apply`.
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        self.method_name
    }

    /// The return type, [`None`] for consumers.
    #[must_use]
    pub fn return_type(&self) -> Option<LambdaType> {
        self.return_type
    }

    /// The parameter types, in order.
    #[must_use]
    pub fn param_types(&self) -> &[LambdaType] {
        &self.param_types
    }

    /// The parameters of the method, in order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.param_types.len()
    }

    /// The number of generic parameters.
    #[must_use]
    pub fn generic_count(&self) -> usize {
        self.generic_count
    }

    /// The letters of the generic type parameters, excluding the exception parameter.
    #[must_use]
    pub fn generic_letters(&self) -> &[&'static str] {
        self.generics.letters()
    }

    /// The class name of the variant.
    #[must_use]
    pub fn class_name(&self, throwing: bool) -> &str {
        self.class_names.get(throwing)
    }

    /// Checks if the variant declares any type parameter.
    #[must_use]
    pub fn has_generic(&self, throwing: bool) -> bool {
        self.generics.has_generic(throwing)
    }

    /// The type parameter declaration, e.g., `<T, R, E extends Exception>`, or an empty
    /// string if the variant is not generic.
    #[must_use]
    pub fn generic_declaration(&self, throwing: bool) -> &str {
        self.generic_declarations.get(throwing)
    }

    /// The type arguments used to reference the variant, e.g., `<T, R, E>`.
    #[must_use]
    pub fn generic_definition(&self, throwing: bool) -> &str {
        self.generic_definitions.get(throwing)
    }

    /// The wildcard type arguments, e.g., `<?, ?, ?>`.
    #[must_use]
    pub fn generic_wildcard(&self, throwing: bool) -> &str {
        self.generic_wildcards.get(throwing)
    }

    /// The parameter list of the method declaration, e.g., `T v1, int v2`.
    #[must_use]
    pub fn param_declaration(&self) -> &str {
        &self.param_declaration
    }

    /// The argument list forwarding the parameters, e.g., `v1, v2`.
    #[must_use]
    pub fn param_invocation(&self) -> &str {
        &self.param_invocation
    }
}
