//! The closed vocabulary of types that take part in a generated interface.

use crate::errors::SignatureError;

/// The parameter names used at each position of a generated method.
const PARAM_NAMES: [&str; 4] = ["v1", "v2", "v3", "v4"];

/// The generic type parameter letters used at each position by [`LambdaType::Object`].
const OBJECT_PARAM_LETTERS: [&str; 4] = ["T", "U", "V", "O"];

/// A type that can appear as a parameter or the return value of a generated interface.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum LambdaType {
    /// The `boolean` type.
    #[display("BOOLEAN")]
    Boolean,
    /// The `char` type.
    #[display("CHAR")]
    Char,
    /// The `byte` type.
    #[display("BYTE")]
    Byte,
    /// The `short` type.
    #[display("SHORT")]
    Short,
    /// The `int` type.
    #[display("INT")]
    Int,
    /// The `long` type.
    #[display("LONG")]
    Long,
    /// The `float` type.
    #[display("FLOAT")]
    Float,
    /// The `double` type.
    #[display("DOUBLE")]
    Double,
    /// Any reference type, rendered as a generic type parameter.
    #[display("OBJECT")]
    Object,
    /// Marks a boolean-returning predicate.
    /// It is only meaningful as a return type and has no parameter form.
    #[display("PREDICATE")]
    Predicate,
}

impl LambdaType {
    /// Every type in the catalog, including the [`LambdaType::Predicate`] marker.
    pub const ALL: [Self; 10] = [
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Object,
        Self::Predicate,
    ];

    /// The types that describe actual values, i.e., everything but [`LambdaType::Predicate`].
    pub const VALUE_TYPES: [Self; 9] = [
        Self::Object,
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// The Java name of the type, e.g., `int` or `Object`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean | Self::Predicate => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Object => "Object",
        }
    }

    /// The capitalized name used as a fragment of class names, e.g., `Int`.
    #[must_use]
    pub const fn capitalized_name(&self) -> &'static str {
        match self {
            Self::Boolean | Self::Predicate => "Boolean",
            Self::Char => "Char",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Object => "Object",
        }
    }

    /// The name of the wrapper class, e.g., `Integer`.
    #[must_use]
    pub const fn boxed_name(&self) -> &'static str {
        match self {
            Self::Char => "Character",
            Self::Int => "Integer",
            _ => self.capitalized_name(),
        }
    }

    /// Looks up a value type by its capitalized name.
    /// The [`LambdaType::Predicate`] marker is never returned.
    #[must_use]
    pub fn from_capitalized(name: &str) -> Option<Self> {
        Self::VALUE_TYPES
            .into_iter()
            .find(|it| it.capitalized_name() == name)
    }

    /// The generic letter used when this type is returned, if it is generic.
    #[must_use]
    pub const fn return_generic(&self) -> Option<&'static str> {
        match self {
            Self::Object => Some("R"),
            _ => None,
        }
    }

    const fn param_generics(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Object => Some(&OBJECT_PARAM_LETTERS),
            _ => None,
        }
    }

    /// The type written in a method signature when this type is returned.
    #[must_use]
    pub fn return_type(&self) -> &'static str {
        self.return_generic().unwrap_or_else(|| self.type_name())
    }

    /// The type written for the parameter at `index`.
    /// For generic types this is the type parameter letter of that position.
    ///
    /// # Errors
    /// - [`SignatureError::NoParameterForm`] for [`LambdaType::Predicate`].
    /// - [`SignatureError::ParamIndexOutOfRange`] if `index` has no generic letter.
    pub fn param_type(&self, index: usize) -> Result<&'static str, SignatureError> {
        if *self == Self::Predicate {
            return Err(SignatureError::NoParameterForm(*self));
        }
        match self.param_generics() {
            Some(letters) => {
                letters
                    .get(index)
                    .copied()
                    .ok_or(SignatureError::ParamIndexOutOfRange {
                        index,
                        len: letters.len(),
                    })
            }
            None => Ok(self.type_name()),
        }
    }

    /// The name of the parameter at `index`, e.g., `v1`.
    ///
    /// # Errors
    /// - [`SignatureError::NoParameterForm`] for [`LambdaType::Predicate`].
    /// - [`SignatureError::ParamIndexOutOfRange`] if `index` is beyond the fourth parameter.
    pub fn param_name(&self, index: usize) -> Result<&'static str, SignatureError> {
        if *self == Self::Predicate {
            return Err(SignatureError::NoParameterForm(*self));
        }
        PARAM_NAMES
            .get(index)
            .copied()
            .ok_or(SignatureError::ParamIndexOutOfRange {
                index,
                len: PARAM_NAMES.len(),
            })
    }

    /// Checks if the type is rendered as a generic type parameter.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Object)
    }

    /// Checks if a return value of this type makes a predicate.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(self, Self::Boolean | Self::Predicate)
    }

    /// The Java literal of the zero value of this type.
    #[must_use]
    pub const fn zero_literal(&self) -> &'static str {
        match self {
            Self::Boolean | Self::Predicate => "false",
            Self::Char => "'\\0'",
            Self::Byte | Self::Short | Self::Int => "0",
            Self::Long => "0L",
            Self::Float => "0.0f",
            Self::Double => "0.0d",
            Self::Object => "null",
        }
    }
}
