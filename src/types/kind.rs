//! The kinds of generated interfaces.

/// The kind of a generated interface.
/// Its [`Display`](std::fmt::Display) form is the word used in class names.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, derive_more::Display)]
pub enum LambdaKind {
    /// Accepts arguments and returns nothing.
    Consumer,
    /// Accepts arguments and returns a `boolean`.
    Predicate,
    /// Accepts arguments and returns a value.
    Function,
    /// Accepts arguments and returns a value, all of a single type.
    Operator,
    /// Accepts no argument and returns a value.
    Supplier,
    /// A container of nested interfaces of one arity, one per return type.
    Parameter,
}

impl LambdaKind {
    /// Every kind, in the order the generator emits them.
    pub const ALL: [Self; 6] = [
        Self::Function,
        Self::Consumer,
        Self::Predicate,
        Self::Operator,
        Self::Supplier,
        Self::Parameter,
    ];

    /// The sub-package holding the interfaces of this kind.
    #[must_use]
    pub const fn package(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Predicate => "predicate",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::Supplier => "supplier",
            Self::Parameter => "parameter",
        }
    }
}
