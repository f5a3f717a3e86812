//! Generic type parameter clauses.

use itertools::Itertools;

use crate::{errors::SignatureError, types::LambdaType};

const EXCEPTION_BOUND: &str = "E extends Exception";
const EXCEPTION_PARAM: &str = "E";
const WILDCARD: &str = "?";

/// The generic type parameters of a signature, excluding the exception parameter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct GenericParams {
    letters: Vec<&'static str>,
}

impl GenericParams {
    /// Collects the letters of the generic parameters in parameter order, followed by the
    /// letter of the return type if it is generic.
    pub(crate) fn new(
        return_type: Option<LambdaType>,
        params: &[LambdaType],
    ) -> Result<Self, SignatureError> {
        let mut letters = params
            .iter()
            .enumerate()
            .filter(|(_, it)| it.is_generic())
            .map(|(index, it)| it.param_type(index))
            .collect::<Result<Vec<_>, _>>()?;
        letters.extend(return_type.and_then(|it| it.return_generic()));
        Ok(Self { letters })
    }

    /// Uses the given letters as they are.
    pub(crate) fn from_letters(letters: Vec<&'static str>) -> Self {
        Self { letters }
    }

    /// The letters of the type parameters, e.g., `["T", "U", "R"]`.
    pub(crate) fn letters(&self) -> &[&'static str] {
        &self.letters
    }

    /// The exception parameter `E` always makes the throwing variant generic.
    pub(crate) fn has_generic(&self, throwing: bool) -> bool {
        !self.letters.is_empty() || throwing
    }

    /// `<T, R, E extends Exception>`, used where the interface is declared.
    pub(crate) fn declaration(&self, throwing: bool) -> String {
        self.clause(throwing, EXCEPTION_BOUND, |it| it)
    }

    /// `<T, R, E>`, used where the interface is referenced.
    pub(crate) fn definition(&self, throwing: bool) -> String {
        self.clause(throwing, EXCEPTION_PARAM, |it| it)
    }

    /// `<?, ?, ?>`, used for the type of the untyped singletons.
    pub(crate) fn wildcard(&self, throwing: bool) -> String {
        self.clause(throwing, WILDCARD, |_| WILDCARD)
    }

    fn clause(
        &self,
        throwing: bool,
        exception: &'static str,
        slot: impl Fn(&'static str) -> &'static str,
    ) -> String {
        if !self.has_generic(throwing) {
            return String::new();
        }
        let slots = self
            .letters
            .iter()
            .copied()
            .map(slot)
            .chain(throwing.then_some(exception));
        format!("<{}>", slots.format(", "))
    }
}
