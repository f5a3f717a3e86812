//! Containers of nested interfaces, one container per arity.
//!
//! `TwiceParameter` holds `ToAny<T, U, R>`, `ToVoid<T, U>`, `ToInt<T, U>` and so on, every
//! parameter being generic. `TwiceParameterThrow` extends it and mirrors each nested
//! interface with a throwing one.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::{EmitContext, Template, WRAPPED_EXCEPTION_MESSAGE, count_noun, doc::DocComment};
use crate::{
    errors::SignatureError,
    signature::{
        generics::GenericParams,
        naming::{THROW_SUFFIX, arity_prefix},
    },
    types::{LambdaKind, LambdaType},
};

/// The largest arity of a container.
pub const MAX_PARAMETER_ARITY: usize = 4;

const NON_PREFIX: &str = "Non";
const PARAM_LETTERS: [&str; MAX_PARAMETER_ARITY] = ["T", "U", "V", "W"];
const PARAM_NAMES: [&str; MAX_PARAMETER_ARITY] = ["t", "u", "v", "w"];

/// The returns of the nested interfaces, in declaration order.
/// [`None`] is the `void` return.
const NESTED_RETURNS: [Option<LambdaType>; 10] = [
    Some(LambdaType::Object),
    None,
    Some(LambdaType::Boolean),
    Some(LambdaType::Char),
    Some(LambdaType::Byte),
    Some(LambdaType::Short),
    Some(LambdaType::Int),
    Some(LambdaType::Long),
    Some(LambdaType::Float),
    Some(LambdaType::Double),
];

/// The template of `XParameter` and `XParameterThrow`, which group functional interfaces of
/// arity `X` with generic parameters, one nested interface per return type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParameterTemplate {
    arity: usize,
    plain_name: String,
    throwing_name: String,
}

impl ParameterTemplate {
    /// Creates the container of the given arity; `0` names the `NonParameter` container.
    ///
    /// # Errors
    /// [`SignatureError::InvalidArity`] if `arity` is larger than 4.
    pub fn new(arity: usize) -> Result<Self, SignatureError> {
        let prefix = match arity {
            0 => NON_PREFIX,
            _ => arity_prefix(arity)?,
        };
        let plain_name = format!("{prefix}{}", LambdaKind::Parameter);
        Ok(Self {
            arity,
            throwing_name: format!("{plain_name}{THROW_SUFFIX}"),
            plain_name,
        })
    }

    /// The number of parameters of the nested interfaces.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The names of the nested interfaces, e.g., `ToAny` or `ToInt`.
    pub fn nested_names(&self) -> impl Iterator<Item = String> {
        NESTED_RETURNS.into_iter().map(nested_name)
    }

    fn nested_generics(&self, return_type: Option<LambdaType>) -> GenericParams {
        let letters = PARAM_LETTERS[..self.arity]
            .iter()
            .copied()
            .chain(return_type.and_then(|it| it.return_generic()))
            .collect();
        GenericParams::from_letters(letters)
    }

    fn param_declaration(&self) -> String {
        PARAM_LETTERS
            .iter()
            .zip(PARAM_NAMES)
            .take(self.arity)
            .map(|(letter, name)| format!("{letter} {name}"))
            .join(", ")
    }

    fn param_invocation(&self) -> String {
        PARAM_NAMES[..self.arity].join(", ")
    }
}

fn nested_name(return_type: Option<LambdaType>) -> String {
    let suffix = match return_type {
        Some(LambdaType::Object) => "Any",
        Some(it) => it.capitalized_name(),
        None => "Void",
    };
    format!("To{suffix}")
}

impl Template for ParameterTemplate {
    fn kind(&self) -> LambdaKind {
        LambdaKind::Parameter
    }

    fn class_name(&self, throwing: bool) -> &str {
        if throwing {
            &self.throwing_name
        } else {
            &self.plain_name
        }
    }

    fn render(&self, throwing: bool, context: &EmitContext) -> String {
        ParameterSource {
            template: self,
            throwing,
            context,
        }
        .to_string()
    }
}

struct ParameterSource<'a> {
    template: &'a ParameterTemplate,
    throwing: bool,
    context: &'a EmitContext,
}

impl ParameterSource<'_> {
    fn arguments(&self) -> String {
        match self.template.arity {
            0 => "no argument".to_owned(),
            arity => count_noun(arity, "argument"),
        }
    }

    fn write_nested(&self, f: &mut Formatter<'_>, return_type: Option<LambdaType>) -> fmt::Result {
        let template = self.template;
        let throwing = self.throwing;
        let name = nested_name(return_type);
        let generics = template.nested_generics(return_type);
        let java_return = return_type.map_or("void", |it| it.return_type());

        let summary = match return_type {
            Some(it) => format!(
                "Represents a function that accepts {} and produces a result of type {{@code {}}}.",
                self.arguments(),
                it.return_type()
            ),
            None => format!(
                "Represents an operation that accepts {} and returns no result.",
                self.arguments()
            ),
        };
        let type_params = PARAM_LETTERS[..template.arity]
            .iter()
            .enumerate()
            .map(|(index, it)| format!("@param <{it}> the type of argument {}", index + 1));
        let doc = DocComment::member()
            .line(summary)
            .line_if(generics.has_generic(throwing), String::new)
            .lines(type_params)
            .lines(
                return_type
                    .and_then(|it| it.return_generic())
                    .map(|it| format!("@param <{it}> the type of the result")),
            )
            .line_if(throwing, || {
                "@param <E> the type of the exception, a subclass of {@link Exception}".to_owned()
            });
        write!(f, "{doc}")?;
        writeln!(f, "    @FunctionalInterface")?;
        write!(f, "    interface {name}{}", generics.declaration(throwing))?;
        if throwing {
            write!(
                f,
                " extends {}.{name}{}",
                template.plain_name,
                generics.definition(false)
            )?;
        }
        writeln!(f, " {{")?;
        writeln!(f)?;

        let params = template.param_declaration();
        let method_doc = |summary: &str, throws: bool| {
            DocComment::nested_member()
                .line(summary)
                .line_if(
                    template.arity > 0 || return_type.is_some() || throws,
                    String::new,
                )
                .lines(
                    PARAM_NAMES[..template.arity]
                        .iter()
                        .enumerate()
                        .map(|(index, it)| format!("@param {it} argument {}", index + 1)),
                )
                .lines(return_type.map(|_| "@return the result"))
                .line_if(throws, || "@throws E if the function fails".to_owned())
        };
        if !throwing {
            let doc = method_doc("Applies this function to the given arguments.", false);
            write!(f, "{doc}")?;
            writeln!(f, "        {java_return} apply({params});")?;
            return writeln!(f, "    }}");
        }

        let doc = method_doc("Applies this function to the given arguments.", true);
        write!(f, "{doc}")?;
        writeln!(f, "        {java_return} apply{THROW_SUFFIX}({params}) throws E;")?;
        writeln!(f)?;
        let doc = method_doc(
            &format!(
                "Calls {{@link #apply{THROW_SUFFIX}}}, wrapping any exception in a {{@link RuntimeException}}."
            ),
            false,
        );
        write!(f, "{doc}")?;
        writeln!(f, "        @Override")?;
        writeln!(f, "        default {java_return} apply({params}) {{")?;
        writeln!(f, "            try {{")?;
        let call = format!("this.apply{THROW_SUFFIX}({})", template.param_invocation());
        if return_type.is_some() {
            writeln!(f, "                return {call};")?;
        } else {
            writeln!(f, "                {call};")?;
        }
        writeln!(f, "            }} catch (Exception e) {{")?;
        writeln!(
            f,
            "                throw new RuntimeException(\"{WRAPPED_EXCEPTION_MESSAGE}\", e);"
        )?;
        writeln!(f, "            }}")?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")
    }
}

impl Display for ParameterSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let template = self.template;
        writeln!(f, "package {};", self.context.package_of(LambdaKind::Parameter))?;
        writeln!(f)?;
        let doc = DocComment::top_level()
            .line(format!(
                "Functional interfaces that accept {}, one nested interface per return type.",
                self.arguments()
            ))
            .line_if(self.throwing, || {
                format!(
                    "Each nested interface extends its counterpart in {{@link {}}}, rethrowing checked exceptions as unchecked ones.",
                    template.plain_name
                )
            })
            .line_if(self.context.author.is_some(), String::new)
            .lines(self.context.author.as_ref().map(|it| format!("@author {it}")));
        write!(f, "{doc}")?;
        write!(f, "public interface {}", template.class_name(self.throwing))?;
        if self.throwing {
            write!(f, " extends {}", template.plain_name)?;
        }
        writeln!(f, " {{")?;
        for return_type in NESTED_RETURNS {
            writeln!(f)?;
            self.write_nested(f, return_type)?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn container_names() {
        let names: Vec<_> = (0..=MAX_PARAMETER_ARITY)
            .map(|it| ParameterTemplate::new(it).unwrap())
            .map(|it| it.class_name(true).to_owned())
            .collect();
        assert_eq!(
            names,
            [
                "NonParameterThrow",
                "SingleParameterThrow",
                "TwiceParameterThrow",
                "TripleParameterThrow",
                "QuadrupleParameterThrow",
            ]
        );
        assert_eq!(
            ParameterTemplate::new(5),
            Err(SignatureError::InvalidArity(5))
        );
    }

    #[test]
    fn nested_interface_order() {
        let template = ParameterTemplate::new(1).unwrap();
        assert_eq!(
            template.nested_names().collect::<Vec<_>>(),
            [
                "ToAny", "ToVoid", "ToBoolean", "ToChar", "ToByte", "ToShort", "ToInt", "ToLong",
                "ToFloat", "ToDouble",
            ]
        );
    }

    #[test]
    fn plain_single_parameter() {
        let source = ParameterTemplate::new(1)
            .unwrap()
            .render(false, &EmitContext::default());
        let expected_head = r#"package com.github.zhitron.lambda.parameter;

/**
 * Functional interfaces that accept 1 argument, one nested interface per return type.
 */
public interface SingleParameter {

    /**
     * Represents a function that accepts 1 argument and produces a result of type {@code R}.
     *
     * @param <T> the type of argument 1
     * @param <R> the type of the result
     */
    @FunctionalInterface
    interface ToAny<T, R> {

        /**
         * Applies this function to the given arguments.
         *
         * @param t argument 1
         * @return the result
         */
        R apply(T t);
    }

    /**
     * Represents an operation that accepts 1 argument and returns no result.
     *
     * @param <T> the type of argument 1
     */
    @FunctionalInterface
    interface ToVoid<T> {

        /**
         * Applies this function to the given arguments.
         *
         * @param t argument 1
         */
        void apply(T t);
    }
"#;
        assert!(source.starts_with(expected_head), "{source}");
        assert!(source.contains("    interface ToDouble<T> {\n"));
        assert!(source.contains("        double apply(T t);\n"));
        assert!(source.ends_with("    }\n}\n"));
    }

    #[test]
    fn throwing_twice_parameter() {
        let source = ParameterTemplate::new(2)
            .unwrap()
            .render(true, &EmitContext::default());
        assert!(source.contains("public interface TwiceParameterThrow extends TwiceParameter {\n"));
        let expected_to_int = r#"    /**
     * Represents a function that accepts 2 arguments and produces a result of type {@code int}.
     *
     * @param <T> the type of argument 1
     * @param <U> the type of argument 2
     * @param <E> the type of the exception, a subclass of {@link Exception}
     */
    @FunctionalInterface
    interface ToInt<T, U, E extends Exception> extends TwiceParameter.ToInt<T, U> {

        /**
         * Applies this function to the given arguments.
         *
         * @param t argument 1
         * @param u argument 2
         * @return the result
         * @throws E if the function fails
         */
        int applyThrow(T t, U u) throws E;

        /**
         * Calls {@link #applyThrow}, wrapping any exception in a {@link RuntimeException}.
         *
         * @param t argument 1
         * @param u argument 2
         * @return the result
         */
        @Override
        default int apply(T t, U u) {
            try {
                return this.applyThrow(t, u);
            } catch (Exception e) {
                throw new RuntimeException("The lambda function execution appears exception", e);
            }
        }
    }
"#;
        assert!(source.contains(expected_to_int), "{source}");
        assert!(source.contains(
            "    interface ToAny<T, U, R, E extends Exception> extends TwiceParameter.ToAny<T, U, R> {"
        ));
        assert!(source.contains("                this.applyThrow(t, u);\n"));
    }

    #[test]
    fn non_parameter_has_no_type_parameters() {
        let template = ParameterTemplate::new(0).unwrap();
        let plain = template.render(false, &EmitContext::default());
        assert!(plain.contains("Functional interfaces that accept no argument,"));
        assert!(plain.contains("    interface ToVoid {\n"));
        assert!(plain.contains("        void apply();\n"));
        assert!(plain.contains("    interface ToAny<R> {\n"));

        let throwing = template.render(true, &EmitContext::default());
        assert!(throwing.contains(
            "    interface ToLong<E extends Exception> extends NonParameter.ToLong {\n"
        ));
        assert!(throwing.contains("                return this.applyThrow();\n"));
    }

    #[test]
    fn quadruple_uses_fourth_letter() {
        let source = ParameterTemplate::new(4)
            .unwrap()
            .render(false, &EmitContext::default());
        assert!(source.contains("    interface ToAny<T, U, V, W, R> {\n"));
        assert!(source.contains("        boolean apply(T t, U u, V v, W w);\n"));
    }

    proptest! {
        #[test]
        fn every_nested_interface_is_rendered(
            arity in 0..=MAX_PARAMETER_ARITY,
            throwing in any::<bool>(),
        ) {
            let template = ParameterTemplate::new(arity).unwrap();
            let source = template.render(throwing, &EmitContext::default());
            for name in template.nested_names() {
                let opening = format!("    interface {name}");
                prop_assert_eq!(source.matches(&opening).count(), 1);
            }
            prop_assert_eq!(source.matches("@FunctionalInterface").count(), 10);
            prop_assert_eq!(source.matches("applyThrow(").count(), if throwing { 20 } else { 0 });
        }
    }
}
