//! Functions, consumers, predicates and operators.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::{CONSTANTS_CLASS_NAME, EmitContext, Template, count_noun, doc::DocComment};
use crate::{
    signature::{Family, Signature, naming::THROW_SUFFIX},
    types::LambdaKind,
};

/// The template of an interface described by a [`Signature`].
#[derive(Debug, PartialEq, Eq, Clone, derive_more::From)]
pub struct InterfaceTemplate {
    signature: Signature,
}

impl InterfaceTemplate {
    /// Creates a template rendering the given signature.
    #[must_use]
    pub fn new(signature: Signature) -> Self {
        Self { signature }
    }

    /// The signature rendered by this template.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl Template for InterfaceTemplate {
    fn kind(&self) -> LambdaKind {
        self.signature.kind()
    }

    fn class_name(&self, throwing: bool) -> &str {
        self.signature.class_name(throwing)
    }

    fn render(&self, throwing: bool, context: &EmitContext) -> String {
        InterfaceSource {
            signature: &self.signature,
            throwing,
            context,
        }
        .to_string()
    }
}

/// One variant of an interface, ready to be written out.
struct InterfaceSource<'a> {
    signature: &'a Signature,
    throwing: bool,
    context: &'a EmitContext,
}

impl InterfaceSource<'_> {
    fn name(&self) -> &str {
        self.signature.class_name(self.throwing)
    }

    fn declaration(&self) -> &str {
        self.signature.generic_declaration(self.throwing)
    }

    fn definition(&self) -> &str {
        self.signature.generic_definition(self.throwing)
    }

    fn wildcard(&self) -> &str {
        self.signature.generic_wildcard(self.throwing)
    }

    fn is_predicate(&self) -> bool {
        self.signature
            .return_type()
            .is_some_and(|it| it.is_predicate())
    }

    fn return_type(&self) -> &'static str {
        self.signature
            .return_type()
            .map_or("void", |it| it.return_type())
    }

    /// `static <T, E extends Exception> Name<T, E>`, or `static Name` if not generic.
    fn static_return(&self) -> String {
        let declaration = self.declaration();
        if declaration.is_empty() {
            format!("static {}", self.name())
        } else {
            format!("static {declaration} {}{}", self.name(), self.definition())
        }
    }

    /// A cast to the concrete generic type, needed when a singleton typed with wildcards
    /// is handed out.
    fn unchecked_cast(&self) -> String {
        if self.signature.has_generic(self.throwing) {
            format!("({}{}) ", self.name(), self.definition())
        } else {
            String::new()
        }
    }

    fn write_unchecked_annotation(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.signature.has_generic(self.throwing) {
            writeln!(f, "    @SuppressWarnings(\"unchecked\")")?;
        }
        Ok(())
    }

    fn write_header(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {};", self.context.package_of(self.signature.kind()))?;
        writeln!(f)?;
        let returns_primitive = self
            .signature
            .return_type()
            .is_some_and(|it| !it.is_generic());
        if returns_primitive {
            writeln!(f, "import {};", self.context.constants_class())?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_class_doc(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let signature = self.signature;
        let arity = signature.arity();
        let mut summary = match (signature.family(), signature.kind()) {
            (Family::Operator, _) => match signature.param_types().first() {
                Some(element) if !element.is_generic() => format!(
                    "Represents an operation on {} of type {{@code {}}}, producing a result of the same type.",
                    count_noun(arity, "operand"),
                    element.type_name(),
                ),
                _ => format!(
                    "Represents an operation on {} of types {}, producing a result of type {{@code {}}}.",
                    count_noun(arity, "operand"),
                    signature
                        .params()
                        .iter()
                        .map(|it| format!("{{@code {}}}", it.java_type))
                        .join(", "),
                    signature.return_type().map_or("void", |it| it.return_type()),
                ),
            },
            (_, LambdaKind::Consumer) => format!(
                "Represents an operation that accepts {} and returns no result.",
                count_noun(arity, "argument")
            ),
            (_, LambdaKind::Predicate) => format!(
                "Represents a predicate of {}.",
                count_noun(arity, "argument")
            ),
            _ => format!(
                "Represents a function that accepts {} and produces a result.",
                count_noun(arity, "argument")
            ),
        };
        if self.throwing {
            summary.push_str(" The operation may throw a checked exception.");
        }
        let type_params = signature
            .params()
            .iter()
            .zip(signature.param_types())
            .enumerate()
            .filter(|(_, (_, it))| it.is_generic())
            .map(|(index, (param, _))| {
                format!(
                    "@param <{}> the type of argument {}",
                    param.java_type,
                    index + 1
                )
            });
        let doc = DocComment::top_level()
            .line(summary)
            .line_if(self.throwing, || {
                format!(
                    "Extends {{@link {}}}, rethrowing checked exceptions as unchecked ones.",
                    signature.class_name(false)
                )
            })
            .line_if(
                signature.has_generic(self.throwing) || self.context.author.is_some(),
                String::new,
            )
            .lines(type_params)
            .lines(
                signature
                    .return_type()
                    .and_then(|it| it.return_generic())
                    .map(|it| format!("@param <{it}> the type of the result")),
            )
            .line_if(self.throwing, || {
                "@param <E> the type of the exception, a subclass of {@link Exception}".to_owned()
            })
            .lines(self.context.author.as_ref().map(|it| format!("@author {it}")));
        write!(f, "{doc}")
    }

    fn write_declaration(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "@FunctionalInterface")?;
        write!(f, "public interface {}{}", self.name(), self.declaration())?;
        if self.throwing {
            write!(
                f,
                " extends {}{}",
                self.signature.class_name(false),
                self.signature.generic_definition(false)
            )?;
        }
        writeln!(f, " {{")?;
        writeln!(f)
    }

    fn write_boolean_constants(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let invocation = self.signature.param_invocation();
        for (field, value) in [("DEFAULT_TRUE", "true"), ("DEFAULT_FALSE", "false")] {
            let doc = DocComment::member().line(format!(
                "An instance that always returns {{@code {value}}}."
            ));
            write!(f, "{doc}")?;
            writeln!(
                f,
                "    {}{} {field} = ({invocation}) -> {CONSTANTS_CLASS_NAME}.BOOLEAN_{};",
                self.name(),
                self.wildcard(),
                value.to_uppercase(),
            )?;
            writeln!(f)?;
        }
        let doc = DocComment::member()
            .line("Returns the instance that always returns the given value.")
            .blank()
            .line("@param value the value to return")
            .line(
                "@return {@link #DEFAULT_TRUE} if {@code value} is true, otherwise {@link #DEFAULT_FALSE}",
            );
        write!(f, "{doc}")?;
        self.write_unchecked_annotation(f)?;
        writeln!(f, "    {} constant(boolean value) {{", self.static_return())?;
        writeln!(
            f,
            "        return {}(value ? DEFAULT_TRUE : DEFAULT_FALSE);",
            self.unchecked_cast()
        )?;
        writeln!(f, "    }}")?;
        writeln!(f)
    }

    fn write_empty(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let invocation = self.signature.param_invocation();
        let (description, body) = match self.signature.return_type() {
            None => ("does nothing".to_owned(), "{}".to_owned()),
            Some(it) if it.is_generic() => {
                ("always returns {@code null}".to_owned(), "null".to_owned())
            }
            Some(it) => (
                format!("always returns {{@code {}}}", it.zero_literal()),
                format!("{CONSTANTS_CLASS_NAME}.{it}_ZERO"),
            ),
        };
        let doc = DocComment::member().line(format!("An instance that {description}."));
        write!(f, "{doc}")?;
        writeln!(
            f,
            "    {}{} EMPTY = ({invocation}) -> {body};",
            self.name(),
            self.wildcard()
        )?;
        writeln!(f)?;

        let doc = DocComment::member()
            .line(format!("Returns the instance that {description}."))
            .blank()
            .line("@return the empty instance");
        write!(f, "{doc}")?;
        self.write_unchecked_annotation(f)?;
        writeln!(f, "    {} empty() {{", self.static_return())?;
        writeln!(f, "        return {}EMPTY;", self.unchecked_cast())?;
        writeln!(f, "    }}")?;
        writeln!(f)
    }

    fn write_constant_factory(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc = DocComment::member()
            .line(
                "Creates an instance that ignores its arguments and always returns the given value.",
            )
            .blank()
            .line("@param value the value to return")
            .line("@return the constant instance");
        write!(f, "{doc}")?;
        writeln!(
            f,
            "    {} constant({} value) {{",
            self.static_return(),
            self.return_type()
        )?;
        writeln!(
            f,
            "        return ({}) -> value;",
            self.signature.param_invocation()
        )?;
        writeln!(f, "    }}")?;
        writeln!(f)
    }

    fn method_doc(&self, summary: &str) -> DocComment {
        let signature = self.signature;
        let params = signature.params().iter().enumerate().map(|(index, it)| {
            format!(
                "@param {} argument {}, of type {{@code {}}}",
                it.name,
                index + 1,
                it.java_type
            )
        });
        let returns = match signature.kind() {
            LambdaKind::Consumer => None,
            LambdaKind::Predicate => Some(
                "@return {@code true} if the arguments match the predicate, otherwise {@code false}",
            ),
            _ => Some("@return the result"),
        };
        DocComment::member()
            .line(summary)
            .blank()
            .lines(params)
            .lines(returns)
    }

    fn write_abstract_method(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let signature = self.signature;
        let summary = match (signature.family(), signature.kind()) {
            (Family::Operator, _) => "Applies this operator to the given operands.",
            (_, LambdaKind::Consumer) => "Performs this operation on the given arguments.",
            (_, LambdaKind::Predicate) => "Evaluates this predicate on the given arguments.",
            _ => "Applies this function to the given arguments.",
        };
        let doc = self
            .method_doc(summary)
            .line_if(self.throwing, || "@throws E if the operation fails".to_owned());
        write!(f, "{doc}")?;
        let suffix = if self.throwing { THROW_SUFFIX } else { "" };
        let throws = if self.throwing { " throws E" } else { "" };
        writeln!(
            f,
            "    {} {}{suffix}({}){throws};",
            self.return_type(),
            signature.method_name(),
            signature.param_declaration()
        )
    }

    fn write_bridge(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let signature = self.signature;
        let method = signature.method_name();
        let throwing_method = format!("{method}{THROW_SUFFIX}");
        writeln!(f)?;
        let doc = self.method_doc(&format!(
            "Calls {{@link #{throwing_method}}}, wrapping any exception in a {{@link RuntimeException}}."
        ));
        write!(f, "{doc}")?;
        let returns = if signature.return_type().is_some() {
            "return "
        } else {
            ""
        };
        writeln!(f, "    @Override")?;
        writeln!(
            f,
            "    default {} {method}({}) {{",
            self.return_type(),
            signature.param_declaration()
        )?;
        writeln!(f, "        try {{")?;
        writeln!(
            f,
            "            {returns}this.{throwing_method}({});",
            signature.param_invocation()
        )?;
        writeln!(f, "        }} catch (Exception e) {{")?;
        writeln!(
            f,
            "            throw new RuntimeException(\"Exception for '{throwing_method}'\", e);"
        )?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")
    }
}

impl Display for InterfaceSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_class_doc(f)?;
        self.write_declaration(f)?;
        if self.is_predicate() {
            self.write_boolean_constants(f)?;
        } else {
            self.write_empty(f)?;
            if self.signature.return_type().is_some() {
                self.write_constant_factory(f)?;
            }
        }
        self.write_abstract_method(f)?;
        if self.throwing {
            self.write_bridge(f)?;
        }
        writeln!(f, "}}")
    }
}
