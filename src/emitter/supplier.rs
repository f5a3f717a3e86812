//! Suppliers of a single value.

use std::fmt::{self, Display, Formatter};

use super::{EmitContext, Template, doc::DocComment};
use crate::{
    errors::SignatureError,
    signature::{generics::GenericParams, naming::THROW_SUFFIX},
    types::{LambdaKind, LambdaType},
};

/// The template of `XSupplier` and `XSupplierThrow`, which take no argument and return a
/// value of type `X`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SupplierTemplate {
    element: LambdaType,
    plain_name: String,
    throwing_name: String,
    generics: GenericParams,
}

impl SupplierTemplate {
    /// Creates the template of the suppliers of `element`.
    ///
    /// # Errors
    /// [`SignatureError::NoParameterForm`] if `element` is [`LambdaType::Predicate`], which
    /// would collide with the suppliers of [`LambdaType::Boolean`].
    pub fn new(element: LambdaType) -> Result<Self, SignatureError> {
        if element == LambdaType::Predicate {
            return Err(SignatureError::NoParameterForm(element));
        }
        let plain_name = format!("{}Supplier", element.capitalized_name());
        Ok(Self {
            element,
            throwing_name: format!("{plain_name}{THROW_SUFFIX}"),
            plain_name,
            generics: GenericParams::new(Some(element), &[])?,
        })
    }

    /// The type of the supplied value.
    #[must_use]
    pub fn element(&self) -> LambdaType {
        self.element
    }

    /// `get` for objects, `getAsInt` and the like for primitives.
    #[must_use]
    pub fn method_name(&self) -> String {
        if self.element.is_generic() {
            "get".to_owned()
        } else {
            format!("getAs{}", self.element.capitalized_name())
        }
    }
}

impl Template for SupplierTemplate {
    fn kind(&self) -> LambdaKind {
        LambdaKind::Supplier
    }

    fn class_name(&self, throwing: bool) -> &str {
        if throwing {
            &self.throwing_name
        } else {
            &self.plain_name
        }
    }

    fn render(&self, throwing: bool, context: &EmitContext) -> String {
        SupplierSource {
            template: self,
            throwing,
            context,
        }
        .to_string()
    }
}

struct SupplierSource<'a> {
    template: &'a SupplierTemplate,
    throwing: bool,
    context: &'a EmitContext,
}

impl Display for SupplierSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let template = self.template;
        let element = template.element;
        let throwing = self.throwing;
        let return_type = element.return_type();
        let method = template.method_name();

        writeln!(f, "package {};", self.context.package_of(LambdaKind::Supplier))?;
        writeln!(f)?;
        let extends = if throwing {
            Some(format!(
                "{}{}",
                template.plain_name,
                template.generics.definition(false)
            ))
        } else if element.is_generic() {
            writeln!(f, "import java.util.function.Supplier;")?;
            writeln!(f)?;
            Some("Supplier<R>".to_owned())
        } else {
            None
        };

        let mut summary = format!(
            "Represents a supplier of {{@code {}}} values.",
            element.type_name()
        );
        if throwing {
            summary.push_str(" The supplier may throw a checked exception.");
        }
        let doc = DocComment::top_level()
            .line(summary)
            .line_if(throwing, || {
                format!(
                    "Extends {{@link {}}}, rethrowing checked exceptions as unchecked ones.",
                    template.plain_name
                )
            })
            .line_if(
                template.generics.has_generic(throwing) || self.context.author.is_some(),
                String::new,
            )
            .lines(
                element
                    .return_generic()
                    .map(|it| format!("@param <{it}> the type of the result")),
            )
            .line_if(throwing, || {
                "@param <E> the type of the exception, a subclass of {@link Exception}".to_owned()
            })
            .lines(self.context.author.as_ref().map(|it| format!("@author {it}")));
        write!(f, "{doc}")?;
        write!(
            f,
            "public interface {}{}",
            template.class_name(throwing),
            template.generics.declaration(throwing)
        )?;
        if let Some(extends) = extends {
            write!(f, " extends {extends}")?;
        }
        writeln!(f, " {{")?;
        writeln!(f)?;

        let doc = DocComment::member()
            .line("Gets a value.")
            .blank()
            .line("@return the supplied value")
            .line_if(throwing, || "@throws E if the supplier fails".to_owned());
        write!(f, "{doc}")?;
        if throwing {
            writeln!(f, "    {return_type} {method}{THROW_SUFFIX}() throws E;")?;
            writeln!(f)?;
            let doc = DocComment::member()
                .line(format!(
                    "Calls {{@link #{method}{THROW_SUFFIX}}}, wrapping any exception in a {{@link RuntimeException}}."
                ))
                .blank()
                .line("@return the supplied value");
            write!(f, "{doc}")?;
            writeln!(f, "    @Override")?;
            writeln!(f, "    default {return_type} {method}() {{")?;
            writeln!(f, "        try {{")?;
            writeln!(f, "            return this.{method}{THROW_SUFFIX}();")?;
            writeln!(f, "        }} catch (Exception e) {{")?;
            writeln!(
                f,
                "            throw new RuntimeException(\"Exception for '{method}{THROW_SUFFIX}'\", e);"
            )?;
            writeln!(f, "        }}")?;
            writeln!(f, "    }}")?;
        } else {
            writeln!(f, "    {return_type} {method}();")?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use crate::tests::arb_value_type;

    #[test]
    fn object_supplier_extends_java_supplier() {
        let template = SupplierTemplate::new(LambdaType::Object).unwrap();
        let expected = r#"package com.github.zhitron.lambda.supplier;

import java.util.function.Supplier;

/**
 * Represents a supplier of {@code Object} values.
 *
 * @param <R> the type of the result
 */
public interface ObjectSupplier<R> extends Supplier<R> {

    /**
     * Gets a value.
     *
     * @return the supplied value
     */
    R get();
}
"#;
        assert_eq!(template.render(false, &EmitContext::default()), expected);
    }

    #[test]
    fn throwing_long_supplier() {
        let template = SupplierTemplate::new(LambdaType::Long).unwrap();
        let expected = r#"package com.github.zhitron.lambda.supplier;

/**
 * Represents a supplier of {@code long} values. The supplier may throw a checked exception.
 * Extends {@link LongSupplier}, rethrowing checked exceptions as unchecked ones.
 *
 * @param <E> the type of the exception, a subclass of {@link Exception}
 */
public interface LongSupplierThrow<E extends Exception> extends LongSupplier {

    /**
     * Gets a value.
     *
     * @return the supplied value
     * @throws E if the supplier fails
     */
    long getAsLongThrow() throws E;

    /**
     * Calls {@link #getAsLongThrow}, wrapping any exception in a {@link RuntimeException}.
     *
     * @return the supplied value
     */
    @Override
    default long getAsLong() {
        try {
            return this.getAsLongThrow();
        } catch (Exception e) {
            throw new RuntimeException("Exception for 'getAsLongThrow'", e);
        }
    }
}
"#;
        assert_eq!(template.render(true, &EmitContext::default()), expected);
    }

    #[test]
    fn predicate_has_no_supplier() {
        assert_eq!(
            SupplierTemplate::new(LambdaType::Predicate),
            Err(SignatureError::NoParameterForm(LambdaType::Predicate))
        );
    }

    proptest! {
        #[test]
        fn names_follow_element(element in arb_value_type(), throwing in any::<bool>()) {
            let template = SupplierTemplate::new(element).unwrap();
            let name = template.class_name(throwing);
            prop_assert!(name.starts_with(element.capitalized_name()));
            prop_assert_eq!(name.ends_with(THROW_SUFFIX), throwing);
            let source = template.render(throwing, &EmitContext::default());
            let opening = format!("public interface {name}");
            prop_assert!(source.contains(&opening));
        }
    }
}
