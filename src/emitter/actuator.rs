//! The `Actuator` and `ActuatorThrow` interfaces, actions without argument and result.

use std::fmt::{self, Display, Formatter};

use super::{EmitContext, WRAPPED_EXCEPTION_MESSAGE, doc::DocComment};
use crate::signature::naming::THROW_SUFFIX;

/// The name of the plain action interface.
pub const ACTUATOR_CLASS_NAME: &str = "Actuator";

const METHOD: &str = "execute";

/// The class name of `Actuator` or `ActuatorThrow`.
#[must_use]
pub fn actuator_class_name(throwing: bool) -> String {
    if throwing {
        format!("{ACTUATOR_CLASS_NAME}{THROW_SUFFIX}")
    } else {
        ACTUATOR_CLASS_NAME.to_owned()
    }
}

/// Renders `Actuator` or, if `throwing`, `ActuatorThrow`, both placed in the package of
/// `BasicConstant`.
#[must_use]
pub fn render_actuator(throwing: bool, context: &EmitContext) -> String {
    ActuatorSource { throwing, context }.to_string()
}

struct ActuatorSource<'a> {
    throwing: bool,
    context: &'a EmitContext,
}

impl Display for ActuatorSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let throwing = self.throwing;
        writeln!(f, "package {};", self.context.constants_package)?;
        writeln!(f)?;
        let doc = DocComment::top_level()
            .line("Represents an action that accepts no argument and returns no result.")
            .line_if(throwing, || {
                format!(
                    "Extends {{@link {ACTUATOR_CLASS_NAME}}}, rethrowing checked exceptions as unchecked ones."
                )
            })
            .line_if(throwing || self.context.author.is_some(), String::new)
            .line_if(throwing, || {
                "@param <E> the type of the exception, a subclass of {@link Exception}".to_owned()
            })
            .lines(self.context.author.as_ref().map(|it| format!("@author {it}")));
        write!(f, "{doc}")?;
        writeln!(f, "@FunctionalInterface")?;
        if throwing {
            writeln!(
                f,
                "public interface {}<E extends Exception> extends {ACTUATOR_CLASS_NAME} {{",
                actuator_class_name(true)
            )?;
        } else {
            writeln!(f, "public interface {ACTUATOR_CLASS_NAME} {{")?;
        }
        writeln!(f)?;

        if !throwing {
            write!(f, "{}", DocComment::member().line("Performs this action."))?;
            writeln!(f, "    void {METHOD}();")?;
            return writeln!(f, "}}");
        }
        let doc = DocComment::member()
            .line("Performs this action.")
            .blank()
            .line("@throws E if the action fails");
        write!(f, "{doc}")?;
        writeln!(f, "    void {METHOD}{THROW_SUFFIX}() throws E;")?;
        writeln!(f)?;
        let doc = DocComment::member().line(format!(
            "Calls {{@link #{METHOD}{THROW_SUFFIX}}}, wrapping any exception in a {{@link RuntimeException}}."
        ));
        write!(f, "{doc}")?;
        writeln!(f, "    @Override")?;
        writeln!(f, "    default void {METHOD}() {{")?;
        writeln!(f, "        try {{")?;
        writeln!(f, "            this.{METHOD}{THROW_SUFFIX}();")?;
        writeln!(f, "        }} catch (Exception e) {{")?;
        writeln!(
            f,
            "            throw new RuntimeException(\"{WRAPPED_EXCEPTION_MESSAGE}\", e);"
        )?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}
