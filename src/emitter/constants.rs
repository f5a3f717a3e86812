//! The `BasicConstant` interface referenced by the generated sources.

use std::fmt::{self, Display, Formatter};

use super::{CONSTANTS_CLASS_NAME, EmitContext, doc::DocComment};
use crate::types::LambdaType;

/// Reference types that get an empty array and class constants next to the value types.
const REFERENCE_TYPES: [(&str, &str); 2] = [("CLASS", "Class"), ("STRING", "String")];

/// Renders the `BasicConstant` interface: zero values, empty arrays and class objects of
/// every value type.
#[must_use]
pub fn render_basic_constant(context: &EmitContext) -> String {
    BasicConstantSource { context }.to_string()
}

struct BasicConstantSource<'a> {
    context: &'a EmitContext,
}

impl BasicConstantSource<'_> {
    fn write_value_type(f: &mut Formatter<'_>, element: LambdaType) -> fmt::Result {
        let stem = element.to_string();
        let name = element.type_name();
        let boxed = element.boxed_name();
        match element {
            LambdaType::Object => {
                writeln!(f, "    Object[] OBJECT_EMPTY_ARRAY = {{}};")?;
                return writeln!(
                    f,
                    "    Class<?> OBJECT_TYPE = Object.class, OBJECT_ARRAY_TYPE = Object[].class;"
                );
            }
            LambdaType::Boolean | LambdaType::Predicate => {
                writeln!(f, "    boolean BOOLEAN_FALSE = false, BOOLEAN_TRUE = true;")?;
            }
            _ => writeln!(f, "    {name} {stem}_ZERO = {};", element.zero_literal())?,
        }
        writeln!(f, "    {name}[] {stem}_EMPTY_ARRAY = {{}};")?;
        writeln!(f, "    {boxed}[] {stem}_OBJECT_EMPTY_ARRAY = {{}};")?;
        writeln!(
            f,
            "    Class<?> {stem}_TYPE = {name}.class, {stem}_ARRAY_TYPE = {name}[].class, \
             {stem}_OBJECT_TYPE = {boxed}.class, {stem}_OBJECT_ARRAY_TYPE = {boxed}[].class;"
        )
    }
}

impl Display for BasicConstantSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {};", self.context.constants_package)?;
        writeln!(f)?;
        let doc = DocComment::top_level()
            .line("Zero values, empty arrays and class objects of the basic types.")
            .line_if(self.context.author.is_some(), String::new)
            .lines(self.context.author.as_ref().map(|it| format!("@author {it}")));
        write!(f, "{doc}")?;
        writeln!(f, "public interface {CONSTANTS_CLASS_NAME} {{")?;

        let value_types = LambdaType::ALL
            .into_iter()
            .filter(|it| *it != LambdaType::Predicate);
        for element in value_types {
            writeln!(f)?;
            Self::write_value_type(f, element)?;
        }
        for (stem, name) in REFERENCE_TYPES {
            writeln!(f)?;
            let generic = if name == "Class" { "<?>" } else { "" };
            writeln!(f, "    {name}{generic}[] {stem}_EMPTY_ARRAY = {{}};")?;
            writeln!(
                f,
                "    Class<?> {stem}_TYPE = {name}.class, {stem}_ARRAY_TYPE = {name}[].class;"
            )?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_constants() {
        let source = render_basic_constant(&EmitContext::default());
        assert!(source.starts_with("package com.github.zhitron;\n"));
        assert!(source.contains("public interface BasicConstant {"));
        for line in [
            "    boolean BOOLEAN_FALSE = false, BOOLEAN_TRUE = true;",
            "    char CHAR_ZERO = '\\0';",
            "    byte BYTE_ZERO = 0;",
            "    short SHORT_ZERO = 0;",
            "    int INT_ZERO = 0;",
            "    long LONG_ZERO = 0L;",
            "    float FLOAT_ZERO = 0.0f;",
            "    double DOUBLE_ZERO = 0.0d;",
        ] {
            assert!(source.contains(line), "missing `{line}`");
        }
    }

    #[test]
    fn arrays_and_classes() {
        let source = render_basic_constant(&EmitContext::default());
        assert!(source.contains("    Character[] CHAR_OBJECT_EMPTY_ARRAY = {};"));
        assert!(source.contains("INT_OBJECT_TYPE = Integer.class"));
        assert!(source.contains("    Object[] OBJECT_EMPTY_ARRAY = {};"));
        assert!(source.contains("    Class<?>[] CLASS_EMPTY_ARRAY = {};"));
        assert!(source.contains("STRING_ARRAY_TYPE = String[].class;"));
        assert!(!source.contains("OBJECT_ZERO"));
        assert!(!source.contains("PREDICATE"));
    }

    #[test]
    fn custom_package() {
        let context = EmitContext {
            constants_package: "org.example".to_owned(),
            author: Some("someone".to_owned()),
            ..EmitContext::default()
        };
        let source = render_basic_constant(&context);
        assert!(source.starts_with("package org.example;\n"));
        assert!(source.contains(" *\n * @author someone\n */\n"));
    }
}
