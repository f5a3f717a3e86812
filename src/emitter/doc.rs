use std::fmt::{self, Display, Formatter};

/// A Javadoc comment block.
#[derive(Debug, Default)]
pub(crate) struct DocComment {
    indent: &'static str,
    lines: Vec<String>,
}

impl DocComment {
    /// A comment placed at the top level of a file.
    pub(crate) fn top_level() -> Self {
        Self::default()
    }

    /// A comment placed on a member of an interface.
    pub(crate) fn member() -> Self {
        Self {
            indent: "    ",
            lines: Vec::new(),
        }
    }

    /// A comment placed on a member of an interface nested in another one.
    pub(crate) fn nested_member() -> Self {
        Self {
            indent: "        ",
            lines: Vec::new(),
        }
    }

    pub(crate) fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub(crate) fn lines<I>(self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        lines.into_iter().fold(self, Self::line)
    }

    pub(crate) fn line_if(self, condition: bool, line: impl FnOnce() -> String) -> Self {
        if condition { self.line(line()) } else { self }
    }

    pub(crate) fn blank(self) -> Self {
        self.line(String::new())
    }
}

impl Display for DocComment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indent = self.indent;
        writeln!(f, "{indent}/**")?;
        for line in &self.lines {
            if line.is_empty() {
                writeln!(f, "{indent} *")?;
            } else {
                writeln!(f, "{indent} * {line}")?;
            }
        }
        writeln!(f, "{indent} */")
    }
}
