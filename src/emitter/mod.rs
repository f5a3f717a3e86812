//! Rendering of Java sources.
//!
//! Every generated interface is described by a [`Template`], which renders the source of
//! its plain variant and of its throwing variant.

use std::fmt::Debug;

use crate::types::LambdaKind;

pub mod actuator;
pub mod constants;
pub(crate) mod doc;
pub mod interface;
pub mod parameter;
pub mod supplier;

pub use interface::InterfaceTemplate;
pub use parameter::ParameterTemplate;
pub use supplier::SupplierTemplate;

/// The package holding the generated interfaces unless configured otherwise.
pub const DEFAULT_BASE_PACKAGE: &str = "com.github.zhitron.lambda";

/// The package holding `BasicConstant` unless configured otherwise.
pub const DEFAULT_CONSTANTS_PACKAGE: &str = "com.github.zhitron";

/// The name of the interface holding the zero values referenced by generated sources.
pub const CONSTANTS_CLASS_NAME: &str = "BasicConstant";

/// The message of the unchecked exception thrown by the bridges of the parameter containers
/// and of `ActuatorThrow`.
pub(crate) const WRAPPED_EXCEPTION_MESSAGE: &str =
    "The lambda function execution appears exception";

/// Settings shared by all rendered sources.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EmitContext {
    /// The package under which each kind gets its own sub-package.
    pub base_package: String,
    /// The package of the `BasicConstant` interface.
    pub constants_package: String,
    /// The value of the `@author` tag, omitted if [`None`].
    pub author: Option<String>,
}

impl Default for EmitContext {
    fn default() -> Self {
        Self {
            base_package: DEFAULT_BASE_PACKAGE.to_owned(),
            constants_package: DEFAULT_CONSTANTS_PACKAGE.to_owned(),
            author: None,
        }
    }
}

impl EmitContext {
    /// The package of the interfaces of the given kind.
    #[must_use]
    pub fn package_of(&self, kind: LambdaKind) -> String {
        format!("{}.{}", self.base_package, kind.package())
    }

    /// The fully qualified name of the `BasicConstant` interface.
    #[must_use]
    pub fn constants_class(&self) -> String {
        format!("{}.{CONSTANTS_CLASS_NAME}", self.constants_package)
    }
}

/// A generated interface, rendered once for each throw mode.
pub trait Template: Debug {
    /// The kind of the interface, which decides its sub-package.
    fn kind(&self) -> LambdaKind;

    /// The class name of the plain (`throwing == false`) or throwing variant.
    fn class_name(&self, throwing: bool) -> &str;

    /// Renders the Java source of the plain or throwing variant.
    fn render(&self, throwing: bool, context: &EmitContext) -> String;
}

/// `1 argument`, `2 arguments`, ...
pub(crate) fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
