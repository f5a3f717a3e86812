#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![doc = include_str!("../README.md")]

/// Module containing the emitters of Java sources.
pub mod emitter;
/// Module containing the error types.
pub mod errors;
/// Module containing the generation plan and the file writer.
pub mod generator;
/// Module containing the class name and generic clause encoders.
pub mod signature;
/// Module containing the type catalog.
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use emitter::{EmitContext, InterfaceTemplate, ParameterTemplate, SupplierTemplate, Template};
pub use errors::{GenerationError, SignatureError};
pub use generator::{GenerationReport, Generator, GeneratorConfig};
pub use signature::Signature;
pub use types::{LambdaKind, LambdaType};
