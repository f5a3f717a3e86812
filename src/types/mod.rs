//! Module containing the type vocabulary of the generated interfaces.
pub mod kind;
pub mod lambda_type;

pub use kind::LambdaKind;
pub use lambda_type::LambdaType;
