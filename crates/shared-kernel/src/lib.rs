// crates/shared-kernel/src/lib.rs
pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, ErrorKind,
    InfraResult, InfrastructureError, Result, ScriptLinesError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, LineCount, WordCount};
