//! Core module containing the student record model, the store contract, and
//! the error hierarchy

pub mod error;
pub mod store;
pub mod student;

pub use error::{ConfigError, ErrorResponse, RosterError, RosterResult, StorageError, StudentError};
pub use store::StudentStore;
pub use student::{NewStudent, StudentPatch, StudentRecord};
