//! # Roster
//!
//! A CRUD HTTP service for a single student resource, backed by MongoDB.
//!
//! ## Features
//!
//! - **Store Contract**: the [`StudentStore`] trait defines the five
//!   operations a student-record manager exposes and their error semantics
//! - **Two Backends**: MongoDB for production, in-memory for tests and
//!   development
//! - **Typed Errors**: failures keep their kind all the way to the HTTP
//!   boundary, which picks the status code per kind
//! - **Message Envelopes**: every endpoint answers `{message, ...data}`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::prelude::*;
//! use std::sync::Arc;
//!
//! let state = AppState {
//!     students: Arc::new(InMemoryStudentStore::new()),
//! };
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! [`StudentStore`]: core::store::StudentStore

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, ErrorResponse, RosterError, RosterResult, StorageError, StudentError},
        store::StudentStore,
        student::{NewStudent, StudentPatch, StudentRecord},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStudentStore, MongoStudentStore};

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router, build_student_routes};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
