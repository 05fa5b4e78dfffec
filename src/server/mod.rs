//! HTTP service and persistence for feedback records.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database statements and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing, database connection, schema bootstrap
//! - **Middleware** (`middleware/`) - Cross-origin headers and preflight handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Path id parsing and request extractors
//!
//! # Request Flow
//!
//! 1. **Router** applies tracing and CORS, then routes to a controller
//! 2. **Controller** extracts the id and body, converts DTOs to params, calls service
//! 3. **Service** calls the repository and applies the not-found policy
//! 4. **Data** runs one SQL statement and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
