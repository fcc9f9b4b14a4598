//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, each operation in one transaction
//! - **Data Layer** (`data/`) - One repository per table
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and the error envelope
//! - **Middleware** (`middleware/`) - Requester identity, session state, and preconditions
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, OAuth client, storage)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Storage** (`storage`) - Local filesystem storage for uploaded images
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the requester and checks referenced ids
//! 3. **Controller** converts DTOs to params, calls one service operation
//! 4. **Service** opens a transaction, enforces rules, calls repositories
//! 5. **Data** queries the database and returns entity models
//! 6. **Service** converts entities to domain models and commits
//! 7. **Controller** converts domain model to DTO inside the success envelope

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
pub mod storage;
