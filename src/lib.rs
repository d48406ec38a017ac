// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Tokengate Contributors

//! Tokengate - stateless token authentication with declarative interception.
//!
//! ## Modules
//!
//! - `api` - HTTP handlers and router (Axum)
//! - `auth` - Token codec, principal, security context, middleware, gate
//! - `intercept` - Entry/exit logging and failure-to-status translation
//! - `store` - In-memory stand-ins for the external persistence collaborator

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod intercept;
pub mod models;
pub mod state;
pub mod store;
