// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Event Planner - personal event planning API
//!
//! Users register and log in, then manage categories and dated events that
//! only they can see or change.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Password hashing, session tokens and the authorization guard
//! - `services` - Business rules for credentials, categories and events
//! - `storage` - File-backed record store with ownership checks

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod telemetry;
