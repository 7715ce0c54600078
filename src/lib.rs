// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reactivities: plan and browse social activities.
//!
//! This crate provides the backend API for storing activities and the
//! client-side cache that mirrors them for list/detail views.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activities: ActivityService,
}
