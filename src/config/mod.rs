// ABOUTME: Configuration management for the library backend
// ABOUTME: Environment-driven settings for storage and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

//! Configuration management. Everything is environment-driven; see
//! [`environment`] for the variables and their defaults.

pub mod environment;
