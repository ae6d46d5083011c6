// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process HTTP driver and model artifact fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod artifacts;
pub mod axum_test;
