// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Message formatting with named arguments
//! - Fallback to default locale when translations are missing

pub mod fluent;
