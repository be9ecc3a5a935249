// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its own `Message`, and reports what the
//! application must act on as an `Event`.
//!
//! # Components
//!
//! - [`date_range`] - Start/end date fields, day steppers and the fetch button
//! - [`fact`] - Random space fact panel
//! - [`gallery`] - Loading indicator, image cards, placeholder and error panel
//! - [`modal`] - Detail view of one record
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (orbit spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod date_range;
pub mod design_tokens;
pub mod fact;
pub mod gallery;
pub mod modal;
pub mod styles;
pub mod theming;
pub mod widgets;
