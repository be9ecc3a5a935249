// SPDX-License-Identifier: MPL-2.0
//! Domain layer - APOD data model and the rules applied to it.
//!
//! This module holds pure types and functions with no UI or network
//! dependencies, so every rule here is testable in isolation.
//!
//! # Modules
//!
//! - [`date_range`]: Date selection, validation and archive bounds
//!   ([`DateRange`](date_range::DateRange), [`DateBounds`](date_range::DateBounds))
//! - [`record`]: APOD records and the gallery selection rule
//!   ([`ImageRecord`](record::ImageRecord), [`select_images`](record::select_images))
//! - [`facts`]: The space fact pool ([`FactPool`](facts::FactPool))

pub mod date_range;
pub mod facts;
pub mod record;
