// SPDX-License-Identifier: MPL-2.0
//! `train_stores` provides small persisted state stores: a counter that never
//! drops below zero, and theme/language settings kept in sync with a Fluent
//! locale engine.
//!
//! Stores hydrate from a pluggable key/value backing store at startup and
//! write their snapshot back after every action.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod storage;
pub mod store;
