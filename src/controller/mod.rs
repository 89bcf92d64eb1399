//! Pagination controller module
//!
//! Maps user navigation intents (next, previous, jump, filter/sort change)
//! onto store growth and exposes the read surface the list view renders
//! from.
//!
//! # Overview
//!
//! The controller is the single owner of "where the user is": the 1-based
//! current page number and the active filter/sort config. UI bindings call
//! its methods directly; nothing here relies on re-render side effects to
//! trigger fetches.

mod controller;

pub use controller::PaginationController;
