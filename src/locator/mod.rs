//! Key derivation module
//!
//! Turns a (page index, filter/sort config) pair into the fully-specified
//! request target for that page, choosing between the two remote endpoint
//! families.
//!
//! # Overview
//!
//! Derivation is pure: the same inputs always produce the same locator, and
//! locator equality is the cache key downstream. Adding a third endpoint
//! family means extending the selection in one place here.

mod strategy;

pub use strategy::{LocatorStrategy, PageLocator};

#[cfg(test)]
mod tests;
