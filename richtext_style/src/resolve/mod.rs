// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascading resolution of [`Style`](crate::Style)s.
//!
//! A resolution chain is the sequence of local styles from a node up to the root of its tree,
//! nearest first. The effective value of a property is the first value found along the chain;
//! when no style sets it, the schema's [initial value](crate::Property::initial) applies, and
//! required properties fail with
//! [`MissingRequiredValue`](crate::ErrorKind::MissingRequiredValue).
//!
//! Nothing here caches: every call walks the chain it is given.

mod computed;
mod engine;

pub use computed::ComputedStyle;
pub use engine::{cascade, cascade_named};
