// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metrics providers.
//!
//! Measurement only talks to fonts through [`FontMetrics`](richtext_style::FontMetrics).
//! [`MetricsTable`] holds metrics in memory; [`SkrifaMetrics`] reads them from font files.

mod sfnt;
mod table;

pub use sfnt::SkrifaMetrics;
pub use table::MetricsTable;
