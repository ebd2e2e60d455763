// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_lines;
mod test_render;
mod utils;
