// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod namespace;
mod value;

pub use namespace::ModuleNamespace;
pub use value::{AttrValue, TypeBinding};
