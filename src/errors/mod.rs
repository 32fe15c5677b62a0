// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod composition;
mod namespace;

pub use composition::CompositionError;
pub use namespace::NamespaceError;
