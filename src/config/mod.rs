// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod reaction_map;
mod validation;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, DispatchOptions};
pub use reaction_map::ReactionMap;
pub use validation::validate_reactor_config;
