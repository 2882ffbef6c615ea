// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod client_cache;
mod pool;
mod react_wrap;
mod wrapper_call;

pub use client_cache::ClientCache;
pub use pool::TokioPool;
pub use react_wrap::ReactWrap;
pub use wrapper_call::{
    build_caller_call, build_local_call, build_master_call, CallerCall, LocalCall, MasterCall,
};
