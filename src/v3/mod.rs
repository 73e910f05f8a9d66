/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
mod macros;
mod parsers;
pub mod album;
pub mod image;
pub mod orphans;
pub mod properties;
pub mod errors;

pub use album::*;
pub use api::*;
pub use client::*;
pub use errors::*;
pub use image::*;
pub use orphans::*;
pub use properties::*;

/// Number of items requested per page
pub const PAGE_SIZE: usize = 50;
pub(crate) const PAGE_SIZE_STRING: &str = "50";
