/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Album visibility modes accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyLevel {
    Unknown,
    Public,
    Hidden,
    Secret,
}

/// The remote calls made by this crate. Used to name the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    #[strum(to_string = "Failed to create album")]
    CreateAlbum,
    #[strum(to_string = "Failed to fetch albums")]
    FetchAlbums,
    #[strum(to_string = "Failed to fetch images")]
    FetchImages,
    #[strum(to_string = "Failed to fetch album images")]
    FetchAlbumImages,
    #[strum(to_string = "Failed to add images to the album")]
    AddImagesToAlbum,
}
