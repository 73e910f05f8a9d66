/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur Orphans
//!
//! A small client for the Imgur APIv3 interface that finds the images of an account that are
//! not in any album and adds them to one album.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com)
//!
//! ## Features
//!
//! - Album information
//!     - Can create an Album
//!     - Find an Album by title
//!     - List the images contained in an Album
//!     - Add images to an Album
//! - Listing of all images in the account
//! - Orphan sweep that ties the above together
//! - Lower level interface for handling the raw communication
//!
//! *The Imgur API uses OAuth2 bearer tokens. Getting the access token is left up to the
//! consumer of this library*
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imgur_orphans::v3::{Client, Creds, OrphanSweep};
//!
//! async fn sweep() -> anyhow::Result<()> {
//!     // The access token is read from ACCESS_TOKEN
//!     let client = Client::new(Creds::from_env());
//!
//!     let report = OrphanSweep::for_album("Cats").run(&client).await?;
//!     println!("Moved {} images into {}", report.orphans.len(), report.album_id);
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
