/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Gathers images that are not in any album ("orphans") into a single album.
//!
//! Every step runs sequentially and the first failure aborts the whole sweep. Nothing is kept
//! between runs, so a failed sweep is simply run again from the start.

use crate::v3::errors::ImgurError;
use crate::v3::{Album, Client, CreateAlbumProps, Image};
use futures::{TryStreamExt, pin_mut};
use log::info;
use std::collections::HashSet;

/// Collects every image of the authenticated account
pub async fn all_images(client: &Client) -> Result<Vec<Image>, ImgurError> {
    let images: Vec<Image> = Image::all(client).try_collect().await?;
    info!("Total images found: {}", images.len());
    Ok(images)
}

/// Collects the ids of every image that belongs to at least one album.
///
/// Albums are fetched page by page until an empty page comes back, and each album's images are
/// requested one album at a time.
pub async fn album_image_ids(client: &Client) -> Result<HashSet<String>, ImgurError> {
    let mut image_ids = HashSet::new();
    let albums = Album::all(client);
    pin_mut!(albums);
    while let Some(album) = albums.try_next().await? {
        for image in album.images(client).await? {
            image_ids.insert(image.id);
        }
    }
    info!("Total album images found: {}", image_ids.len());
    Ok(image_ids)
}

/// Returns the ids of the images that are not in `album_image_ids`, keeping the order of `images`
pub fn filter_non_album_images(images: &[Image], album_image_ids: &HashSet<String>) -> Vec<String> {
    let orphans: Vec<String> = images
        .iter()
        .filter(|img| !album_image_ids.contains(&img.id))
        .map(|img| img.id.clone())
        .collect();
    info!("Found {} non-album images.", orphans.len());
    orphans
}

/// Which album the orphans end up in
#[derive(Debug, Clone)]
pub enum AlbumTarget {
    /// An existing album, looked up by its exact title
    Title(String),
    /// A new album created at the start of the sweep
    Create(CreateAlbumProps),
}

/// Outcome of a completed sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub album_id: String,
    pub total_images: usize,
    pub album_images: usize,
    pub orphans: Vec<String>,
    pub added: bool,
}

/// Moves every orphan image of the account into one album
#[derive(Debug, Clone)]
pub struct OrphanSweep {
    pub album: AlbumTarget,
    /// Find the orphans but do not add them
    pub dry_run: bool,
}

impl OrphanSweep {
    /// Sweep into the existing album with this title
    pub fn for_album(title: &str) -> Self {
        Self {
            album: AlbumTarget::Title(title.to_string()),
            dry_run: false,
        }
    }

    pub async fn run(&self, client: &Client) -> Result<SweepReport, ImgurError> {
        let album_id = self.resolve_album(client).await?;

        let images = all_images(client).await?;
        let album_image_ids = album_image_ids(client).await?;
        let orphans = filter_non_album_images(&images, &album_image_ids);

        let added = if orphans.is_empty() {
            info!("No non-album images found to add to the album.");
            false
        } else if self.dry_run {
            info!("Dry run, not adding {} images to album {}", orphans.len(), album_id);
            false
        } else {
            Album::add_images(client, &album_id, &orphans).await?;
            true
        };

        Ok(SweepReport {
            album_id,
            total_images: images.len(),
            album_images: album_image_ids.len(),
            orphans,
            added,
        })
    }

    async fn resolve_album(&self, client: &Client) -> Result<String, ImgurError> {
        match &self.album {
            AlbumTarget::Title(title) => Album::id_by_title(client, title)
                .await?
                .ok_or_else(|| ImgurError::AlbumNotFound(title.clone())),
            AlbumTarget::Create(props) => Ok(Album::create(client, props).await?.id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn images(ids: &[&str]) -> Vec<Image> {
        ids.iter()
            .map(|id| serde_json::from_value(serde_json::json!({ "id": id })).unwrap())
            .collect()
    }

    fn id_set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn filter_keeps_images_outside_albums() {
        let orphans = filter_non_album_images(&images(&["i1", "i2", "i3"]), &id_set(&["i2"]));
        assert_eq!(orphans, vec!["i1", "i3"]);
    }

    #[test]
    fn filter_preserves_order_and_input_duplicates() {
        let all = images(&["z", "a", "m", "a", "b"]);
        let orphans = filter_non_album_images(&all, &id_set(&["b", "unrelated"]));
        assert_eq!(orphans, vec!["z", "a", "m", "a"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let all = images(&["i1", "i2", "i3", "i4"]);
        let in_albums = id_set(&["i4", "i1"]);
        let first = filter_non_album_images(&all, &in_albums);
        let second = filter_non_album_images(&all, &in_albums);
        assert_eq!(first, second);
        assert_eq!(first, vec!["i2", "i3"]);
    }

    #[test]
    fn filter_edges() {
        assert!(filter_non_album_images(&[], &id_set(&["i1"])).is_empty());
        assert!(filter_non_album_images(&images(&["i1"]), &id_set(&["i1"])).is_empty());
        assert_eq!(
            filter_non_album_images(&images(&["i1", "i2"]), &HashSet::new()),
            vec!["i1", "i2"]
        );
    }
}
