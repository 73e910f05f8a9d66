/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::stream_pages;
use crate::v3::parsers::{from_empty_str_to_none, from_lenient, from_privacy, from_timestamp};
use crate::v3::{Client, Image, Operation, PAGE_SIZE_STRING, PrivacyLevel};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::{Stream, TryStreamExt, pin_mut};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Holds information returned from the Album API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#album) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Album {
    pub id: String,

    // Kept as sent, an empty title is still a title to match on
    #[serde(default, deserialize_with = "from_lenient")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "from_timestamp",
        serialize_with = "chrono::serde::ts_seconds_option::serialize"
    )]
    pub datetime: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_privacy")]
    pub privacy: Option<PrivacyLevel>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub images_count: Option<u64>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub link: Option<String>,
}

impl Album {
    const BASE_URI: &'static str = "/3/album";
    const ACCOUNT_ALBUMS_URI: &'static str = "/3/account/me/albums";

    /// Creates a new album and returns its id and delete hash
    pub async fn create(
        client: &Client,
        props: &CreateAlbumProps,
    ) -> Result<CreatedAlbum, ImgurError> {
        let req_url = client.endpoint(Self::BASE_URI, None)?;
        let created: CreatedAlbum = client
            .post(req_url, props)
            .await?
            .into_data(Operation::CreateAlbum)?;
        info!("Album created with ID: {}", created.id);
        Ok(created)
    }

    /// Streams every album of the authenticated account
    pub fn all(client: &Client) -> impl Stream<Item = Result<Album, ImgurError>> + '_ {
        stream_pages!(
            client,
            Self::ACCOUNT_ALBUMS_URI,
            Operation::FetchAlbums,
            Album,
            "albums"
        )
    }

    /// Returns the first album whose title matches exactly.
    ///
    /// Pages through the albums until a match is found, so albums past the first page are
    /// found too.
    pub async fn find_by_title(client: &Client, title: &str) -> Result<Option<Album>, ImgurError> {
        let albums = Self::all(client);
        pin_mut!(albums);
        while let Some(album) = albums.try_next().await? {
            if album.title.as_deref() == Some(title) {
                return Ok(Some(album));
            }
        }
        Ok(None)
    }

    /// Returns the id of the first album whose title matches exactly
    pub async fn id_by_title(client: &Client, title: &str) -> Result<Option<String>, ImgurError> {
        Ok(Self::find_by_title(client, title).await?.map(|v| v.id))
    }

    /// Retrieves the images contained in the album with the given id
    pub async fn images_from_id(client: &Client, album_id: &str) -> Result<Vec<Image>, ImgurError> {
        let req_url = client.endpoint(&format!("{}/{}/images", Self::BASE_URI, album_id), None)?;
        client
            .get(req_url)
            .await?
            .into_data(Operation::FetchAlbumImages)
    }

    /// Retrieves the images contained in this album
    pub async fn images(&self, client: &Client) -> Result<Vec<Image>, ImgurError> {
        Self::images_from_id(client, &self.id).await
    }

    /// Adds the images to the album with the given id in a single request
    pub async fn add_images(
        client: &Client,
        album_id: &str,
        image_ids: &[String],
    ) -> Result<(), ImgurError> {
        let req_url = client.endpoint(&format!("{}/{}/add", Self::BASE_URI, album_id), None)?;
        let _: Value = client
            .post(req_url, &json!({ "ids": image_ids }))
            .await?
            .into_data(Operation::AddImagesToAlbum)?;
        info!("Images added to the album successfully.");
        Ok(())
    }
}

/// Properties that can be used in the creation of an Album
#[derive(Serialize, Default, Clone, Debug)]
pub struct CreateAlbumProps {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacyLevel>,

    // Image id to use as the album cover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl CreateAlbumProps {
    /// Props for a hidden album with the given title
    pub fn hidden(title: &str) -> Self {
        Self {
            title: title.to_string(),
            privacy: Some(PrivacyLevel::Hidden),
            ..Default::default()
        }
    }
}

/// Expected response for an album creation request
#[derive(Deserialize, Clone, Debug)]
pub struct CreatedAlbum {
    pub id: String,

    #[serde(default)]
    pub deletehash: Option<String>,
}
