/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::stream_pages;
use crate::v3::parsers::{from_empty_str_to_none, from_lenient, from_timestamp};
use crate::v3::{Client, Operation, PAGE_SIZE_STRING};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

/// Holds information returned from the Image API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#image) for more
/// details on the individual fields. Only `id` is required. Metadata that is missing or of an
/// unexpected type is left as `None`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub id: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "from_timestamp",
        serialize_with = "chrono::serde::ts_seconds_option::serialize"
    )]
    pub datetime: Option<DateTime<Utc>>,

    #[serde(default, rename = "type", deserialize_with = "from_lenient")]
    pub mime_type: Option<String>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub width: Option<u32>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub height: Option<u32>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub size: Option<u64>,

    #[serde(default, deserialize_with = "from_lenient")]
    pub link: Option<String>,
}

impl Image {
    const ACCOUNT_IMAGES_URI: &'static str = "/3/account/me/images";

    /// Streams every image of the authenticated account, in the order the API returns them
    pub fn all(client: &Client) -> impl Stream<Item = Result<Image, ImgurError>> + '_ {
        stream_pages!(
            client,
            Self::ACCOUNT_IMAGES_URI,
            Operation::FetchImages,
            Image,
            "images"
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sparse_image_parses() {
        let image: Image = serde_json::from_str(r#"{"id":"i1"}"#).unwrap();
        assert_eq!(image.id, "i1");
        assert_eq!(image.title, None);
        assert_eq!(image.datetime, None);
    }

    #[test]
    fn full_image_parses() {
        let image: Image = serde_json::from_str(
            r#"{
                "id": "SbBGk",
                "title": null,
                "description": "",
                "datetime": 1341533193,
                "type": "image/jpeg",
                "animated": false,
                "width": 2559,
                "height": 1439,
                "size": 521916,
                "views": 1,
                "link": "https://i.imgur.com/SbBGk.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(image.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(image.width, Some(2559));
        assert_eq!(image.description, None);
        assert_eq!(image.datetime.map(|v| v.timestamp()), Some(1341533193));
    }
}
