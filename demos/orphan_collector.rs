/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate imgur_orphans;

use anyhow::Result;
use dotenvy::dotenv;
use imgur_orphans::v3::{AlbumTarget, Client, CreateAlbumProps, Creds, OrphanSweep};
use log::{error, info};

// Builds the sweep from ALBUM_TITLE, CREATE_ALBUM and DRY_RUN
fn sweep_from_env() -> OrphanSweep {
    let title = std::env::var("ALBUM_TITLE").unwrap_or_else(|_| "Cats".to_string());
    let is_set = |name: &str| std::env::var(name).is_ok_and(|v| v == "1" || v == "true");

    let album = if is_set("CREATE_ALBUM") {
        AlbumTarget::Create(CreateAlbumProps::hidden(&title))
    } else {
        AlbumTarget::Title(title)
    };
    OrphanSweep {
        album,
        dry_run: is_set("DRY_RUN"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The access token is obtained via the OAuth2 authorization process
    // https://api.imgur.com/oauth2/authorize?client_id=YOUR_CLIENT_ID&response_type=token
    let client = Client::new(Creds::from_env());

    let sweep = sweep_from_env();
    match sweep.run(&client).await {
        Ok(report) => {
            info!(
                "Album {}: {} images, {} in albums, {} orphans{}",
                report.album_id,
                report.total_images,
                report.album_images,
                report.orphans.len(),
                if report.added { " added" } else { "" },
            );
            Ok(())
        }
        Err(err) => {
            error!("Error: {}", err);
            Err(err.into())
        }
    }
}
