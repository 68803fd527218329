//! Client-credentials demo: authenticate as the application, then search
//! for a track. Needs `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` in
//! the environment.
//!
//! ```sh
//! cargo run --example app_search
//! ```

use anyhow::Context;
use spotify_client::{ClientConfig, Session, SpotifyClient, Verb};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()
        .context("SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET must be set")?;
    let client = SpotifyClient::new(config)?;
    let mut session = Session::new();

    client.authenticate(&mut session).await?;
    println!("Successfully authenticated!");

    let results = client
        .request(
            &session,
            Verb::Get,
            "/search?q=Bohemian%20Rhapsody&type=track&limit=5",
            None,
        )
        .await?;

    let tracks = results
        .pointer("/tracks/items")
        .and_then(|v| v.as_array())
        .context("search response had no tracks")?;

    println!("\nSearch results for 'Bohemian Rhapsody':");
    for track in tracks {
        let name = track["name"].as_str().unwrap_or("<unknown>");
        let artists = track["artists"]
            .as_array()
            .map(|a| {
                a.iter()
                    .filter_map(|artist| artist["name"].as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        println!("{name} by {artists}");
    }

    Ok(())
}
