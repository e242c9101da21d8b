//! PokéAPI Client
//!
//! Cache-backed HTTP fetch layer. Every request is keyed by its full URL in
//! the timed cache; within the TTL window a repeated request never touches
//! the network. Failed fetches are never cached.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{AreaEncounters, LocationAreaPage, Pokemon};

// == PokéAPI Client ==
/// HTTP client for PokéAPI with URL-keyed response caching.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: TimedCache,
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client that shares the given cache.
    ///
    /// # Arguments
    /// * `config` - Base URL and request timeout
    /// * `cache` - The timed cache responses are stored in
    pub fn new(config: &Config, cache: TimedCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    // == Fetch ==
    /// Returns the body for `url`, from cache when possible.
    ///
    /// On a miss the URL is fetched; a transport error or non-2xx status is
    /// returned without touching the cache, so failures never produce stale
    /// positive entries. Successful bodies are added under the URL before
    /// being returned.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        debug!(%url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(PokedexError::BadStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let body = body.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    // == Typed Endpoints ==
    /// Fetches one page of the location-area listing.
    pub async fn location_area_page(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the encounter list of a single location area.
    pub async fn area_encounters(&self, url: &str) -> Result<AreaEncounters> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a Pokémon by name (case-insensitive).
    ///
    /// A 404 from PokéAPI maps to [`PokedexError::PokemonNotFound`].
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());
        match self.fetch_bytes(&url).await {
            Ok(body) => Ok(serde_json::from_slice(&body)?),
            Err(PokedexError::BadStatus { status: 404, .. }) => {
                Err(PokedexError::PokemonNotFound(name.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    // == Area Index ==
    /// The first page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Walks the full paginated location-area listing and returns a
    /// name-to-URL index of every area.
    pub async fn load_all_areas(&self) -> Result<HashMap<String, String>> {
        let mut areas = HashMap::new();
        let mut url = Some(self.location_areas_url());

        while let Some(page_url) = url {
            let page = self.location_area_page(&page_url).await?;
            for area in page.results {
                areas.insert(area.name, area.url);
            }
            url = page.next;
        }

        info!(count = areas.len(), "loaded location area index");
        Ok(areas)
    }
}

// == Unit Tests ==
// Network-free: the cache is pre-seeded, so fetch_bytes never leaves the
// process. The base URL points at a closed port to make any accidental
// network call fail fast.
#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PokeApiClient {
        let config = Config {
            cache_interval_secs: 300,
            api_base_url: "http://127.0.0.1:9".to_string(),
            http_timeout_secs: 1,
        };
        let cache = TimedCache::new(Duration::from_secs(300));
        PokeApiClient::new(&config, cache).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_bytes_serves_from_cache() {
        let client = test_client();
        let url = "http://127.0.0.1:9/cached";

        client.cache.add(url, b"cached body".to_vec()).await;

        let body = client.fetch_bytes(url).await.unwrap();
        assert_eq!(body, b"cached body");
    }

    #[tokio::test]
    async fn test_failed_fetch_does_not_populate_cache() {
        let client = test_client();
        let url = "http://127.0.0.1:9/unreachable";

        assert!(client.fetch_bytes(url).await.is_err());
        assert_eq!(client.cache.get(url).await, None);
    }

    #[tokio::test]
    async fn test_pokemon_parses_cached_body() {
        let client = test_client();
        let url = format!("{}/pokemon/pidgey", client.base_url);
        let json = r#"{"name": "pidgey", "base_experience": 50}"#;

        client.cache.add(url, json.as_bytes().to_vec()).await;

        let pokemon = client.pokemon("Pidgey").await.unwrap();
        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, 50);
    }

    #[tokio::test]
    async fn test_location_area_page_parses_cached_body() {
        let client = test_client();
        let url = client.location_areas_url();
        let json = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"name": "pastoria-city-area", "url": "http://127.0.0.1:9/location-area/1/"}]
        }"#;

        client.cache.add(url.clone(), json.as_bytes().to_vec()).await;

        let page = client.location_area_page(&url).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next, None);
    }

    #[tokio::test]
    async fn test_load_all_areas_walks_pages() {
        let client = test_client();
        let first = client.location_areas_url();
        let second = format!("{}?offset=20", first);

        let page1 = format!(
            r#"{{"count": 2, "next": "{}", "previous": null,
                "results": [{{"name": "area-one", "url": "u1"}}]}}"#,
            second
        );
        let page2 = r#"{"count": 2, "next": null, "previous": null,
                "results": [{"name": "area-two", "url": "u2"}]}"#;

        client.cache.add(first, page1.into_bytes()).await;
        client.cache.add(second, page2.as_bytes().to_vec()).await;

        let areas = client.load_all_areas().await.unwrap();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas["area-one"], "u1");
        assert_eq!(areas["area-two"], "u2");
    }
}
