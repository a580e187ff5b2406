use url::Url;

use crate::config::types::ApiConfig;
use crate::error::Result;

/// Builds the PokeAPI URLs the client constructs itself.
///
/// Only the first listing page is built here. Later pages come from the
/// `next`/`previous` links the server returns and are used as-is.
#[derive(Debug, Clone)]
pub struct PokeApiEndpoints {
    base: Url,
    page_size: u32,
}

impl PokeApiEndpoints {
    pub fn new(base_url: &str, page_size: u32) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last path segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, page_size })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.page_size)
    }

    pub fn first_location_page(&self) -> Result<String> {
        let mut url = self.base.join("location-area/")?;
        url.query_pairs_mut()
            .append_pair("limit", &self.page_size.to_string());
        Ok(url.to_string())
    }

    pub fn location_area(&self, name: &str) -> Result<String> {
        self.resource("location-area", name)
    }

    pub fn pokemon(&self, name: &str) -> Result<String> {
        self.resource("pokemon", name)
    }

    fn resource(&self, kind: &str, name: &str) -> Result<String> {
        let mut url = self.base.join(&format!("{kind}/"))?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(&name.trim().to_lowercase());
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> PokeApiEndpoints {
        PokeApiEndpoints::new("https://pokeapi.co/api/v2", 20).unwrap()
    }

    #[test]
    fn first_location_page_has_limit() {
        assert_eq!(
            endpoints().first_location_page().unwrap(),
            "https://pokeapi.co/api/v2/location-area/?limit=20"
        );
    }

    #[test]
    fn base_with_trailing_slash_is_equivalent() {
        let with_slash = PokeApiEndpoints::new("https://pokeapi.co/api/v2/", 20).unwrap();
        assert_eq!(
            with_slash.first_location_page().unwrap(),
            endpoints().first_location_page().unwrap()
        );
    }

    #[test]
    fn location_area_by_name() {
        assert_eq!(
            endpoints().location_area("canalave-city-area").unwrap(),
            "https://pokeapi.co/api/v2/location-area/canalave-city-area"
        );
    }

    #[test]
    fn pokemon_name_is_normalised() {
        assert_eq!(
            endpoints().pokemon("  Pikachu ").unwrap(),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn name_cannot_escape_the_resource_path() {
        let url = endpoints().pokemon("../berry/1").unwrap();
        assert!(url.starts_with("https://pokeapi.co/api/v2/pokemon/"));
        assert!(!url.contains("/berry/1"));
    }

    #[test]
    fn custom_page_size() {
        let endpoints = PokeApiEndpoints::new("http://127.0.0.1:8080", 5).unwrap();
        assert_eq!(
            endpoints.first_location_page().unwrap(),
            "http://127.0.0.1:8080/location-area/?limit=5"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(PokeApiEndpoints::new("not a url", 20).is_err());
    }
}
