//! # Token Metadata URIs
//!
//! Owner-configured base and collection URIs. Rendering is a plain string
//! join, `{base_uri}{token_id}`, with existence checks left to the
//! controller, which knows how many tokens have been issued.

use serde::{Deserialize, Serialize};

/// Base and collection URI storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenMetadata {
    base_uri: String,
    contract_uri: String,
}

impl TokenMetadata {
    /// Start with both URIs empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured base URI.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The configured collection URI.
    pub fn contract_uri(&self) -> &str {
        &self.contract_uri
    }

    /// Replace the base URI.
    pub fn set_base_uri(&mut self, uri: String) {
        self.base_uri = uri;
    }

    /// Replace the collection URI.
    pub fn set_contract_uri(&mut self, uri: String) {
        self.contract_uri = uri;
    }

    /// Render the metadata URI for a token id. With no base configured
    /// the result is the empty string.
    pub fn render_token_uri(&self, token_id: u64) -> String {
        if self.base_uri.is_empty() {
            return String::new();
        }
        format!("{}{}", self.base_uri, token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base_and_id() {
        let mut metadata = TokenMetadata::new();
        metadata.set_base_uri("https://relics.example/".to_string());
        assert_eq!(metadata.render_token_uri(1), "https://relics.example/1");
        assert_eq!(metadata.render_token_uri(42), "https://relics.example/42");
    }

    #[test]
    fn test_empty_base_renders_empty() {
        let metadata = TokenMetadata::new();
        assert_eq!(metadata.render_token_uri(1), "");
    }

    #[test]
    fn test_contract_uri_roundtrip() {
        let mut metadata = TokenMetadata::new();
        metadata.set_contract_uri("https://relics.example".to_string());
        assert_eq!(metadata.contract_uri(), "https://relics.example");
    }
}
