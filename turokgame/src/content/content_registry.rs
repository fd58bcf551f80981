use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use engine::content_log;
use engine::random::RandomSource;
use serde::Deserialize;

use crate::error::{ContentError, ContentResult};
use crate::scripts::AreaAmbience;

use super::AmbienceContent;

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentDocument {
    Many(Vec<AmbienceContent>),
    One(AmbienceContent),
}

/// Named ambience variants, looked up case-insensitively.
pub struct ContentRegistry {
    variants: HashMap<String, Arc<AmbienceContent>>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Registry preloaded with the shipped variants.
    pub fn with_builtin() -> Self {
        let mut registry = ContentRegistry::new();
        registry.insert(AmbienceContent::jungle());
        registry
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }

    fn insert(&mut self, content: Arc<AmbienceContent>) {
        content_log!(
            DEBUG,
            "Registered ambience {} (randFactor={}, sounds={})",
            content.name,
            content.rand_factor,
            content.sound_count()
        );
        self.variants.insert(Self::key(&content.name), content);
    }

    pub fn register(&mut self, content: AmbienceContent) -> ContentResult<()> {
        content.validate()?;
        if self.contains(&content.name) {
            return Err(ContentError::DuplicateVariant(content.name));
        }
        self.insert(Arc::new(content));
        Ok(())
    }

    /// Parse a JSON document holding one variant or an array of them.
    /// Nothing is registered unless every variant in the document is valid.
    pub fn load_str(&mut self, json: &str) -> ContentResult<Vec<String>> {
        let variants = match serde_json::from_str::<ContentDocument>(json)? {
            ContentDocument::Many(variants) => variants,
            ContentDocument::One(variant) => vec![variant],
        };

        let mut seen = Vec::with_capacity(variants.len());
        for variant in &variants {
            variant.validate()?;
            let key = Self::key(&variant.name);
            if self.variants.contains_key(&key) || seen.contains(&key) {
                return Err(ContentError::DuplicateVariant(variant.name.clone()));
            }
            seen.push(key);
        }

        let names = variants.iter().map(|v| v.name.clone()).collect();
        for variant in variants {
            self.insert(Arc::new(variant));
        }
        Ok(names)
    }

    pub fn load_file(&mut self, path: &Path) -> ContentResult<Vec<String>> {
        let json =
            std::fs::read_to_string(path).map_err(|e| ContentError::from_io_error(path, e))?;
        content_log!(INFO, "Loading ambience content from {}", path.display());
        self.load_str(&json)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(&Self::key(name))
    }

    pub fn get(&self, name: &str) -> Option<Arc<AmbienceContent>> {
        self.variants.get(&Self::key(name)).cloned()
    }

    pub fn lookup(&self, name: &str) -> ContentResult<Arc<AmbienceContent>> {
        self.get(name).ok_or_else(|| {
            content_log!(WARN, "Ambience variant {} not found", name);
            ContentError::UnknownVariant(name.to_owned())
        })
    }

    /// Build a component for `name` bound to the given random source.
    pub fn instantiate(
        &self,
        name: &str,
        random: Box<dyn RandomSource>,
    ) -> ContentResult<AreaAmbience> {
        let content = self.lookup(name)?;
        Ok(AreaAmbience::new(content, random))
    }

    /// Registered variant names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variants.values().map(|v| v.name.clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
