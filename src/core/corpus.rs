//! The reference corpus.
//!
//! A `Corpus` is an ordered, read-only collection of entities. It is built
//! once (from a YAML file, a binary snapshot, or by hand in tests) and then
//! shared with every matcher. Entity order is significant: when two names
//! score the same, the one that appears first wins.
//!
//! Storage is persistent (`im`), so cloning a corpus to hand it to another
//! worker is O(1).

use std::hash::BuildHasherDefault;
use std::path::Path;

use im::{HashMap, Vector};
use rustc_hash::FxHasher;
use tracing::info;

use super::entity::{Entity, EntityKind};
use super::error::{Error, Result};
use super::record::EntityRecord;
use crate::text::normalize;

type KeyIndex = HashMap<String, usize, BuildHasherDefault<FxHasher>>;

/// Ordered collection of corpus entities with their normalized name keys.
///
/// ## Example
///
/// ```
/// use spire_scan::core::{Corpus, Relic};
///
/// let mut corpus = Corpus::new();
/// corpus.push(Relic::new("Burning Blood", "Heal 6 HP.", "Starter"));
///
/// let found = corpus.find_exact("burning-blood").unwrap();
/// assert_eq!(found.name(), "Burning Blood");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    entities: Vector<Entity>,
    keys: Vector<String>,
    first_by_key: KeyIndex,
}

impl Corpus {
    /// Create an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from entities, keeping their order.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut corpus = Self::new();
        for entity in entities {
            corpus.push(entity);
        }
        corpus
    }

    /// Append an entity.
    ///
    /// Only meant for building a corpus; once matching starts the corpus
    /// is treated as immutable.
    pub fn push(&mut self, entity: impl Into<Entity>) {
        let entity = entity.into();
        let key = normalize(entity.name());
        let index = self.entities.len();

        self.first_by_key.entry(key.clone()).or_insert(index);
        self.keys.push_back(key);
        self.entities.push_back(entity);
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get an entity by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Iterate over entities in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over entities paired with their normalized name keys.
    pub fn iter_keyed(&self) -> impl Iterator<Item = (&Entity, &str)> {
        self.entities
            .iter()
            .zip(self.keys.iter().map(String::as_str))
    }

    /// Find entities of one kind.
    pub fn find_by_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind() == kind)
    }

    /// Find entities matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Entity>
    where
        F: Fn(&Entity) -> bool,
    {
        self.entities.iter().filter(move |e| predicate(e))
    }

    /// First entity whose normalized name equals the normalized `name`.
    #[must_use]
    pub fn find_exact(&self, name: &str) -> Option<&Entity> {
        self.first_by_key
            .get(&normalize(name))
            .and_then(|&index| self.entities.get(index))
    }

    /// Parse a YAML corpus document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let records: Vec<EntityRecord> = serde_yaml::from_str(yaml)?;
        let entities = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_entity(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entities(entities))
    }

    /// Read and parse a YAML corpus file.
    pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let corpus = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), entities = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Load a corpus file, choosing the format by extension.
    ///
    /// `.bin` files are snapshots; anything else is parsed as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Self::load_snapshot(path),
            _ => Self::load_yaml(path),
        }
    }

    /// Encode the entities as a binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.entities)?)
    }

    /// Decode a binary snapshot produced by [`Corpus::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        let entities: Vector<Entity> = bincode::deserialize(bytes)?;
        Ok(Self::from_entities(entities))
    }

    /// Write a binary snapshot to disk.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_snapshot()?;
        std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
    }

    /// Read a binary snapshot from disk.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let corpus = Self::from_snapshot(&bytes)?;
        info!(path = %path.display(), entities = corpus.len(), "loaded corpus snapshot");
        Ok(corpus)
    }
}

impl FromIterator<Entity> for Corpus {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self::from_entities(iter)
    }
}
