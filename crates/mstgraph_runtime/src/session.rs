//! Session state for the REPL and batch mode.
//!
//! The session holds every loaded region's snapshot, the region commands
//! run against, and the engine that expands entities.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mstgraph_datavals::{DataVals, FuncType};
use mstgraph_engine::{Engine, EngineConfig, FormattedEntity, ReverseDepth, ReverseTree};
use mstgraph_foundation::{EntityKind, Error, Region, RecordId, Result};
use mstgraph_storage::Snapshot;

use crate::catalog::Catalog;
use crate::loader;

/// Session state for one interactive or batch run.
#[derive(Debug)]
pub struct Session {
    /// Published snapshots per region.
    catalog: Catalog,

    /// The region commands read from.
    region: Region,

    /// The expansion engine.
    engine: Engine,

    /// Where each region's dataset was loaded from, for `reload`.
    sources: BTreeMap<Region, PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Session {
    /// Creates a session with nothing loaded.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            region: Region::default(),
            engine: Engine::new(config),
            sources: BTreeMap::new(),
        }
    }

    /// Sets the initial region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// The region commands read from.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// The snapshot catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The expansion engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Switches to a loaded region.
    ///
    /// # Errors
    ///
    /// Returns an error if `region` has no dataset loaded.
    pub fn use_region(&mut self, region: Region) -> Result<()> {
        if !self.catalog.contains(region) {
            return Err(Error::invalid_argument(format!("no dataset loaded for {region}")));
        }
        self.region = region;
        Ok(())
    }

    /// Loads a dataset file into `region`, publishes it, and makes
    /// `region` current.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. The
    /// previously published snapshot stays in place.
    pub fn load(&mut self, region: Region, path: impl AsRef<Path>) -> Result<Arc<Snapshot>> {
        let path = path.as_ref();
        let snapshot = loader::load_snapshot(path, region)?;
        self.catalog.publish(snapshot);
        self.sources.insert(region, path.to_path_buf());
        self.region = region;
        self.snapshot()
    }

    /// Reloads `region` (or the current region) from the file it was
    /// last loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the region was never loaded from a file or
    /// the file can no longer be read.
    pub fn reload(&mut self, region: Option<Region>) -> Result<Arc<Snapshot>> {
        let region = region.unwrap_or(self.region);
        let path = self
            .sources
            .get(&region)
            .cloned()
            .ok_or_else(|| Error::invalid_argument(format!("{region} was never loaded")))?;
        let snapshot = loader::load_snapshot(&path, region)?;
        self.catalog.publish(snapshot);
        self.catalog
            .current(region)
            .ok_or_else(|| Error::invalid_argument(format!("no dataset loaded for {region}")))
    }

    /// Publishes an already-built snapshot under its region.
    pub fn publish(&mut self, snapshot: Snapshot) {
        self.catalog.publish(snapshot);
    }

    /// The current region's snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the current region has no dataset loaded.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        self.catalog
            .current(self.region)
            .ok_or_else(|| {
                Error::invalid_argument(format!("no dataset loaded for {}", self.region))
            })
    }

    /// Forward-expands an entity in the current region, optionally with a
    /// shallower depth bound than the engine's.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is loaded or the expansion fails.
    pub fn show(
        &self,
        kind: EntityKind,
        id: RecordId,
        depth: Option<usize>,
    ) -> Result<FormattedEntity> {
        let snapshot = self.snapshot()?;
        let mut options = self.engine.config().forward_options();
        if let Some(depth) = depth {
            options = options.with_max_depth(depth);
        }
        self.engine.expand_forward_with(&snapshot, kind.at(id), options)
    }

    /// Reverse-expands an entity in the current region.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is loaded or the expansion fails.
    pub fn reverse(
        &self,
        kind: EntityKind,
        id: RecordId,
        depth: Option<ReverseDepth>,
    ) -> Result<ReverseTree> {
        let snapshot = self.snapshot()?;
        self.engine.expand_reverse(&snapshot, kind, id, depth)
    }

    /// Decodes a DataVals string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is malformed.
    pub fn decode(&self, raw: &str, func_type: Option<FuncType>) -> Result<DataVals> {
        self.engine.decode(raw, func_type)
    }
}
