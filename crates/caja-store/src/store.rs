//! # Store Handle
//!
//! Store construction and configuration.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Lifecycle                                 │
//! │                                                                         │
//! │  Host App Startup                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(path) ← Configure location and seeding               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← Load preference file + seed missing keys        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │       Arc<Mutex<PrefsFile>>             │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Cloned handles, one logical owner                              │
//! │       ▼                                                                 │
//! │  store.products() ──► ProductRepository                                │
//! │  store.employees() ──► EmployeeRepository                              │
//! │  store.documents() ──► DocumentRepository                              │
//! │  store.metrics() ──► MetricsRepository                                 │
//! │  (Each operation locks for its whole read-modify-write cycle)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient Global
//! The store is an explicitly constructed handle passed to whoever needs it.
//! Nothing in this crate reaches for process-wide state.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use tracing::info;

use crate::error::StoreResult;
use crate::prefs::PrefsFile;
use crate::repository::document::DocumentRepository;
use crate::repository::employee::EmployeeRepository;
use crate::repository::metrics::MetricsRepository;
use crate::repository::product::ProductRepository;
use crate::seed;

/// File name of the preference store.
pub const PREFS_FILE_NAME: &str = "caja-prefs.json";

/// Environment variable overriding the preference-file location.
pub const PREFS_PATH_ENV: &str = "CAJA_PREFS_PATH";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/caja-prefs.json")
///     .seed_on_open(false);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the preference file. `None` keeps everything in memory.
    pub prefs_path: Option<PathBuf>,

    /// Whether to write default data for missing keys at open.
    /// Default: true
    pub seed_on_open: bool,
}

impl StoreConfig {
    /// Creates a configuration backed by the given preference file.
    ///
    /// The file (and its parent directories) will be created on first write
    /// if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            prefs_path: Some(path.into()),
            seed_on_open: true,
        }
    }

    /// Creates an in-memory configuration (for testing).
    ///
    /// ## Usage
    /// ```rust
    /// use caja_store::{Store, StoreConfig};
    ///
    /// let store = Store::open(StoreConfig::in_memory()).unwrap();
    /// assert_eq!(store.products().list().unwrap().len(), 7);
    /// ```
    pub fn in_memory() -> Self {
        StoreConfig {
            prefs_path: None,
            seed_on_open: true,
        }
    }

    /// Creates a configuration at the platform default location.
    ///
    /// ## Returns
    /// `None` when the platform data directory cannot be determined.
    pub fn at_default_location() -> Option<Self> {
        default_prefs_path().map(StoreConfig::new)
    }

    /// Sets whether missing keys are seeded at open.
    pub fn seed_on_open(mut self, seed: bool) -> Self {
        self.seed_on_open = seed;
        self
    }
}

/// Determines the preference-file path for this platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/pe.caja.pos/caja-prefs.json`
/// - **Windows**: `%APPDATA%\caja\pos\data\caja-prefs.json`
/// - **Linux**: `~/.local/share/pos/caja-prefs.json`
///
/// ## Development Override
/// Set `CAJA_PREFS_PATH` to use a custom path.
pub fn default_prefs_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(PREFS_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("pe", "caja", "pos")?;
    Some(proj_dirs.data_dir().join(PREFS_FILE_NAME))
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing repository access.
///
/// ## Design: One Handle, Typed Repositories
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Host State Management                                                  │
/// │                                                                         │
/// │  The host constructs one Store at startup and hands clones to the      │
/// │  services that need persistence:                                        │
/// │                                                                         │
/// │  Store              ← whole-store operations (clear_all)               │
/// │  store.products()   ← catalog reads/writes                             │
/// │  store.employees()  ← roster reads/writes                              │
/// │  store.documents()  ← document history                                 │
/// │  store.metrics()    ← sales counters                                   │
/// │                                                                         │
/// │  Benefits:                                                              │
/// │  • Commands only get what they need                                    │
/// │  • Easier testing (in-memory store per test)                           │
/// │  • Clear separation of concerns                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    /// Shared preference map. Every operation locks it for the full
    /// read-modify-write cycle, so writers cannot interleave.
    prefs: Arc<Mutex<PrefsFile>>,
}

impl Store {
    /// Opens the store described by `config`.
    ///
    /// ## What This Does
    /// 1. Loads the preference file (or starts an empty in-memory map)
    /// 2. Creates parent directories for a file-backed store
    /// 3. Seeds default data for missing keys (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Store)` - Ready-to-use store handle
    /// * `Err(StoreError)` - File unreadable, unwritable, or corrupt
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::at_default_location().expect("no data dir");
    /// let store = Store::open(config)?;
    /// ```
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let prefs = match &config.prefs_path {
            Some(path) => {
                info!(path = %path.display(), "Opening preference store");
                PrefsFile::open(path)?
            }
            None => {
                info!("Opening in-memory preference store");
                PrefsFile::in_memory()
            }
        };

        let store = Store {
            prefs: Arc::new(Mutex::new(prefs)),
        };

        if config.seed_on_open {
            seed::seed_missing(&store)?;
        }

        Ok(store)
    }

    /// Runs a read-only closure against the preference map.
    pub(crate) fn with_prefs<R>(&self, f: impl FnOnce(&PrefsFile) -> R) -> R {
        let guard = self.prefs.lock().expect("prefs mutex poisoned");
        f(&guard)
    }

    /// Runs a mutating closure against the preference map.
    ///
    /// The lock is held for the whole closure, so a read-modify-write done
    /// inside it is atomic with respect to other store operations.
    pub(crate) fn with_prefs_mut<R>(&self, f: impl FnOnce(&mut PrefsFile) -> R) -> R {
        let mut guard = self.prefs.lock().expect("prefs mutex poisoned");
        f(&mut guard)
    }

    /// Returns the backing file path, if the store is file-backed.
    pub fn path(&self) -> Option<PathBuf> {
        self.with_prefs(|p| p.path().map(Path::to_path_buf))
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let catalog = store.products().list()?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Returns the employee repository.
    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.clone())
    }

    /// Returns the document repository.
    pub fn documents(&self) -> DocumentRepository {
        DocumentRepository::new(self.clone())
    }

    /// Returns the metrics repository.
    pub fn metrics(&self) -> MetricsRepository {
        MetricsRepository::new(self.clone())
    }

    /// Erases the entire store.
    ///
    /// Getters afterwards fall back to their defaults: the fixed catalog
    /// and roster, an empty document history, the counter baselines. The
    /// defaults are returned, not re-written; the file stays empty until
    /// the next write or a re-open with seeding enabled.
    pub fn clear_all(&self) -> StoreResult<()> {
        info!("Erasing all stored state");
        self.with_prefs_mut(|prefs| prefs.clear())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::seed::{DEFAULT_DAILY_SALES, DEFAULT_MONTHLY_SALES, DEFAULT_UNITS_SOLD};
    use caja_core::DocumentType;

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_open_in_memory_seeds_defaults() {
        init_logging();
        let store = Store::open(StoreConfig::in_memory()).unwrap();

        assert_eq!(store.products().list().unwrap().len(), 7);
        assert_eq!(store.employees().list().unwrap().len(), 4);
        assert!(store.documents().list().unwrap().is_empty());
        assert_eq!(store.metrics().daily_sales().unwrap(), DEFAULT_DAILY_SALES);
        assert_eq!(
            store.metrics().monthly_sales().unwrap(),
            DEFAULT_MONTHLY_SALES
        );
        assert_eq!(store.metrics().units_sold().unwrap(), DEFAULT_UNITS_SOLD);
    }

    #[test]
    fn test_seeded_catalog_persists_across_reopen() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE_NAME);

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        let first = store.products().list().unwrap();
        assert!(path.exists());
        drop(store);

        let reopened = Store::open(StoreConfig::new(&path)).unwrap();
        let second = reopened.products().list().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeding_never_overwrites_stored_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE_NAME);

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        store.products().update_stock(1, 99).unwrap();
        drop(store);

        let reopened = Store::open(StoreConfig::new(&path)).unwrap();
        let catalog = reopened.products().list().unwrap();
        let refrigerator = catalog.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(refrigerator.stock, 99);
    }

    #[test]
    fn test_clear_all_restores_default_behavior() {
        let store = Store::open(StoreConfig::in_memory()).unwrap();

        store.products().update_stock(1, 0).unwrap();
        store.metrics().add_daily_sales(500.0).unwrap();
        store.clear_all().unwrap();

        // Getters fall back to defaults instead of failing to decode.
        let catalog = store.products().list().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.iter().find(|p| p.id == 1).unwrap().stock, 5);
        assert!(store.documents().list().unwrap().is_empty());
        assert_eq!(store.metrics().daily_sales().unwrap(), DEFAULT_DAILY_SALES);
    }

    #[test]
    fn test_unseeded_reads_are_pure() {
        let store = Store::open(StoreConfig::in_memory().seed_on_open(false)).unwrap();

        // Defaults come back without being written.
        assert_eq!(store.products().list().unwrap().len(), 7);
        assert!(store.with_prefs(|p| p.is_empty()));
    }

    #[test]
    fn test_corrupt_collection_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE_NAME);
        std::fs::write(&path, r#"{"productos": 12}"#).unwrap();

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        let err = store.products().list().unwrap_err();
        assert!(matches!(err, StoreError::MalformedValue { ref key, .. } if key == "productos"));
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::open(StoreConfig::in_memory()).unwrap();
        let other = store.clone();

        let doc = caja_core::SalesDocument {
            id: "1234567890".to_string(),
            doc_type: DocumentType::Receipt,
            date: "15/01/2025".to_string(),
            time: "10:30".to_string(),
            customer_id: "45879632".to_string(),
            customer_name: "Juan Carlos Pérez Rodríguez".to_string(),
            product: "Licuadora Oster".to_string(),
            brand: "Oster".to_string(),
            model: "BLSTMG-W00".to_string(),
            price: 180.0,
            salesperson: "Carlos Rodríguez".to_string(),
        };
        store.documents().add(doc).unwrap();

        assert_eq!(other.documents().list().unwrap().len(), 1);
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/caja-prefs.json").seed_on_open(false);
        assert!(!config.seed_on_open);
        assert!(config.prefs_path.is_some());
    }

    #[test]
    fn test_env_override_for_default_path() {
        std::env::set_var(PREFS_PATH_ENV, "/tmp/caja-test-prefs.json");
        assert_eq!(
            default_prefs_path(),
            Some(PathBuf::from("/tmp/caja-test-prefs.json"))
        );
        std::env::remove_var(PREFS_PATH_ENV);
    }
}
