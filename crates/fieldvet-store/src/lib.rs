//! # fieldvet-store
//!
//! Uniqueness store implementations for the fieldvet engine.
//!
//! `fieldvet-core` only defines the [`UniquenessStore`] trait; this crate
//! provides the backends:
//!
//! - [`InMemoryStore`]: a normalized-name set behind an RwLock, for tests,
//!   CLIs and single-process deployments.
//! - [`CachedStore`]: a TTL cache decorator for any store whose lookups are
//!   expensive (a database, a remote service). A short staleness window is
//!   acceptable for duplicate detection: a benign race merely lets two
//!   near-simultaneous identical submissions through.
//!
//! ## Example
//!
//! ```rust
//! use fieldvet_core::{Evaluator, FieldPolicy, Rejection};
//! use fieldvet_store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.insert("Project Alpha");
//!
//! let policy = FieldPolicy::title();
//! let evaluator = Evaluator::new(&policy).with_store(&store);
//!
//! assert!(matches!(
//!     evaluator.evaluate("project alpha").into_result(),
//!     Err(Rejection::DuplicateName)
//! ));
//! ```

mod cached;
mod memory;

pub use cached::CachedStore;
pub use fieldvet_core::UniquenessStore;
pub use memory::InMemoryStore;
