//! Fuzzy site search: corpus builder, query engine, and result navigation.
//!
//! This crate powers the search box on the studio site. It has three parts,
//! wired in one direction:
//!
//! ```text
//! ┌──────────────┐      ┌───────────────────┐      ┌───────────────┐
//! │   build/     │─────▶│ search-index.json │─────▶│   engine.rs   │
//! │ (services,   │      │   (the corpus)    │      │ (fuzzy index, │
//! │  docs, pages)│      └───────────────────┘      │  ranking)     │
//! └──────────────┘                                 └───────┬───────┘
//!                                                          ▼
//!                                                  ┌───────────────┐
//!                                                  │  session.rs   │
//!                                                  │ (selection,   │
//!                                                  │  keyboard nav)│
//!                                                  └───────────────┘
//! ```
//!
//! The builder runs at site-build time and flattens multilingual content
//! into one language-merged corpus. The engine loads that corpus lazily on
//! first use, answers queries synchronously from memory, and degrades to
//! empty results if the corpus cannot be loaded. The session turns keyboard
//! events over a result list into a single committed navigation.
//!
//! # Usage
//!
//! ```ignore
//! use beacon::{FileSource, QuerySession, SearchEngine};
//!
//! let mut engine = SearchEngine::new();
//! engine.activate(&FileSource::new("public/search-index.json"));
//!
//! let mut session = QuerySession::open();
//! session.set_query(&engine, "模型部署");
//! ```

// Module declarations
pub mod build;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod scoring;
pub mod session;
pub mod types;
pub mod utils;

pub mod testing;

// Re-exports for the public API
pub use corpus::{parse_corpus, write_corpus, CorpusSource, FileSource};
pub use engine::{EngineStatus, SearchEngine};
pub use error::{BuildError, CorpusError};
pub use highlight::{highlight, Segment};
pub use session::{Key, KeyModifiers, QuerySession, SessionAction, Shortcut};
pub use types::{ItemType, SearchItem, SearchResult, CONTENT_CAP};
pub use utils::normalize;
