//! A personal notebook of problem/solution pairs with as-you-type fuzzy search.
//!
//! The crate is the core of the notebook: a record store that owns the entries
//! and their JSON file, and a ranking function that orders them against an
//! approximate query. Rendering and key handling live outside the core and talk
//! to it through [`SearchSession`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  store/      │────▶│ session.rs  │
//! │  (Record,   │     │ (RecordStore,│     │ (Search-    │
//! │   Match)    │     │  load, save) │     │  Session)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        ▲
//!        ▼                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │          fuzzy/ + scoring/  (rank, find_match)      │
//! │  subsequence matching, gap/anchor scoring, ordering │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use remedy::SearchSession;
//!
//! let mut session = SearchSession::initialize("data.json");
//! session.add_record("Deadlock in mutex", "avoid nested locks");
//!
//! for (label, solution) in session.search("mutex") {
//!     println!("{label}: {solution}");
//! }
//!
//! session.save()?;
//! # Ok::<(), remedy::StoreError>(())
//! ```

// Module declarations
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod session;
pub mod store;
pub mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use error::{Result, StoreError};
pub use fuzzy::{find_match, matches, rank, SubsequenceMatch};
pub use scoring::{compare_matches, score_match, NEUTRAL_SCORE};
pub use session::SearchSession;
pub use store::{load_records, parse_records, save_records, RecordStore};
pub use types::{Match, Record};
pub use utils::fold_case;
