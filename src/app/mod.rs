//! Application layer: entity store, projection, filter/sort pipeline and the
//! mode switch controller.
//!
//! Data flows one way:
//!
//! ```text
//! gateway → BienStore (canonical, insertion order)
//!              → projection (mode-dependent derived values)
//!                 → filter (ANDed predicates)
//!                    → sort (three-state click cycle)
//!                       → rendering collaborator (out of scope)
//! ```
//!
//! User actions mutate the store through [`App`] and are persisted through
//! the gateway; the pipeline is recomputed from the canonical snapshot on
//! every read.

pub mod filter;
pub mod projection;
pub mod sort;
pub mod state;
pub mod store;

pub use filter::{apply_filters, FilterCriteria};
pub use projection::{project, ProjectedView};
pub use sort::{apply_sort, SortColumn, SortDirection, SortState};
pub use state::App;
pub use store::BienStore;
