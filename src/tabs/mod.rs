//! Tab management state machine
//!
//! An ordered collection of tabs plus the id of the active one, and the
//! operations that select, add, close and cycle through them. Every operation
//! keeps the store valid: it is never empty and the active id always names a
//! tab that is present.

pub mod error;
pub mod store;
pub mod types;

pub use error::{TabError, TabResult};
pub use store::TabStore;
pub use types::{Direction, Tab, TabId, TabKind, Transition};
