//! Card content: what each level puts on the faces.
//!
//! Levels 1-9 each have their own family; every level after that falls back
//! to offset images. Pairs carry an explicit `PairKey`, so heterogeneous
//! families (problem/solution, flag/name) match on the key, not the face.

pub mod kind;
pub mod library;
pub mod provider;

pub use kind::{CardContent, ContentPair};
pub use provider::{ContentFamily, ContentProvider, StandardContent};
