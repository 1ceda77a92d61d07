//! Board construction: dealing shuffled cards and sizing the grid.

pub mod layout;
pub mod shuffle;

pub use layout::BoardLayout;
pub use shuffle::{deal, shuffle};
