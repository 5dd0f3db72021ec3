//! Terminal 2048 (workspace facade crate).
//!
//! This package keeps the `tui_twenty48::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use twenty48_core as core;
pub use twenty48_input as input;
pub use twenty48_term as term;
pub use twenty48_types as types;
