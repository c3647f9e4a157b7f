//! Core value types for the Coil replay validator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the board geometry, grid coordinates, and the cardinal directions
//! (with their on-the-wire codes) shared by the simulator and the
//! replay codec.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod direction;
pub mod error;
pub mod id;

pub use board::Board;
pub use direction::Direction;
pub use error::CoreError;
pub use id::Point;
