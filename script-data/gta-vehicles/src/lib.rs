//! Vehicle model identifiers for the Grand Theft Auto V scripting API.
//!
//! This crate provides the fixed table associating symbolic vehicle model
//! names with the precomputed 32-bit hashes the game engine uses to
//! resolve spawnable vehicle definitions. Scripts name models symbolically
//! (`VehicleHash::Adder`); the engine only ever sees the hash.
//!
//! The table is pure data: it is compiled in, never mutates, and can be
//! shared freely across threads. Hash values are computed elsewhere (by
//! the engine's string hash over the lowercase model name) and transcribed
//! here verbatim.
//!
//! # Examples
//!
//! ```
//! use gta_vehicles::VehicleHash;
//!
//! // Forward lookup: symbolic name to model hash
//! let adder = VehicleHash::from_name("Adder").unwrap();
//! assert_eq!(adder.hash(), 3078201489);
//!
//! // Reverse lookup: model hash back to a symbolic name
//! assert_eq!(VehicleHash::from_hash(758895617), Some(VehicleHash::ZType));
//!
//! // Enumerate the whole table in declaration order
//! for vehicle in VehicleHash::ALL {
//!     let _ = (vehicle.name(), vehicle.hash());
//! }
//! ```
//!
//! # Errors
//!
//! The only failure mode is a miss: [`VehicleError::UnknownModel`] for an
//! absent name, [`VehicleError::UnknownHash`] for an absent hash. The
//! `Option`-returning lookups and the fallible `FromStr`/`TryFrom` impls
//! expose the same table.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
mod vehicle;

pub use error::{Result, VehicleError};
pub use vehicle::VehicleHash;
