//! Exercise families, one module per dataset.
//!
//! Every exercise borrows the records it needs and returns a freshly built value. Only
//! [`kitties::grow_up`] writes to its input, and it says so in its signature.

pub mod astronomy;
pub mod bosses;
pub mod breweries;
pub mod cakes;
pub mod classrooms;
pub mod clubs;
pub mod dinosaurs;
pub mod kitties;
pub mod mods;
pub mod parks;
pub mod turing;
pub mod ultima;
