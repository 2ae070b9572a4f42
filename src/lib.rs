//! # Prototypes
//!
//! Small **data-transformation exercises** over in-memory datasets, written on top of a
//! fluent collection type. Every exercise is a pure function from borrowed records to a new
//! value: filter, project, group, join, deduplicate, aggregate, and sort.
//!
//! ## Key Features
//!
//! - **Fluent collection API** - chain `map`, `filter`, `flat_map`, `key_by`, `group_by_key`
//! - **Reusable combiners** - [`Sum`], [`Count`], [`Average`], [`DistinctOrdered`], [`ToList`]
//! - **Joins** - inner, left, grouped, strict and policy-driven
//! - **Deterministic order** - grouping keeps first-seen key order, sorts are stable
//! - **Explicit policies** - [`TransformConfig`] decides what a missing join match or a zero
//!   denominator does
//! - **Typed fixtures** - [`Datasets::load`] validates every bundled record at load time
//!
//! ## Quick Start
//!
//! ```
//! use prototypes::*;
//! use prototypes::prompts::cakes;
//!
//! let data = Datasets::load()?;
//! assert_eq!(cakes::total_inventory(&data.cakes), 59);
//!
//! let clubs_per_member = from_vec(vec![("Drama", "Louisa"), ("Art", "Louisa"), ("Band", "Leta")])
//!     .map(|(club, member)| (member.to_string(), club.to_string()))
//!     .group_by_key()
//!     .into_index_map();
//! assert_eq!(clubs_per_member["Louisa"], vec!["Drama", "Art"]);
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Core Concepts
//!
//! ### PCollection
//!
//! A [`PCollection<T>`] is an owned, ordered collection. Transforms consume it and return a
//! new one, so the records an exercise borrows are never modified. Keyed collections are
//! collections of `(K, V)` pairs and unlock the keyed transforms.
//!
//! ### Combiners
//!
//! A [`CombineFn`] builds an accumulator, folds values into it, and finishes it. The same
//! combiner works per key ([`PCollection::combine_values`]), on grouped lists
//! ([`PCollection::combine_groups`]) and over a whole collection
//! ([`PCollection::combine_globally`]).
//!
//! ### Policies
//!
//! Joins skip unmatched rows unless [`MissingMatch::Fail`] is configured; ratios reject a
//! zero denominator unless [`ZeroDivisor::Sentinel`] supplies a value. Both failures come
//! back as a [`TransformError`].
//!
//! ### Exercises
//!
//! The [`prompts`] modules hold one exercise family per dataset (kitties, clubs, cakes,
//! breweries, astronomy and so on). Each takes the records it needs from a [`Datasets`]
//! bundle by reference.
//!
//! ## Testing
//!
//! The [`testing`] module provides order-aware and order-insensitive collection assertions
//! and small hand-built fixtures.

pub mod collection;
pub mod combiners;
pub mod config;
pub mod datasets;
pub mod error;
mod helpers;
pub mod prompts;
pub mod testing;
pub mod validation;

pub use collection::{CombineFn, Count, PCollection, RFBound, from_iter, from_slice, from_vec};
pub use combiners::{Average, DistinctOrdered, Sum, ToList};
pub use config::{MissingMatch, TransformConfig, ZeroDivisor};
pub use datasets::{Datasets, Record};
pub use error::{DatasetError, TransformError, TransformResult};
