//! trunfo
//!
//! A library for Super Trunfo style card comparisons. Each card holds the
//! base measurements of a region (population, area, GDP, landmarks) and can
//! be compared on those or on derived metrics (density and GDP per capita).
//!
//! - [`core`] holds the cards, the attribute catalog and the errors.
//! - [`compare`] holds the comparison engine and its outcome reports.
//!
//! ```
//! use trunfo::compare::{resolve, Winner};
//! use trunfo::core::{Attribute, CardBuilder};
//!
//! let base = CardBuilder::new().state("SP").code("A01").name("Campinas");
//! let card1 = base
//!     .clone()
//!     .population(1_000)
//!     .area(10.0)
//!     .gdp(1.0)
//!     .landmarks(2)
//!     .build()
//!     .unwrap();
//! let card2 = base
//!     .population(2_000)
//!     .area(10.0)
//!     .gdp(1.0)
//!     .landmarks(2)
//!     .build()
//!     .unwrap();
//!
//! let outcome = resolve(&card1, &card2, Attribute::Population, Attribute::Gdp).unwrap();
//! assert_eq!(Winner::Card2, outcome.winner);
//! ```

/// Cards, attributes and errors.
pub mod core;

/// The comparison engine.
pub mod compare;
