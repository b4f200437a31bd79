//! Two card comparison engine
//!
//! Cards are compared on a primary attribute. When the primary attribute
//! ties (within the attribute's own comparison mode) the secondary attribute
//! decides, with its own win direction. The outcome records which stage
//! decided and the values both cards had for both attributes.
//!
//! # Example
//!
//! ```
//! use trunfo::compare::{Comparator, ComparatorConfig, Stage, Winner};
//! use trunfo::core::{Attribute, CardBuilder};
//!
//! let card1 = CardBuilder::new()
//!     .state("CE")
//!     .code("A01")
//!     .name("Mucambo")
//!     .population(14_000)
//!     .area(0.0)
//!     .gdp(120.0)
//!     .landmarks(3)
//!     .build()
//!     .unwrap();
//! let card2 = CardBuilder::new()
//!     .state("PI")
//!     .code("B01")
//!     .name("Parnaiba")
//!     .population(150_000)
//!     .area(0.0)
//!     .gdp(900.0)
//!     .landmarks(5)
//!     .build()
//!     .unwrap();
//!
//! let comparator = Comparator::new(ComparatorConfig::default()).unwrap();
//! let outcome = comparator
//!     .resolve(&card1, &card2, Attribute::Density, Attribute::LandmarkCount)
//!     .unwrap();
//!
//! // Both densities are infinite so the landmarks break the tie.
//! assert_eq!(Stage::Secondary, outcome.stage);
//! assert_eq!(Winner::Card2, outcome.winner);
//!
//! println!("{}", outcome.report(&card1, &card2));
//! ```

mod config;
mod engine;
mod outcome;
mod report;

pub use config::{ComparatorConfig, NonFinitePolicy, DEFAULT_RELATIVE_TOLERANCE};
pub use engine::{compare, compare_with_tolerance, compute, decide, resolve, Comparator};
pub use outcome::{AttributeReading, ComparisonOutcome, Stage, Winner};
pub use report::{CardSummary, ComparisonReport};
