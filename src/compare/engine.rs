use std::cmp::Ordering;

use tracing::{event, Level};

use crate::core::{
    Attribute, AttributeInfo, Card, CompareMode, Result, TrunfoError, WinDirection,
};

use super::config::{ComparatorConfig, NonFinitePolicy, DEFAULT_RELATIVE_TOLERANCE};
use super::outcome::{AttributeReading, ComparisonOutcome, Stage, Winner};

/// The value of `attribute` for `card`, widened to `f64`.
///
/// Derived attributes never fail:
///
/// - Density of a card with no area is `f64::INFINITY`.
/// - GDP per capita of a card with no population is `0.0`.
///
/// # Examples
/// ```
/// use trunfo::compare::compute;
/// use trunfo::core::{Attribute, CardBuilder};
///
/// let card = CardBuilder::new()
///     .state("CE")
///     .code("A01")
///     .name("Mucambo")
///     .population(1000)
///     .area(10.0)
///     .gdp(5000.0)
///     .landmarks(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(100.0, compute(&card, Attribute::Density));
/// assert_eq!(5.0, compute(&card, Attribute::GdpPerCapita));
/// ```
pub fn compute(card: &Card, attribute: Attribute) -> f64 {
    match attribute {
        Attribute::Population => card.population() as f64,
        Attribute::Area => card.area(),
        Attribute::Gdp => card.gdp(),
        Attribute::LandmarkCount => f64::from(card.landmarks()),
        Attribute::Density => {
            // No finite density without area. Treated as the maximum.
            if card.area() <= 0.0 {
                f64::INFINITY
            } else {
                card.population() as f64 / card.area()
            }
        }
        Attribute::GdpPerCapita => {
            if card.population() == 0 {
                0.0
            } else {
                card.gdp() / card.population() as f64
            }
        }
    }
}

/// The stored whole number of an exact integer attribute, without
/// widening. `None` for real valued attributes.
fn exact_count(card: &Card, attribute: Attribute) -> Option<u64> {
    match attribute {
        Attribute::Population => Some(card.population()),
        Attribute::LandmarkCount => Some(u64::from(card.landmarks())),
        Attribute::Area | Attribute::Gdp | Attribute::Density | Attribute::GdpPerCapita => None,
    }
}

/// Three way comparison with the default tolerance of `1e-9`.
///
/// See [`compare_with_tolerance`].
pub fn compare(a: f64, b: f64, mode: CompareMode) -> Ordering {
    compare_with_tolerance(a, b, mode, DEFAULT_RELATIVE_TOLERANCE)
}

/// Three way comparison of two attribute values.
///
/// `ExactInteger` compares the values as whole numbers with no tolerance.
///
/// `ToleranceReal` treats values within
/// `relative_tolerance * max(1, |a|, |b|)` as equal. Non-finite values
/// (infinite or NaN) are equal to each other, and a lone non-finite value
/// is the larger one.
pub fn compare_with_tolerance(
    a: f64,
    b: f64,
    mode: CompareMode,
    relative_tolerance: f64,
) -> Ordering {
    match mode {
        CompareMode::ExactInteger => {
            let (a, b) = (a.round(), b.round());
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        CompareMode::ToleranceReal => match (a.is_finite(), b.is_finite()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => {
                let scale = a.abs().max(b.abs()).max(1.0);
                if (a - b).abs() <= relative_tolerance * scale {
                    Ordering::Equal
                } else if a < b {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        },
    }
}

/// Turn the comparison of card 1's value against card 2's into a winner.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
///
/// use trunfo::compare::{decide, Winner};
/// use trunfo::core::WinDirection;
///
/// assert_eq!(Winner::Card1, decide(Ordering::Less, WinDirection::LowerWins));
/// assert_eq!(Winner::Card2, decide(Ordering::Less, WinDirection::HigherWins));
/// assert_eq!(Winner::Tie, decide(Ordering::Equal, WinDirection::LowerWins));
/// ```
pub fn decide(ordering: Ordering, direction: WinDirection) -> Winner {
    match (ordering, direction) {
        (Ordering::Equal, _) => Winner::Tie,
        (Ordering::Greater, WinDirection::HigherWins) => Winner::Card1,
        (Ordering::Less, WinDirection::HigherWins) => Winner::Card2,
        (Ordering::Less, WinDirection::LowerWins) => Winner::Card1,
        (Ordering::Greater, WinDirection::LowerWins) => Winner::Card2,
    }
}

/// Compares two cards on a primary attribute, falling back to a
/// secondary attribute on a tie.
///
/// The comparator holds no state besides its configuration; every call
/// to [`Comparator::resolve`] is independent.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    /// Create a comparator, validating the configuration.
    pub fn new(config: ComparatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compare two values of one attribute and pick the winner, honoring
    /// the attribute's mode, its direction and the non-finite policy.
    pub fn decide_values(&self, card1: f64, card2: f64, info: &AttributeInfo) -> Winner {
        if card1.is_finite() != card2.is_finite() {
            event!(
                Level::DEBUG,
                attribute = ?info.attribute,
                card1,
                card2,
                policy = ?self.config.non_finite_policy,
                "Comparing a non-finite value"
            );
            if self.config.non_finite_policy == NonFinitePolicy::AlwaysLoses {
                return if card1.is_finite() {
                    Winner::Card1
                } else {
                    Winner::Card2
                };
            }
        }

        let ordering =
            compare_with_tolerance(card1, card2, info.mode, self.config.relative_tolerance);
        decide(ordering, info.direction)
    }

    /// Pick the winner on one attribute. Whole number attributes are
    /// compared on the stored integers so no precision is lost to `f64`.
    fn decide_attribute(&self, card1: &Card, card2: &Card, reading: &AttributeReading) -> Winner {
        let info = reading.attribute.info();
        if let (Some(a), Some(b)) = (
            exact_count(card1, reading.attribute),
            exact_count(card2, reading.attribute),
        ) {
            return decide(a.cmp(&b), info.direction);
        }
        self.decide_values(reading.card1, reading.card2, info)
    }

    fn read(&self, card1: &Card, card2: &Card, attribute: Attribute) -> AttributeReading {
        AttributeReading {
            attribute,
            card1: compute(card1, attribute),
            card2: compute(card2, attribute),
        }
    }

    /// Run the two stage decision.
    ///
    /// The primary attribute decides unless it ties, in which case the
    /// secondary attribute decides with its own direction and mode. A tie
    /// on both is a tie.
    ///
    /// Fails with [`TrunfoError::SameAttribute`] when both attributes are
    /// the same.
    pub fn resolve(
        &self,
        card1: &Card,
        card2: &Card,
        primary: Attribute,
        secondary: Attribute,
    ) -> Result<ComparisonOutcome> {
        if primary == secondary {
            return Err(TrunfoError::SameAttribute(primary));
        }

        let primary_reading = self.read(card1, card2, primary);
        let secondary_reading = self.read(card1, card2, secondary);

        let primary_winner = self.decide_attribute(card1, card2, &primary_reading);
        event!(
            Level::TRACE,
            attribute = ?primary,
            card1 = primary_reading.card1,
            card2 = primary_reading.card2,
            winner = ?primary_winner,
            "Primary stage"
        );

        let (winner, stage) = if primary_winner != Winner::Tie {
            (primary_winner, Stage::Primary)
        } else {
            event!(
                Level::DEBUG,
                primary = ?primary,
                secondary = ?secondary,
                "Primary attribute tied, using secondary"
            );
            let secondary_winner = self.decide_attribute(card1, card2, &secondary_reading);
            event!(
                Level::TRACE,
                attribute = ?secondary,
                card1 = secondary_reading.card1,
                card2 = secondary_reading.card2,
                winner = ?secondary_winner,
                "Secondary stage"
            );
            (secondary_winner, Stage::Secondary)
        };

        Ok(ComparisonOutcome {
            winner,
            stage,
            primary: primary_reading,
            secondary: secondary_reading,
        })
    }
}

/// Resolve a comparison with the default [`Comparator`].
///
/// # Examples
/// ```
/// use trunfo::compare::{resolve, Stage, Winner};
/// use trunfo::core::{Attribute, CardBuilder};
///
/// let builder = CardBuilder::new()
///     .state("CE")
///     .code("A01")
///     .name("Mucambo")
///     .gdp(10.0)
///     .landmarks(1);
/// let card1 = builder.clone().population(1000).area(10.0).build().unwrap();
/// let card2 = builder.population(2000).area(10.0).build().unwrap();
///
/// let outcome = resolve(&card1, &card2, Attribute::Density, Attribute::Gdp).unwrap();
/// assert_eq!(Winner::Card1, outcome.winner);
/// assert_eq!(Stage::Primary, outcome.stage);
/// ```
pub fn resolve(
    card1: &Card,
    card2: &Card,
    primary: Attribute,
    secondary: Attribute,
) -> Result<ComparisonOutcome> {
    Comparator::default().resolve(card1, card2, primary, secondary)
}
