//! Plain text rendering of cards and comparison outcomes.
//!
//! ```text
//! Comparison details:
//! - Primary attribute (Density [lower wins]):
//!   Card 1 -> Density: 100.000000 inhabitants/km^2
//!   Card 2 -> Density: 200.000000 inhabitants/km^2
//! ...
//! ```
use std::fmt;

use crate::core::{Attribute, Card};

use super::engine::compute;
use super::outcome::{AttributeReading, ComparisonOutcome, Stage, Winner};

/// Write one value the way the attribute is compared: whole numbers for
/// exact attributes, six decimals otherwise.
fn write_value(f: &mut fmt::Formatter<'_>, attribute: Attribute, value: f64) -> fmt::Result {
    let info = attribute.info();
    if info.is_integer() {
        write!(f, "{}: {:.0}", info.name, value)?;
    } else {
        write!(f, "{}: {:.6}", info.name, value)?;
    }
    if !info.unit.is_empty() {
        write!(f, " {}", info.unit)?;
    }
    Ok(())
}

fn write_reading(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    reading: &AttributeReading,
) -> fmt::Result {
    let info = reading.attribute.info();
    writeln!(f, "- {} attribute ({} {}):", label, info.name, info.direction)?;
    write!(f, "  Card 1 -> ")?;
    write_value(f, reading.attribute, reading.card1)?;
    writeln!(f)?;
    write!(f, "  Card 2 -> ")?;
    write_value(f, reading.attribute, reading.card2)?;
    writeln!(f)
}

/// Explanation of a [`ComparisonOutcome`] for the two cards it came from.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'a> {
    pub card1: &'a Card,
    pub card2: &'a Card,
    pub outcome: &'a ComparisonOutcome,
}

impl ComparisonOutcome {
    /// Build a printable explanation of this outcome.
    pub fn report<'a>(&'a self, card1: &'a Card, card2: &'a Card) -> ComparisonReport<'a> {
        ComparisonReport {
            card1,
            card2,
            outcome: self,
        }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;
        writeln!(f, "Comparison details:")?;
        write_reading(f, "Primary", &outcome.primary)?;
        write_reading(f, "Secondary", &outcome.secondary)?;
        writeln!(f)?;

        let (number, winner) = match outcome.winner {
            Winner::Tie => {
                return writeln!(
                    f,
                    "Result: TIE! The cards are equivalent on both attributes."
                );
            }
            Winner::Card1 => (1, self.card1),
            Winner::Card2 => (2, self.card2),
        };

        writeln!(
            f,
            "Result: Card {} won! ({} - {})",
            number,
            winner.code(),
            winner.name()
        )?;
        match outcome.stage {
            Stage::Primary => writeln!(f, "Decided by the primary attribute.")?,
            Stage::Secondary => writeln!(f, "Tie broken by the secondary attribute.")?,
        }

        writeln!(f)?;
        writeln!(f, "Numeric differences:")?;
        for reading in [&outcome.primary, &outcome.secondary] {
            let name = reading.attribute.name();
            writeln!(
                f,
                "- |{}(C1) - {}(C2)| = {:.6}",
                name,
                name,
                reading.difference()
            )?;
        }
        Ok(())
    }
}

/// Every base and derived value of a card.
#[derive(Debug, Clone, Copy)]
pub struct CardSummary<'a>(pub &'a Card);

impl fmt::Display for CardSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        writeln!(
            f,
            "State: {} | Code: {} | Name: {}",
            card.state(),
            card.code(),
            card.name()
        )?;
        for attribute in Attribute::ALL {
            write!(f, "- ")?;
            write_value(f, attribute, compute(card, attribute))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::resolve;
    use crate::core::CardBuilder;

    use super::*;

    fn card(code: &str, name: &str, population: u64, area: f64, landmarks: u32) -> Card {
        CardBuilder::new()
            .state("CE")
            .code(code)
            .name(name)
            .population(population)
            .area(area)
            .gdp(50.0)
            .landmarks(landmarks)
            .build()
            .unwrap()
    }

    #[test]
    fn test_report_primary_winner() {
        let card1 = card("A01", "Mucambo", 1_000, 10.0, 1);
        let card2 = card("A02", "Sobral", 2_000, 10.0, 1);
        let outcome = resolve(&card1, &card2, Attribute::Density, Attribute::Population).unwrap();

        let text = outcome.report(&card1, &card2).to_string();
        assert!(text.contains("- Primary attribute (Density [lower wins]):"));
        assert!(text.contains("  Card 1 -> Density: 100.000000 inhabitants/km^2"));
        assert!(text.contains("  Card 2 -> Population: 2000 inhabitants"));
        assert!(text.contains("Result: Card 1 won! (A01 - Mucambo)"));
        assert!(text.contains("Decided by the primary attribute."));
        assert!(text.contains("- |Density(C1) - Density(C2)| = 100.000000"));
        assert!(text.contains("- |Population(C1) - Population(C2)| = 1000.000000"));
    }

    #[test]
    fn test_report_secondary_winner() {
        let card1 = card("A01", "Mucambo", 1_000, 10.0, 1);
        let card2 = card("A02", "Sobral", 1_000, 10.0, 4);
        let outcome = resolve(&card1, &card2, Attribute::Area, Attribute::LandmarkCount).unwrap();

        let text = outcome.report(&card1, &card2).to_string();
        assert!(text.contains("- Secondary attribute (Landmarks [higher wins]):"));
        assert!(text.contains("Result: Card 2 won! (A02 - Sobral)"));
        assert!(text.contains("Tie broken by the secondary attribute."));
    }

    #[test]
    fn test_report_tie() {
        let card1 = card("A01", "Mucambo", 1_000, 0.0, 1);
        let card2 = card("A02", "Sobral", 3_000, 0.0, 1);
        let outcome = resolve(&card1, &card2, Attribute::Density, Attribute::LandmarkCount).unwrap();

        let text = outcome.report(&card1, &card2).to_string();
        assert!(text.contains("Card 1 -> Density: inf inhabitants/km^2"));
        assert!(text.contains("Result: TIE!"));
        assert!(!text.contains("Numeric differences"));
    }

    #[test]
    fn test_card_summary() {
        let c = card("A01", "Mucambo", 4, 2.0, 3);
        let text = CardSummary(&c).to_string();
        assert!(text.starts_with("State: CE | Code: A01 | Name: Mucambo\n"));
        assert!(text.contains("- Population: 4 inhabitants\n"));
        assert!(text.contains("- Area: 2.000000 km^2\n"));
        assert!(text.contains("- GDP: 50.000000\n"));
        assert!(text.contains("- Landmarks: 3 landmarks\n"));
        assert!(text.contains("- Density: 2.000000 inhabitants/km^2\n"));
        assert!(text.contains("- GDP per capita: 12.500000\n"));
    }
}
