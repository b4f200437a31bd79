use crate::core::{Attribute, Card};

/// Who won a comparison.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winner {
    Card1,
    Card2,
    Tie,
}

/// Which attribute settled the comparison.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Stage {
    Primary,
    /// The primary attribute tied and the secondary one was used.
    Secondary,
}

/// The values both cards had for one attribute.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeReading {
    pub attribute: Attribute,
    #[cfg_attr(feature = "serde", serde(with = "real"))]
    pub card1: f64,
    #[cfg_attr(feature = "serde", serde(with = "real"))]
    pub card2: f64,
}

/// JSON has no infinity or NaN. Those are written as the strings `"inf"`,
/// `"-inf"` and `"NaN"`, finite values as plain numbers.
#[cfg(feature = "serde")]
mod real {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Real {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Real::deserialize(deserializer)? {
            Real::Number(value) => Ok(value),
            Real::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"NaN\", got {other:?}"
                ))),
            },
        }
    }
}

impl AttributeReading {
    /// `|card1 - card2|`. NaN when both values are infinite.
    pub fn difference(&self) -> f64 {
        (self.card1 - self.card2).abs()
    }
}

/// Result of comparing two cards on a primary and secondary attribute.
///
/// Both readings are always filled in, even when the primary attribute
/// decided, so the outcome can be explained.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub winner: Winner,
    pub stage: Stage,
    pub primary: AttributeReading,
    pub secondary: AttributeReading,
}

impl ComparisonOutcome {
    pub fn is_tie(&self) -> bool {
        self.winner == Winner::Tie
    }

    /// The reading of the attribute that settled the comparison.
    pub fn deciding_reading(&self) -> &AttributeReading {
        match self.stage {
            Stage::Primary => &self.primary,
            Stage::Secondary => &self.secondary,
        }
    }

    /// Absolute differences on the primary and secondary attributes.
    pub fn differences(&self) -> (f64, f64) {
        (self.primary.difference(), self.secondary.difference())
    }

    /// Pick the winning card out of the pair that was compared.
    pub fn winner_card<'a>(&self, card1: &'a Card, card2: &'a Card) -> Option<&'a Card> {
        match self.winner {
            Winner::Card1 => Some(card1),
            Winner::Card2 => Some(card2),
            Winner::Tie => None,
        }
    }

    /// Serialize the outcome as pretty printed JSON.
    ///
    /// Infinite values are written as the string `"inf"`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::core::Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::core::TrunfoError::from)
    }
}
