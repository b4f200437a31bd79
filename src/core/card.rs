use super::error::{Result, TrunfoError};

/// Longest allowed card code.
pub const MAX_CODE_LEN: usize = 7;
/// Longest allowed region name.
pub const MAX_NAME_LEN: usize = 79;

/// One card of the deck: a region and its base measurements.
///
/// Cards are immutable once built. Use [`CardBuilder`] to construct one,
/// which checks that every measurement is non-negative.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CardRecord"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    state: String,
    code: String,
    name: String,
    population: u64,
    area: f64,
    gdp: f64,
    landmarks: u32,
}

impl Card {
    /// Two letter upper case region code, e.g. `CE`.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Short card code, e.g. `A01`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Area in km^2. Can be zero.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn gdp(&self) -> f64 {
        self.gdp
    }

    pub fn landmarks(&self) -> u32 {
        self.landmarks
    }
}

/// Builder for [`Card`].
///
/// # Example
///
/// ```
/// use trunfo::core::CardBuilder;
///
/// let card = CardBuilder::default()
///     .state("ce")
///     .code("A01")
///     .name("Mucambo")
///     .population(14_000)
///     .area(190.6)
///     .gdp(120.5)
///     .landmarks(3)
///     .build()
///     .unwrap();
///
/// assert_eq!("CE", card.state());
/// ```
#[derive(Debug, Default, Clone)]
pub struct CardBuilder {
    state: Option<String>,
    code: Option<String>,
    name: Option<String>,
    population: Option<u64>,
    area: Option<f64>,
    gdp: Option<f64>,
    landmarks: Option<u32>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn gdp(mut self, gdp: f64) -> Self {
        self.gdp = Some(gdp);
        self
    }

    pub fn landmarks(mut self, landmarks: u32) -> Self {
        self.landmarks = Some(landmarks);
        self
    }

    /// Validate every field and build the card.
    pub fn build(self) -> Result<Card> {
        let state = self.state.ok_or(TrunfoError::MissingField("state"))?;
        let code = self.code.ok_or(TrunfoError::MissingField("code"))?;
        let name = self.name.ok_or(TrunfoError::MissingField("name"))?;
        let population = self
            .population
            .ok_or(TrunfoError::MissingField("population"))?;
        let area = self.area.ok_or(TrunfoError::MissingField("area"))?;
        let gdp = self.gdp.ok_or(TrunfoError::MissingField("gdp"))?;
        let landmarks = self
            .landmarks
            .ok_or(TrunfoError::MissingField("landmarks"))?;

        let state = state.trim();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TrunfoError::InvalidRegion(state.to_string()));
        }

        let code_len = code.chars().count();
        if code_len == 0 || code_len > MAX_CODE_LEN {
            return Err(TrunfoError::InvalidCode {
                len: code_len,
                max: MAX_CODE_LEN,
            });
        }

        let name_len = name.chars().count();
        if name_len == 0 || name_len > MAX_NAME_LEN {
            return Err(TrunfoError::InvalidName {
                len: name_len,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Card {
            state: state.to_ascii_uppercase(),
            code,
            name,
            population,
            area: check_measure("area", area)?,
            gdp: check_measure("gdp", gdp)?,
            landmarks,
        })
    }
}

/// Unchecked card fields as they come out of a serialized card.
/// Deserializing a [`Card`] goes through [`CardBuilder::build`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CardRecord {
    state: String,
    code: String,
    name: String,
    population: u64,
    area: f64,
    gdp: f64,
    landmarks: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<CardRecord> for Card {
    type Error = TrunfoError;

    fn try_from(record: CardRecord) -> Result<Self> {
        CardBuilder::new()
            .state(record.state)
            .code(record.code)
            .name(record.name)
            .population(record.population)
            .area(record.area)
            .gdp(record.gdp)
            .landmarks(record.landmarks)
            .build()
    }
}

fn check_measure(field: &'static str, value: f64) -> Result<f64> {
    // Also rejects NaN
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrunfoError::InvalidMeasure { field, value })
    }
}

/// Parse a non-negative real measurement typed by a person.
///
/// Both `.` and `,` are accepted as the decimal separator.
///
/// # Examples
/// ```
/// use trunfo::core::parse_measure;
///
/// assert_eq!(1521.11, parse_measure("area", "1521,11").unwrap());
/// assert!(parse_measure("area", "-3").is_err());
/// assert!(parse_measure("area", "12km").is_err());
/// ```
pub fn parse_measure(field: &'static str, text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| TrunfoError::ParseNumber {
        field,
        input: text.to_string(),
    })?;
    check_measure(field, value)
}

/// Parse a non-negative whole number such as a population.
pub fn parse_count(field: &'static str, text: &str) -> Result<u64> {
    let trimmed = text.trim();
    // u64::from_str accepts a leading '+'
    if trimmed.starts_with('+') {
        return Err(TrunfoError::ParseNumber {
            field,
            input: text.to_string(),
        });
    }
    trimmed.parse().map_err(|_| TrunfoError::ParseNumber {
        field,
        input: text.to_string(),
    })
}

/// Parse a landmark count, which must also fit in a `u32`.
pub fn parse_landmarks(text: &str) -> Result<u32> {
    let count = parse_count("landmarks", text)?;
    u32::try_from(count).map_err(|_| TrunfoError::ParseNumber {
        field: "landmarks",
        input: text.to_string(),
    })
}
