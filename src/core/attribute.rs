use std::fmt;
use std::str::FromStr;

use super::error::{Result, TrunfoError};

/// Which side of a comparison is favorable for an attribute.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WinDirection {
    /// The card with the larger value wins.
    HigherWins,
    /// The card with the smaller value wins.
    LowerWins,
}

/// How two values of an attribute are compared.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CompareMode {
    /// Whole numbers, no tolerance at all.
    ExactInteger,
    /// Real numbers that are equal when within a relative tolerance.
    ToleranceReal,
}

/// All the attributes a card can be compared on.
///
/// The discriminant is the menu option number, starting at 1. Zero is
/// reserved as the invalid identifier and has no variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Attribute {
    /// Number of inhabitants.
    Population = 1,
    /// Area in km^2.
    Area = 2,
    /// Economic output.
    Gdp = 3,
    /// Number of tourist landmarks.
    LandmarkCount = 4,
    /// Population divided by area. Lower wins.
    Density = 5,
    /// GDP divided by population.
    GdpPerCapita = 6,
}

/// Static description of an attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AttributeInfo {
    pub attribute: Attribute,
    pub name: &'static str,
    /// Display unit. Empty when the attribute has none.
    pub unit: &'static str,
    pub direction: WinDirection,
    pub mode: CompareMode,
}

/// The attribute catalog, indexed by `Attribute as usize - 1`.
static CATALOG: [AttributeInfo; 6] = [
    AttributeInfo {
        attribute: Attribute::Population,
        name: "Population",
        unit: "inhabitants",
        direction: WinDirection::HigherWins,
        mode: CompareMode::ExactInteger,
    },
    AttributeInfo {
        attribute: Attribute::Area,
        name: "Area",
        unit: "km^2",
        direction: WinDirection::HigherWins,
        mode: CompareMode::ToleranceReal,
    },
    AttributeInfo {
        attribute: Attribute::Gdp,
        name: "GDP",
        unit: "",
        direction: WinDirection::HigherWins,
        mode: CompareMode::ToleranceReal,
    },
    AttributeInfo {
        attribute: Attribute::LandmarkCount,
        name: "Landmarks",
        unit: "landmarks",
        direction: WinDirection::HigherWins,
        mode: CompareMode::ExactInteger,
    },
    AttributeInfo {
        attribute: Attribute::Density,
        name: "Density",
        unit: "inhabitants/km^2",
        direction: WinDirection::LowerWins,
        mode: CompareMode::ToleranceReal,
    },
    AttributeInfo {
        attribute: Attribute::GdpPerCapita,
        name: "GDP per capita",
        unit: "",
        direction: WinDirection::HigherWins,
        mode: CompareMode::ToleranceReal,
    },
];

impl AttributeInfo {
    /// Look up the catalog entry for a menu identifier.
    ///
    /// Identifiers outside of 1..=6, including the reserved 0, fail with
    /// `TrunfoError::InvalidAttribute`.
    ///
    /// # Examples
    /// ```
    /// use trunfo::core::{AttributeInfo, WinDirection};
    ///
    /// let info = AttributeInfo::lookup(5).unwrap();
    /// assert_eq!("Density", info.name);
    /// assert_eq!(WinDirection::LowerWins, info.direction);
    /// assert!(AttributeInfo::lookup(0).is_err());
    /// ```
    pub fn lookup(id: u8) -> Result<&'static AttributeInfo> {
        Attribute::try_from(id).map(Attribute::info)
    }

    /// Is this a lower wins attribute
    pub fn lower_wins(&self) -> bool {
        self.direction == WinDirection::LowerWins
    }

    /// Is this compared as whole numbers
    pub fn is_integer(&self) -> bool {
        self.mode == CompareMode::ExactInteger
    }
}

impl Attribute {
    /// Every attribute in menu order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::LandmarkCount,
        Attribute::Density,
        Attribute::GdpPerCapita,
    ];

    /// The menu identifier for this attribute.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Catalog metadata for this attribute.
    pub fn info(self) -> &'static AttributeInfo {
        &CATALOG[self as usize - 1]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn direction(self) -> WinDirection {
        self.info().direction
    }

    pub fn mode(self) -> CompareMode {
        self.info().mode
    }

    /// The attributes offered for a pick, leaving out one that was
    /// already chosen.
    ///
    /// # Examples
    /// ```
    /// use trunfo::core::Attribute;
    ///
    /// let second: Vec<Attribute> = Attribute::choices_excluding(Some(Attribute::Gdp)).collect();
    /// assert_eq!(5, second.len());
    /// assert!(!second.contains(&Attribute::Gdp));
    /// ```
    pub fn choices_excluding(exclude: Option<Attribute>) -> impl Iterator<Item = Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(move |a| Some(*a) != exclude)
    }
}

impl TryFrom<u8> for Attribute {
    type Error = TrunfoError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Attribute::Population),
            2 => Ok(Attribute::Area),
            3 => Ok(Attribute::Gdp),
            4 => Ok(Attribute::LandmarkCount),
            5 => Ok(Attribute::Density),
            6 => Ok(Attribute::GdpPerCapita),
            _ => Err(TrunfoError::InvalidAttribute(id)),
        }
    }
}

/// Parse a menu option such as `"5"`.
impl FromStr for Attribute {
    type Err = TrunfoError;

    fn from_str(s: &str) -> Result<Self> {
        let id: u8 = s.trim().parse().map_err(|_| TrunfoError::ParseNumber {
            field: "attribute",
            input: s.to_string(),
        })?;
        Attribute::try_from(id)
    }
}

/// Renders the menu line, e.g. `Density (inhabitants/km^2) [lower wins]`.
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        write!(f, "{}", info.name)?;
        if !info.unit.is_empty() {
            write!(f, " ({})", info.unit)?;
        }
        if info.lower_wins() {
            write!(f, " [lower wins]")?;
        }
        Ok(())
    }
}

impl fmt::Display for WinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinDirection::HigherWins => write!(f, "[higher wins]"),
            WinDirection::LowerWins => write!(f, "[lower wins]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_variants() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute, attribute.info().attribute);
        }
    }

    #[test]
    fn test_only_density_is_lower_wins() {
        let lower: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|a| a.info().lower_wins())
            .collect();
        assert_eq!(vec![Attribute::Density], lower);
    }

    #[test]
    fn test_integer_attributes() {
        assert!(Attribute::Population.info().is_integer());
        assert!(Attribute::LandmarkCount.info().is_integer());
        assert_eq!(CompareMode::ToleranceReal, Attribute::Area.mode());
        assert_eq!(CompareMode::ToleranceReal, Attribute::Gdp.mode());
        assert_eq!(CompareMode::ToleranceReal, Attribute::Density.mode());
        assert_eq!(CompareMode::ToleranceReal, Attribute::GdpPerCapita.mode());
    }

    #[test]
    fn test_id_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute, Attribute::try_from(attribute.id()).unwrap());
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(matches!(
            Attribute::try_from(0),
            Err(TrunfoError::InvalidAttribute(0))
        ));
        assert!(matches!(
            AttributeInfo::lookup(7),
            Err(TrunfoError::InvalidAttribute(7))
        ));
        assert!(AttributeInfo::lookup(255).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Attribute::GdpPerCapita, " 6 ".parse::<Attribute>().unwrap());
        assert!(matches!(
            "x".parse::<Attribute>(),
            Err(TrunfoError::ParseNumber { .. })
        ));
        assert!(matches!(
            "9".parse::<Attribute>(),
            Err(TrunfoError::InvalidAttribute(9))
        ));
    }

    #[test]
    fn test_choices_excluding() {
        let all: Vec<Attribute> = Attribute::choices_excluding(None).collect();
        assert_eq!(Attribute::ALL.to_vec(), all);

        let rest: Vec<Attribute> =
            Attribute::choices_excluding(Some(Attribute::Population)).collect();
        assert_eq!(5, rest.len());
        assert_eq!(Attribute::Area, rest[0]);
    }

    #[test]
    fn test_display_menu_line() {
        assert_eq!(
            "Density (inhabitants/km^2) [lower wins]",
            Attribute::Density.to_string()
        );
        assert_eq!("GDP", Attribute::Gdp.to_string());
        assert_eq!("Area (km^2)", Attribute::Area.to_string());
    }
}
