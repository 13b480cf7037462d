//! Numeric range tokens (`low:high`) with syntax-only parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between range components and the optional physnet prefix.
pub const RANGE_SEPARATOR: char = ':';

/// An inclusive numeric id range such as a tunnel id or VNI pool.
///
/// Parsing does not enforce `low <= high`; use [`NumericRange::is_inverted`]
/// once the range has been read.
///
/// # Examples
///
/// ```
/// use neutron_types::NumericRange;
///
/// let range: NumericRange = "40:60".parse().unwrap();
/// assert_eq!(range.low(), 40);
/// assert_eq!(range.high(), 60);
/// assert_eq!(range.to_string(), "40:60");
///
/// assert!("2938:1".parse::<NumericRange>().unwrap().is_inverted());
/// assert!("40-60".parse::<NumericRange>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NumericRange {
    low: u64,
    high: u64,
}

impl NumericRange {
    /// Creates a range without checking the ordering of its ends.
    pub const fn new(low: u64, high: u64) -> Self {
        NumericRange { low, high }
    }

    pub const fn low(&self) -> u64 {
        self.low
    }

    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns true if the low end is greater than the high end.
    pub const fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    /// Number of ids between the ends, zero for inverted ranges.
    pub const fn span(&self) -> u64 {
        self.high.saturating_sub(self.low)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.low, RANGE_SEPARATOR, self.high)
    }
}

impl FromStr for NumericRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

/// Parses a `<integer>:<integer>` token.
pub fn parse_range(token: &str) -> Result<NumericRange, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::EmptyToken);
    }

    let parts: Vec<&str> = token.split(RANGE_SEPARATOR).collect();
    match parts.as_slice() {
        [_] => Err(ParseError::MissingSeparator(token.to_string())),
        [low, high] => Ok(NumericRange::new(
            parse_id(token, low)?,
            parse_id(token, high)?,
        )),
        _ => Err(ParseError::TooManySeparators(token.to_string())),
    }
}

/// A `network_vlan_ranges` entry.
///
/// Accepted forms are `physnet:low:high`, `low:high` and a bare `physnet`
/// (a physical network without a tenant VLAN pool).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VlanRangeSpec {
    physnet: Option<String>,
    range: Option<NumericRange>,
}

impl VlanRangeSpec {
    pub fn new(physnet: impl Into<String>, range: NumericRange) -> Self {
        Self {
            physnet: Some(physnet.into()),
            range: Some(range),
        }
    }

    pub fn range_only(range: NumericRange) -> Self {
        Self {
            physnet: None,
            range: Some(range),
        }
    }

    pub fn physnet_only(physnet: impl Into<String>) -> Self {
        Self {
            physnet: Some(physnet.into()),
            range: None,
        }
    }

    pub fn physnet(&self) -> Option<&str> {
        self.physnet.as_deref()
    }

    pub fn range(&self) -> Option<NumericRange> {
        self.range
    }
}

impl fmt::Display for VlanRangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.physnet, &self.range) {
            (Some(physnet), Some(range)) => write!(f, "{}{}{}", physnet, RANGE_SEPARATOR, range),
            (Some(physnet), None) => write!(f, "{}", physnet),
            (None, Some(range)) => write!(f, "{}", range),
            (None, None) => Ok(()),
        }
    }
}

impl FromStr for VlanRangeSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vlan_range(s)
    }
}

/// Parses a VLAN range token, returning the physnet prefix alongside the range.
pub fn parse_vlan_range(token: &str) -> Result<VlanRangeSpec, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::EmptyToken);
    }

    let parts: Vec<&str> = token.split(RANGE_SEPARATOR).collect();
    match parts.as_slice() {
        [name] if is_numeric(name) => Err(ParseError::MissingSeparator(token.to_string())),
        [name] => Ok(VlanRangeSpec::physnet_only(*name)),
        [low, high] => Ok(VlanRangeSpec::range_only(NumericRange::new(
            parse_id(token, low)?,
            parse_id(token, high)?,
        ))),
        [physnet, low, high] => {
            if physnet.is_empty() {
                return Err(ParseError::NonNumeric {
                    token: token.to_string(),
                    component: String::new(),
                });
            }
            let range = NumericRange::new(parse_id(token, low)?, parse_id(token, high)?);
            Ok(VlanRangeSpec::new(*physnet, range))
        }
        _ => Err(ParseError::TooManySeparators(token.to_string())),
    }
}

fn is_numeric(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit())
}

fn parse_id(token: &str, component: &str) -> Result<u64, ParseError> {
    let non_numeric = || ParseError::NonNumeric {
        token: token.to_string(),
        component: component.to_string(),
    };

    // u64::from_str also takes a leading '+'
    if !is_numeric(component) {
        return Err(non_numeric());
    }
    component.parse().map_err(|_| non_numeric())
}
