//! Stations and travel directions on the Yasu–Osaka corridor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {value:?} (expected yasu_to_osaka or osaka_to_yasu)")]
pub struct InvalidDirection {
    value: String,
}

/// A station on the corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Yasu,
    Kyoto,
    Osaka,
}

impl Station {
    /// Returns the station code used in the fare record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Yasu => "yasu",
            Station::Kyoto => "kyoto",
            Station::Osaka => "osaka",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel between the two ends of the corridor.
///
/// The serialized names double as the keys of the timetable record and as
/// the prefix of timetable validation reasons.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::{Direction, Station};
///
/// let dir: Direction = "osaka_to_yasu".parse().unwrap();
/// assert_eq!(dir.origin(), Station::Osaka);
/// assert_eq!(dir.destination(), Station::Yasu);
/// assert_eq!(dir.to_string(), "osaka_to_yasu");
///
/// assert!("kyoto_to_osaka".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    YasuToOsaka,
    OsakaToYasu,
}

impl Direction {
    /// Both directions, in the order they are validated.
    pub const ALL: [Direction; 2] = [Direction::YasuToOsaka, Direction::OsakaToYasu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::YasuToOsaka => "yasu_to_osaka",
            Direction::OsakaToYasu => "osaka_to_yasu",
        }
    }

    pub fn origin(&self) -> Station {
        match self {
            Direction::YasuToOsaka => Station::Yasu,
            Direction::OsakaToYasu => Station::Osaka,
        }
    }

    pub fn destination(&self) -> Station {
        match self {
            Direction::YasuToOsaka => Station::Osaka,
            Direction::OsakaToYasu => Station::Yasu,
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| InvalidDirection {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_endpoints() {
        assert_eq!(Direction::YasuToOsaka.origin(), Station::Yasu);
        assert_eq!(Direction::YasuToOsaka.destination(), Station::Osaka);
        assert_eq!(Direction::OsakaToYasu.origin(), Station::Osaka);
        assert_eq!(Direction::OsakaToYasu.destination(), Station::Yasu);
    }

    #[test]
    fn parse_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "YASU_TO_OSAKA".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid direction: \"YASU_TO_OSAKA\" (expected yasu_to_osaka or osaka_to_yasu)"
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn serde_names_match_display() {
        for dir in Direction::ALL {
            let json = serde_json::to_string(&dir).unwrap();
            assert_eq!(json, format!("\"{}\"", dir));
        }
        assert_eq!(serde_json::to_string(&Station::Kyoto).unwrap(), "\"kyoto\"");
        let via: Station = serde_json::from_str("\"kyoto\"").unwrap();
        assert_eq!(via, Station::Kyoto);
    }
}
