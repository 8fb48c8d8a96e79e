use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type SummonerId = i64;

/// Ranked ladder tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IRON" => Ok(Tier::Iron),
            "BRONZE" => Ok(Tier::Bronze),
            "SILVER" => Ok(Tier::Silver),
            "GOLD" => Ok(Tier::Gold),
            "PLATINUM" => Ok(Tier::Platinum),
            "EMERALD" => Ok(Tier::Emerald),
            "DIAMOND" => Ok(Tier::Diamond),
            "MASTER" => Ok(Tier::Master),
            "GRANDMASTER" => Ok(Tier::Grandmaster),
            "CHALLENGER" => Ok(Tier::Challenger),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Division inside a tier, 1 being the highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Division(pub u8);

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("I"),
            2 => f.write_str("II"),
            3 => f.write_str("III"),
            4 => f.write_str("IV"),
            5 => f.write_str("V"),
            n => write!(f, "{}", n),
        }
    }
}

/// A player together with their standing at evaluation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub summoner_id: SummonerId,
    pub name: String,
    pub tier: Tier,
    pub division: Division,
}

impl Summoner {
    /// Human readable league, e.g. `GOLD II`
    pub fn league(&self) -> String {
        format!("{} {}", self.tier, self.division)
    }
}

/// Per-player statistics for a single game
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub minions_killed: i32,
    pub deaths: i32,
    pub wards_placed: i32,
    pub wards_cleared: i32,
}

/// One player's line in one processed game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: i64,
    pub summoner_id: SummonerId,
    pub game_date: NaiveDate,
    pub tier: Tier,
    pub division: Division,
    pub stats: PlayerStats,
}
