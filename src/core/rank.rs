use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Membership tier, ordered by privilege
///
/// The derived `Ord` follows declaration order, so `Rank::White < Rank::Platinum`.
/// Both the scoring rank bonus and the visibility threshold read from this
/// single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rank {
    #[default]
    White,
    Blue,
    Silver,
    Gold,
    Diamond,
    Platinum,
}

/// Lowest rank that can view any member's detail regardless of venue
pub const DETAIL_VIEW_THRESHOLD: Rank = Rank::Gold;

/// Largest value returned by [`Rank::bonus_points`]
pub const MAX_RANK_BONUS: u32 = 10;

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::White,
        Rank::Blue,
        Rank::Silver,
        Rank::Gold,
        Rank::Diamond,
        Rank::Platinum,
    ];

    /// Parse a stored rank value, case-insensitively
    ///
    /// Anything that is not one of the six known ranks degrades to `White`.
    pub fn parse(value: &str) -> Rank {
        match value.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Rank::White,
            "BLUE" => Rank::Blue,
            "SILVER" => Rank::Silver,
            "GOLD" => Rank::Gold,
            "DIAMOND" => Rank::Diamond,
            "PLATINUM" => Rank::Platinum,
            _ => Rank::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::White => "WHITE",
            Rank::Blue => "BLUE",
            Rank::Silver => "SILVER",
            Rank::Gold => "GOLD",
            Rank::Diamond => "DIAMOND",
            Rank::Platinum => "PLATINUM",
        }
    }

    /// Points this rank contributes to the other side's match score (0-10)
    #[inline]
    pub fn bonus_points(self) -> u32 {
        match self {
            Rank::Platinum | Rank::Diamond => 10,
            Rank::Gold => 7,
            Rank::Silver => 5,
            Rank::Blue => 3,
            Rank::White => 0,
        }
    }

    #[inline]
    pub fn can_view_all_venues(self) -> bool {
        self >= DETAIL_VIEW_THRESHOLD
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RankVisitor)
    }
}

/// Accepts any scalar; only strings naming a known rank map above `White`
struct RankVisitor;

impl<'de> Visitor<'de> for RankVisitor {
    type Value = Rank;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a membership rank")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rank, E> {
        Ok(Rank::parse(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_none<E: de::Error>(self) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Rank, E> {
        Ok(Rank::White)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Rank, D::Error> {
        deserializer.deserialize_any(RankVisitor)
    }
}
