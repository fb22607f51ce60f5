//! Seat identification and per-seat data storage.
//!
//! ## Side
//!
//! A duel always has exactly two seats: the human `Player` and the AI
//! `Enemy`. Every API that acts "for a side" takes a `Side`.
//!
//! ## SideMap
//!
//! Per-side storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled character.
    Player,
    /// The AI-controlled character.
    Enemy,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// The opposing side.
    ///
    /// ```
    /// use demon_duel::core::Side;
    ///
    /// assert_eq!(Side::Player.other(), Side::Enemy);
    /// assert_eq!(Side::Enemy.other(), Side::Player);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Check whether this is the human seat.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Side::Player)
    }

    const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use demon_duel::core::{Side, SideMap};
///
/// let mut mana: SideMap<i32> = SideMap::new(|_| 1);
/// mana[Side::Enemy] += 2;
///
/// assert_eq!(mana[Side::Player], 1);
/// assert_eq!(mana[Side::Enemy], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Enemy)],
        }
    }

    /// Create a map from explicit per-side values.
    pub fn from_parts(player: T, enemy: T) -> Self {
        Self { data: [player, enemy] }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert!(Side::Player.is_player());
        assert!(!Side::Enemy.is_player());
        assert_eq!(Side::Player.other().other(), Side::Player);
        assert_eq!(format!("{}", Side::Enemy), "Enemy");
    }

    #[test]
    fn test_side_map_factory() {
        let map = SideMap::new(|s| if s.is_player() { 20 } else { 10 });
        assert_eq!(map[Side::Player], 20);
        assert_eq!(map[Side::Enemy], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<Vec<u32>> = SideMap::default();
        map[Side::Enemy].push(7);

        assert!(map[Side::Player].is_empty());
        assert_eq!(map[Side::Enemy], vec![7]);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::from_parts("p", "e");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &"p"), (Side::Enemy, &"e")]);
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Enemy).unwrap();
        let back: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Side::Enemy);
    }
}
