//! The mansion map
//!
//! Rooms form a binary tree stored in a flat arena. Children are linked by
//! `RoomId` (index into the arena) instead of owned pointers, so the map is
//! dropped in one go and never recurses on teardown.

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::Index;

/// Index of a room inside its `RoomMap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which way a player leaves a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A room in the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            // An empty clue string means the room holds nothing
            clue: clue.filter(|c| !c.is_empty()).map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// A room with no way further in
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The complete, immutable mansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomMap {
    pub fn builder() -> RoomMapBuilder {
        RoomMapBuilder::default()
    }

    /// The room where every exploration starts
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn child(&self, id: RoomId, side: Side) -> Option<RoomId> {
        self.get(id).and_then(|room| room.child(side))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Find a room by its name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId)
    }

    /// Rooms in breadth-first order from the entrance
    pub fn breadth_first(&self) -> Vec<RoomId> {
        let mut order = Vec::with_capacity(self.rooms.len());
        let mut queue = VecDeque::from([self.root]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            let room = &self[id];
            queue.extend(room.left);
            queue.extend(room.right);
        }
        order
    }

    /// Number of levels in the tree (a lone entrance has depth 1)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let room = &self[id];
            for child in [room.left, room.right].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        deepest
    }

    /// All clues hidden somewhere in the mansion
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().filter_map(|room| room.clue.as_deref())
    }
}

impl Index<RoomId> for RoomMap {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }
}

/// Assembles a `RoomMap`, checking that the links form a tree
#[derive(Debug, Default)]
pub struct RoomMapBuilder {
    rooms: Vec<Room>,
    has_parent: Vec<bool>,
}

impl RoomMapBuilder {
    /// Add a room; it stays detached until linked under a parent
    pub fn add_room(&mut self, name: &str, clue: Option<&str>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name, clue));
        self.has_parent.push(false);
        id
    }

    /// Attach `child` on the given side of `parent`
    pub fn link(&mut self, parent: RoomId, side: Side, child: RoomId) -> Result<(), GameError> {
        if parent.index() >= self.rooms.len() || child.index() >= self.rooms.len() {
            return Err(GameError::InvalidMap(format!(
                "link {:?} -> {:?} refers to a room that was never added",
                parent, child
            )));
        }
        if parent == child {
            return Err(GameError::InvalidMap(format!(
                "room '{}' cannot lead to itself",
                self.rooms[parent.index()].name
            )));
        }
        if self.has_parent[child.index()] {
            return Err(GameError::InvalidMap(format!(
                "room '{}' is already reachable from another room",
                self.rooms[child.index()].name
            )));
        }

        let slot = match side {
            Side::Left => &mut self.rooms[parent.index()].left,
            Side::Right => &mut self.rooms[parent.index()].right,
        };
        if slot.is_some() {
            return Err(GameError::InvalidMap(format!(
                "room '{}' already has a {} exit",
                self.rooms[parent.index()].name,
                side
            )));
        }
        *slot = Some(child);
        self.has_parent[child.index()] = true;
        Ok(())
    }

    /// Finish the map with `root` as the entrance
    ///
    /// Every room must be reachable from the root exactly once; with one
    /// parent per room that rules out cycles and stray rooms.
    pub fn build(self, root: RoomId) -> Result<RoomMap, GameError> {
        if root.index() >= self.rooms.len() {
            return Err(GameError::InvalidMap("the entrance was never added".to_string()));
        }
        if self.has_parent[root.index()] {
            return Err(GameError::InvalidMap(format!(
                "the entrance '{}' is linked under another room",
                self.rooms[root.index()].name
            )));
        }

        let map = RoomMap {
            rooms: self.rooms,
            root,
        };
        let reachable = map.breadth_first().len();
        if reachable != map.rooms.len() {
            return Err(GameError::InvalidMap(format!(
                "{} of {} rooms cannot be reached from the entrance",
                map.rooms.len() - reachable,
                map.rooms.len()
            )));
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> RoomMap {
        let mut builder = RoomMap::builder();
        let hall = builder.add_room("Hall", Some("A wet umbrella"));
        let attic = builder.add_room("Attic", None);
        let cellar = builder.add_room("Cellar", Some("A broken bottle"));
        builder.link(hall, Side::Left, attic).unwrap();
        builder.link(hall, Side::Right, cellar).unwrap();
        builder.build(hall).unwrap()
    }

    #[test]
    fn test_builds_tree_and_navigates() {
        let map = small_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map[map.root()].name, "Hall");

        let attic = map.child(map.root(), Side::Left).unwrap();
        assert_eq!(map[attic].name, "Attic");
        assert!(map[attic].clue.is_none());
        assert!(map[attic].is_dead_end());
        assert_eq!(map.depth(), 2);
    }

    #[test]
    fn test_room_ids_are_arena_positions() {
        let mut builder = RoomMap::builder();
        let ids: Vec<RoomId> = (0..300)
            .map(|n| builder.add_room(&format!("Cell {}", n), None))
            .collect();
        for (pos, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), pos);
        }
        for pair in ids.windows(2) {
            builder.link(pair[0], Side::Left, pair[1]).unwrap();
        }

        let map = builder.build(ids[0]).unwrap();
        assert_eq!(map.find("Cell 299"), Some(ids[299]));
        assert_eq!(map.depth(), 300);
    }

    #[test]
    fn test_empty_clue_means_no_clue() {
        let room = Room::new("Pantry", Some(""));
        assert!(room.clue.is_none());
    }

    #[test]
    fn test_rejects_room_linked_twice() {
        let mut builder = RoomMap::builder();
        let a = builder.add_room("A", None);
        let b = builder.add_room("B", None);
        let c = builder.add_room("C", None);
        builder.link(a, Side::Left, c).unwrap();
        builder.link(a, Side::Right, b).unwrap();

        let err = builder.link(b, Side::Left, c).unwrap_err();
        assert!(matches!(err, GameError::InvalidMap(_)));
    }

    #[test]
    fn test_rejects_occupied_exit() {
        let mut builder = RoomMap::builder();
        let a = builder.add_room("A", None);
        let b = builder.add_room("B", None);
        let c = builder.add_room("C", None);
        builder.link(a, Side::Left, b).unwrap();

        assert!(builder.link(a, Side::Left, c).is_err());
    }

    #[test]
    fn test_rejects_cycle_and_unreachable_rooms() {
        let mut builder = RoomMap::builder();
        let entrance = builder.add_room("Entrance", None);
        let a = builder.add_room("A", None);
        let b = builder.add_room("B", None);
        builder.link(a, Side::Left, b).unwrap();
        builder.link(b, Side::Left, a).unwrap();

        let err = builder.build(entrance).unwrap_err();
        assert!(matches!(err, GameError::InvalidMap(_)));
    }

    #[test]
    fn test_rejects_self_link() {
        let mut builder = RoomMap::builder();
        let a = builder.add_room("A", None);
        assert!(builder.link(a, Side::Right, a).is_err());
    }

    #[test]
    fn test_find_and_clues() {
        let map = small_map();
        let cellar = map.find("Cellar").unwrap();
        assert_eq!(map[cellar].clue.as_deref(), Some("A broken bottle"));
        assert!(map.find("Ballroom").is_none());
        assert_eq!(map.clues().count(), 2);
    }
}
