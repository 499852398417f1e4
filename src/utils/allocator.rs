use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Opaque handle to a scene object or controller.
///
/// The generation guards against a stale handle reaching a recycled slot.
/// Hosts with their own object identities can mint handles with [`ObjectId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ObjectId {
    index: usize,
    generation: u32,
}

impl ObjectId {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Generational arena that hands out stable ids while preventing use-after-free.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    items: Vec<Option<T>>,
    generations: Vec<u32>,
    free_list: VecDeque<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generations: Vec::new(),
            free_list: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, item: T) -> ObjectId {
        if let Some(index) = self.free_list.pop_front() {
            self.items[index] = Some(item);
            return ObjectId::new(index, self.generations[index]);
        }

        let index = self.items.len();
        self.items.push(Some(item));
        self.generations.push(0);
        ObjectId::new(index, 0)
    }

    pub fn get(&self, id: ObjectId) -> Option<&T> {
        if !self.is_valid(id) {
            return None;
        }
        self.items.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        if !self.is_valid(id) {
            return None;
        }
        self.items.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<T> {
        if !self.is_valid(id) {
            return None;
        }
        let taken = self.items[id.index()].take();
        if taken.is_some() {
            self.generations[id.index()] = self.generations[id.index()].wrapping_add(1);
            self.free_list.push_back(id.index());
        }
        taken
    }

    /// Live entries paired with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| {
                slot.as_ref()
                    .map(|item| (ObjectId::new(index, self.generations[index]), item))
            })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut T)> + '_ {
        let generations = &self.generations;
        self.items
            .iter_mut()
            .enumerate()
            .filter_map(move |(index, slot)| {
                slot.as_mut()
                    .map(|item| (ObjectId::new(index, generations[index]), item))
            })
    }

    /// Raw slot storage, for callers that split work across threads.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_valid(&self, id: ObjectId) -> bool {
        self.generations
            .get(id.index())
            .is_some_and(|generation| *generation == id.generation())
    }
}
