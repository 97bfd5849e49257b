//! Array model shared by the sort drivers and the renderer.
//!
//! - `input`: parsing and validation of user supplied sizes and arrays

pub mod input;

pub use input::{parse_array_size, parse_manual_array, ValueBounds, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};

use rand::Rng;
use serde::Serialize;

/// Stable identity of an item, assigned once when an array is seeded.
pub type ItemId = u32;

/// A single labeled value in the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub value: u32,
    pub id: ItemId,
}

/// Ordered sequence of items.
///
/// Seeding assigns ids sequentially from 0. After seeding the only
/// mutation is [`ArrayModel::swap`], so the id set never changes while a
/// sort runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayModel {
    items: Vec<Item>,
}

impl ArrayModel {
    /// Build a model from raw values, assigning fresh sequential ids.
    pub fn from_values(values: &[u32]) -> Self {
        let items = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| Item {
                value,
                id: idx as ItemId,
            })
            .collect();
        Self { items }
    }

    /// Draw `size` values uniformly from `bounds`.
    pub fn random_values<R: Rng + ?Sized>(rng: &mut R, size: usize, bounds: ValueBounds) -> Vec<u32> {
        (0..size)
            .map(|_| rng.random_range(bounds.min..=bounds.max))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Value at `idx`.
    ///
    /// Drivers only ask for indices inside `0..len()`.
    pub fn value(&self, idx: usize) -> u32 {
        self.items[idx].value
    }

    pub fn values(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.value).collect()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Largest value currently in the array (0 when empty).
    pub fn max_value(&self) -> u32 {
        self.items.iter().map(|item| item.value).max().unwrap_or(0)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// True when values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.items.windows(2).all(|pair| pair[0].value <= pair[1].value)
    }
}
