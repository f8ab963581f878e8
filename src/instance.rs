//! # Problem Instance
//!
//! Items and knapsacks are created once per run and never change afterwards.
//! [`Instance::new`] validates them up front so the scoring code can rely on
//! consistent dimensions.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// An item with a benefit and one weight per knapsack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub benefit: f64,
    pub weights: Vec<f64>,
}

impl Item {
    pub fn new(benefit: f64, weights: Vec<f64>) -> Self {
        Self { benefit, weights }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    pub capacity: f64,
}

impl Knapsack {
    pub fn new(capacity: f64) -> Self {
        Self { capacity }
    }
}

/// A validated multi-knapsack instance.
///
/// Besides the items and knapsacks it keeps the column views the scoring
/// functions work on: the benefit vector, the capacity vector and the weight
/// matrix whose row `j` lists every item's weight in knapsack `j`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instance {
    items: Vec<Item>,
    knapsacks: Vec<Knapsack>,
    #[cfg_attr(feature = "serde", serde(skip))]
    benefits: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip))]
    capacities: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip))]
    weight_matrix: Vec<Vec<f64>>,
}

impl Instance {
    /// Builds an instance, failing with `InvalidInput` if there are no knapsacks,
    /// an item's weight vector does not have one entry per knapsack, or any
    /// number is negative or not finite.
    pub fn new(items: Vec<Item>, knapsacks: Vec<Knapsack>) -> Result<Self> {
        if knapsacks.is_empty() {
            return Err(GeneticError::InvalidInput(
                "An instance needs at least one knapsack".to_string(),
            ));
        }

        for (idx, knapsack) in knapsacks.iter().enumerate() {
            check_quantity("capacity", idx, knapsack.capacity)?;
        }

        for (idx, item) in items.iter().enumerate() {
            check_quantity("benefit", idx, item.benefit)?;
            if item.weights.len() != knapsacks.len() {
                return Err(GeneticError::InvalidInput(format!(
                    "Item {} has {} weights but there are {} knapsacks",
                    idx,
                    item.weights.len(),
                    knapsacks.len()
                )));
            }
            for &weight in &item.weights {
                check_quantity("weight", idx, weight)?;
            }
        }

        let benefits = items.iter().map(|item| item.benefit).collect();
        let capacities = knapsacks.iter().map(|k| k.capacity).collect();
        let weight_matrix = (0..knapsacks.len())
            .map(|j| items.iter().map(|item| item.weights[j]).collect())
            .collect();

        Ok(Self {
            items,
            knapsacks,
            benefits,
            capacities,
            weight_matrix,
        })
    }

    /// Draws a random instance: benefits in `[1, 3)`, weights in `[2, 10)` and
    /// capacities in `[50, 100)`, all whole numbers.
    pub fn random(
        number_items: usize,
        number_knapsacks: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let items = (0..number_items)
            .map(|_| {
                let benefit = rng.fetch_uniform(1.0, 3.0, 1)[0].floor();
                let weights = rng
                    .fetch_uniform(2.0, 10.0, number_knapsacks)
                    .into_iter()
                    .map(f64::floor)
                    .collect();
                Item::new(benefit, weights)
            })
            .collect();
        let knapsacks = rng
            .fetch_uniform(50.0, 100.0, number_knapsacks)
            .into_iter()
            .map(|c| Knapsack::new(c.floor()))
            .collect();
        Self::new(items, knapsacks)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn knapsacks(&self) -> &[Knapsack] {
        &self.knapsacks
    }

    pub fn benefits(&self) -> &[f64] {
        &self.benefits
    }

    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// Row `j` holds every item's weight in knapsack `j`.
    pub fn weight_matrix(&self) -> &[Vec<f64>] {
        &self.weight_matrix
    }

    pub fn number_items(&self) -> usize {
        self.items.len()
    }

    pub fn number_knapsacks(&self) -> usize {
        self.knapsacks.len()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instance {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            items: Vec<Item>,
            knapsacks: Vec<Knapsack>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Instance::new(raw.items, raw.knapsacks).map_err(serde::de::Error::custom)
    }
}

fn check_quantity(what: &str, idx: usize, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GeneticError::InvalidInput(format!(
            "{} at index {} must be a non-negative finite number, got {}",
            what, idx, value
        )));
    }
    Ok(())
}
