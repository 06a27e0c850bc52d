//! Adjacency graph over country names.
//!
//! Each country keeps its borders in the order its source table lists them;
//! the opponent heuristics scan candidates in that order, so it is part of
//! the observable behavior. The graph is immutable once built and is shared
//! between the validator, the turn engine, and the strategies via `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use super::country::COUNTRY_BORDERS;

/// Errors that can occur while loading a map from JSON.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid map JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry '{key}' is named '{name}'")]
    NameMismatch { key: String, name: String },

    #[error("'{country}' borders '{border}', which the map does not define")]
    UnknownBorder { country: String, border: String },

    #[error("map contains no countries")]
    Empty,
}

/// A country and the countries it borders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub name: String,
    pub borders: Vec<String>,
}

/// Immutable country adjacency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

static WORLD: OnceLock<Arc<AdjacencyGraph>> = OnceLock::new();

impl AdjacencyGraph {
    /// Builds a graph from a `(name, borders)` table. Later duplicates of a
    /// name replace the earlier entry's borders but keep its position.
    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut graph = AdjacencyGraph {
            countries: Vec::with_capacity(table.len()),
            index: HashMap::with_capacity(table.len()),
        };
        for (name, borders) in table {
            graph.insert(Country {
                name: name.to_string(),
                borders: borders.iter().map(|b| b.to_string()).collect(),
            });
        }
        graph
    }

    /// Returns the built-in world map, built on first access.
    pub fn world() -> Arc<AdjacencyGraph> {
        WORLD
            .get_or_init(|| Arc::new(AdjacencyGraph::from_table(&COUNTRY_BORDERS)))
            .clone()
    }

    /// Parses a map in the `{ "<name>": { "name": .., "borders": [..] } }`
    /// object format. Key order is kept as the country order. Every border
    /// must name a country the map defines.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut graph = AdjacencyGraph {
            countries: Vec::with_capacity(raw.len()),
            index: HashMap::with_capacity(raw.len()),
        };
        for (key, value) in raw {
            let country: Country = serde_json::from_value(value)?;
            if country.name != key {
                return Err(GraphError::NameMismatch {
                    key,
                    name: country.name,
                });
            }
            graph.insert(country);
        }

        for country in &graph.countries {
            if let Some(border) = country.borders.iter().find(|b| !graph.contains(b)) {
                return Err(GraphError::UnknownBorder {
                    country: country.name.clone(),
                    border: border.clone(),
                });
            }
        }
        Ok(graph)
    }

    fn insert(&mut self, country: Country) {
        match self.index.get(&country.name) {
            Some(&i) => self.countries[i] = country,
            None => {
                let slot = self.countries.len();
                self.index.insert(country.name.clone(), slot);
                self.countries.push(country);
            }
        }
    }

    /// Returns the borders of `name` in table order, or an empty slice for
    /// an unknown country.
    pub fn neighbors_of(&self, name: &str) -> &[String] {
        match self.index.get(name) {
            Some(&i) => &self.countries[i].borders,
            None => &[],
        }
    }

    /// Returns true if the graph has an entry for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns true if `b` is listed among the borders of `a`.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors_of(a).iter().any(|n| n == b)
    }

    /// Iterates over country names in table order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Returns every `(a, b)` where `a` lists `b` but `b` does not list `a`,
    /// including borders that name a country missing from the graph.
    pub fn asymmetric_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for country in &self.countries {
            for border in &country.borders {
                if !self.is_adjacent(border, &country.name) {
                    pairs.push((country.name.clone(), border.clone()));
                }
            }
        }
        pairs
    }

    /// Returns the connected components, each in discovery order. Components
    /// are ordered by their first country's table position.
    pub fn components(&self) -> Vec<Vec<String>> {
        let mut seen = vec![false; self.countries.len()];
        let mut components = Vec::new();

        for start in 0..self.countries.len() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut stack = vec![start];
            let mut component = Vec::new();
            while let Some(i) = stack.pop() {
                component.push(self.countries[i].name.clone());
                for border in &self.countries[i].borders {
                    if let Some(&j) = self.index.get(border) {
                        if !seen[j] {
                            seen[j] = true;
                            stack.push(j);
                        }
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
