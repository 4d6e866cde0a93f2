//! Weighted travel graph derived from a location set and one vehicle.
//!
//! Nodes are locations (by id). An undirected edge joins every pair the
//! vehicle can travel directly, weighted by the hop's hours. The graph is
//! built per query and thrown away afterwards.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::location::{Location, LocationId};
use crate::traits::CountryMembership;
use crate::vehicle::Vehicle;

/// Feasible hops between deduplicated locations for one vehicle.
#[derive(Debug, Clone)]
pub struct RouteGraph<'a> {
    pub(crate) nodes: Vec<&'a Location>,
    pub(crate) index: HashMap<LocationId, usize>,
    /// Per node: (neighbour index, hours).
    pub(crate) adjacency: Vec<Vec<(usize, u64)>>,
    edge_count: usize,
}

impl<'a> RouteGraph<'a> {
    /// Build the graph sequentially.
    pub fn build<I, C>(locations: I, vehicle: &Vehicle, countries: &C) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
        C: CountryMembership + Sync + ?Sized,
    {
        Self::build_with(locations, vehicle, countries, false)
    }

    /// Build the graph, evaluating pairs on the rayon pool when `parallel`.
    ///
    /// Both modes produce the same edges in the same order.
    pub fn build_with<I, C>(locations: I, vehicle: &Vehicle, countries: &C, parallel: bool) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
        C: CountryMembership + Sync + ?Sized,
    {
        let (nodes, index) = dedupe_locations(locations);
        let n = nodes.len();

        // Each unordered pair is evaluated once, departing from the lower index.
        let evaluate = |i: usize| -> Vec<(usize, usize, u64)> {
            ((i + 1)..n)
                .filter_map(|j| {
                    vehicle
                        .travel_time(nodes[i], nodes[j], countries)
                        .hours()
                        .map(|hours| (i, j, hours))
                })
                .collect()
        };

        let edges: Vec<(usize, usize, u64)> = if parallel {
            (0..n).into_par_iter().flat_map_iter(&evaluate).collect()
        } else {
            (0..n).flat_map(&evaluate).collect()
        };
        trace!(pairs = n * n.saturating_sub(1) / 2, "evaluated location pairs");

        let mut adjacency = vec![Vec::new(); n];
        for &(i, j, hours) in &edges {
            adjacency[i].push((j, hours));
            adjacency[j].push((i, hours));
        }

        debug!(
            vehicle = %vehicle,
            nodes = n,
            edges = edges.len(),
            parallel,
            "built route graph"
        );

        Self {
            nodes,
            index,
            adjacency,
            edge_count: edges.len(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(&location.id)
    }

    /// Hours on the edge between `a` and `b`, if one exists.
    pub fn edge_weight(&self, a: &Location, b: &Location) -> Option<u64> {
        let from = *self.index.get(&a.id)?;
        let to = *self.index.get(&b.id)?;
        self.adjacency[from]
            .iter()
            .find(|(neighbour, _)| *neighbour == to)
            .map(|(_, hours)| *hours)
    }

    /// Locations reachable in one hop from `location`, with the hop's hours.
    pub fn neighbours(&self, location: &Location) -> Vec<(&'a Location, u64)> {
        match self.index.get(&location.id) {
            Some(&node) => self.adjacency[node]
                .iter()
                .map(|&(neighbour, hours)| (self.nodes[neighbour], hours))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Drop repeated ids, keeping the first occurrence and input order.
fn dedupe_locations<'a, I>(locations: I) -> (Vec<&'a Location>, HashMap<LocationId, usize>)
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut index = HashMap::new();
    let mut unique = Vec::new();
    for location in locations {
        if index.contains_key(&location.id) {
            continue;
        }
        index.insert(location.id, unique.len());
        unique.push(location);
    }
    (unique, index)
}
