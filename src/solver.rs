//! Shortest-path search over a [`RouteGraph`].
//!
//! Minimises total hours, not distance. An unreachable destination is a
//! normal `None` result.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{Level, debug, instrument};

use crate::config::PlannerOptions;
use crate::error::PlannerError;
use crate::graph::RouteGraph;
use crate::itinerary::Itinerary;
use crate::location::{Location, LocationId};
use crate::traits::{CountryMembership, LocationRegistry};
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapItem {
    weight: u64,
    node: usize,
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap; lower node index wins ties.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A found route with its total hours.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub itinerary: Itinerary,
    pub hours: u64,
}

impl<'a> RouteGraph<'a> {
    /// Minimum-hours route from `from` to `to`.
    ///
    /// `None` when either end is not in the graph or no path connects them.
    /// `from == to` yields a single-stop itinerary.
    pub fn shortest_path(&self, from: &Location, to: &Location) -> Option<ShortestPath> {
        let source = *self.index.get(&from.id)?;
        let target = *self.index.get(&to.id)?;

        let (nodes, hours) = self.dijkstra(source, target)?;
        let itinerary = nodes.into_iter().map(|node| self.nodes[node].clone()).collect::<Vec<_>>();
        Some(ShortestPath {
            itinerary: Itinerary::new(itinerary),
            hours,
        })
    }

    fn dijkstra(&self, source: usize, target: usize) -> Option<(Vec<usize>, u64)> {
        let n = self.nodes.len();
        let mut best = vec![u64::MAX; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        best[source] = 0;
        heap.push(HeapItem { weight: 0, node: source });

        while let Some(HeapItem { weight, node }) = heap.pop() {
            if node == target {
                break;
            }
            if weight > best[node] {
                continue;
            }
            for &(neighbour, hours) in &self.adjacency[node] {
                let candidate = weight.saturating_add(hours);
                if candidate < best[neighbour] {
                    best[neighbour] = candidate;
                    parent[neighbour] = Some(node);
                    heap.push(HeapItem {
                        weight: candidate,
                        node: neighbour,
                    });
                }
            }
        }

        if best[target] == u64::MAX {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = parent[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        Some((path, best[target]))
    }
}

/// Shortest route for `vehicle` from `from` to `to` through `locations`.
///
/// The endpoints are added to the candidate set if missing. Every feasible
/// hop is an edge, so the route needs no further feasibility check.
#[instrument(skip_all, level = Level::DEBUG, fields(vehicle = %vehicle, from = %from, to = %to))]
pub fn find_shortest_path<'a, I, C>(
    vehicle: &Vehicle,
    from: &'a Location,
    to: &'a Location,
    locations: I,
    countries: &C,
) -> Option<Itinerary>
where
    I: IntoIterator<Item = &'a Location>,
    C: CountryMembership + Sync + ?Sized,
{
    find_shortest_path_with(vehicle, from, to, locations, countries, false)
}

/// [`find_shortest_path`], optionally building the graph in parallel.
pub fn find_shortest_path_with<'a, I, C>(
    vehicle: &Vehicle,
    from: &'a Location,
    to: &'a Location,
    locations: I,
    countries: &C,
    parallel: bool,
) -> Option<Itinerary>
where
    I: IntoIterator<Item = &'a Location>,
    C: CountryMembership + Sync + ?Sized,
{
    let candidates = [from, to].into_iter().chain(locations);
    let graph = RouteGraph::build_with(candidates, vehicle, countries, parallel);

    match graph.shortest_path(from, to) {
        Some(path) => {
            debug!(stops = path.itinerary.len(), hours = path.hours, "found route");
            Some(path.itinerary)
        }
        None => {
            debug!("no route");
            None
        }
    }
}

/// Shortest route over every location the registry knows.
pub fn find_shortest_path_in<R>(
    registry: &R,
    vehicle: &Vehicle,
    from: &Location,
    to: &Location,
    options: &PlannerOptions,
) -> Option<Itinerary>
where
    R: LocationRegistry + Sync + ?Sized,
{
    let locations = registry.all_locations();
    find_shortest_path_with(vehicle, from, to, locations, registry, options.parallel_graph_build)
}

/// Resolve both ids in `registry` and route between them.
///
/// Unknown ids are errors; an unreachable pair is `Ok(None)`.
pub fn route_between_ids<R>(
    registry: &R,
    vehicle: &Vehicle,
    from: LocationId,
    to: LocationId,
    options: &PlannerOptions,
) -> Result<Option<Itinerary>, PlannerError>
where
    R: LocationRegistry + Sync + ?Sized,
{
    let departure = registry
        .location_by_id(from)
        .ok_or(PlannerError::LocationNotFound(from))?;
    let arrival = registry
        .location_by_id(to)
        .ok_or(PlannerError::LocationNotFound(to))?;
    Ok(find_shortest_path_in(registry, vehicle, departure, arrival, options))
}

/// Resolve both names in `registry` (first match each) and route between them.
pub fn route_between_names<R>(
    registry: &R,
    vehicle: &Vehicle,
    from: &str,
    to: &str,
    options: &PlannerOptions,
) -> Result<Option<Itinerary>, PlannerError>
where
    R: LocationRegistry + Sync + ?Sized,
{
    let departure = first_named(registry, from)?;
    let arrival = first_named(registry, to)?;
    Ok(find_shortest_path_in(registry, vehicle, departure, arrival, options))
}

fn first_named<'r, R>(registry: &'r R, name: &str) -> Result<&'r Location, PlannerError>
where
    R: LocationRegistry + ?Sized,
{
    registry
        .locations_by_name(name)
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::NoLocationNamed(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKind;
    use crate::traits::NoCountries;

    fn equator(id: u64, lng: f64) -> Location {
        Location::new(id, format!("e{}", id), (0.0, lng), LocationKind::Minor, 0)
    }

    #[test]
    fn test_heap_pops_lowest_weight_then_lowest_node() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapItem { weight: 5, node: 0 });
        heap.push(HeapItem { weight: 2, node: 3 });
        heap.push(HeapItem { weight: 2, node: 1 });
        assert_eq!(heap.pop(), Some(HeapItem { weight: 2, node: 1 }));
        assert_eq!(heap.pop(), Some(HeapItem { weight: 2, node: 3 }));
        assert_eq!(heap.pop(), Some(HeapItem { weight: 5, node: 0 }));
    }

    #[test]
    fn test_hops_minimise_hours_not_distance() {
        // Hops up to 250 km cost 1 h; the 333 km direct hop is infeasible.
        let locations = vec![equator(1, 0.0), equator(2, 1.0), equator(3, 2.0), equator(4, 3.0)];
        let vehicle = Vehicle::range_limited(1, 250);
        let graph = RouteGraph::build(&locations, &vehicle, &NoCountries);

        let path = graph.shortest_path(&locations[0], &locations[3]).unwrap();
        assert_eq!(path.hours, 2);
        assert_eq!(path.itinerary.len(), 3);
    }

    #[test]
    fn test_same_source_and_target() {
        let locations = vec![equator(1, 0.0)];
        let graph = RouteGraph::build(&locations, &Vehicle::range_limited(1, 1), &NoCountries);
        let path = graph.shortest_path(&locations[0], &locations[0]).unwrap();
        assert_eq!(path.hours, 0);
        assert_eq!(path.itinerary.len(), 1);
    }

    #[test]
    fn test_absent_endpoint_is_no_path() {
        let locations = vec![equator(1, 0.0), equator(2, 1.0)];
        let graph = RouteGraph::build(&locations, &Vehicle::ConstantSpeed { speed: 100 }, &NoCountries);
        assert!(graph.shortest_path(&locations[0], &equator(9, 2.0)).is_none());
    }

    #[test]
    fn test_endpoints_added_to_candidates() {
        let from = equator(1, 0.0);
        let to = equator(2, 1.0);
        let route = find_shortest_path(
            &Vehicle::ConstantSpeed { speed: 100 },
            &from,
            &to,
            std::iter::empty(),
            &NoCountries,
        )
        .unwrap();
        assert_eq!(route.locations(), &[from, to]);
    }
}
