//! Shortest routes over the walkability plane of a [`CellGrid`].
//!
//! Dijkstra and A* share one best-first search; Dijkstra is A* with a zero
//! heuristic. Orthogonal steps cost `1` and diagonal steps cost
//! [`RouteConfig::diagonal_cost`]. A diagonal step may not squeeze between two
//! unwalkable orthogonal neighbours.
//!
//! The origin is exempt from the walkability check; the target is not.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::config::{RouteAlgorithm, RouteConfig};
use crate::coord::Coord2;
use crate::grid::CellGrid;
use crate::neighborhood::Dir8;
use crate::observer::RouteObserver;

/// Result of a route search. An empty `points` list means no route exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    /// Cells from origin to target, both included.
    pub points: Vec<Coord2>,
    pub cost: f64,
    pub nodes_expanded: u32,
}

impl Route {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

const UNVISITED: u8 = 0;
const OPEN: u8 = 1;
const CLOSED: u8 = 2;
const NONE_INDEX: u32 = u32::MAX;

/// Frontier entry. Ordered so that `BinaryHeap` pops the lowest `f`, then the
/// lowest `h`, then the lowest cell index.
#[derive(Copy, Clone, Debug)]
struct OpenNode {
    f: f64,
    h: f64,
    index: u32,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct SearchState {
    g_scores: Vec<f64>,
    came_from: Vec<u32>,
    status: Vec<u8>,
    open: BinaryHeap<OpenNode>,
}

impl SearchState {
    fn new(size: usize) -> Self {
        Self {
            g_scores: alloc::vec![f64::INFINITY; size],
            came_from: alloc::vec![NONE_INDEX; size],
            status: alloc::vec![UNVISITED; size],
            open: BinaryHeap::new(),
        }
    }
}

/// Lower bound on the cost between two cells under the given edge costs.
///
/// Always `0` for Dijkstra. For A* it is consistent for every non-negative
/// diagonal cost, so the first time the target is popped its cost is optimal.
pub fn heuristic(from: Coord2, to: Coord2, config: &RouteConfig) -> f64 {
    if config.algorithm == RouteAlgorithm::Dijkstra {
        return 0.0;
    }
    let manhattan = f64::from(from.manhattan_distance(to));
    let chebyshev = f64::from(from.chebyshev_distance(to));
    let d = config.diagonal_cost;
    if d <= 0.0 || d >= 2.0 {
        // Two orthogonal steps are never worse than one diagonal.
        manhattan
    } else if d >= 1.0 {
        let diagonals = manhattan - chebyshev;
        chebyshev - diagonals + d * diagonals
    } else {
        d * chebyshev
    }
}

/// Finds a minimum-cost route from `origin` to `target`.
///
/// Returns an empty route when the target is unwalkable or unreachable.
pub fn find_route<O>(
    grid: &CellGrid,
    origin: Coord2,
    target: Coord2,
    config: &RouteConfig,
    observer: &mut O,
) -> Route
where
    O: RouteObserver + ?Sized,
{
    debug_assert!(grid.in_bounds(origin), "origin {origin} outside the grid");
    debug_assert!(grid.in_bounds(target), "target {target} outside the grid");
    debug_assert!(config.validate().is_ok(), "invalid route config {config:?}");

    tracing::trace!(?origin, ?target, algorithm = ?config.algorithm, "route search started");

    if origin == target {
        let points = alloc::vec![origin];
        observer.on_route_found(&points, 0.0);
        return Route {
            points,
            cost: 0.0,
            nodes_expanded: 0,
        };
    }

    let route = search(grid, origin, target, config, observer);
    if route.is_empty() {
        observer.on_no_route();
        tracing::debug!(
            ?origin,
            ?target,
            algorithm = ?config.algorithm,
            nodes_expanded = route.nodes_expanded,
            "no route"
        );
    } else {
        observer.on_route_found(&route.points, route.cost);
        tracing::debug!(
            ?origin,
            ?target,
            algorithm = ?config.algorithm,
            cost = route.cost,
            steps = route.points.len() - 1,
            nodes_expanded = route.nodes_expanded,
            "route found"
        );
    }
    route
}

fn search<O>(
    grid: &CellGrid,
    origin: Coord2,
    target: Coord2,
    config: &RouteConfig,
    observer: &mut O,
) -> Route
where
    O: RouteObserver + ?Sized,
{
    if !grid.is_walkable(target) {
        return Route::default();
    }

    let start_idx = grid.index_of(origin);
    let target_idx = grid.index_of(target);
    let diagonals = config.allows_diagonals();

    let mut state = SearchState::new(grid.len());
    state.g_scores[start_idx] = 0.0;
    state.status[start_idx] = OPEN;
    let h = heuristic(origin, target, config);
    state.open.push(OpenNode {
        f: h,
        h,
        index: start_idx as u32,
    });

    let mut nodes_expanded = 0u32;

    while let Some(node) = state.open.pop() {
        let current_idx = node.index as usize;
        if state.status[current_idx] == CLOSED {
            continue;
        }
        state.status[current_idx] = CLOSED;
        nodes_expanded = nodes_expanded.saturating_add(1);

        let current = grid.coord_of(current_idx);
        let current_g = state.g_scores[current_idx];
        observer.on_expand(current, current_g, node.f);

        if current_idx == target_idx {
            return Route {
                points: reconstruct_route(grid, &state.came_from, start_idx, target_idx),
                cost: current_g,
                nodes_expanded,
            };
        }

        for dir in Dir8::ALL {
            if dir.is_diagonal() && !diagonals {
                continue;
            }
            let next = current + dir.offset();
            if !grid.in_bounds(next) || !grid.is_walkable(next) {
                continue;
            }
            if let Some((a, b)) = dir.flanks() {
                // Both flanks lie inside the grid whenever `next` does.
                if !grid.is_walkable(current + a.offset())
                    && !grid.is_walkable(current + b.offset())
                {
                    continue;
                }
            }

            let next_idx = grid.index_of(next);
            if state.status[next_idx] == CLOSED {
                continue;
            }

            let tentative_g = current_g + dir.step_cost(config.diagonal_cost);
            if tentative_g < state.g_scores[next_idx] {
                state.g_scores[next_idx] = tentative_g;
                state.came_from[next_idx] = current_idx as u32;
                state.status[next_idx] = OPEN;
                let h = heuristic(next, target, config);
                state.open.push(OpenNode {
                    f: tentative_g + h,
                    h,
                    index: next_idx as u32,
                });
            }
        }
    }

    Route {
        nodes_expanded,
        ..Route::default()
    }
}

fn reconstruct_route(
    grid: &CellGrid,
    came_from: &[u32],
    start_idx: usize,
    target_idx: usize,
) -> Vec<Coord2> {
    let mut reverse = Vec::new();
    let mut current = target_idx;
    reverse.push(grid.coord_of(current));

    while current != start_idx {
        let parent = came_from[current];
        if parent == NONE_INDEX {
            break;
        }
        current = parent as usize;
        reverse.push(grid.coord_of(current));
    }
    reverse.reverse();
    reverse
}
