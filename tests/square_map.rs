use std::f64::consts::SQRT_2;

use squaremap::{
    CellFlags, Coord2, FovAlgorithm, FovConfig, FovLimit, RouteAlgorithm, RouteConfig, SquareMap,
};

const EPS: f64 = 1e-9;

fn open_map(width: u32, height: u32) -> SquareMap {
    let mut map = SquareMap::new(width, height);
    map.clear(CellFlags::FLOOR);
    map
}

/// Small deterministic generator so map layouts are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Open map with roughly a quarter of its cells turned into walls.
fn scattered_walls(width: u32, height: u32, seed: u64) -> SquareMap {
    let mut map = open_map(width, height);
    let mut rng = Lcg(seed);
    for pos in map.range().iter() {
        if rng.next_u64() % 4 == 0 {
            map.set_cell(pos, CellFlags::empty());
        }
    }
    map
}

#[test]
fn new_cells_have_no_properties_and_set_empty_sets_both() {
    let mut map = SquareMap::new(6, 4);
    for pos in map.range().iter() {
        assert!(!map.is_transparent(pos));
        assert!(!map.is_walkable(pos));
    }
    for pos in map.range().iter() {
        map.set_empty(pos);
        assert!(map.is_transparent(pos) && map.is_walkable(pos));
    }
}

#[test]
fn visible_cells_are_explored() {
    for seed in 1..6 {
        let mut map = scattered_walls(12, 9, seed);
        map.compute_field_of_vision(Coord2::new(6, 4), FovConfig::default());
        for pos in map.visible_cells() {
            assert!(map.is_explored(pos), "seed {seed} at {pos}");
        }
    }
}

#[test]
fn origin_is_always_visible() {
    let mut map = SquareMap::new(4, 4);
    for (x, y) in [(0, 0), (3, 3), (1, 2)] {
        map.clear_field_of_vision();
        let origin = Coord2::new(x, y);
        let config = FovConfig::default().with_limit(FovLimit::Excluded);
        map.compute_field_of_vision(origin, config);
        assert!(map.is_in_field_of_vision(origin));
        assert_eq!(map.visible_cells().count(), 1);
    }
}

#[test]
fn open_map_is_fully_visible() {
    for algorithm in [FovAlgorithm::Basic, FovAlgorithm::Ray] {
        let mut map = open_map(13, 8);
        let config = FovConfig::default().with_algorithm(algorithm);
        map.compute_field_of_vision(Coord2::new(3, 5), config);
        assert_eq!(map.visible_cells().count(), 13 * 8);
    }
}

#[test]
fn wall_hides_cell_behind_it() {
    let mut map = open_map(5, 5);
    map.set_cell(Coord2::new(1, 2), CellFlags::empty());
    let config = FovConfig::default().with_limit(FovLimit::Excluded);
    map.compute_field_of_vision(Coord2::new(0, 2), config);
    assert!(!map.is_in_field_of_vision(Coord2::new(1, 2)));
    assert!(!map.is_in_field_of_vision(Coord2::new(2, 2)));
    assert!(map.is_in_field_of_vision(Coord2::new(0, 0)));
}

#[test]
fn straight_route_without_diagonals() {
    let map = open_map(10, 10);
    let route = map.compute_route_with(Coord2::new(0, 0), Coord2::new(5, 0), 0.0);
    let expected: Vec<Coord2> = (0..=5).map(|x| Coord2::new(x, 0)).collect();
    assert_eq!(route, expected);
}

#[test]
fn diagonal_route_is_shorter() {
    let map = open_map(10, 10);
    let diagonal = map.compute_route_detailed(
        Coord2::new(0, 0),
        Coord2::new(3, 3),
        RouteConfig::default(),
    );
    assert_eq!(diagonal.len(), 4);
    assert!((diagonal.cost - 3.0 * SQRT_2).abs() < EPS);

    let orthogonal = map.compute_route_detailed(
        Coord2::new(0, 0),
        Coord2::new(3, 3),
        RouteConfig::default().with_diagonal_cost(0.0),
    );
    assert_eq!(orthogonal.len(), 7);
    assert_eq!(orthogonal.cost, 6.0);
    assert!(diagonal.cost < orthogonal.cost);
}

#[test]
fn walled_off_target_has_no_route() {
    let mut map = open_map(7, 7);
    for (x, y) in [(4, 4), (5, 4), (6, 4), (4, 5), (4, 6)] {
        map.set_walkable(Coord2::new(x, y), false);
    }
    for algorithm in [RouteAlgorithm::Dijkstra, RouteAlgorithm::AStar] {
        let config = RouteConfig::default().with_algorithm(algorithm);
        let route = map.compute_route(Coord2::new(0, 0), Coord2::new(6, 6), config);
        assert!(route.is_empty());
    }
}

#[test]
fn dijkstra_and_astar_agree_on_cost() {
    let targets = [(0, 0), (13, 9), (7, 0), (2, 8), (12, 1)];
    for seed in 1..8 {
        let mut map = scattered_walls(14, 10, seed);
        let origin = Coord2::new(6, 5);
        map.set_empty(origin);
        for diagonal_cost in [0.0, 0.7, 1.0, SQRT_2, 2.5] {
            for &(x, y) in &targets {
                let target = Coord2::new(x, y);
                let config = RouteConfig::default().with_diagonal_cost(diagonal_cost);
                let dijkstra = map.compute_route_detailed(
                    origin,
                    target,
                    config.with_algorithm(RouteAlgorithm::Dijkstra),
                );
                let astar = map.compute_route_detailed(
                    origin,
                    target,
                    config.with_algorithm(RouteAlgorithm::AStar),
                );
                assert_eq!(dijkstra.is_empty(), astar.is_empty());
                assert!(
                    (dijkstra.cost - astar.cost).abs() < EPS,
                    "seed {seed} cost {diagonal_cost} to {target}: {} vs {}",
                    dijkstra.cost,
                    astar.cost
                );
            }
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut a = scattered_walls(16, 16, 42);
    let mut b = a.clone();
    let origin = Coord2::new(8, 8);
    a.set_empty(origin);
    b.set_empty(origin);

    let config = FovConfig::default().with_max_radius(6);
    a.compute_field_of_vision(origin, config);
    b.compute_field_of_vision(origin, config);
    assert_eq!(a.grid(), b.grid());

    for algorithm in [RouteAlgorithm::Dijkstra, RouteAlgorithm::AStar] {
        let config = RouteConfig::default().with_algorithm(algorithm);
        let first = a.compute_route(origin, Coord2::new(15, 0), config);
        let second = a.compute_route(origin, Coord2::new(15, 0), config);
        assert_eq!(first, second);
    }
}

#[test]
fn monster_sight_does_not_spoil_fog_of_war() {
    let mut map = open_map(10, 3);
    map.compute_field_of_vision(Coord2::new(0, 1), FovConfig::default().with_max_radius(2));
    let explored = |map: &SquareMap| -> Vec<Coord2> {
        map.range().iter().filter(|&p| map.is_explored(p)).collect()
    };
    let explored_before = explored(&map);

    map.clear_field_of_vision();
    map.compute_local_field_of_vision(Coord2::new(9, 1), FovConfig::default());
    let explored_after = explored(&map);

    assert_eq!(explored_before, explored_after);
    assert!(map.is_in_field_of_vision(Coord2::new(0, 1)));
    assert!(!map.is_explored(Coord2::new(9, 1)));
}
