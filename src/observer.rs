use crate::coord::Coord2;

/// Hooks into the route search loop, for debug overlays and instrumentation.
pub trait RouteObserver {
    /// Called each time a cell is taken off the frontier.
    fn on_expand(&mut self, _coord: Coord2, _g: f64, _f: f64) {}
    fn on_route_found(&mut self, _points: &[Coord2], _cost: f64) {}
    fn on_no_route(&mut self) {}
}

pub struct NoOpRouteObserver;
impl RouteObserver for NoOpRouteObserver {}
