//! Square-grid map engine.
//!
//! A [`SquareMap`] stores four properties per cell (transparent, walkable,
//! visible, explored) and computes field of vision and shortest routes over
//! them. The lower-level pieces ([`CellGrid`], [`compute_field_of_vision`],
//! [`find_route`]) are exposed for hosts that manage their own grids.
#![no_std]

extern crate alloc;

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod fov;
pub mod grid;
pub mod los;
pub mod map;
pub mod neighborhood;
pub mod observer;
pub mod route;

pub use cell::CellFlags;
pub use config::{FovAlgorithm, FovConfig, FovLimit, RouteAlgorithm, RouteConfig};
pub use coord::Coord2;
pub use error::MapError;
pub use fov::compute_field_of_vision;
pub use grid::CellGrid;
pub use los::{bresenham, line_of_sight};
pub use map::{GridRange, SquareMap};
pub use neighborhood::Dir8;
pub use observer::{NoOpRouteObserver, RouteObserver};
pub use route::{Route, find_route, heuristic};
