use core::f64::consts::SQRT_2;

use crate::error::MapError;

/// Whether an opaque cell blocking the view is itself reported as visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FovLimit {
    /// Walls at the edge of the lit area are visible.
    #[default]
    Included,
    /// Only transparent cells (and the origin) are visible.
    Excluded,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FovAlgorithm {
    /// Symmetric shadow casting over eight octants.
    #[default]
    Basic,
    /// One Bresenham ray per candidate cell.
    Ray,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteAlgorithm {
    Dijkstra,
    #[default]
    AStar,
}

/// Parameters of a field of vision computation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FovConfig {
    /// Maximum sight distance. `0` means unlimited.
    pub max_radius: u32,
    pub limit: FovLimit,
    pub algorithm: FovAlgorithm,
}

impl FovConfig {
    pub fn with_max_radius(mut self, max_radius: u32) -> Self {
        self.max_radius = max_radius;
        self
    }

    pub fn with_limit(mut self, limit: FovLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_algorithm(mut self, algorithm: FovAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Parameters of a route computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Cost of a diagonal step. Orthogonal steps cost `1`; `0` disables
    /// diagonal movement.
    pub diagonal_cost: f64,
    pub algorithm: RouteAlgorithm,
}

impl RouteConfig {
    pub const DEFAULT_DIAGONAL_COST: f64 = SQRT_2;

    pub fn with_diagonal_cost(mut self, diagonal_cost: f64) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[inline]
    pub fn allows_diagonals(&self) -> bool {
        self.diagonal_cost > 0.0
    }

    pub fn validate(&self) -> Result<(), MapError> {
        if !self.diagonal_cost.is_finite() {
            return Err(MapError::InvalidConfig("diagonal cost must be finite"));
        }
        if self.diagonal_cost < 0.0 {
            return Err(MapError::InvalidConfig("diagonal cost must not be negative"));
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: Self::DEFAULT_DIAGONAL_COST,
            algorithm: RouteAlgorithm::AStar,
        }
    }
}
