use pyo3::prelude::*;

use crate::constants::{RACE_MAX_POINTS, RACE_POINTS, SPRINT_MAX_POINTS, SPRINT_POINTS};

/// A points-paying event on the season schedule.
///
/// Grand prix events score positions 1-10 with an optional fastest-lap
/// bonus; sprints score positions 1-8 with no bonus. A locked event carries
/// fixed seed results and rejects user input.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Event {
    #[pyo3(get, set)]
    pub name: String,

    /// Sprint format: reduced scoring table, no fastest-lap bonus
    #[pyo3(get, set)]
    pub is_sprint: bool,

    /// Locked events hold seed results; the input layer rejects writes
    #[pyo3(get, set)]
    pub locked: bool,
}

#[pymethods]
impl Event {
    #[new]
    #[pyo3(signature = (name, is_sprint, locked = false))]
    pub fn new(name: String, is_sprint: bool, locked: bool) -> Self {
        Event {
            name,
            is_sprint,
            locked,
        }
    }

    /// Base points for a 1-based finishing position. Positions beyond the
    /// scoring table (and position 0) are worth nothing.
    pub fn points_for(&self, position: u32) -> u32 {
        if position == 0 {
            return 0;
        }
        let idx = (position - 1) as usize;
        if self.is_sprint {
            SPRINT_POINTS.get(idx).copied().unwrap_or(0)
        } else {
            RACE_POINTS.get(idx).copied().unwrap_or(0)
        }
    }

    /// Whether `position` lands on the scoring table at all. The fastest-lap
    /// bonus is only payable for scoring finishes.
    pub fn scores(&self, position: u32) -> bool {
        self.points_for(position) > 0
    }

    /// Maximum points one driver can take from this event
    pub fn max_points(&self) -> u32 {
        if self.is_sprint {
            SPRINT_MAX_POINTS
        } else {
            RACE_MAX_POINTS
        }
    }

    /// Number of selectable finishing positions (10 for a grand prix, 8 for
    /// a sprint)
    pub fn position_count(&self) -> u32 {
        if self.is_sprint {
            SPRINT_POINTS.len() as u32
        } else {
            RACE_POINTS.len() as u32
        }
    }

    fn __str__(&self) -> String {
        let kind = if self.is_sprint { "sprint" } else { "grand prix" };
        format!("{} ({})", self.name, kind)
    }

    fn __repr__(&self) -> String {
        format!(
            "Event({:?}, is_sprint={}, locked={})",
            self.name, self.is_sprint, self.locked
        )
    }
}
