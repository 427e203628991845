use pyo3::prelude::*;
use std::collections::HashMap;

use crate::schedule::Schedule;
use crate::standings::{compute_standings, Standings};

/// Season state: the schedule, the two contenders, and the mutable record
/// of entered results.
///
/// Owns the sparse position and fastest-lap records on behalf of the
/// presentation layer and enforces event locking. Every read of the
/// standings is a full recompute over the current record.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SeasonState {
    #[pyo3(get)]
    pub schedule: Schedule,

    /// The two championship contenders
    #[pyo3(get)]
    pub drivers: (String, String),

    /// Point totals carried into the schedule
    #[pyo3(get)]
    pub starting_points: HashMap<String, u32>,

    /// Recorded finishing positions keyed by (driver, event)
    positions: HashMap<(String, String), u32>,

    /// Fastest-lap flags keyed by (driver, event)
    fastest_laps: HashMap<(String, String), bool>,
}

#[pymethods]
impl SeasonState {
    #[new]
    pub fn new(
        schedule: Schedule,
        drivers: (String, String),
        starting_points: HashMap<String, u32>,
    ) -> Self {
        SeasonState {
            schedule,
            drivers,
            starting_points,
            positions: HashMap::new(),
            fastest_laps: HashMap::new(),
        }
    }

    /// The 2024 title fight at the point the last sprint went final:
    /// Verstappen on 362, Norris on 315, Brazil Sprint locked in with
    /// Norris winning ahead of Verstappen in fourth.
    #[staticmethod]
    pub fn finale_2024() -> Self {
        let verstappen = "Max Verstappen".to_string();
        let norris = "Lando Norris".to_string();
        let mut positions = HashMap::new();
        positions.insert((verstappen.clone(), "Brazil Sprint".to_string()), 4);
        positions.insert((norris.clone(), "Brazil Sprint".to_string()), 1);

        SeasonState {
            schedule: Schedule::finale_2024(),
            starting_points: [(verstappen.clone(), 362), (norris.clone(), 315)]
                .into_iter()
                .collect(),
            drivers: (verstappen, norris),
            positions,
            fastest_laps: HashMap::new(),
        }
    }

    /// Toggle a finishing position: selecting the recorded position clears
    /// it, any other position overwrites it.
    ///
    /// Returns whether the write was applied. Writes to locked or unknown
    /// events, or for a driver outside the title fight, are rejected.
    pub fn toggle_position(&mut self, driver: &str, event: &str, position: u32) -> bool {
        if driver != self.drivers.0 && driver != self.drivers.1 {
            return false;
        }
        match self.schedule.get(event) {
            Some(e) if !e.locked => {}
            _ => return false,
        }

        let key = (driver.to_string(), event.to_string());
        if self.positions.get(&key) == Some(&position) {
            self.positions.remove(&key);
        } else {
            self.positions.insert(key, position);
        }
        true
    }

    /// Set or clear a fastest-lap flag. Unconditional overwrite; the engine
    /// ignores the flag at sprints.
    pub fn set_fastest_lap(&mut self, driver: &str, event: &str, checked: bool) {
        self.fastest_laps
            .insert((driver.to_string(), event.to_string()), checked);
    }

    /// The recorded position for a (driver, event) pair, if any
    pub fn position(&self, driver: &str, event: &str) -> Option<u32> {
        self.positions
            .get(&(driver.to_string(), event.to_string()))
            .copied()
    }

    /// The fastest-lap flag for a (driver, event) pair
    pub fn fastest_lap(&self, driver: &str, event: &str) -> bool {
        self.fastest_laps
            .get(&(driver.to_string(), event.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Recompute the standings from the full current record
    pub fn standings(&self) -> Standings {
        compute_standings(
            (&self.drivers.0, &self.drivers.1),
            &self.starting_points,
            &self.positions,
            &self.fastest_laps,
            &self.schedule,
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "SeasonState({} vs {}, {} events, {} results)",
            self.drivers.0,
            self.drivers.1,
            self.schedule.__len__(),
            self.positions.len()
        )
    }
}
