//! Standings Core - Two-driver championship standings and clinch engine.
//!
//! This library provides the points, remaining-pool, clinch, and
//! required-margin calculations behind the title-fight calculator, with
//! Python bindings via PyO3.

use pyo3::prelude::*;
use std::collections::HashMap;

pub mod constants;
pub mod event;
pub mod schedule;
pub mod season;
pub mod standings;

pub use constants::{
    FASTEST_LAP_BONUS, RACE_MAX_POINTS, RACE_POINTS, SPRINT_MAX_POINTS, SPRINT_POINTS,
};
pub use event::Event;
pub use schedule::Schedule;
pub use season::SeasonState;
pub use standings::{compute_standings, Standings};

/// Recompute the standings from a full result record.
///
/// Python-friendly wrapper around the core engine function.
#[pyfunction]
fn py_compute_standings(
    drivers: (String, String),
    starting_points: HashMap<String, u32>,
    positions: HashMap<(String, String), u32>,
    fastest_laps: HashMap<(String, String), bool>,
    schedule: &Schedule,
) -> Standings {
    compute_standings(
        (&drivers.0, &drivers.1),
        &starting_points,
        &positions,
        &fastest_laps,
        schedule,
    )
}

/// Python module definition
#[pymodule]
fn standings_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<Event>()?;
    m.add_class::<Schedule>()?;
    m.add_class::<SeasonState>()?;
    m.add_class::<Standings>()?;

    // Core functions
    m.add_function(wrap_pyfunction!(py_compute_standings, m)?)?;

    // Constants
    m.add("RACE_POINTS", RACE_POINTS.to_vec())?;
    m.add("SPRINT_POINTS", SPRINT_POINTS.to_vec())?;
    m.add("FASTEST_LAP_BONUS", FASTEST_LAP_BONUS)?;
    m.add("RACE_MAX_POINTS", RACE_MAX_POINTS)?;
    m.add("SPRINT_MAX_POINTS", SPRINT_MAX_POINTS)?;

    Ok(())
}
