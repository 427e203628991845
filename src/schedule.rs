use pyo3::prelude::*;

use crate::event::Event;

/// The season schedule: an ordered, immutable list of events.
///
/// The catalog exposes no mutation; locking is enforced by the input layer,
/// not here.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    events: Vec<Event>,
}

#[pymethods]
impl Schedule {
    #[new]
    pub fn new(events: Vec<Event>) -> Self {
        Schedule { events }
    }

    /// The closing stretch of the 2024 season. Brazil Sprint is locked: its
    /// result is seed data.
    #[staticmethod]
    pub fn finale_2024() -> Self {
        Schedule {
            events: vec![
                Event::new("Brazil Sprint".to_string(), true, true),
                Event::new("Brazil".to_string(), false, false),
                Event::new("Las Vegas".to_string(), false, false),
                Event::new("Qatar Sprint".to_string(), true, false),
                Event::new("Qatar".to_string(), false, false),
                Event::new("Abu Dhabi".to_string(), false, false),
            ],
        }
    }

    /// Events in season order
    #[getter]
    pub fn events(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Sum of every event's maximum awardable points: the contestable pool
    /// before any result is recorded.
    pub fn max_total_points(&self) -> u32 {
        self.events.iter().map(|e| e.max_points()).sum()
    }

    pub fn __len__(&self) -> usize {
        self.events.len()
    }

    fn __repr__(&self) -> String {
        let sprints = self.events.iter().filter(|e| e.is_sprint).count();
        format!(
            "Schedule({} events, {} sprints)",
            self.events.len(),
            sprints
        )
    }
}

impl Schedule {
    /// Look up an event by name. Linear scan; the season is tiny.
    pub fn get(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
