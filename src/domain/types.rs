use serde::{Deserialize, Serialize};

/// Named entry of a time table, in minutes per trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub name: String,
    pub minutes: f64,
}

/// Ordered name -> minutes mapping. Iterates in insertion order; re-inserting a
/// name overwrites the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeEntry>", into = "Vec<TimeEntry>")]
pub struct TimeTable {
    entries: Vec<TimeEntry>,
}

impl TimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, minutes: f64) -> Option<f64> {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.minutes, minutes)),
            None => {
                self.entries.push(TimeEntry { name, minutes });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.minutes)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.minutes))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for TimeTable {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut table = TimeTable::new();
        for (name, minutes) in iter {
            table.insert(name, minutes);
        }
        table
    }
}

impl From<Vec<TimeEntry>> for TimeTable {
    fn from(entries: Vec<TimeEntry>) -> Self {
        entries.into_iter().map(|e| (e.name, e.minutes)).collect()
    }
}

impl From<TimeTable> for Vec<TimeEntry> {
    fn from(table: TimeTable) -> Self {
        table.entries
    }
}

/// How equal totals are ordered in a ranked result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order the combinations were produced in (load table outer, route inner).
    #[default]
    InputOrder,
    /// Equipment name, then route name.
    Name,
}

/// Everything the evaluator needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct HaulParameters {
    pub load_times: TimeTable,
    pub transport_times: TimeTable,
    pub trips: u32,
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    #[serde(rename = "equipo")]
    pub equipment: String,
    #[serde(rename = "ruta")]
    pub route: String,
    #[serde(rename = "tiempo_por_viaje")]
    pub per_trip_minutes: f64,
    #[serde(rename = "tiempo_total")]
    pub total_minutes: f64,
}

/// Combinations sorted ascending by total time. Never empty when built by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResultSet {
    results: Vec<CombinationResult>,
}

impl RankedResultSet {
    pub(crate) fn from_sorted(results: Vec<CombinationResult>) -> Self {
        debug_assert!(!results.is_empty(), "ranked result set must not be empty");
        Self { results }
    }

    /// Fastest combination.
    pub fn best(&self) -> &CombinationResult {
        // from_sorted is only reached with a non-empty product
        &self.results[0]
    }

    pub fn results(&self) -> &[CombinationResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CombinationResult> {
        self.results.iter()
    }

    pub fn find(&self, equipment: &str, route: &str) -> Option<&CombinationResult> {
        self.results
            .iter()
            .find(|r| r.equipment == equipment && r.route == route)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a RankedResultSet {
    type Item = &'a CombinationResult;
    type IntoIter = std::slice::Iter<'a, CombinationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
