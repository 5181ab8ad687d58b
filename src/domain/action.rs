use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub name: String,
    pub frequency: u32,
    pub maintained: bool,
}

impl ActionRecord {
    pub fn new(name: impl Into<String>, frequency: u32, maintained: bool) -> Self {
        Self {
            name: name.into(),
            frequency,
            maintained,
        }
    }
}

/// Insertion-ordered list of maintenance actions.
///
/// Records are only ever appended; validation of new records lives in
/// [`crate::services::kpi_engine::add_action`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ActionLedger {
    records: Vec<ActionRecord>,
}

impl ActionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three actions every dashboard session starts with.
    pub fn seeded() -> Self {
        Self {
            records: vec![
                ActionRecord::new("Lubrication", 5, true),
                ActionRecord::new("Inspection", 3, false),
                ActionRecord::new("Replacement", 2, true),
            ],
        }
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }
}
