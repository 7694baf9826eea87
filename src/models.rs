use serde::Deserialize;

/// One entry of the icon catalog.
///
/// Both fields are required; any other keys in the JSON object are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IconRecord {
    pub id: i32,
    pub file: String,
}

/// A catalog entry that survived filtering, paired with the embedded resource it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub id: i32,
    /// Resource symbol as referenced from the generated code, e.g. `resource1006412Png`
    pub reference: String,
}

/// The filtered and transformed catalog, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputMapping {
    pub entries: Vec<MappingEntry>,
    /// Number of records dropped because their id is in the exclusion set
    pub excluded: usize,
}
