/// Which root sources a scan walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Walk world locations.
    pub include_locations: bool,
    /// Walk the player's inventory and equipment.
    pub include_inventory: bool,
    /// Synthesize stacks from the farm's stockpile.
    pub include_stockpile: bool,
    /// Only walk the location with this name (case-insensitive).
    pub location_filter: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_locations: true,
            include_inventory: true,
            include_stockpile: true,
            location_filter: None,
        }
    }
}

impl ScanConfig {
    /// Enable or disable the location harvester.
    pub fn with_locations(mut self, include: bool) -> Self {
        self.include_locations = include;
        self
    }

    /// Enable or disable the inventory harvester.
    pub fn with_inventory(mut self, include: bool) -> Self {
        self.include_inventory = include;
        self
    }

    /// Enable or disable stockpile stacks.
    pub fn with_stockpile(mut self, include: bool) -> Self {
        self.include_stockpile = include;
        self
    }

    /// Restrict the location harvester to a single location.
    pub fn with_location_filter(mut self, name: impl Into<String>) -> Self {
        self.location_filter = Some(name.into());
        self
    }

    /// Returns true if the named location should be walked.
    pub fn matches_location(&self, name: &str) -> bool {
        self.location_filter
            .as_deref()
            .is_none_or(|filter| name.to_lowercase() == filter.to_lowercase())
    }
}
