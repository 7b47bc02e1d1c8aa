//! Directory information blocks.

use std::collections::HashMap;

use super::Property;

/// A `BEGIN:<profile>` ... `END:<profile>` block.
///
/// Blocks contain properties and nested sub-blocks, e.g. a VCALENDAR holding
/// VEVENTs which hold VALARMs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Profile named by the BEGIN/END lines, as written.
    pub profile: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested blocks in order of appearance.
    pub blocks: Vec<Block>,
}

impl Block {
    /// Creates an empty block with the given profile.
    #[must_use]
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            properties: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Adds a property.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a nested block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns whether this block has the given profile (case-insensitive).
    #[must_use]
    pub fn is_profile(&self, profile: &str) -> bool {
        self.profile.eq_ignore_ascii_case(profile)
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_named(name))
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_named(name)).collect()
    }

    /// Returns nested blocks with the given profile.
    #[must_use]
    pub fn blocks_of(&self, profile: &str) -> Vec<&Block> {
        self.blocks.iter().filter(|b| b.is_profile(profile)).collect()
    }

    /// Indexes properties by their uppercase name.
    ///
    /// Properties sharing a name keep their relative order. The map is built
    /// on every call since blocks may be mutated between mapping stages.
    #[must_use]
    pub fn property_map(&self) -> HashMap<String, Vec<&Property>> {
        let mut map: HashMap<String, Vec<&Property>> = HashMap::new();
        for prop in &self.properties {
            map.entry(prop.name.to_ascii_uppercase())
                .or_default()
                .push(prop);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Block {
        let mut block = Block::new("VCARD");
        block.add_property(Property::text("TEL", "1"));
        block.add_property(Property::text("FN", "Jane"));
        block.add_property(Property::text("tel", "2"));
        block
    }

    #[test]
    fn property_map_groups_by_name_in_order() {
        let block = sample();
        let map = block.property_map();

        assert_eq!(map.len(), 2);
        let tels: Vec<&str> = map["TEL"].iter().map(|p| p.text_value()).collect();
        assert_eq!(tels, vec!["1", "2"]);
        assert_eq!(map["FN"][0].text_value(), "Jane");
    }

    #[test]
    fn property_map_reflects_mutation() {
        let mut block = sample();
        assert!(!block.property_map().contains_key("NOTE"));

        block.add_property(Property::text("NOTE", "later"));
        assert_eq!(block.property_map()["NOTE"].len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let block = sample();
        assert_eq!(block.get_property("fn").map(Property::text_value), Some("Jane"));
        assert_eq!(block.get_properties("TEL").len(), 2);
    }

    #[test]
    fn blocks_of_filters_by_profile() {
        let mut block = Block::new("VCALENDAR");
        block.add_block(Block::new("VEVENT"));
        block.add_block(Block::new("VTODO"));
        block.add_block(Block::new("vevent"));
        assert_eq!(block.blocks_of("VEVENT").len(), 2);
    }
}
