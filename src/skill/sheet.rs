use super::attributes::Attributes;
use crate::common::Int;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read/write access to a character's named attribute values.
///
/// The map itself belongs to whoever stores characters; skill checks only go
/// through these two calls.
pub trait SkillSheet {
    fn skill_value(&self, name: &str) -> Option<Int>;

    fn set_skill_value(&mut self, name: &str, value: Int);
}

impl<S: BuildHasher> SkillSheet for HashMap<String, Int, S> {
    fn skill_value(&self, name: &str) -> Option<Int> {
        self.get(name).copied()
    }

    fn set_skill_value(&mut self, name: &str, value: Int) {
        self.insert(name.to_owned(), value);
    }
}

impl SkillSheet for BTreeMap<String, Int> {
    fn skill_value(&self, name: &str) -> Option<Int> {
        self.get(name).copied()
    }

    fn set_skill_value(&mut self, name: &str, value: Int) {
        self.insert(name.to_owned(), value);
    }
}

impl SkillSheet for Attributes {
    fn skill_value(&self, name: &str) -> Option<Int> {
        self.get(name)
    }

    fn set_skill_value(&mut self, name: &str, value: Int) {
        self.insert(name, value);
    }
}

/// Stores every parsed attribute into `sheet`, overwriting existing values.
pub fn apply_attributes<S: SkillSheet + ?Sized>(sheet: &mut S, attributes: &Attributes) {
    for (name, value) in attributes.iter() {
        sheet.set_skill_value(name, value);
    }
}
