use serde::Serialize;
use std::collections::BTreeMap;

use super::purpose::Purpose;

/// Models a connector offers, partitioned by purpose.
///
/// Every purpose is present, possibly with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCatalog {
    models: BTreeMap<Purpose, Vec<String>>,
}

impl ModelCatalog {
    /// Build from a static table. Purposes the table omits get an empty list.
    pub fn from_table(table: &[(Purpose, &[&str])]) -> Self {
        let mut models: BTreeMap<Purpose, Vec<String>> =
            Purpose::ALL.into_iter().map(|p| (p, Vec::new())).collect();

        for (purpose, names) in table {
            let entry = models.entry(*purpose).or_default();
            for name in names.iter() {
                if !entry.iter().any(|existing| existing == name) {
                    entry.push(name.to_string());
                }
            }
        }

        Self { models }
    }

    pub fn get(&self, purpose: Purpose) -> &[String] {
        self.models.get(&purpose).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Purpose, &[String])> {
        self.models.iter().map(|(p, m)| (*p, m.as_slice()))
    }

    pub fn purposes(&self) -> impl Iterator<Item = Purpose> + '_ {
        self.models.keys().copied()
    }

    /// Flat list of every model, de-duplicated, in first-seen order
    pub fn all_models(&self) -> Vec<String> {
        let mut all: Vec<String> = Vec::new();
        for models in self.models.values() {
            for model in models {
                if !all.contains(model) {
                    all.push(model.clone());
                }
            }
        }
        all
    }

    pub fn contains_model(&self, model: &str) -> bool {
        self.models.values().any(|m| m.iter().any(|x| x == model))
    }
}
