use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::models::Resident;

/// Registry shared between request handlers
///
/// The registry itself does no locking; the lock belongs to the application
/// state that owns it.
pub type SharedRegistry = Arc<RwLock<ResidentRegistry>>;

/// What an upsert did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Ordered in-memory collection of residents keyed by national ID
///
/// Records keep the position of their first registration; re-registering
/// an ID replaces the record in place.
#[derive(Debug, Clone, Default)]
pub struct ResidentRegistry {
    residents: Vec<Resident>,
}

impl ResidentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Replace the record with the same national ID, or append a new one
    pub fn upsert(&mut self, resident: Resident) -> UpsertOutcome {
        match self
            .residents
            .iter()
            .position(|r| r.national_id == resident.national_id)
        {
            Some(index) => {
                tracing::debug!("Updating resident {} at position {}", resident.national_id, index);
                self.residents[index] = resident;
                UpsertOutcome::Updated
            }
            None => {
                tracing::debug!("Registering new resident {}", resident.national_id);
                self.residents.push(resident);
                UpsertOutcome::Inserted
            }
        }
    }

    /// All residents in registry order
    pub fn all(&self) -> &[Resident] {
        &self.residents
    }

    pub fn find_by_id(&self, national_id: &str) -> Option<&Resident> {
        self.residents.iter().find(|r| r.national_id == national_id)
    }

    /// Owned copy of the current contents
    pub fn snapshot(&self) -> Vec<Resident> {
        self.residents.clone()
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }
}

impl FromIterator<Resident> for ResidentRegistry {
    fn from_iter<I: IntoIterator<Item = Resident>>(iter: I) -> Self {
        let mut registry = ResidentRegistry::new();
        for resident in iter {
            registry.upsert(resident);
        }
        registry
    }
}
