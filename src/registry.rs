//! Registro de preparadores. Se arma una sola vez al iniciar y despues solo se consulta.
use log::debug;

use crate::{ drink::DrinkKind, preparer::DrinkPreparer };

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparerEntry {
    pub display_name: String,
    pub preparer: DrinkPreparer,
}

/// Lista ordenada de preparadores. El orden define la numeracion del menu.
pub struct PreparerRegistry {
    entries: Vec<PreparerEntry>,
}

impl PreparerRegistry {
    /// Registra un preparador por cada bebida, en el orden de `DrinkKind::ALL`
    pub fn new() -> PreparerRegistry {
        let entries: Vec<PreparerEntry> = DrinkKind::ALL
            .iter()
            .map(|kind| PreparerEntry {
                display_name: display_name(kind.identifier()),
                preparer: DrinkPreparer::for_kind(*kind),
            })
            .collect();
        debug!("[REGISTRY] Registered {} preparers", entries.len());
        PreparerRegistry { entries }
    }

    pub fn list(&self) -> &[PreparerEntry] {
        &self.entries
    }

    /// Busca el preparador por su numero de menu (empieza en 1)
    pub fn get(&self, menu_number: usize) -> Option<&DrinkPreparer> {
        menu_number
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| &entry.preparer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PreparerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn display_name(identifier: &str) -> String {
    match identifier {
        "Water" => String::from("Hot Water"),
        "HotChocolate" => String::from("Hot Chocolate"),
        other => other.to_string(),
    }
}
