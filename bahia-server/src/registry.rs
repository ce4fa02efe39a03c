//! Station registry.
//!
//! The fixed, ordered list of stations in the Bahía de Cádiz zone.
//! Array order is geographic (Cádiz towards the airport, branch
//! appended) and exists for identifier resolution and display ONLY.
//! Direction of travel is never inferred from it: that comes from each
//! trip's own stop order, which is what keeps branch trips correct.

use std::collections::HashMap;

use crate::domain::StationId;

/// A station: stable identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Official Renfe station code.
    pub id: StationId,
    /// Display name.
    pub name: String,
}

/// Ordered station set shared by ingestion (filter) and query (lookup).
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
    positions: HashMap<StationId, usize>,
}

impl StationRegistry {
    /// Build a registry from an ordered station list.
    ///
    /// If an id appears twice, the first occurrence defines its
    /// position.
    pub fn new(stations: Vec<Station>) -> Self {
        let mut positions = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            positions.entry(station.id).or_insert(idx);
        }
        Self {
            stations,
            positions,
        }
    }

    /// The Bahía de Cádiz network: main line C1 in geographic order
    /// Cádiz - Aeropuerto de Jerez, then the C1a branch station.
    pub fn bahia() -> Self {
        // Official station codes from the Renfe Cercanías feed.
        const STATIONS: &[(&str, &str)] = &[
            ("51405", "Cádiz"),
            ("51404", "San Severiano"),
            ("51403", "Segunda Aguada"),
            ("51402", "Estadio"),
            ("51401", "Cortadura"),
            ("51306", "San Fernando-Bahía Sur"),
            ("51305", "San Fernando-Centro"),
            ("51304", "Puerto Real"),
            ("51303", "Las Aletas"),
            ("51302", "Valdelagrana"),
            ("51301", "El Puerto de Santa María"),
            ("51201", "Jerez de la Frontera"),
            ("51202", "Aeropuerto de Jerez"),
            // C1a branch from Las Aletas
            ("51310", "Campus de Puerto Real"),
        ];

        Self::new(
            STATIONS
                .iter()
                .map(|&(id, name)| Station {
                    // Static table, codes are valid by inspection
                    id: StationId::parse(id).expect("invalid built-in station code"),
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    /// Does the registry contain this station?
    pub fn contains(&self, id: StationId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Position of a station in registry order, if present.
    pub fn position(&self, id: StationId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Display name of a station, if present.
    pub fn name(&self, id: StationId) -> Option<&str> {
        self.positions
            .get(&id)
            .map(|&idx| self.stations[idx].name.as_str())
    }

    /// Stations in registry order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the registry has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
