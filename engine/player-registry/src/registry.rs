use crate::types::{PlayerData, PlayerLookupError, PlayerRecord};
use price_model::{mean, PlayerSnapshot};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Player Registry - current-round price data for every player
///
/// Loaded once at startup and read-only afterwards, so it can be shared
/// behind an `Arc` across requests.
pub struct PlayerRegistry {
    /// Map from player ID to record
    players_by_id: HashMap<String, PlayerRecord>,

    /// Map from player name to player ID (for quick lookup)
    ids_by_name: HashMap<String, String>,

    /// Round the loaded data applies to
    round: Option<u32>,
}

impl PlayerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { players_by_id: HashMap::new(), ids_by_name: HashMap::new(), round: None }
    }

    /// Load player data from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(
        &mut self,
        file_path: P,
    ) -> Result<(), PlayerLookupError> {
        info!("Loading player data from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path)
            .await
            .map_err(|e| PlayerLookupError::LoadFailed(e.to_string()))?;
        let player_data: PlayerData = serde_json::from_str(&json_content)
            .map_err(|e| PlayerLookupError::LoadFailed(e.to_string()))?;

        info!("Loaded {} players for round {}", player_data.players.len(), player_data.round);

        self.load_player_data(player_data);
        Ok(())
    }

    /// Replace registry contents with `data`
    pub fn load_player_data(&mut self, data: PlayerData) {
        self.round = Some(data.round);
        self.create_player_mappings(data.players);
        info!("Registry holds {} players", self.player_count());
    }

    fn create_player_mappings(&mut self, players: Vec<PlayerRecord>) {
        self.players_by_id.clear();
        self.ids_by_name.clear();

        for player in players {
            if player.price <= 0 {
                warn!(
                    "Skipping {} ({}): non-positive price {}",
                    player.name, player.player_id, player.price
                );
                continue;
            }

            if let Some(previous) = self.players_by_id.get(&player.player_id) {
                warn!(
                    "Duplicate player ID {}: replacing {} with {}",
                    player.player_id, previous.name, player.name
                );
                self.ids_by_name.remove(&previous.name);
            }

            self.ids_by_name.insert(player.name.clone(), player.player_id.clone());
            self.players_by_id.insert(player.player_id.clone(), player);
        }
    }

    /// Get a player by ID
    pub fn get_by_id(&self, player_id: &str) -> Result<&PlayerRecord, PlayerLookupError> {
        self.players_by_id
            .get(player_id)
            .ok_or_else(|| PlayerLookupError::PlayerNotFound(player_id.to_string()))
    }

    /// Get a player by exact name
    pub fn get_by_name(&self, name: &str) -> Result<&PlayerRecord, PlayerLookupError> {
        let player_id = self
            .ids_by_name
            .get(name)
            .ok_or_else(|| PlayerLookupError::PlayerNotFound(name.to_string()))?;

        self.get_by_id(player_id)
    }

    /// Validated snapshot for `player_id` with the given projected scores
    pub fn snapshot(
        &self,
        player_id: &str,
        projected_scores: Vec<f64>,
    ) -> Result<PlayerSnapshot, PlayerLookupError> {
        let snapshot = self.get_by_id(player_id)?.snapshot(projected_scores);
        snapshot.validate().map_err(|e| PlayerLookupError::InvalidPlayer {
            player_id: player_id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(snapshot)
    }

    /// Mean of every player's latest actual score; `None` before anyone has played
    pub fn round_average_score(&self) -> Option<f64> {
        let latest: Vec<f64> = self.players_by_id.values().filter_map(|p| p.last_score()).collect();
        if latest.is_empty() {
            None
        } else {
            Some(mean(&latest))
        }
    }

    /// Get all players
    pub fn get_all_players(&self) -> Vec<&PlayerRecord> {
        self.players_by_id.values().collect()
    }

    /// Search for players by partial name match
    pub fn search_players(&self, query: &str) -> Vec<&PlayerRecord> {
        let query_lower = query.to_lowercase();
        self.players_by_id
            .values()
            .filter(|player| player.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Round the loaded data applies to
    pub fn current_round(&self) -> Option<u32> {
        self.round
    }

    pub fn player_count(&self) -> usize {
        self.players_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
