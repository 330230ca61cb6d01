/// Game session owner and its memento.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::history::Originator;

/// Captured game state. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMemento {
    level: u32,
    health: u32,
    position: String,
}

impl GameMemento {
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

impl fmt::Display for GameMemento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level: {}, health: {}, position: {}",
            self.level, self.health, self.position
        )
    }
}

/// A running game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    level: u32,
    health: u32,
    position: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1, 100, "start")
    }
}

impl Game {
    pub fn new(level: u32, health: u32, position: impl Into<String>) -> Self {
        Self {
            level,
            health,
            position: position.into(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Advances the session to a new level, health and position.
    pub fn play(&mut self, level: u32, health: u32, position: impl Into<String>) {
        self.level = level;
        self.health = health;
        self.position = position.into();
        tracing::debug!(level, health, position = %self.position, "Game advanced");
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level: {}, health: {}, position: {}",
            self.level, self.health, self.position
        )
    }
}

impl Originator for Game {
    type Snapshot = GameMemento;

    fn snapshot(&self) -> GameMemento {
        GameMemento {
            level: self.level,
            health: self.health,
            position: self.position.clone(),
        }
    }

    fn restore(&mut self, memento: &GameMemento) {
        self.level = memento.level;
        self.health = memento.health;
        self.position.clone_from(&memento.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Tracked;

    #[test]
    fn test_default_game() {
        let game = Game::default();
        assert_eq!(game.level(), 1);
        assert_eq!(game.health(), 100);
        assert_eq!(game.position(), "start");
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut game = Game::default();
        game.play(2, 90, "Enchanted Forest");
        let memento = game.snapshot();

        game.play(3, 70, "Dark Cave");
        game.restore(&memento);
        assert_eq!(game, Game::new(2, 90, "Enchanted Forest"));
        assert_eq!(memento.position(), "Enchanted Forest");
    }

    #[test]
    fn test_undo_keeps_later_levels_redoable() {
        let mut session = Tracked::new(Game::default());
        session.apply(|g| g.play(2, 90, "Enchanted Forest"));
        session.apply(|g| g.play(3, 70, "Dark Cave"));
        session.apply(|g| g.play(4, 50, "Dragon Castle"));

        assert!(session.undo());
        assert!(session.undo());
        assert_eq!(session.owner().level(), 2);

        assert!(session.redo());
        assert_eq!(session.owner().position(), "Dark Cave");
        assert_eq!(session.history().redo_depth(), 1);
    }

    #[test]
    fn test_display() {
        let game = Game::new(4, 50, "Dragon Castle");
        assert_eq!(
            game.to_string(),
            "level: 4, health: 50, position: Dragon Castle"
        );
        assert_eq!(game.snapshot().to_string(), game.to_string());
    }
}
