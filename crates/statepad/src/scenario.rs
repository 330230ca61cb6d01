/// Scripted runs of the editor, game, and raw-history scenarios.
use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use statepad_config::{EditorDefaults, GameDefaults};
use statepad_core::{CodeEditor, EditorState, EditorStateUpdate, Game, Tracked, VersionedHistory};

/// One step of a `replay` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOp {
    Save(String),
    Undo,
    Redo,
}

impl FromStr for ReplayOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            _ => match s.strip_prefix("save:") {
                Some(value) => Ok(Self::Save(value.to_string())),
                None => bail!("unknown operation '{s}' (expected save:VALUE, undo or redo)"),
            },
        }
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize history")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Edits the buffer twice, then undoes and redoes the last edit.
pub fn run_editor(defaults: &EditorDefaults, json: bool, out: &mut dyn Write) -> Result<()> {
    let initial = EditorState::new(defaults.initial_content.clone(), 0, false);
    let mut editor = Tracked::new(CodeEditor::new(initial));
    let text = !json;

    if text {
        writeln!(out, "Initial State:\n{}\n", editor.owner().state())?;
    }

    editor.apply(|e| {
        e.edit(
            EditorStateUpdate::default()
                .content("Updated content")
                .cursor_position(5)
                .unsaved_changes(true),
        )
    });
    if text {
        writeln!(out, "After Update:\n{}\n", editor.owner().state())?;
    }

    editor.apply(|e| e.edit(EditorStateUpdate::default().cursor_position(10)));
    if text {
        writeln!(out, "After Cursor Move:\n{}\n", editor.owner().state())?;
    }

    if editor.undo() && text {
        writeln!(out, "After Undo:\n{}\n", editor.owner().state())?;
    }
    if editor.redo() && text {
        writeln!(out, "After Redo:\n{}", editor.owner().state())?;
    }

    if json {
        write_json(out, editor.history())?;
    }
    Ok(())
}

/// Plays three levels, then walks back two of them.
pub fn run_game(defaults: &GameDefaults, json: bool, out: &mut dyn Write) -> Result<()> {
    let mut session = Tracked::new(Game::new(
        defaults.level,
        defaults.health,
        defaults.position.clone(),
    ));
    let text = !json;

    if text {
        writeln!(out, "Playing: {}", session.owner())?;
    }

    let stages = [
        (2, 90, "Enchanted Forest"),
        (3, 70, "Dark Cave"),
        (4, 50, "Dragon Castle"),
    ];
    for (level, health, position) in stages {
        session.apply(|g| g.play(level, health, position));
        if text {
            writeln!(out, "Playing: {}", session.owner())?;
        }
    }

    if text {
        writeln!(out, "Current state: {}", session.owner())?;
    }
    for _ in 0..2 {
        if session.undo() && text {
            writeln!(out, "State restored: {}", session.owner())?;
        }
    }

    if json {
        write_json(out, session.history())?;
    }
    Ok(())
}

/// Applies `ops` to a fresh string history and reports each result.
pub fn run_replay(ops: &[ReplayOp], json: bool, out: &mut dyn Write) -> Result<()> {
    let mut history: VersionedHistory<String> = VersionedHistory::new();

    for op in ops {
        let line = match op {
            ReplayOp::Save(value) => {
                history.save(value.clone());
                format!("save {value}")
            }
            ReplayOp::Undo => format!("undo -> {}", describe(history.undo())),
            ReplayOp::Redo => format!("redo -> {}", describe(history.redo())),
        };
        if !json {
            writeln!(out, "{line}")?;
        }
    }

    if json {
        return write_json(out, &history);
    }

    writeln!(out, "buffer: [{}]", history.snapshots().join(", "))?;
    match history.cursor() {
        Some(c) => writeln!(out, "cursor: {c}")?,
        None => writeln!(out, "cursor: none")?,
    }
    Ok(())
}

fn describe(snapshot: Option<&String>) -> &str {
    snapshot.map_or("absent", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).expect("scenario");
        String::from_utf8(buf).expect("utf8")
    }

    fn ops(raw: &[&str]) -> Vec<ReplayOp> {
        raw.iter().map(|s| s.parse().expect("parse op")).collect()
    }

    #[test]
    fn test_parse_replay_ops() {
        assert_eq!("undo".parse::<ReplayOp>().unwrap(), ReplayOp::Undo);
        assert_eq!("redo".parse::<ReplayOp>().unwrap(), ReplayOp::Redo);
        assert_eq!(
            "save:v1".parse::<ReplayOp>().unwrap(),
            ReplayOp::Save("v1".to_string())
        );
        assert_eq!(
            "save:".parse::<ReplayOp>().unwrap(),
            ReplayOp::Save(String::new())
        );
        assert!("jump".parse::<ReplayOp>().is_err());
    }

    #[test]
    fn test_replay_branch_scenario() {
        let ops = ops(&[
            "save:v1", "save:v2", "save:v3", "undo", "undo", "redo", "save:v2b", "redo",
        ]);
        let text = output_of(|out| run_replay(&ops, false, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "undo -> v2");
        assert_eq!(lines[4], "undo -> v1");
        assert_eq!(lines[5], "redo -> v2");
        assert_eq!(lines[7], "redo -> absent");
        assert_eq!(lines[8], "buffer: [v1, v2, v2b]");
        assert_eq!(lines[9], "cursor: 2");
    }

    #[test]
    fn test_replay_empty_history() {
        let ops = ops(&["undo", "redo"]);
        let text = output_of(|out| run_replay(&ops, false, out));
        assert!(text.contains("undo -> absent"));
        assert!(text.contains("redo -> absent"));
        assert!(text.contains("cursor: none"));
    }

    #[test]
    fn test_replay_json() {
        let ops = ops(&["save:a", "save:b", "undo"]);
        let text = output_of(|out| run_replay(&ops, true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["snapshots"], serde_json::json!(["a", "b"]));
        assert_eq!(value["cursor"], 0);
    }

    #[test]
    fn test_editor_text_output() {
        let text = output_of(|out| run_editor(&EditorDefaults::default(), false, out));
        assert!(text.contains("Initial State:\nContent: Initial content"));
        let undo = text.split("After Undo:").nth(1).expect("undo section");
        assert!(undo.contains("Cursor Position: 5"));
        let redo = text.split("After Redo:").nth(1).expect("redo section");
        assert!(redo.contains("Cursor Position: 10"));
    }

    #[test]
    fn test_editor_json_output() {
        let text = output_of(|out| run_editor(&EditorDefaults::default(), true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["snapshots"].as_array().unwrap().len(), 3);
        assert_eq!(value["cursor"], 2);
        assert_eq!(value["snapshots"][2]["cursor_position"], 10);
    }

    #[test]
    fn test_game_walks_back_two_levels() {
        let text = output_of(|out| run_game(&GameDefaults::default(), false, out));
        let restored: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("State restored:"))
            .collect();
        assert_eq!(restored.len(), 2);
        assert!(restored[0].contains("level: 3"));
        assert!(restored[1].contains("level: 2"));
    }

    #[test]
    fn test_game_json_keeps_undone_levels() {
        let text = output_of(|out| run_game(&GameDefaults::default(), true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["snapshots"].as_array().unwrap().len(), 4);
        assert_eq!(value["cursor"], 1);
        assert_eq!(value["snapshots"][0]["position"], "start");
    }
}
