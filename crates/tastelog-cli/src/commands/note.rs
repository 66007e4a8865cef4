use clap::Subcommand;
use uuid::Uuid;

use tastelog_core::{CulinaryNote, NoteCategory};

use super::{announce_unlocks, open_store};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note (newest notes list first)
    Add {
        title: String,
        content: String,
        /// experiment | tip | review | idea | technique
        #[arg(long, default_value = "experiment")]
        category: String,
    },
    /// List notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a note by id
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a note by id
    Rm { id: Uuid },
}

fn parse_category(raw: &str) -> Result<NoteCategory, String> {
    match raw.to_ascii_lowercase().as_str() {
        "experiment" => Ok(NoteCategory::Experiment),
        "tip" => Ok(NoteCategory::Tip),
        "review" => Ok(NoteCategory::Review),
        "idea" => Ok(NoteCategory::Idea),
        "technique" => Ok(NoteCategory::Technique),
        other => Err(format!(
            "unknown note category '{other}' (expected experiment, tip, review, idea, or technique)"
        )),
    }
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NoteAction::Add {
            title,
            content,
            category,
        } => {
            let mut store = open_store()?;
            let note = CulinaryNote::new(title, content, parse_category(&category)?)?;
            let id = note.id;
            let events = store.add_note(note)?;
            announce_unlocks(&events);
            println!("Note created: {id}");
        }
        NoteAction::List { json } => {
            let store = open_store()?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.notes())?);
            } else {
                for note in store.notes() {
                    println!(
                        "{}  [{}]  {}  (modified {})",
                        note.id,
                        note.category,
                        note.title,
                        note.date_modified.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        NoteAction::Edit {
            id,
            title,
            content,
            category,
        } => {
            let mut store = open_store()?;
            let mut note = store
                .note(id)
                .ok_or_else(|| format!("no note with id {id}"))?
                .clone();
            if let Some(title) = title {
                note.title = title;
            }
            if let Some(content) = content {
                note.content = content;
            }
            if let Some(category) = category {
                note.category = parse_category(&category)?;
            }
            store.update_note(note)?;
            println!("Note updated: {id}");
        }
        NoteAction::Rm { id } => {
            let mut store = open_store()?;
            store.delete_note(id);
            println!("Note deleted: {id}");
        }
    }
    Ok(())
}
