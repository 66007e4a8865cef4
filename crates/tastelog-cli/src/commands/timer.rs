use clap::Subcommand;

use tastelog_core::{Config, CountdownTimer, Database, Event, ValidationError};

use super::{announce_unlocks, open_store};

const TIMER_KEY: &str = "countdown_timer";

#[derive(Subcommand)]
pub enum TimerAction {
    /// List built-in timer presets
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start a new countdown (records a timer use)
    Start {
        /// Preset name, e.g. "Perfect Pasta"
        #[arg(long, conflicts_with = "secs")]
        preset: Option<String>,
        /// Custom duration in seconds (defaults to timer.custom_duration_secs)
        #[arg(long)]
        secs: Option<u32>,
        /// Label for a custom timer
        #[arg(long)]
        label: Option<String>,
    },
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Stop the countdown and restore the full duration
    Stop,
    /// Reset to idle at the full duration
    Reset,
    /// Add or subtract whole seconds (idle or paused only)
    Adjust { delta_secs: i64 },
    /// Advance the countdown by one second
    Tick,
    /// Print current countdown state as JSON
    Status,
}

fn load_timer(db: &Database) -> Option<CountdownTimer> {
    let json = db.kv_get(TIMER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

fn save_timer(db: &Database, timer: &CountdownTimer) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(timer)?;
    db.kv_set(TIMER_KEY, &json)?;
    Ok(())
}

fn require_timer(db: &Database) -> Result<CountdownTimer, Box<dyn std::error::Error>> {
    load_timer(db).ok_or_else(|| "no countdown started yet".into())
}

fn print_event(event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = event {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        TimerAction::Presets { json } => {
            let store = open_store()?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.presets())?);
            } else {
                for preset in store.presets() {
                    println!(
                        "{}  {}  ({} s, {})",
                        preset.icon, preset.name, preset.duration_secs, preset.category
                    );
                }
            }
        }
        TimerAction::Start {
            preset,
            secs,
            label,
        } => {
            let mut store = open_store()?;
            let (duration_secs, name) = match preset {
                Some(wanted) => {
                    let preset = store
                        .presets()
                        .iter()
                        .find(|p| p.name.eq_ignore_ascii_case(&wanted))
                        .ok_or_else(|| format!("no preset named '{wanted}'"))?;
                    (preset.duration_secs, preset.name.clone())
                }
                None => {
                    let duration =
                        secs.unwrap_or_else(|| Config::load_or_default().timer.custom_duration_secs);
                    if duration == 0 {
                        return Err(ValidationError::ZeroDuration.into());
                    }
                    (duration, label.unwrap_or_else(|| "Custom Timer".into()))
                }
            };

            let mut timer = CountdownTimer::new(duration_secs, name);
            let event = timer.start();
            save_timer(&db, &timer)?;

            // One use per started timer, preset or custom.
            let events = store.increment_timers_used();
            announce_unlocks(&events);
            print_event(event)?;
        }
        TimerAction::Pause => {
            let mut timer = require_timer(&db)?;
            let event = timer.pause();
            save_timer(&db, &timer)?;
            print_event(event)?;
        }
        TimerAction::Resume => {
            let mut timer = require_timer(&db)?;
            let event = timer.start();
            save_timer(&db, &timer)?;
            print_event(event)?;
        }
        TimerAction::Stop => {
            let mut timer = require_timer(&db)?;
            let event = timer.stop();
            save_timer(&db, &timer)?;
            print_event(event)?;
        }
        TimerAction::Reset => {
            let mut timer = require_timer(&db)?;
            let event = timer.reset();
            save_timer(&db, &timer)?;
            print_event(event)?;
        }
        TimerAction::Adjust { delta_secs } => {
            let mut timer = require_timer(&db)?;
            match timer.adjust(delta_secs) {
                Some(event) => {
                    save_timer(&db, &timer)?;
                    print_event(Some(event))?;
                }
                None => return Err("adjust is only available while idle or paused".into()),
            }
        }
        TimerAction::Tick => {
            let mut timer = require_timer(&db)?;
            let event = timer.tick();
            save_timer(&db, &timer)?;
            if let Some(Event::TimerFinished { ref label, .. }) = event {
                eprintln!("Timer finished: {label}");
            }
            print_event(event)?;
        }
        TimerAction::Status => {
            let timer = require_timer(&db)?;
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
    }
    Ok(())
}
