//! # TasteLog Core Library
//!
//! This library provides the core state and logic for TasteLog, a
//! single-user cooking companion. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with
//! any graphical shell being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Application Store**: the single authoritative holder of recipes,
//!   notes, timer presets, achievements, and stats; persists user data
//!   through a key-value gateway and re-evaluates achievements after
//!   every stat-affecting mutation
//! - **Achievement Evaluator**: pure unlock decisions over current stats
//! - **Countdown Timer**: a caller-ticked state machine that requires the
//!   consumer to invoke `tick()` once per second while running
//! - **Storage**: SQLite-backed key-value persistence and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`AppStore`]: application state store
//! - [`CountdownTimer`]: countdown state machine
//! - [`Database`]: key-value persistence
//! - [`Config`]: application configuration management

pub mod achievements;
pub mod domain;
pub mod error;
pub mod events;
pub mod storage;
pub mod store;
pub mod timer;

pub use domain::{
    Achievement, CulinaryNote, Difficulty, NoteCategory, Recipe, RecipeCategory, Requirement,
    TimerCategory, TimerPreset, UserStats,
};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use storage::{Config, Database, Gateway, MemoryGateway};
pub use store::AppStore;
pub use timer::{CountdownTimer, TimerState};
