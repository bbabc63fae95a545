//! # a3s-schedule
//!
//! Bidirectional translation between structured schedule intents and cron
//! expressions, plus a reentrancy-safe editor that keeps a two-way bound
//! expression consistent with user edits.
//!
//! ## Overview
//!
//! Users pick "every N minutes", "daily at 06:00", "weekly on Monday" and so
//! on; the scheduling backend only stores a cron string. `a3s-schedule`
//! converts between the two without ever rejecting text: anything the
//! structured modes cannot hold is kept verbatim as a custom expression.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_schedule::{build, parse, EditorConfig, FieldEdit, ScheduleEditor, ScheduleIntent};
//!
//! // Parse and rebuild
//! let intent = parse("30 2 15 * *");
//! assert_eq!(intent, ScheduleIntent::monthly(15, 2, 30, 0));
//! assert_eq!(build(&intent), "30 2 15 * *");
//!
//! // Drive an editor
//! let mut editor = ScheduleEditor::new(EditorConfig::default());
//! let mut changes = editor.subscribe();
//!
//! editor.set_external_value("0 6 * * *");
//! editor.settle();
//!
//! let emitted = editor.apply_edit(FieldEdit::Hour(7));
//! assert_eq!(emitted.as_deref(), Some("0 7 * * *"));
//! assert_eq!(changes.try_recv().unwrap().expression, "0 7 * * *");
//! ```
//!
//! ## Architecture
//!
//! - **field** — classifies one cron token (wildcard, fixed, step, unsupported)
//! - **parser** — cron string → `ScheduleIntent`, priority-ordered shape matching
//! - **builder** — `ScheduleIntent` → canonical cron string
//! - **controller** — `ScheduleEditor`, the guarded host/field synchronization
//! - **preview** — boundary to the external expression humanizer

pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod intent;
pub mod parser;
pub mod preview;

// Re-export core types
pub use builder::{build, clamp_every, normalize, MAX_EVERY};
pub use config::EditorConfig;
pub use controller::{ChangeEvent, EditorPhase, FieldEdit, ScheduleEditor};
pub use error::{Result, ScheduleError};
pub use field::{classify, CronField};
pub use intent::{weekday_from_cron, IntervalUnit, ScheduleIntent, ScheduleMode, TimeOfDay};
pub use parser::{parse, CronFields};
pub use preview::{ExpressionHumanizer, Preview};
