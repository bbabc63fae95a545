//! Schedule editor synchronization
//!
//! [`ScheduleEditor`] owns the expression string shared with the host and
//! the structured intent the user edits. Two triggers drive it:
//!
//! - **External set** ([`ScheduleEditor::set_external_value`]): the host
//!   supplies a new expression. The intent is rebuilt from scratch and the
//!   editor enters [`EditorPhase::ApplyingExternal`] until the host calls
//!   [`ScheduleEditor::settle`] at the end of its tick.
//! - **User edit** ([`ScheduleEditor::apply_edit`]): a structured field
//!   changed. Edits arriving while applying an external value are echoes of
//!   that write and are dropped. Otherwise the expression is rebuilt and, if
//!   it differs from the current value, published to subscribers.
//!
//! The editor is single-threaded; each instance has its own guard.

use tokio::sync::broadcast;

use crate::builder::{
    build, clamp_day_of_month, clamp_day_of_week, clamp_every, clamp_hour, clamp_sixty,
};
use crate::config::EditorConfig;
use crate::intent::{IntervalUnit, ScheduleIntent, ScheduleMode, TimeOfDay};
use crate::parser::parse;
use crate::preview::{ExpressionHumanizer, Preview};

/// Weekday picked when switching into weekly mode (Monday)
const DEFAULT_DAY_OF_WEEK: u32 = 1;
/// Day picked when switching into monthly mode
const DEFAULT_DAY_OF_MONTH: u32 = 1;
/// Cadence picked when switching into interval mode (hours)
const DEFAULT_EVERY_HOURS: i64 = 1;

/// Reentrancy guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Field edits are genuine user input
    Idle,
    /// An external value is being drawn into the fields
    ApplyingExternal,
}

/// A change to one structured field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Mode(ScheduleMode),
    Unit(IntervalUnit),
    /// Interval count; rounded and clamped to `1..=MAX_EVERY`
    Every(f64),
    MinuteOffset(u32),
    SecondOffset(u32),
    Hour(u32),
    Minute(u32),
    Second(u32),
    /// 0-6 with 0 = Sunday; 7 is accepted as Sunday
    DayOfWeek(u32),
    DayOfMonth(u32),
    /// Expression text typed into the custom (advanced) input
    Raw(String),
}

/// Published whenever a user edit produces a new expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Editor that produced the change
    pub editor_id: String,
    /// The new canonical expression
    pub expression: String,
}

/// Two-way bound schedule editor
#[derive(Debug)]
pub struct ScheduleEditor {
    id: String,
    config: EditorConfig,
    /// Host-visible expression
    value: String,
    intent: ScheduleIntent,
    phase: EditorPhase,
    change_tx: broadcast::Sender<ChangeEvent>,
}

impl ScheduleEditor {
    /// Create an editor showing the default intent
    pub fn new(config: EditorConfig) -> Self {
        Self::with_value(config, "")
    }

    /// Create an editor bound to an initial expression
    ///
    /// The initial value is applied during construction, so the editor
    /// starts out [`EditorPhase::Idle`].
    pub fn with_value(config: EditorConfig, expression: &str) -> Self {
        let (change_tx, _) = broadcast::channel(100);
        let mut editor = Self {
            id: format!("sched-{}", uuid::Uuid::new_v4()),
            intent: config.default_intent(),
            config,
            value: String::new(),
            phase: EditorPhase::Idle,
            change_tx,
        };
        editor.set_external_value(expression);
        editor.settle();
        editor
    }

    /// Subscribe to expression changes
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.change_tx.subscribe()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The host-visible expression
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The structured state currently drawn in the fields
    pub fn intent(&self) -> &ScheduleIntent {
        &self.intent
    }

    pub fn mode(&self) -> ScheduleMode {
        self.intent.mode()
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Show or hide the custom (advanced) mode
    ///
    /// Takes effect on the next external set or mode switch.
    pub fn set_allow_custom(&mut self, allow: bool) {
        self.config.allow_custom = allow;
    }

    /// Host → editor: a new expression value
    ///
    /// Never publishes a change. Empty input, and custom text while the
    /// custom mode is hidden, draw the default intent instead. A later set
    /// simply replaces the state of an earlier one.
    pub fn set_external_value(&mut self, expression: &str) {
        self.phase = EditorPhase::ApplyingExternal;
        self.value = expression.to_string();
        self.intent = self.resolve(expression);

        tracing::debug!(
            editor_id = %self.id,
            expression,
            mode = %self.intent.mode(),
            "Applied external schedule value"
        );
    }

    /// End of the host tick: resume treating field edits as user input
    pub fn settle(&mut self) {
        self.phase = EditorPhase::Idle;
    }

    /// Editor ← user: one structured field changed
    ///
    /// Returns the published expression, or `None` when the edit was an
    /// echo, did not apply to the current mode, or left the expression
    /// unchanged.
    pub fn apply_edit(&mut self, edit: FieldEdit) -> Option<String> {
        if self.phase == EditorPhase::ApplyingExternal {
            tracing::debug!(editor_id = %self.id, ?edit, "Ignoring field echo during external set");
            return None;
        }

        self.intent = self.edited(edit)?;

        let expression = build(&self.intent);
        if expression == self.value {
            return None;
        }

        self.value = expression.clone();
        tracing::debug!(editor_id = %self.id, expression = %expression, "Schedule changed");

        // No subscribers is fine
        let _ = self.change_tx.send(ChangeEvent {
            editor_id: self.id.clone(),
            expression: expression.clone(),
        });
        Some(expression)
    }

    /// Ask the humanizer about the current value
    ///
    /// Collaborator failures are logged and reported as an invalid preview.
    pub async fn preview(&self, humanizer: &dyn ExpressionHumanizer) -> Preview {
        match humanizer
            .describe(&self.value, &self.config.locale, &self.config.timezone)
            .await
        {
            Ok(preview) => preview,
            Err(e) => {
                tracing::warn!(editor_id = %self.id, error = %e, "Schedule preview unavailable");
                Preview::invalid()
            }
        }
    }

    fn resolve(&self, expression: &str) -> ScheduleIntent {
        if expression.trim().is_empty() {
            return self.config.default_intent();
        }

        let intent = parse(expression);
        if !intent.is_structured() && !self.config.allow_custom {
            tracing::debug!(
                editor_id = %self.id,
                expression,
                "Custom mode hidden, falling back to default schedule"
            );
            return self.config.default_intent();
        }
        intent
    }

    fn edited(&self, edit: FieldEdit) -> Option<ScheduleIntent> {
        let mut intent = self.intent.clone();

        match (&mut intent, edit) {
            (_, FieldEdit::Mode(mode)) => return self.switched(mode),
            (
                ScheduleIntent::Interval {
                    unit,
                    minute_offset,
                    second_offset,
                    ..
                },
                FieldEdit::Unit(next),
            ) => {
                *unit = next;
                if next != IntervalUnit::Hours {
                    *minute_offset = 0;
                }
                if next == IntervalUnit::Seconds {
                    *second_offset = 0;
                }
            }
            (ScheduleIntent::Interval { every, .. }, FieldEdit::Every(n)) => {
                *every = clamp_every(n);
            }
            (
                ScheduleIntent::Interval {
                    unit: IntervalUnit::Hours,
                    minute_offset,
                    ..
                },
                FieldEdit::MinuteOffset(m),
            ) => *minute_offset = clamp_sixty(m),
            (
                ScheduleIntent::Interval {
                    unit: IntervalUnit::Minutes | IntervalUnit::Hours,
                    second_offset,
                    ..
                },
                FieldEdit::SecondOffset(s),
            ) => *second_offset = clamp_sixty(s),
            (
                ScheduleIntent::Daily { hour, .. }
                | ScheduleIntent::Weekly { hour, .. }
                | ScheduleIntent::Monthly { hour, .. },
                FieldEdit::Hour(h),
            ) => *hour = clamp_hour(h),
            (
                ScheduleIntent::Daily { minute, .. }
                | ScheduleIntent::Weekly { minute, .. }
                | ScheduleIntent::Monthly { minute, .. },
                FieldEdit::Minute(m),
            ) => *minute = clamp_sixty(m),
            (
                ScheduleIntent::Daily { second, .. }
                | ScheduleIntent::Weekly { second, .. }
                | ScheduleIntent::Monthly { second, .. },
                FieldEdit::Second(s),
            ) => *second = clamp_sixty(s),
            (ScheduleIntent::Weekly { day_of_week, .. }, FieldEdit::DayOfWeek(d)) => {
                *day_of_week = clamp_day_of_week(d);
            }
            (ScheduleIntent::Monthly { day_of_month, .. }, FieldEdit::DayOfMonth(d)) => {
                *day_of_month = clamp_day_of_month(d);
            }
            (ScheduleIntent::Custom { raw }, FieldEdit::Raw(text)) => *raw = text,
            (current, edit) => {
                tracing::debug!(
                    editor_id = %self.id,
                    mode = %current.mode(),
                    ?edit,
                    "Field edit does not apply to current mode"
                );
                return None;
            }
        }

        Some(intent)
    }

    fn switched(&self, mode: ScheduleMode) -> Option<ScheduleIntent> {
        if mode == self.intent.mode() {
            return None;
        }

        let time = self.intent.time_of_day().unwrap_or_else(|| TimeOfDay {
            hour: clamp_hour(self.config.default_hour),
            ..TimeOfDay::default()
        });

        let intent = match mode {
            ScheduleMode::Interval => ScheduleIntent::every_hours(DEFAULT_EVERY_HOURS, 0, 0),
            ScheduleMode::Daily => ScheduleIntent::daily(time.hour, time.minute, time.second),
            ScheduleMode::Weekly => {
                ScheduleIntent::weekly(DEFAULT_DAY_OF_WEEK, time.hour, time.minute, time.second)
            }
            ScheduleMode::Monthly => {
                ScheduleIntent::monthly(DEFAULT_DAY_OF_MONTH, time.hour, time.minute, time.second)
            }
            ScheduleMode::Custom => {
                if !self.config.allow_custom {
                    tracing::debug!(editor_id = %self.id, "Custom mode hidden, ignoring switch");
                    return None;
                }
                ScheduleIntent::custom(build(&self.intent))
            }
        };
        Some(intent)
    }
}
