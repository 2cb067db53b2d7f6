use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Result of dispatching a label click to the axis-selection machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The clicked field was already active. Repeated clicks on the active
    /// label must not re-trigger recomputation or animation.
    AlreadyActive,
    Changed { previous: String },
}

/// Exactly-one-active selector over the selectable horizontal fields.
///
/// The machine has no terminal state; it persists for the chart's lifetime
/// and accepts further transitions indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    fields: Vec<String>,
    default_field: String,
    active: String,
}

impl AxisSelection {
    pub fn new(fields: Vec<String>, default_field: &str) -> ChartResult<Self> {
        if fields.is_empty() {
            return Err(ChartError::InvalidData(
                "axis selection requires at least one field".to_owned(),
            ));
        }
        for (index, field) in fields.iter().enumerate() {
            if fields[..index].contains(field) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate axis field `{field}`"
                )));
            }
        }
        if !fields.iter().any(|field| field == default_field) {
            return Err(ChartError::UnknownField(default_field.to_owned()));
        }

        Ok(Self {
            fields,
            default_field: default_field.to_owned(),
            active: default_field.to_owned(),
        })
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    #[must_use]
    pub fn default_field(&self) -> &str {
        &self.default_field
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|known| known == field)
    }

    #[must_use]
    pub fn is_active(&self, field: &str) -> bool {
        self.active == field
    }

    /// Applies a user selection event. Selecting the active field is an
    /// idempotent no-op; selecting an inactive field activates it and
    /// deactivates the previous one, keeping exactly one label active.
    pub fn select(&mut self, field: &str) -> ChartResult<SelectionOutcome> {
        if !self.contains(field) {
            return Err(ChartError::UnknownField(field.to_owned()));
        }
        if self.active == field {
            return Ok(SelectionOutcome::AlreadyActive);
        }

        let previous = std::mem::replace(&mut self.active, field.to_owned());
        Ok(SelectionOutcome::Changed { previous })
    }

    /// Restores the default field. Used by the resize rebuild path.
    pub fn reset(&mut self) {
        self.active = self.default_field.clone();
    }

    /// Label states in declaration order, `(field, is_active)`.
    pub fn labels(&self) -> impl Iterator<Item = (&str, bool)> {
        self.fields
            .iter()
            .map(|field| (field.as_str(), *field == self.active))
    }
}

/// Click-to-show tooltip bookkeeping. Shown on point activation, hidden on
/// pointer exit; there is no timer-based auto-hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    record_index: Option<usize>,
}

impl TooltipState {
    /// Shows the tooltip for one record, replacing any previously shown one.
    pub fn show_for(&mut self, record_index: usize) {
        self.record_index = Some(record_index);
    }

    pub fn hide(&mut self) {
        self.record_index = None;
    }

    #[must_use]
    pub fn visible_record(self) -> Option<usize> {
        self.record_index
    }
}
