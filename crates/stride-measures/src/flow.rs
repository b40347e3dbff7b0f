//! Selection→entry flow.
//!
//! `EntryFlow` is the state machine behind the entry modal:
//! `DomainSelect → MeasureSelect → EntryForm`, with two shortcuts that jump
//! straight to the form (a recent/favorite measure, or opening an existing
//! entry for edit). The form is terminal: it exits via save or cancel.
//!
//! `ActionGate` debounces an in-flight save/delete, and `EntryLedger`
//! supports optimistic list updates with exact rollback when the network
//! call fails.

use stride_core::models::{OutcomeEntry, OutcomeMeasure};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog;
use crate::draft::EntryDraft;
use crate::error::MeasureError;
use crate::reconcile::{ReconcileError, ResultMismatch, reconcile};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("cannot {action} while in {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// One modal's flow state. Transitions consume the flow and return the
/// next state, so a stale handle cannot act twice.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryFlow {
    DomainSelect,
    MeasureSelect { domain_id: String },
    EntryForm { draft: EntryDraft, editing: Option<Uuid> },
}

impl EntryFlow {
    pub fn start() -> Self {
        EntryFlow::DomainSelect
    }

    fn state_name(&self) -> &'static str {
        match self {
            EntryFlow::DomainSelect => "domain selection",
            EntryFlow::MeasureSelect { .. } => "measure selection",
            EntryFlow::EntryForm { .. } => "the entry form",
        }
    }

    pub fn select_domain(self, domain_id: &str) -> Result<Self, FlowError> {
        match self {
            EntryFlow::DomainSelect => {
                // Existence check only; the member list is fetched on render.
                catalog::list_measures(domain_id)?;
                Ok(EntryFlow::MeasureSelect {
                    domain_id: domain_id.to_string(),
                })
            }
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
                action: "select a domain",
            }),
        }
    }

    pub fn select_measure(
        self,
        measure_id: &str,
        appointment_id: Uuid,
    ) -> Result<Self, FlowError> {
        match self {
            EntryFlow::MeasureSelect { .. } => {
                let measure = catalog::get_measure(measure_id)?;
                Ok(EntryFlow::EntryForm {
                    draft: EntryDraft::new(measure, appointment_id),
                    editing: None,
                })
            }
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
                action: "select a measure",
            }),
        }
    }

    /// Shortcut: open a recent/favorite measure directly, from any state.
    pub fn open_measure(self, measure_id: &str, appointment_id: Uuid) -> Result<Self, FlowError> {
        let measure = catalog::get_measure(measure_id)?;
        Ok(EntryFlow::EntryForm {
            draft: EntryDraft::new(measure, appointment_id),
            editing: None,
        })
    }

    /// Shortcut: open an existing entry for edit, pre-populated by
    /// reconciliation. Returns the mismatch flag alongside the new state so
    /// the caller can surface it.
    pub fn open_entry(
        self,
        measure: &OutcomeMeasure,
        entry: &OutcomeEntry,
    ) -> Result<(Self, Option<ResultMismatch>), FlowError> {
        let reconciled = reconcile(measure, entry)?;
        Ok((
            EntryFlow::EntryForm {
                draft: reconciled.draft,
                editing: entry.id,
            },
            reconciled.mismatch,
        ))
    }

    /// Exit via save: yields the draft (and the entry id when editing) for
    /// the caller to build and persist.
    pub fn save(self) -> Result<(EntryDraft, Option<Uuid>), FlowError> {
        match self {
            EntryFlow::EntryForm { draft, editing } => Ok((draft, editing)),
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
                action: "save",
            }),
        }
    }

    /// Exit via cancel: the draft is discarded, nothing persists.
    pub fn cancel(self) {}
}

/// Blocks re-submission of a save/delete while one is in flight.
/// Debounced, not queued: a second attempt is simply refused.
#[derive(Debug, Default)]
pub struct ActionGate {
    in_flight: bool,
}

impl ActionGate {
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Undo token for an optimistic ledger change.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRollback {
    /// Undo an insert: remove the entry at this index.
    RemoveAt(usize),
    /// Undo a replace or delete: put this entry back at this index.
    Restore { index: usize, entry: OutcomeEntry },
}

/// The displayed entry list for one appointment. Changes are applied
/// optimistically; if the network call fails the returned rollback restores
/// the prior state exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryLedger {
    entries: Vec<OutcomeEntry>,
}

impl EntryLedger {
    pub fn new(entries: Vec<OutcomeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OutcomeEntry] {
        &self.entries
    }

    /// Optimistically insert or replace (matched by id). On success drop
    /// the rollback, or re-apply the confirmed server entry via another
    /// upsert; on failure pass it to [`EntryLedger::roll_back`].
    pub fn stage_upsert(&mut self, entry: OutcomeEntry) -> LedgerRollback {
        let existing = entry
            .id
            .and_then(|id| self.entries.iter().position(|e| e.id == Some(id)));
        match existing {
            Some(index) => {
                let prior = std::mem::replace(&mut self.entries[index], entry);
                LedgerRollback::Restore { index, entry: prior }
            }
            None => {
                self.entries.push(entry);
                LedgerRollback::RemoveAt(self.entries.len() - 1)
            }
        }
    }

    /// Optimistically remove an entry. `None` when the id is unknown.
    pub fn stage_delete(&mut self, id: Uuid) -> Option<LedgerRollback> {
        let index = self.entries.iter().position(|e| e.id == Some(id))?;
        let entry = self.entries.remove(index);
        Some(LedgerRollback::Restore { index, entry })
    }

    pub fn roll_back(&mut self, rollback: LedgerRollback) {
        match rollback {
            LedgerRollback::RemoveAt(index) => {
                if index < self.entries.len() {
                    self.entries.remove(index);
                }
            }
            LedgerRollback::Restore { index, entry } => {
                let index = index.min(self.entries.len());
                self.entries.insert(index, entry);
            }
        }
    }
}
