use crate::app::domain::{LineItem, PersonContext, PersonOrder, Summary};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::aggregate::summarize;
use crate::app::services::quantity::clamp_party_size;

pub const MIN_PARTY_SIZE: usize = 1;
pub const MAX_PARTY_SIZE: usize = 50;

/// Where the session is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// `current` is the 1-based position of the person ordering now.
    Collecting { current: usize, total: usize },
    Complete { total: usize },
}

/// Result of submitting one person's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Advance(PersonContext),
    Complete,
}

/// Collects one order per person and folds them into a summary.
///
/// `party_size` is the size the next `start()` will use. A running session
/// keeps the size it started with in its phase.
#[derive(Debug, Clone)]
pub struct OrderSession {
    party_size: usize,
    phase: SessionPhase,
    orders: Vec<PersonOrder>,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    pub fn new() -> Self {
        Self {
            party_size: MIN_PARTY_SIZE,
            phase: SessionPhase::Idle,
            orders: Vec::new(),
        }
    }

    /// Clamp `n` into [1, 50] and use it as the party size. Returns the stored size.
    pub fn set_party_size(&mut self, n: i64) -> usize {
        self.party_size = clamp_party_size(n, MIN_PARTY_SIZE, MAX_PARTY_SIZE);
        self.party_size
    }

    pub fn adjust_party_size(&mut self, delta: i64) -> usize {
        self.set_party_size((self.party_size as i64).saturating_add(delta))
    }

    /// Like `set_party_size`, but rejects out of range input instead of clamping.
    pub fn try_set_party_size(&mut self, n: i64) -> Result<usize> {
        if n < MIN_PARTY_SIZE as i64 || n > MAX_PARTY_SIZE as i64 {
            return Err(AppError::OutOfRange(n));
        }
        Ok(self.set_party_size(n))
    }

    /// Begin collecting from the first person. Any earlier orders are dropped.
    pub fn start(&mut self) -> PersonContext {
        self.orders.clear();
        self.phase = SessionPhase::Collecting {
            current: 1,
            total: self.party_size,
        };
        tracing::debug!(party_size = self.party_size, "Order started");
        PersonContext {
            index: 1,
            total: self.party_size,
        }
    }

    /// Record the current person's items and move to the next person.
    ///
    /// Nothing changes when this fails.
    pub fn submit_current_person(&mut self, items: &[LineItem]) -> Result<SubmitOutcome> {
        let SessionPhase::Collecting { current, total } = self.phase else {
            return Err(AppError::NotCollecting);
        };

        if items.is_empty() {
            return Err(AppError::InvalidOrder(format!("person {} has no items", current)));
        }
        if let Some((row, problem)) = items
            .iter()
            .enumerate()
            .find_map(|(i, item)| item.problem().map(|p| (i + 1, p)))
        {
            return Err(AppError::InvalidOrder(format!("item {}: {}", row, problem)));
        }

        self.orders.push(PersonOrder::new(items.to_vec()));

        if current < total {
            let next = current + 1;
            self.phase = SessionPhase::Collecting {
                current: next,
                total,
            };
            tracing::debug!(person = current, next, total, "Person submitted");
            Ok(SubmitOutcome::Advance(PersonContext { index: next, total }))
        } else {
            self.phase = SessionPhase::Complete { total };
            tracing::info!(people = total, "Party order complete");
            Ok(SubmitOutcome::Complete)
        }
    }

    /// Aggregate the finished party's orders.
    pub fn summary(&self) -> Result<Summary> {
        match self.phase {
            SessionPhase::Complete { .. } => Ok(summarize(&self.orders)),
            SessionPhase::Collecting { total, .. } => Err(AppError::SessionIncomplete {
                submitted: self.orders.len(),
                expected: total,
            }),
            SessionPhase::Idle => Err(AppError::SessionIncomplete {
                submitted: 0,
                expected: self.party_size,
            }),
        }
    }

    /// Back to the setup screen with a party of one.
    pub fn reset(&mut self) {
        self.party_size = MIN_PARTY_SIZE;
        self.orders.clear();
        self.phase = SessionPhase::Idle;
        tracing::info!("Order session reset");
    }

    pub fn party_size(&self) -> usize {
        self.party_size
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 1-based position of the person ordering (or about to order).
    pub fn current_index(&self) -> usize {
        match self.phase {
            SessionPhase::Idle => 1,
            SessionPhase::Collecting { current, .. } => current,
            SessionPhase::Complete { total } => total,
        }
    }

    /// The person currently on screen, if collecting.
    pub fn current_person(&self) -> Option<PersonContext> {
        match self.phase {
            SessionPhase::Collecting { current, total } => Some(PersonContext {
                index: current,
                total,
            }),
            _ => None,
        }
    }

    pub fn orders(&self) -> &[PersonOrder] {
        &self.orders
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::Complete { .. })
    }
}
