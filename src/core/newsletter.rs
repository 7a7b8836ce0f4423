//! Newsletter sign-up with a simulated acknowledgement
//!
//! There is no backend: a valid submission shows a progress label, then a
//! success message, then returns the form to its empty state. Every
//! submission gets a generation number so that timers belonging to a
//! superseded or cancelled submission are ignored.

use crate::core::locale::{Locale, phrases};

/// Time between submitting and showing the success message (ms)
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// Time the success message stays before the form comes back (ms)
pub const RESET_DELAY_MS: u32 = 5000;

/// Checks `email` against `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    // `\s` in the browser: Unicode whitespace without NEL, plus BOM
    fn is_separator(c: char) -> bool {
        c == '@' || (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(is_separator) || domain.chars().any(is_separator) {
        return false;
    }

    // The domain needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Why a submission was ignored. None of these are shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("email is empty")]
    Empty,
    #[error("email is not well formed")]
    Invalid,
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Newsletter form state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    phase: SubmissionPhase,
    generation: u64,
    pending_label: Option<&'static str>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Submit `email`; returns the generation to pass to the later steps
    pub fn submit(&mut self, email: &str, locale: Locale) -> Result<u64, SubmitRejected> {
        if self.phase != SubmissionPhase::Idle {
            return Err(SubmitRejected::Busy);
        }
        if email.is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if !is_valid_email(email) {
            return Err(SubmitRejected::Invalid);
        }

        self.generation += 1;
        self.phase = SubmissionPhase::Submitting;
        self.pending_label = Some(phrases::SUBSCRIBING.get(locale));
        Ok(self.generation)
    }

    /// Simulated acknowledgement arrived
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Succeeded;
        true
    }

    /// Success message expired; the caller clears the input
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != SubmissionPhase::Succeeded {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        self.pending_label = None;
        true
    }

    /// Drop the in-flight submission, if any. Pending timers become no-ops.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.phase = SubmissionPhase::Idle;
        self.pending_label = None;
    }

    /// Whether the submit control is disabled
    pub fn is_busy(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    /// Label replacing the button's own text while busy
    pub fn pending_label(&self) -> Option<&'static str> {
        self.pending_label
    }

    pub fn form_display(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Succeeded => "none",
            SubmissionPhase::Idle | SubmissionPhase::Submitting => "grid",
        }
    }

    pub fn success_display(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Succeeded => "block",
            SubmissionPhase::Idle | SubmissionPhase::Submitting => "none",
        }
    }
}
