
use std::time::Duration;

use crate::content::Glyph;
use crate::utils::is_blank;

/// How long the "Thank you!" confirmation stays up after a submission
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(3000);

pub const SUBMIT_LABEL: &str = "Let the world speak";
pub const CONFIRMED_LABEL: &str = "Thank you!";

/// Identifies one accepted submission. Only the latest ticket may clear the confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfirmationTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was taken and discarded; schedule the reset for this ticket
    Accepted(ConfirmationTicket),
    IgnoredBlank,
}

/// Session-local page state. Nothing here is persisted or transmitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    menu_open: bool,
    email_draft: String,
    just_submitted: bool,
    latest_ticket: ConfirmationTicket,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn email_draft(&self) -> &str {
        &self.email_draft
    }

    pub fn just_submitted(&self) -> bool {
        self.just_submitted
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Used when a mobile navigation link is followed, so the menu no longer covers the section
    /// it jumped to. The page used to leave it open until toggled again.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn update_email_draft(&mut self, text: impl Into<String>) {
        self.email_draft = text.into();
    }

    pub fn submit_email(&mut self) -> SubmitOutcome {
        if is_blank(&self.email_draft) {
            return SubmitOutcome::IgnoredBlank;
        }

        self.email_draft.clear();
        self.just_submitted = true;
        self.latest_ticket = ConfirmationTicket(self.latest_ticket.0 + 1);
        SubmitOutcome::Accepted(self.latest_ticket)
    }

    /// Clears the confirmation if `ticket` belongs to the most recent submission.
    /// Returns whether anything changed.
    pub fn expire_confirmation(&mut self, ticket: ConfirmationTicket) -> bool {
        if ticket != self.latest_ticket || !self.just_submitted {
            return false;
        }
        self.just_submitted = false;
        true
    }

    pub fn mobile_nav_visible(&self) -> bool {
        self.menu_open
    }

    pub fn menu_glyph(&self) -> Glyph {
        if self.menu_open {
            Glyph::Close
        } else {
            Glyph::Menu
        }
    }

    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton::from(self)
    }
}

/// What the email form's submit control shows for a given state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
    pub trailing_glyph: Option<Glyph>,
}

impl From<&UiState> for SubmitButton {
    fn from(state: &UiState) -> Self {
        if state.just_submitted {
            SubmitButton {
                label: CONFIRMED_LABEL,
                disabled: true,
                trailing_glyph: None,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                disabled: false,
                trailing_glyph: Some(Glyph::ArrowRight),
            }
        }
    }
}
