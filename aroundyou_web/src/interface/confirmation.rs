use aroundyou_core::state::{CONFIRMATION_DELAY, ConfirmationTicket, UiState};

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_sdk::utils::timing::{UseDebounce, use_debounce};

/// Clears the "Thank you!" confirmation once `CONFIRMATION_DELAY` has passed.
///
/// Every `action` restarts the countdown, so only the latest accepted submission resets the label.
pub fn use_confirmation_reset(mut ui: Signal<UiState>) -> UseDebounce<ConfirmationTicket> {
    use_debounce(CONFIRMATION_DELAY, move |ticket: ConfirmationTicket| {
        if ui.write().expire_confirmation(ticket) {
            info!("Confirmation cleared");
        }
    })
}
