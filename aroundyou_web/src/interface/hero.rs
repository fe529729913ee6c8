use aroundyou_core::content::Glyph;
use aroundyou_core::state::{ConfirmationTicket, SubmitOutcome, UiState};

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info};

use super::glyph_icon::GlyphIcon;
use super::style::CONTAINER;

#[component]
#[allow(non_snake_case)]
pub fn Hero(ui: Signal<UiState>, on_accepted: EventHandler<ConfirmationTicket>) -> Element {
    rsx! {
        section { class: "relative bg-gradient-to-br from-slate-900 via-slate-800 to-slate-700 text-white",
            div { class: "absolute inset-0 bg-black/20" }
            div { class: "relative {CONTAINER} py-24 lg:py-32",
                div { class: "max-w-4xl mx-auto text-center",
                    h2 { class: "text-4xl sm:text-5xl lg:text-6xl font-bold mb-8 leading-tight",
                        "See with your ears."
                        br {}
                        span { class: "text-blue-300", "Feel with confidence" }
                    }
                    p { class: "text-xl sm:text-2xl text-slate-300 mb-12 max-w-3xl mx-auto leading-relaxed",
                        "Revolutionary smart headphones with integrated cameras, designed to enhance independence and empower confident navigation for the blind and visually impaired community."
                    }
                    EmailForm { ui, on_accepted }
                }
            }
        }
    }
}

/// Accepts the current draft and hands the new ticket to `on_accepted`; blank drafts are dropped.
pub(super) fn submit_email(mut ui: Signal<UiState>, on_accepted: EventHandler<ConfirmationTicket>) {
    let outcome = ui.write().submit_email();
    match outcome {
        SubmitOutcome::Accepted(ticket) => {
            info!("Email submitted, showing confirmation");
            on_accepted.call(ticket);
        }
        SubmitOutcome::IgnoredBlank => debug!("Ignoring blank email submission"),
    }
}

/// Mailing-list capture. The address never leaves the page: submitting only shows a confirmation.
#[component]
#[allow(non_snake_case)]
fn EmailForm(ui: Signal<UiState>, on_accepted: EventHandler<ConfirmationTicket>) -> Element {
    let draft = ui.read().email_draft().to_string();
    let button = ui.read().submit_button();

    rsx! {
        div { class: "bg-white/10 backdrop-blur-sm rounded-2xl p-8 max-w-md mx-auto border border-white/20",
            h3 { class: "text-lg font-semibold mb-4 flex items-center justify-center space-x-2",
                GlyphIcon { glyph: Glyph::Mail, class: "text-blue-300" }
                span { "Leave your email and be the first to experience Around You" }
            }
            form {
                class: "space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit_email(ui, on_accepted);
                },
                input {
                    r#type: "email",
                    value: "{draft}",
                    placeholder: "Enter your email address",
                    class: "w-full px-4 py-3 rounded-lg bg-white/20 border border-white/30 text-white placeholder-slate-300 focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-transparent transition-all",
                    required: true,
                    aria_label: "Email address for Around You updates",
                    oninput: move |evt| ui.write().update_email_draft(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 text-white font-semibold py-3 px-6 rounded-lg transition-all duration-200 transform hover:scale-105 flex items-center justify-center space-x-2 focus:outline-none focus:ring-2 focus:ring-blue-400 focus:ring-offset-2 focus:ring-offset-slate-800",
                    disabled: button.disabled,
                    span { "{button.label}" }
                    {button.trailing_glyph.map(|glyph| rsx! {
                        GlyphIcon { glyph }
                    })}
                }
            }
        }
    }
}
