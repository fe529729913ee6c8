#[cfg(test)]
mod tests;

mod about;
mod confirmation;
mod content_error_view;
mod features;
mod footer;
mod glyph_icon;
mod header;
mod hero;
mod placeholders;
mod product;
mod style;

use aroundyou_core::content::SiteContent;
use aroundyou_core::state::UiState;

use dioxus::prelude::*;

use self::{
    about::About,
    confirmation::use_confirmation_reset,
    content_error_view::ContentErrorView,
    features::Features,
    footer::Footer,
    header::Header,
    hero::Hero,
    placeholders::{DemoVideo, Testimonials},
    product::Product,
};

pub(crate) const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    let ui = use_signal(UiState::new);
    let mut confirmation_reset = use_confirmation_reset(ui);

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(errors) => return rsx! {
            ContentErrorView { errors }
        },
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        style { "html, body {{ margin: 0; padding: 0; }} #main {{ margin: 0; }}" }

        div { class: "min-h-screen bg-slate-50",
            Header { ui, nav: content.nav.as_slice() }
            Hero {
                ui,
                on_accepted: move |ticket| confirmation_reset.action(ticket),
            }
            Product { highlights: content.highlights.as_slice() }
            Features { features: content.features.as_slice() }
            DemoVideo {}
            Testimonials {}
            About {
                contact: content.contact.as_slice(),
                team: content.team.as_slice(),
            }
            Footer { columns: content.footer.as_slice() }
        }
    }
}
