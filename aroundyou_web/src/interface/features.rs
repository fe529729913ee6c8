use aroundyou_core::content::{Anchor, FeatureDescriptor};

use dioxus::prelude::*;

use super::glyph_icon::GlyphIcon;
use super::style::{CONTAINER, DIVIDER, SECTION_TITLE, TITLE_ACCENT};

#[component]
#[allow(non_snake_case)]
pub fn Features(features: &'static [FeatureDescriptor]) -> Element {
    rsx! {
        section { id: Anchor::Features.id(), class: "py-20 bg-slate-50",
            div { class: CONTAINER,
                div { class: "text-center mb-16",
                    h2 { class: SECTION_TITLE,
                        "Powerful features for "
                        span { class: TITLE_ACCENT, "confident navigation" }
                    }
                    p { class: "text-xl text-slate-600 max-w-3xl mx-auto",
                        "Every feature is thoughtfully designed to enhance your independence and provide the information you need, when you need it."
                    }
                    div { class: "{DIVIDER} mt-8" }
                }

                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for (index, feature) in features.iter().enumerate() {
                        FeatureCard { key: "{index}", feature }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn FeatureCard(feature: &'static FeatureDescriptor) -> Element {
    rsx! {
        div { class: "bg-white p-8 rounded-xl shadow-sm hover:shadow-md transition-shadow duration-200 border border-slate-200 hover:border-blue-200",
            div { class: "bg-blue-50 w-14 h-14 rounded-xl flex items-center justify-center mb-6",
                GlyphIcon { glyph: feature.icon, size: 28, class: "text-blue-600" }
            }
            h3 { class: "text-xl font-semibold text-slate-900 mb-4", "{feature.title}" }
            p { class: "text-slate-600 leading-relaxed", "{feature.description}" }
        }
    }
}
