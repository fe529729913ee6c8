use aroundyou_core::content::{Anchor, Glyph, Highlight};

use dioxus::prelude::*;

use super::glyph_icon::GlyphIcon;
use super::style::{CONTAINER, DIVIDER, SECTION_TITLE, TITLE_ACCENT, badge_class, icon_class};

#[component]
#[allow(non_snake_case)]
pub fn Product(highlights: &'static [Highlight]) -> Element {
    rsx! {
        section { id: Anchor::Product.id(), class: "py-20 bg-white",
            div { class: CONTAINER,
                div { class: "max-w-4xl mx-auto",
                    div { class: "text-center mb-16",
                        h2 { class: SECTION_TITLE,
                            "Innovation meets "
                            span { class: TITLE_ACCENT, "independence" }
                        }
                        div { class: "{DIVIDER} mb-8" }
                    }

                    div { class: "grid lg:grid-cols-2 gap-12 items-center",
                        div { class: "space-y-6",
                            for highlight in highlights {
                                div { class: "flex items-center space-x-4 p-6 bg-slate-50 rounded-xl",
                                    div { class: badge_class(highlight.accent),
                                        GlyphIcon {
                                            glyph: highlight.icon,
                                            size: 32,
                                            class: icon_class(highlight.accent),
                                        }
                                    }
                                    div {
                                        h3 { class: "text-lg font-semibold text-slate-900 mb-2",
                                            "{highlight.title}"
                                        }
                                        p { class: "text-slate-600", "{highlight.description}" }
                                    }
                                }
                            }
                        }

                        div { class: "bg-gradient-to-br from-slate-100 to-slate-200 rounded-2xl p-8 h-96 flex items-center justify-center",
                            div { class: "text-center",
                                GlyphIcon {
                                    glyph: Glyph::Headphones,
                                    size: 96,
                                    class: "text-slate-600 mx-auto mb-4",
                                }
                                p { class: "text-slate-600 font-medium", "Around You Headphones" }
                                p { class: "text-sm text-slate-500 mt-2",
                                    "Product visualization coming soon"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
