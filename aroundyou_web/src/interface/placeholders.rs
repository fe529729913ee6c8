use aroundyou_core::content::Glyph;

use dioxus::prelude::*;

use super::glyph_icon::GlyphIcon;
use super::style::{CONTAINER, DIVIDER, SECTION_TITLE, TITLE_ACCENT};

// Both sections stand in for media the product team has not published yet.

#[component]
#[allow(non_snake_case)]
pub fn DemoVideo() -> Element {
    rsx! {
        section { class: "py-20 bg-white",
            div { class: CONTAINER,
                div { class: "max-w-4xl mx-auto text-center",
                    h2 { class: SECTION_TITLE, "Experience Around You in action" }
                    p { class: "text-xl text-slate-600 mb-12",
                        "See how our technology transforms daily navigation and enhances independence."
                    }
                    div { class: "bg-gradient-to-br from-slate-800 to-slate-700 rounded-2xl h-64 sm:h-80 flex items-center justify-center relative overflow-hidden",
                        div { class: "absolute inset-0 bg-black/30" }
                        div { class: "relative text-center text-white",
                            div { class: "bg-white/20 backdrop-blur-sm rounded-full p-6 mb-4 inline-flex",
                                GlyphIcon { glyph: Glyph::Play, size: 48 }
                            }
                            h3 { class: "text-lg font-semibold mb-2", "Product Demo Video" }
                            p { class: "text-slate-300", "Coming soon" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "py-20 bg-slate-50",
            div { class: CONTAINER,
                div { class: "text-center mb-16",
                    h2 { class: SECTION_TITLE,
                        "Stories of "
                        span { class: TITLE_ACCENT, "empowerment" }
                    }
                    p { class: "text-xl text-slate-600",
                        "Hear from our community about how Around You has transformed their daily experiences."
                    }
                    div { class: "{DIVIDER} mt-8" }
                }
                div { class: "bg-white rounded-2xl p-12 text-center border border-slate-200",
                    div { class: "max-w-2xl mx-auto",
                        div { class: "w-16 h-16 bg-slate-100 text-slate-400 rounded-full mx-auto mb-4 flex items-center justify-center",
                            GlyphIcon { glyph: Glyph::Heart, size: 32 }
                        }
                        h3 { class: "text-xl font-semibold text-slate-900 mb-4",
                            "User testimonials coming soon"
                        }
                        p { class: "text-slate-600",
                            "We're currently working with beta testers to gather authentic stories about how Around You is making a difference in their lives."
                        }
                    }
                }
            }
        }
    }
}
