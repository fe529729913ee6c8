use aroundyou_core::content::{Anchor, ContactChannel, Glyph, TeamMember};

use dioxus::prelude::*;

use super::glyph_icon::GlyphIcon;
use super::style::{
    CONTAINER, DIVIDER, SECTION_TITLE, TITLE_ACCENT, avatar_class, badge_class, icon_class,
    link_class,
};

#[component]
#[allow(non_snake_case)]
pub fn About(contact: &'static [ContactChannel], team: &'static [TeamMember]) -> Element {
    rsx! {
        section { id: Anchor::About.id(), class: "py-20 bg-white",
            div { class: CONTAINER,
                div { class: "text-center mb-16",
                    h2 { class: SECTION_TITLE,
                        "Let's stay "
                        span { class: TITLE_ACCENT, "connected" }
                    }
                    div { class: DIVIDER }
                }

                div { class: "grid lg:grid-cols-2 gap-16 mb-20",
                    div { id: Anchor::Contact.id(), class: "space-y-8",
                        div {
                            h3 { class: "text-2xl font-bold text-slate-900 mb-6", "ProPath Innovations" }
                            p { class: "text-lg text-slate-600 mb-8",
                                "We're here to support you on your journey toward greater independence and confidence."
                            }
                        }
                        div { class: "space-y-6",
                            for channel in contact {
                                ContactRow { channel }
                            }
                        }
                    }

                    div {
                        div { class: "flex items-center space-x-3 mb-8",
                            GlyphIcon { glyph: Glyph::Users, size: 32, class: "text-blue-600" }
                            h3 { class: "text-2xl font-bold text-slate-900",
                                "Meet the minds behind Around You"
                            }
                        }
                        div { class: "grid sm:grid-cols-2 gap-6",
                            for member in team {
                                TeamCard { member }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn ContactRow(channel: &'static ContactChannel) -> Element {
    rsx! {
        div { class: "flex items-start space-x-4",
            div { class: badge_class(channel.accent),
                GlyphIcon {
                    glyph: channel.icon,
                    size: 24,
                    class: icon_class(channel.accent),
                }
            }
            div {
                h4 { class: "font-semibold text-slate-900 mb-1", "{channel.label}" }
                match &channel.href {
                    Some(href) => rsx! {
                        a { href: "{href}", class: link_class(channel.accent),
                            for line in channel.lines.iter() {
                                "{line}"
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "text-slate-600",
                            for (i, line) in channel.lines.iter().enumerate() {
                                if i > 0 {
                                    br {}
                                }
                                "{line}"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn TeamCard(member: &'static TeamMember) -> Element {
    rsx! {
        div { class: "bg-slate-50 p-6 rounded-xl border border-slate-200",
            div { class: avatar_class(member.accent),
                span { class: "text-white font-bold text-lg", "{member.initials}" }
            }
            h4 { class: "font-semibold text-slate-900 mb-1", "{member.name}" }
            p { class: "text-slate-600 text-sm", "{member.role}" }
        }
    }
}
