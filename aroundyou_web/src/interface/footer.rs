use aroundyou_core::content::FooterColumn;

use dioxus::prelude::*;

use super::LOGO;
use super::style::CONTAINER;

#[component]
#[allow(non_snake_case)]
pub fn Footer(columns: &'static [FooterColumn]) -> Element {
    rsx! {
        footer { class: "bg-slate-900 text-white py-16",
            div { class: CONTAINER,
                div { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-8",
                    div { class: "lg:col-span-2",
                        div { class: "flex items-center space-x-3 mb-6",
                            img {
                                src: LOGO,
                                alt: "Around You Logo",
                                class: "h-8 w-8 rounded-full object-cover",
                            }
                            div {
                                h3 { class: "text-xl font-bold", "Around You" }
                                p { class: "text-slate-400 text-sm", "by ProPath Innovations" }
                            }
                        }
                        p { class: "text-slate-300 max-w-md leading-relaxed",
                            "Empowering the blind and visually impaired community with innovative technology that enhances independence and confidence in daily navigation."
                        }
                    }

                    for column in columns {
                        div {
                            h4 { class: "font-semibold mb-4", "{column.heading}" }
                            ul { class: "space-y-2 text-slate-300",
                                for link in column.links.iter() {
                                    li {
                                        a {
                                            href: "{link.href}",
                                            class: "hover:text-white transition-colors",
                                            "{link.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "border-t border-slate-800 mt-12 pt-8 text-center text-slate-400",
                    p {
                        "© 2025 ProPath Innovations. All rights reserved. Designed with accessibility and empowerment in mind."
                    }
                }
            }
        }
    }
}
