use aroundyou_core::content::NavLink;
use aroundyou_core::state::UiState;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use super::LOGO;
use super::glyph_icon::GlyphIcon;
use super::style::{CONTAINER, NAV_LINK};

#[component]
#[allow(non_snake_case)]
pub fn Header(ui: Signal<UiState>, nav: &'static [NavLink]) -> Element {
    let menu_open = ui.read().menu_open();
    let menu_glyph = ui.read().menu_glyph();
    let mobile_nav_visible = ui.read().mobile_nav_visible();

    rsx! {
        header { class: "bg-white shadow-sm sticky top-0 z-50",
            nav { class: CONTAINER,
                div { class: "flex justify-between items-center h-16",
                    div { class: "flex items-center space-x-3",
                        img {
                            src: LOGO,
                            alt: "Around You Logo",
                            class: "h-8 w-8 rounded-full object-cover",
                        }
                        div {
                            h1 { class: "text-xl font-bold text-slate-900", "Around You" }
                            p { class: "text-xs text-slate-600 hidden sm:block",
                                "Your smart audio guide for every step"
                            }
                        }
                    }

                    div { class: "hidden md:flex space-x-8",
                        for link in nav {
                            a { href: link.target.href(), class: NAV_LINK, "{link.label}" }
                        }
                    }

                    button {
                        class: "md:hidden p-2 rounded-md text-slate-700 hover:text-slate-900 hover:bg-slate-100 transition-colors",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| {
                            ui.write().toggle_menu();
                            info!("Menu toggled: {:?}", ui.read().menu_open());
                        },
                        GlyphIcon { glyph: menu_glyph, size: 24 }
                    }
                }

                if mobile_nav_visible {
                    div {
                        id: "mobile-nav",
                        class: "md:hidden py-4 border-t border-slate-200",
                        div { class: "flex flex-col space-y-3",
                            for link in nav {
                                a {
                                    href: link.target.href(),
                                    class: "{NAV_LINK} px-2 py-1",
                                    onclick: move |_| ui.write().close_menu(),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
