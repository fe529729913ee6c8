use aroundyou_core::content::Glyph;
use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdCamera, LdEye, LdHeadphones, LdHeart, LdMail, LdMapPin, LdMenu, LdNavigation,
    LdPhone, LdPlay, LdShield, LdUsers, LdWifi, LdWifiOff, LdX,
};

/// Draws a glyph as a lucide icon. Always decorative, so hidden from screen readers.
#[component]
#[allow(non_snake_case)]
pub fn GlyphIcon(
    glyph: Glyph,
    #[props(default = 20)] size: u32,
    #[props(default)] class: &'static str,
) -> Element {
    rsx! {
        span { class: "inline-flex {class}", aria_hidden: "true",
            match glyph {
                Glyph::Eye => rsx! {
                    Icon { width: size, height: size, icon: LdEye }
                },
                Glyph::Wifi => rsx! {
                    Icon { width: size, height: size, icon: LdWifi }
                },
                Glyph::MapPin => rsx! {
                    Icon { width: size, height: size, icon: LdMapPin }
                },
                Glyph::Phone => rsx! {
                    Icon { width: size, height: size, icon: LdPhone }
                },
                Glyph::Navigation => rsx! {
                    Icon { width: size, height: size, icon: LdNavigation }
                },
                Glyph::WifiOff => rsx! {
                    Icon { width: size, height: size, icon: LdWifiOff }
                },
                Glyph::Camera => rsx! {
                    Icon { width: size, height: size, icon: LdCamera }
                },
                Glyph::Shield => rsx! {
                    Icon { width: size, height: size, icon: LdShield }
                },
                Glyph::Heart => rsx! {
                    Icon { width: size, height: size, icon: LdHeart }
                },
                Glyph::Headphones => rsx! {
                    Icon { width: size, height: size, icon: LdHeadphones }
                },
                Glyph::Play => rsx! {
                    Icon { width: size, height: size, icon: LdPlay }
                },
                Glyph::Mail => rsx! {
                    Icon { width: size, height: size, icon: LdMail }
                },
                Glyph::Users => rsx! {
                    Icon { width: size, height: size, icon: LdUsers }
                },
                Glyph::ArrowRight => rsx! {
                    Icon { width: size, height: size, icon: LdArrowRight }
                },
                Glyph::Menu => rsx! {
                    Icon { width: size, height: size, icon: LdMenu }
                },
                Glyph::Close => rsx! {
                    Icon { width: size, height: size, icon: LdX }
                },
            }
        }
    }
}
