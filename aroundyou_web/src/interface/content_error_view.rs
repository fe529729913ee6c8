use aroundyou_core::content::ContentError;

use dioxus::prelude::*;

/// Shown instead of the page when the embedded content fails validation
#[component]
#[allow(non_snake_case)]
pub fn ContentErrorView(errors: &'static [ContentError]) -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen items-center justify-center bg-slate-50 text-slate-900 p-8",
            h1 { class: "text-2xl font-bold mb-4", "Around You is temporarily unavailable" }
            ul { class: "font-mono text-sm text-red-600 space-y-1",
                for error in errors {
                    li { "{error}" }
                }
            }
        }
    }
}
