mod interface;

use aroundyou_core::content::SiteContent;
use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, error, info};
use interface::App;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");
    if let Err(errors) = SiteContent::embedded() {
        error!("embedded content has {} error(s)", errors.len());
        for e in errors {
            error!("{}", e);
        }
    }
    launch(App);
}
