use std::time::Duration;

use aroundyou_core::content::{NavLink, SiteContent};
use aroundyou_core::state::{ConfirmationTicket, SubmitOutcome, UiState};
use dioxus::prelude::*;
use tokio::time::Instant;

use super::App;
use super::confirmation::use_confirmation_reset;
use super::header::Header;
use super::hero::{Hero, submit_email};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn nav() -> &'static [NavLink] {
    SiteContent::embedded().unwrap().nav.as_slice()
}

fn closed_header() -> Element {
    let ui = use_signal(UiState::new);
    rsx! {
        Header { ui, nav: nav() }
    }
}

fn open_header() -> Element {
    let ui = use_signal(|| {
        let mut state = UiState::new();
        state.toggle_menu();
        state
    });
    rsx! {
        Header { ui, nav: nav() }
    }
}

fn idle_hero() -> Element {
    let ui = use_signal(UiState::new);
    rsx! {
        Hero { ui, on_accepted: |_| {} }
    }
}

fn confirmed_hero() -> Element {
    let ui = use_signal(|| {
        let mut state = UiState::new();
        state.update_email_draft("user@example.com");
        assert!(matches!(state.submit_email(), SubmitOutcome::Accepted(_)));
        state
    });
    rsx! {
        Hero { ui, on_accepted: |_| {} }
    }
}

/// Submits once at startup and, when `resubmit_after` is set, again after that long.
fn submission_driver(resubmit_after: Option<Duration>) -> Element {
    let mut ui = use_signal(UiState::new);
    let mut reset = use_confirmation_reset(ui);
    let on_accepted = use_callback(move |ticket: ConfirmationTicket| reset.action(ticket));

    use_hook(move || {
        spawn(async move {
            ui.write().update_email_draft("user@example.com");
            submit_email(ui, on_accepted);
            if let Some(delay) = resubmit_after {
                tokio::time::sleep(delay).await;
                ui.write().update_email_draft("second@example.com");
                submit_email(ui, on_accepted);
            }
        })
    });

    let label = ui.read().submit_button().label;
    rsx! {
        span { "{label}" }
    }
}

fn single_submission() -> Element {
    submission_driver(None)
}

fn resubmission() -> Element {
    submission_driver(Some(Duration::from_millis(2000)))
}

/// Drives the dom's tasks until `duration` of (paused) time has passed.
async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = Instant::now() + duration;
    loop {
        let elapsed = tokio::select! {
            biased;
            _ = dom.wait_for_work() => false,
            _ = tokio::time::sleep_until(deadline) => true,
        };
        dom.render_immediate_to_vec();
        if elapsed {
            break;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_confirmation_clears_after_delay() {
    let mut dom = VirtualDom::new(single_submission);
    dom.rebuild_in_place();

    run_for(&mut dom, Duration::from_millis(2999)).await;
    assert!(dioxus_ssr::render(&dom).contains("Thank you!"));

    run_for(&mut dom, Duration::from_millis(1)).await;
    assert!(dioxus_ssr::render(&dom).contains("Let the world speak"));
}

#[tokio::test(start_paused = true)]
async fn test_resubmission_restarts_countdown() {
    let mut dom = VirtualDom::new(resubmission);
    dom.rebuild_in_place();

    // the first submission's reset would have been due here
    run_for(&mut dom, Duration::from_millis(3000)).await;
    assert!(dioxus_ssr::render(&dom).contains("Thank you!"));

    run_for(&mut dom, Duration::from_millis(1999)).await;
    assert!(dioxus_ssr::render(&dom).contains("Thank you!"));

    run_for(&mut dom, Duration::from_millis(1)).await;
    assert!(dioxus_ssr::render(&dom).contains("Let the world speak"));
}

#[test]
fn test_page_declares_every_anchor() {
    let html = render(App);
    for anchor in SiteContent::declared_anchors() {
        assert!(
            html.contains(&format!("id=\"{}\"", anchor.id())),
            "missing section #{}",
            anchor.id()
        );
    }
}

#[test]
fn test_page_renders_content() {
    let html = render(App);
    let content = SiteContent::embedded().unwrap();

    for feature in &content.features {
        assert!(html.contains(&feature.title));
    }
    for member in &content.team {
        assert!(html.contains(&member.name));
    }
    assert!(html.contains("href=\"mailto:info@aroundyou.tech\""));
    assert!(html.contains("href=\"tel:+5511960372150\""));
    assert!(html.contains("Let the world speak"));
    assert!(html.contains("Product Demo Video"));
    assert!(html.contains("User testimonials coming soon"));
    assert!(html.contains("2025 ProPath Innovations"));
}

#[test]
fn test_mobile_nav_hidden_initially() {
    let html = render(closed_header);
    assert!(!html.contains("mobile-nav"));
    assert!(html.contains("Toggle navigation menu"));
    // desktop nav only
    assert_eq!(html.matches("href=\"#product\"").count(), 1);
}

#[test]
fn test_mobile_nav_shown_when_open() {
    let html = render(open_header);
    assert!(html.contains("id=\"mobile-nav\""));
    assert_eq!(html.matches("href=\"#contact\"").count(), 2);
}

#[test]
fn test_submit_label_idle() {
    let html = render(idle_hero);
    assert!(html.contains("Let the world speak"));
    assert!(!html.contains("Thank you!"));
}

#[test]
fn test_submit_label_confirmed() {
    let html = render(confirmed_hero);
    assert!(html.contains("Thank you!"));
    assert!(!html.contains("Let the world speak"));
    assert!(html.contains("disabled"));
}
