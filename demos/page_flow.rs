//! Page Transition Flow
//!
//! This example walks one page instance through its whole lifecycle using
//! only the pure planner surface: no timers, no document, no async.
//!
//! Key concepts:
//! - Building a controller for a page URL
//! - Reveal scheduling on load
//! - Click interception and the fade-out plan
//! - The re-entrancy guard and history-cache restoration
//!
//! Run with: cargo run --example page_flow

use curtain::builder::ControllerBuilder;
use curtain::core::{Anchor, ReadyState, Wake};

fn main() {
    println!("=== Page Transition Flow ===\n");

    let mut controller = ControllerBuilder::new()
        .page_url("https://site.example/guides/intro")
        .build()
        .unwrap();

    println!("Controller created for {}", controller.page_url());
    println!("Initial phase: {:?}\n", controller.phase());

    // Load: the document is already parsed, so the reveal timer is armed.
    println!("Step 1: page load");
    let actions = controller.reveal(ReadyState::Complete);
    println!("  planned: {actions:?}");

    let actions = controller.wake_elapsed(Wake::Reveal);
    println!("  reveal timer fired, planned: {actions:?}");
    println!("  phase: {:?}\n", controller.phase());

    // An in-site link click.
    println!("Step 2: link click on /dashboard");
    let actions = controller.link_activated(Some(Anchor::to("/dashboard")));
    for action in &actions {
        println!("  planned: {action:?}");
    }
    println!("  phase: {:?}", controller.phase());
    println!(
        "  navigation in flight: {}\n",
        controller.navigation_in_flight()
    );

    // A second click while the fade-out runs is suppressed but goes nowhere.
    println!("Step 3: impatient second click");
    let actions = controller.link_activated(Some(Anchor::to("/settings")));
    println!("  planned: {actions:?}\n");

    // The exit timer fires and the real navigation goes out.
    println!("Step 4: fade-out complete");
    let actions = controller.wake_elapsed(Wake::CommitNavigation {
        url: "https://site.example/dashboard".to_string(),
    });
    println!("  planned: {actions:?}\n");

    // Later the user navigates back and this cached instance is revived.
    println!("Step 5: history-cache restore");
    let actions = controller.page_shown(true);
    println!("  planned: {actions:?}");
    println!("  phase: {:?}", controller.phase());
    println!(
        "  navigation in flight: {}\n",
        controller.navigation_in_flight()
    );

    println!("Phases traversed: {:?}", controller.log().path());

    println!("\nKey Characteristics:");
    println!("- Pure planning: every decision is (state, event) -> actions");
    println!("- The native click is always suppressed once intercepted");
    println!("- One navigation per page instance until a page-show reset");
    println!("- Cache-restored pages come back visible and re-armed");

    println!("\n=== Example Complete ===");
}
