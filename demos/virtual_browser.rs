//! Virtual Browser Host
//!
//! This example wires a controller to a host environment and runs a full
//! click-to-navigation lifecycle through the effect adapter, with a small
//! event loop standing in for the browser's timers.
//!
//! Key concepts:
//! - Implementing the host capability traits
//! - Executing planned actions with `perform`
//! - A timer queue driving wakes back into the controller
//! - Structured logging of controller decisions
//!
//! Run with: cargo run --example virtual_browser

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use curtain::builder::ControllerBuilder;
use curtain::core::{Anchor, PresentationFlag, ReadyState, Wake};
use curtain::host::{perform, HostError, NavigationSink, PresentationSurface, TimerHost};
use curtain::TransitionController;
use stillwater::effect::Effect;

/// Console-backed host: prints what a real adapter would do to the
/// document and queues timers for the event loop below.
#[derive(Clone, Default)]
struct ConsoleBrowser {
    timers: Arc<Mutex<VecDeque<(Duration, Wake)>>>,
}

impl PresentationSurface for ConsoleBrowser {
    fn apply(&self, flag: PresentationFlag) -> Result<(), HostError> {
        println!("  [document] classList.add({:?})", flag.as_str());
        Ok(())
    }

    fn withdraw(&self, flag: PresentationFlag) -> Result<(), HostError> {
        println!("  [document] classList.remove({:?})", flag.as_str());
        Ok(())
    }

    fn suppress_native_click(&self) -> Result<(), HostError> {
        println!("  [document] preventDefault()");
        Ok(())
    }
}

impl TimerHost for ConsoleBrowser {
    fn schedule(&self, delay: Duration, wake: Wake) -> Result<(), HostError> {
        println!("  [timers]   armed {wake:?} in {delay:?}");
        self.timers.lock().unwrap().push_back((delay, wake));
        Ok(())
    }
}

impl NavigationSink for ConsoleBrowser {
    fn assign(&self, url: &str) -> Result<(), HostError> {
        println!("  [location] assign({url:?})");
        Ok(())
    }
}

/// Stand-in for the browser's timer wheel: sleep each armed delay, then
/// hand the wake back to the controller and execute the new plan.
async fn drain_timers(browser: &ConsoleBrowser, controller: &mut TransitionController) {
    loop {
        let next = browser.timers.lock().unwrap().pop_front();
        let Some((delay, wake)) = next else {
            return;
        };

        tokio::time::sleep(delay).await;
        let actions = controller.wake_elapsed(wake);
        perform(actions).run(browser).await.unwrap();
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== Virtual Browser Host ===\n");

    let browser = ConsoleBrowser::default();
    let mut controller = ControllerBuilder::new()
        .page_url("https://site.example/guides/intro")
        .build()
        .unwrap();

    println!("Page loads:");
    let actions = controller.reveal(ReadyState::Complete);
    perform(actions).run(&browser).await.unwrap();
    drain_timers(&browser, &mut controller).await;

    println!("\nUser clicks the /dashboard link:");
    let actions = controller.link_activated(Some(Anchor::to("/dashboard")));
    perform(actions).run(&browser).await.unwrap();
    drain_timers(&browser, &mut controller).await;

    println!("\nPhases traversed: {:?}", controller.log().path());
    println!("\n=== Example Complete ===");
}
