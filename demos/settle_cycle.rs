//! Example: a full shutter settle cycle against a simulated link.
//!
//! This example demonstrates how to:
//! - Load motor, actuator and link configuration from TOML
//! - Drive the scheduler with a virtual microsecond clock
//! - Calibrate from a retained state label, then open and close
//! - Recover from a manual stop mid-travel by re-calibrating
//!
//! Run with: `cargo run --example settle_cycle --features std`

use std::collections::VecDeque;

use shutter_drive::{
    error::{LinkError, Result},
    link::{self, Command, NoUpdate, Transport},
    Actuator, PositionState, PulseStepper, Scheduler, StepOutcome,
};

/// Virtual time added after every scheduler pass.
const CLOCK_QUANTUM_US: u64 = 50;

/// Upper bound on passes per phase so a broken scenario cannot spin.
const MAX_PASSES: u64 = 2_000_000;

/// Mock output pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

/// In-memory stand-in for the broker connection.
///
/// Injected messages pass through the real topic and payload decoding;
/// published labels are printed the way a broker would retain them.
#[derive(Default)]
struct DemoLink {
    inbound: VecDeque<Command>,
}

impl DemoLink {
    /// Deliver a raw message as the broker would.
    fn inject(&mut self, subtopic: &str, payload: &[u8]) {
        if let Some(command) = link::decode(subtopic, payload) {
            self.inbound.push_back(command);
        } else {
            println!("  [dropped] {} {:?}", subtopic, payload);
        }
    }
}

impl Transport for DemoLink {
    fn poll(&mut self) -> core::result::Result<Option<Command>, LinkError> {
        Ok(self.inbound.pop_front())
    }

    fn publish_state(&mut self, label: &str) -> core::result::Result<(), LinkError> {
        println!("  [retained /state] {}", label);
        Ok(())
    }
}

type DemoScheduler =
    Scheduler<PulseStepper<MockPin, MockPin, MockPin, MockDelay>, DemoLink, NoUpdate>;

/// Step until `done` reports true, advancing the virtual clock.
fn run_until<F>(scheduler: &mut DemoScheduler, now_us: &mut u64, mut done: F) -> bool
where
    F: FnMut(&DemoScheduler) -> bool,
{
    for _ in 0..MAX_PASSES {
        scheduler.step(*now_us);
        *now_us += CLOCK_QUANTUM_US;
        if done(scheduler) {
            return true;
        }
    }
    false
}

/// Step a fixed number of passes.
fn run_passes(scheduler: &mut DemoScheduler, now_us: &mut u64, passes: u64) -> StepOutcome {
    for _ in 0..passes {
        if scheduler.step(*now_us) == StepOutcome::Reboot {
            return StepOutcome::Reboot;
        }
        *now_us += CLOCK_QUANTUM_US;
    }
    StepOutcome::Continue
}

fn main() -> Result<()> {
    println!("=== Shutter Settle Cycle Example ===\n");

    // A short travel and a quick idle cutoff keep the scenario brisk
    let toml_content = r#"
[motor]
steps_per_revolution = 200
microsteps = 16
gear_ratio = 1.0
ramp_deg_per_sec2 = 150.0
invert_direction = false
enable_active_low = true

[actuator]
travel_degrees = 720.0
open_rpm = 180
close_rpm = 50
idle_off_ticks = 20

[link]
host = "broker.local"
port = 1883
base_path = "/home/shutter"
client_id = "shutter-demo"
"#;

    let config = shutter_drive::config::parse_config(toml_content)?;

    println!("Motor Configuration:");
    println!("  Steps/rev: {}", config.motor.steps_per_revolution);
    println!("  Microsteps: {:?}", config.motor.microsteps);
    println!(
        "  Total steps/rev: {}",
        config.motor.total_steps_per_revolution()
    );
    println!("Actuator Configuration:");
    println!("  Travel: {}°", config.actuator.travel.value());
    println!(
        "  Speeds: open {} rpm, close {} rpm",
        config.actuator.open_rpm.value(),
        config.actuator.close_rpm.value()
    );
    println!("  Idle cutoff: {} polls", config.actuator.idle_off_ticks);
    println!(
        "Link: {}:{} base {}",
        config.link.host, config.link.port, config.link.base_path
    );
    println!(
        "Subscribing to {}\n",
        link::topics::command_filter(&config.link.base_path)
    );

    let drive = PulseStepper::from_config(&config.motor, MockPin, MockPin, MockPin, MockDelay);
    let actuator = Actuator::from_config(&config, drive);
    let mut scheduler = Scheduler::new(actuator, DemoLink::default(), NoUpdate);
    let mut now_us = 0u64;

    println!("Phase 1: retained calibration replays after connect");
    scheduler.link_mut().inject("/state", b"closed");
    run_until(&mut scheduler, &mut now_us, |s| {
        s.actuator().state() == PositionState::Closed
    });

    println!("\nPhase 2: open command travels the full way");
    scheduler.link_mut().inject("/open", b"");
    let settled = run_until(&mut scheduler, &mut now_us, |s| {
        s.actuator().state() == PositionState::Opened
    });
    println!(
        "  settled: {} (t = {:.2}s virtual)",
        settled,
        now_us as f64 / 1e6
    );

    println!("\nPhase 3: idle cutoff releases the driver");
    run_until(&mut scheduler, &mut now_us, |s| !s.actuator().is_energized());
    println!("  driver energized: {}", scheduler.actuator().is_energized());

    println!("\nPhase 4: close, stopped mid-travel");
    scheduler.link_mut().inject("/close", b"");
    run_passes(&mut scheduler, &mut now_us, 2_000);
    println!("  state mid-travel: {:?}", scheduler.actuator().state());
    scheduler.link_mut().inject("/stop", b"");
    run_passes(&mut scheduler, &mut now_us, 5);
    // The interrupted travel settles at its target label even though the
    // shutter is physically somewhere in between
    println!("  state after stop: {:?}", scheduler.actuator().state());

    println!("\nPhase 5: re-calibrate the true position");
    scheduler.link_mut().inject("/state", b"opened");
    run_passes(&mut scheduler, &mut now_us, 5);
    println!("  state: {:?}", scheduler.actuator().state());

    println!("\nPhase 6: zero and junk rotations are dropped");
    scheduler.link_mut().inject("/rotate", b"0");
    scheduler.link_mut().inject("/rotate", b"lots");

    println!("\nPhase 7: reboot hands control back to the host");
    scheduler.link_mut().inject("/reboot", b"");
    let outcome = run_passes(&mut scheduler, &mut now_us, 5);
    println!("  outcome: {:?}", outcome);

    println!("\n=== Example Complete ===");

    Ok(())
}
