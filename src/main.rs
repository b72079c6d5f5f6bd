use std::process::ExitCode;

use tokio::sync::broadcast::error::TryRecvError;

use tiny_step_actor::config::{KernelConfig, RingConfig};
use tiny_step_actor::ring::Ring;
use tiny_step_actor::{Kernel, KernelEvent};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let kernel_config = KernelConfig::from_env();
    let ring_config = RingConfig::from_env();

    let mut kernel = Kernel::<u64>::new(kernel_config);
    let mut events = kernel.events();

    let ring = match Ring::spawn(&mut kernel, ring_config.links) {
        Ok(ring) => ring,
        Err(error) => {
            log::error!("Failed to build ring: {}", error);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Ring of {} link(s) built on kernel '{}', head {} -> end {}",
        ring_config.links,
        kernel.name(),
        ring.head,
        ring.end
    );

    ring.start(&mut kernel);
    let steps = kernel.run();

    let mut failures = 0;
    loop {
        match events.try_recv() {
            Ok(KernelEvent::Failed { pid, reason }) => {
                log::warn!("Actor {} failed: {}", pid, reason);
                failures += 1;
            }
            Ok(_) => {}
            Err(TryRecvError::Lagged(missed)) => log::warn!("Missed {} kernel event(s)", missed),
            Err(_) => break,
        }
    }

    match ring.result() {
        Some(value) => {
            log::info!("Ring finished after {} step(s) with result {}", steps, value);
            println!("{value}");
            ExitCode::SUCCESS
        }
        None => {
            log::error!(
                "Ring stalled after {} step(s), {} actor failure(s)",
                steps,
                failures
            );
            ExitCode::FAILURE
        }
    }
}
