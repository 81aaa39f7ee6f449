//! Carom demo entry point
//!
//! Headless host around the kernel: builds a seeded scenario, drives the
//! fixed timestep loop the way a renderer-backed host would, and logs a
//! digest while it runs. The billiards scenario also walks the cue through
//! one scripted aim, charge, and release.
//!
//! Usage: carom [scenario] [seed] [seconds]

use std::env;
use std::path::Path;
use std::process::ExitCode;

use glam::DVec2;

use carom::Tuning;
use carom::consts::{CUE_CHARGE_MS, MAX_SUBSTEPS, SIM_DT};
use carom::scenario::{self, DemoScene, Scenario};
use carom::sim::{Body, Cue};

/// Host frame cadence. Slower than the sim rate, so every frame spans
/// several substeps.
const FRAME_DT: f64 = 1.0 / 24.0;

/// When the scripted stroke starts charging, in sim milliseconds
const CHARGE_START_MS: f64 = 250.0;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let tuning = Tuning::load_or_default(Path::new("tuning.json"));

    let scenario_name = args.first().map(String::as_str).unwrap_or("billiards");
    let Some(scenario) = Scenario::from_name(scenario_name) else {
        log::error!("unknown scenario {scenario_name:?}");
        eprintln!("scenarios: falling, damped, mix, billiards");
        return ExitCode::FAILURE;
    };

    let seed = match args.get(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("seed must be an unsigned integer");
            return ExitCode::FAILURE;
        }
        None => tuning.seed,
    };

    let seconds = match args.get(2).map(|arg| arg.parse::<f64>()) {
        Some(Ok(seconds)) if seconds > 0.0 => seconds,
        Some(_) => {
            eprintln!("seconds must be a positive number");
            return ExitCode::FAILURE;
        }
        None => 10.0,
    };

    log::info!(
        "carom starting: scenario {}, seed {seed}, {seconds}s",
        scenario.name()
    );
    let demo = scenario::build(scenario, &tuning, seed);
    run(demo, seconds);
    ExitCode::SUCCESS
}

/// Drive the scene like an interactive host: frames arrive at `FRAME_DT`
/// and the accumulator converts them into fixed `SIM_DT` substeps, capped
/// at `MAX_SUBSTEPS` per frame.
fn run(mut demo: DemoScene, seconds: f64) {
    let DemoScene {
        scene,
        cue,
        cue_target,
    } = &mut demo;

    let mut accumulator = 0.0;
    let mut sim_ms = 0.0;
    let mut ticks: u64 = 0;
    let total_frames = (seconds / FRAME_DT).ceil() as u64;

    for _ in 0..total_frames {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            scene.step(SIM_DT);
            sim_ms += SIM_DT * 1000.0;
            accumulator -= SIM_DT;
            ticks += 1;
            substeps += 1;

            if let (Some(cue), Some(target)) = (cue.as_mut(), *cue_target) {
                drive_cue(cue, &mut scene.bodies[target], sim_ms);
            }

            if ticks % 60 == 0 {
                let momentum = scene.momentum();
                log::info!(
                    "t={:6.2}s ke={:13.1} p=({:10.1}, {:10.1})",
                    sim_ms / 1000.0,
                    scene.kinetic_energy(),
                    momentum.x,
                    momentum.y,
                );
            }
        }
    }

    log::info!("done after {ticks} ticks, final snapshot follows");
    match serde_json::to_string_pretty(scene) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot failed: {err}"),
    }
}

/// One scripted stroke: aim toward the rack, charge through the full
/// window, release once.
fn drive_cue(cue: &mut Cue, target: &mut Body, now_ms: f64) {
    let release_ms = CHARGE_START_MS + CUE_CHARGE_MS + 200.0;

    if now_ms < CHARGE_START_MS {
        // Pointer sits behind the cue ball, so the launch goes toward the
        // rack on the right
        let pointer = target.pos - DVec2::new(80.0, 0.0);
        cue.update_direction(target.pos, pointer);
    } else if now_ms < release_ms {
        // start_charge is a no-op on every tick after the first
        cue.start_charge(now_ms);
        cue.tick(now_ms);
    } else if cue.is_charging() {
        log::info!("cue released at power {:.1}", cue.power());
        cue.release(target);
    }
}
