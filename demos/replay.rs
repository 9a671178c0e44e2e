//! Headless replay of scripted input through the gesture engine and rig
//!
//! Run with:
//!   cargo run --example replay
//!   cargo run --example replay -- --script rotate --settle 30
//!   RUST_LOG=debug cargo run --example replay -- --script drag
//!
//! Every gesture is printed as it is emitted and the final rig pose is
//! printed at the end.

use camera_rig::input::{GestureChannel, KeyCode, NoUi, PointerButton};
use camera_rig::rig::{CameraSettings, FlatGround, Viewport};
use camera_rig::{GestureConfig, InputSampler, RigConfig, RigDriver};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    Click,
    Drag,
    Rotate,
    Zoom,
    Keys,
    All,
}

#[derive(Debug, Parser)]
#[command(about = "Replay scripted input through the camera rig")]
struct Args {
    /// Which gesture script to play
    #[arg(long, value_enum, default_value = "all")]
    script: Script,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Idle frames appended after the script so tweens can settle
    #[arg(long, default_value_t = 60)]
    settle: usize,

    /// Click radius in pixels
    #[arg(long, default_value_t = 20.0)]
    click_radius: f32,

    /// Disable pitch while rotating
    #[arg(long)]
    two_d: bool,

    /// Print the pose every frame
    #[arg(long)]
    verbose: bool,
}

/// One raw input event
#[derive(Debug, Clone, Copy)]
enum Step {
    Move(f32, f32),
    Press(PointerButton),
    Release(PointerButton),
    Scroll(f32),
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

type Frame = Vec<Step>;

fn click_script() -> Vec<Frame> {
    vec![
        vec![Step::Move(640.0, 360.0)],
        vec![Step::Press(PointerButton::Primary)],
        vec![Step::Move(645.0, 362.0)],
        vec![Step::Release(PointerButton::Primary)],
    ]
}

fn drag_script() -> Vec<Frame> {
    let mut frames = vec![
        vec![Step::Move(640.0, 360.0)],
        vec![Step::Press(PointerButton::Primary)],
    ];
    for i in 1..=10 {
        frames.push(vec![Step::Move(640.0 + 20.0 * i as f32, 360.0)]);
    }
    frames.push(vec![Step::Release(PointerButton::Primary)]);
    frames
}

fn rotate_script() -> Vec<Frame> {
    let mut frames = vec![
        vec![Step::Move(640.0, 200.0)],
        vec![Step::Press(PointerButton::Secondary)],
    ];
    for i in 1..=10 {
        frames.push(vec![Step::Move(640.0, 200.0 - 8.0 * i as f32)]);
    }
    for i in 1..=10 {
        frames.push(vec![Step::Move(640.0 - 12.0 * i as f32, 120.0)]);
    }
    frames.push(vec![Step::Release(PointerButton::Secondary)]);
    frames
}

fn zoom_script() -> Vec<Frame> {
    let mut frames = vec![vec![Step::Move(900.0, 200.0)]];
    for _ in 0..5 {
        frames.push(vec![Step::Scroll(1.0)]);
    }
    frames
}

fn keys_script() -> Vec<Frame> {
    let mut frames = vec![vec![Step::KeyDown(KeyCode::ArrowUp)]];
    frames.extend((0..29).map(|_| Vec::new()));
    frames.push(vec![
        Step::KeyUp(KeyCode::ArrowUp),
        Step::KeyDown(KeyCode::ArrowRight),
    ]);
    frames.extend((0..29).map(|_| Vec::new()));
    frames.push(vec![Step::KeyUp(KeyCode::ArrowRight)]);
    frames
}

fn build_script(script: Script) -> Vec<Frame> {
    match script {
        Script::Click => click_script(),
        Script::Drag => drag_script(),
        Script::Rotate => rotate_script(),
        Script::Zoom => zoom_script(),
        Script::Keys => keys_script(),
        Script::All => [
            click_script(),
            drag_script(),
            zoom_script(),
            rotate_script(),
            keys_script(),
        ]
        .concat(),
    }
}

fn feed(sampler: &mut InputSampler, step: Step) {
    match step {
        Step::Move(x, y) => sampler.on_pointer_move(x as f64, y as f64),
        Step::Press(button) => sampler.on_button(button, true),
        Step::Release(button) => sampler.on_button(button, false),
        Step::Scroll(delta) => sampler.on_scroll(delta),
        Step::KeyDown(key) => sampler.on_key_pressed(key),
        Step::KeyUp(key) => sampler.on_key_released(key),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = RigConfig::new()
        .with_camera(CameraSettings::default())
        .with_gesture(GestureConfig::default().with_click_radius(args.click_radius));

    let mut driver = match RigDriver::new(config, FlatGround, NoUi) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    driver.set_viewport(Viewport::new(1280.0, 720.0));
    driver.set_2d_mode(args.two_d);

    for channel in GestureChannel::ALL {
        driver.subscribe(channel, |event| println!("  {:?}", event));
    }

    let mut frames = build_script(args.script);
    frames.extend((0..args.settle).map(|_| Vec::new()));

    println!("Replaying {:?} ({} frames)", args.script, frames.len());

    let mut sampler = InputSampler::new();
    for frame in frames {
        for step in frame {
            feed(&mut sampler, step);
        }
        let snapshot = sampler.snapshot();
        let pose = driver.tick(args.dt, &snapshot);
        if args.verbose {
            println!(
                "frame {:4}: pivot ({:.2}, {:.2}, {:.2}) height {:.2}",
                snapshot.frame, pose.pivot.x, pose.pivot.y, pose.pivot.z, pose.height
            );
        }
    }

    let rig = driver.rig();
    println!();
    println!("Final pose:");
    println!(
        "  Pivot: ({:.2}, {:.2}, {:.2})",
        rig.position().x,
        rig.position().y,
        rig.position().z
    );
    println!("  Zoom: {:.3} (height {:.2})", rig.zoom_level(), rig.height());
    println!("  Yaw: {:.2} deg, Pitch: {:.2} deg", rig.yaw(), rig.pitch());
}
