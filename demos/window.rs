//! Live window feeding real input into the camera rig
//!
//! Run with:
//!   cargo run --example window
//!
//! Controls:
//!   Arrows      - Pan
//!   Left Mouse  - Drag to pan, click to print the ground point
//!   Right Mouse - Drag to orbit (vertical travel pitches)
//!   Scroll      - Zoom toward the cursor
//!   Tab         - Toggle 2D mode
//!   R           - Reset the rig
//!   Escape      - Exit
//!
//! Nothing is rendered; the rig pose is shown in the window title.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use camera_rig::input::{GestureChannel, GestureEvent, NoUi};
use camera_rig::rig::{FlatGround, GroundProbe, Viewport};
use camera_rig::{InputSampler, RigConfig, RigDriver};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() {
    env_logger::init();

    println!("Starting Camera Rig Demo");
    println!();
    println!("Controls:");
    println!("  Arrows       - Pan");
    println!("  Left Mouse   - Drag to pan / click");
    println!("  Right Mouse  - Drag to orbit");
    println!("  Scroll       - Zoom toward cursor");
    println!("  Tab          - Toggle 2D mode");
    println!("  R            - Reset");
    println!("  Escape       - Exit");
    println!();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let window = WindowBuilder::new()
        .with_title("Camera Rig Demo")
        .with_inner_size(PhysicalSize::new(1280, 720))
        .build(&event_loop)
        .expect("Failed to create window");

    let mut driver = match RigDriver::new(RigConfig::default(), FlatGround, NoUi) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Failed to create rig: {}", e);
            return;
        }
    };
    let size = window.inner_size();
    driver.set_viewport(Viewport::new(size.width as f32, size.height as f32));

    // Clicks are resolved to ground points after the frame's tick
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    driver.subscribe(GestureChannel::Click, move |event| {
        if let GestureEvent::Click(screen) = event {
            sink.borrow_mut().push(*screen);
        }
    });

    let mut sampler = InputSampler::new();
    let mut last_frame = Instant::now();

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => {
                    sampler.handle_window_event(&event);

                    match &event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => {
                            driver.set_viewport(Viewport::new(
                                size.width as f32,
                                size.height as f32,
                            ));
                        }
                        WindowEvent::KeyboardInput { event, .. }
                            if event.state == ElementState::Pressed && !event.repeat =>
                        {
                            match event.physical_key {
                                PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                                PhysicalKey::Code(KeyCode::Tab) => {
                                    let enabled = !driver.rig().is_2d_mode();
                                    driver.set_2d_mode(enabled);
                                    println!("2D mode: {}", enabled);
                                }
                                PhysicalKey::Code(KeyCode::KeyR) => {
                                    driver.reset();
                                    println!("Rig reset");
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32();
                    last_frame = now;

                    let snapshot = sampler.snapshot();
                    let pose = driver.tick(dt, &snapshot);

                    for screen in clicks.borrow_mut().drain(..) {
                        let view = driver.rig().view();
                        match driver.probe().probe_ground(&view, screen) {
                            Some(point) => println!(
                                "Click at ({:.0}, {:.0}) -> ground ({:.2}, {:.2}, {:.2})",
                                screen.x, screen.y, point.x, point.y, point.z
                            ),
                            None => println!("Click at ({:.0}, {:.0}) -> no ground", screen.x, screen.y),
                        }
                    }

                    let rig = driver.rig();
                    window.set_title(&format!(
                        "Camera Rig Demo - pivot ({:.1}, {:.1}) zoom {:.2} yaw {:.0} pitch {:.0}",
                        pose.pivot.x,
                        pose.pivot.z,
                        rig.smoothed_zoom(),
                        rig.yaw(),
                        rig.pitch()
                    ));
                }
                _ => {}
            }
        })
        .expect("Event loop failed");
}
