//! Linear call flow from the simulator entry point into the main loop.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 380.0;
const HEIGHT: f32 = 320.0;

/// Startup calls in order, with the top of each box.
const STARTUP: [(&str, f32); 3] = [
    ("sim_display_init()  → SDL2 window", 95.0),
    ("setup()  → Crosspoint initialization", 135.0),
    ("loop()  → Main event loop", 175.0),
];

const STEP_HEIGHT: f32 = 32.0;

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    let cx = WIDTH / 2.0;

    scene.draw_box(cx - 60.0, 20.0, 120.0, 44.0, "main()  ← Entry point (main_sim.cpp)");
    scene.draw_vertical_arrow(cx, 64.0, 85.0);

    for (i, (label, top)) in STARTUP.iter().enumerate() {
        scene.draw_box(40.0, *top, WIDTH - 80.0, STEP_HEIGHT, *label);
        if i + 1 < STARTUP.len() {
            scene.draw_vertical_arrow(cx, top + STEP_HEIGHT, top + 48.0);
        }
    }

    // Body of each loop iteration.
    scene.draw_vertical_arrow(cx, 207.0, 230.0);
    scene.draw_box(
        40.0,
        230.0,
        WIDTH - 80.0,
        28.0,
        "prewarmStep()  •  sim_display_pump_events()  •  HalGPIO::update()  •  Activity::loop()  •  HalDisplay::displayBuffer()",
    );

    scene.finish()
}
