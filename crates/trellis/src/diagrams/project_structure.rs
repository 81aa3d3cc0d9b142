//! Project directory structure as a plain left-aligned listing.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 320.0;

const LISTING_X: f32 = 40.0;
const FIRST_ROW: f32 = 50.0;
const ROW_HEIGHT: f32 = 22.0;

const TREE: [&str; 10] = [
    "crosspoint-emulator/",
    "├── CMakeLists.txt    # Build configuration",
    "├── README.md",
    "├── build/           # Build output (gitignored)",
    "├── docs/",
    "│   └── UI-UX-LIBRARY-PLAN.md",
    "├── sdcard/          # Virtual SD card (gitignored)",
    "└── sim/             # Simulator HAL",
    "    ├── include/     # HAL headers (HalDisplay, HalGPIO, …)",
    "    └── src/         # main_sim.cpp, sim_display.cpp, sim_gpio.cpp, sim_storage.cpp",
];

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    scene.draw_title("Project Structure");

    for (i, row) in TREE.iter().enumerate() {
        let y = FIRST_ROW + i as f32 * ROW_HEIGHT;
        scene.draw_label(LISTING_X, y, row, theme.listing_style());
    }

    scene.finish()
}
