//! Thread architecture: a single explanatory block describing the one main
//! loop shared with the device.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 520.0;
const HEIGHT: f32 = 300.0;

const MAIN_LOOP: [&str; 10] = [
    "Single Main Thread",
    "while (true) {",
    "  prewarmStep()     // one EPUB per frame",
    "  sim_display_pump_events()",
    "  loop()",
    "    → Activity::loop()",
    "    → Activity::render()",
    "}",
    "",
    "Image conversion yields every 8 rows. Display and SD I/O serialized (shared SPI).",
];

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);

    scene.draw_title("Thread Architecture (matches device)");
    scene.draw_box(40.0, 45.0, WIDTH - 80.0, 180.0, MAIN_LOOP);
    scene.draw_label(
        WIDTH / 2.0,
        255.0,
        "Single core, same behavior as real device.",
        theme.caption_style(),
    );

    scene.finish()
}
