//! High-level component architecture: the app and the simulated HAL on top,
//! their supporting libraries and host platform below.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 520.0;
const HEIGHT: f32 = 280.0;

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);

    scene.draw_panel(10.0, 10.0, WIDTH - 20.0, HEIGHT - 20.0);
    scene.draw_label(WIDTH / 2.0, 32.0, "Crosspoint Emulator", theme.title_style());

    scene.draw_box(
        40.0,
        50.0,
        160.0,
        88.0,
        [
            "Crosspoint App",
            "(main.cpp)",
            "• Activities • Themes",
            "• Readers • UI Logic",
        ],
    );
    scene.draw_box(
        320.0,
        50.0,
        160.0,
        88.0,
        [
            "Sim HAL Layer",
            "(sim/include/)",
            "• HalDisplay • HalGPIO",
            "• SDCardManager • Stubs",
        ],
    );
    scene.draw_arrow(200.0, 85.0, 320.0, 85.0);

    scene.draw_vertical_arrow(120.0, 138.0, 175.0);
    scene.draw_vertical_arrow(400.0, 138.0, 175.0);

    scene.draw_box(
        40.0,
        175.0,
        160.0,
        80.0,
        [
            "Crosspoint Libs",
            "• GfxRenderer",
            "• Epub/Txt/Xtc",
            "• Fonts • Utf8",
        ],
    );
    scene.draw_box(
        320.0,
        175.0,
        160.0,
        80.0,
        ["Host Platform", "• SDL2 Window", "• File System", "• Keyboard"],
    );

    scene.finish()
}
