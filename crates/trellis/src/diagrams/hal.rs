//! Layered abstraction: application code over the HAL interfaces, which fork
//! into the device and simulator implementations.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 320.0;

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    let cx = WIDTH / 2.0;

    scene.draw_box(
        40.0,
        20.0,
        WIDTH - 80.0,
        50.0,
        [
            "Crosspoint Application Code",
            "(Activities, Themes, Readers, UI Logic)",
        ],
    );
    scene.draw_vertical_arrow(cx, 70.0, 95.0);
    scene.draw_label(cx, 88.0, "Uses HAL interfaces", theme.text_style());
    scene.draw_vertical_arrow(cx, 95.0, 115.0);

    scene.draw_box(
        40.0,
        115.0,
        WIDTH - 80.0,
        80.0,
        [
            "HAL Layer",
            "HalDisplay (display, clear)  •  HalGPIO (isPressed, wasPress)  •  SDCardMgr (open, read)",
        ],
    );

    // Fork into the two implementations.
    scene.draw_vertical_arrow(cx, 195.0, 220.0);
    scene.draw_arrow(cx, 220.0, 140.0, 260.0);
    scene.draw_arrow(cx, 220.0, WIDTH - 140.0, 260.0);

    scene.draw_box(
        40.0,
        260.0,
        180.0,
        48.0,
        ["Device HAL (ESP32)", "E-ink driver, GPIO, SD SPI"],
    );
    scene.draw_box(
        WIDTH - 220.0,
        260.0,
        180.0,
        48.0,
        ["Sim HAL (SDL2/Desktop)", "SDL2 renderer, Keyboard, File system"],
    );

    scene.finish()
}
