//! Navigation flow: Boot leads to Home, which branches into the menu tree.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 380.0;
const HEIGHT: f32 = 280.0;

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    let cx = WIDTH / 2.0;

    scene.draw_box(cx - 50.0, 20.0, 100.0, 40.0, "Boot");
    scene.draw_vertical_arrow(cx, 60.0, 85.0);
    scene.draw_box(cx - 50.0, 85.0, 100.0, 40.0, "Home  ◄──");
    scene.draw_vertical_arrow(cx, 125.0, 145.0);
    scene.draw_box(
        30.0,
        145.0,
        WIDTH - 60.0,
        110.0,
        [
            "My Library  →  [Book Grid]  →  Reader",
            "Recents  →  Reader",
            "Settings",
            "[Other]                    Back/Home",
        ],
    );

    scene.finish()
}
