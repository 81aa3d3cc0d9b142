//! Virtual SD card: how an application file open travels down to the host
//! file system.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 420.0;
const HEIGHT: f32 = 340.0;

const BOX_X: f32 = 80.0;
const STEP_HEIGHT: f32 = 36.0;

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    let cx = WIDTH / 2.0;
    let box_width = WIDTH - 2.0 * BOX_X;

    scene.draw_title("Virtual SD Card System");

    scene.draw_vertical_arrow(cx, 40.0, 58.0);
    scene.draw_box(
        BOX_X,
        58.0,
        box_width,
        STEP_HEIGHT,
        "Crosspoint App  →  SDCardManager::open(\"/book.epub\")",
    );
    scene.draw_vertical_arrow(cx, 94.0, 112.0);
    scene.draw_box(
        BOX_X,
        112.0,
        box_width,
        STEP_HEIGHT,
        "FsFile API  →  resolvePath(\"/book.epub\")  →  \"./sdcard/book.epub\"",
    );
    scene.draw_vertical_arrow(cx, 148.0, 166.0);
    scene.draw_box(
        BOX_X,
        166.0,
        box_width,
        STEP_HEIGHT,
        "POSIX File System  (fopen, fread, fwrite)",
    );
    scene.draw_vertical_arrow(cx, 202.0, 220.0);
    scene.draw_box(
        BOX_X,
        220.0,
        box_width,
        100.0,
        [
            "./sdcard/",
            "  ├── book1.epub",
            "  ├── book2.txt",
            "  └── Novels/",
            "        └── book3.epub",
        ],
    );

    scene.finish()
}
