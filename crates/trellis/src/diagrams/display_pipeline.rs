//! Display rendering pipeline: six stacked stages from the application's
//! framebuffer to the SDL2 window.
//!
//! Stages are evenly spaced; every connector runs from the bottom edge of a
//! stage to the top edge of the next one.

use trellis_core::{
    scene::{Canvas, Scene},
    theme::Theme,
};

const WIDTH: f32 = 420.0;
const HEIGHT: f32 = 520.0;

const STAGE_X: f32 = 30.0;
const FIRST_STAGE_TOP: f32 = 50.0;
const STAGE_HEIGHT: f32 = 62.0;
const STAGE_GAP: f32 = 10.0;

/// Stage heading and detail line, top to bottom.
const STAGES: [(&str, &str); 6] = [
    (
        "1. Application draws to framebuffer",
        "uint8_t frameBuffer[BUFFER_SIZE]  (800×480 bits)",
    ),
    (
        "2. HalDisplay::displayBuffer()",
        "Copies to internal buffer, triggers render",
    ),
    (
        "3. sim_display.cpp: render_bw_to_texture()",
        "8 pixels/byte, rotate (x,y)→(H-1-y,x), bits→RGB24",
    ),
    (
        "4. SDL2 Texture Update",
        "SDL_LockTexture / Write RGB24 / SDL_UnlockTexture",
    ),
    (
        "5. SDL2 Render Present",
        "SDL_RenderCopy / SDL_RenderPresent",
    ),
    ("6. Window Display (480×800)", "SDL2 Window (rotated view)"),
];

/// Top edge of stage `index`.
fn stage_top(index: usize) -> f32 {
    FIRST_STAGE_TOP + index as f32 * (STAGE_HEIGHT + STAGE_GAP)
}

pub fn build(theme: &Theme) -> String {
    let mut scene = Scene::new(Canvas::new(WIDTH, HEIGHT), theme);
    scene.draw_title("Crosspoint Rendering Pipeline");

    for (i, (title, detail)) in STAGES.iter().enumerate() {
        let top = stage_top(i);
        scene.draw_box(
            STAGE_X,
            top,
            WIDTH - 2.0 * STAGE_X,
            STAGE_HEIGHT,
            [*title, *detail],
        );

        if i + 1 < STAGES.len() {
            scene.draw_vertical_arrow(WIDTH / 2.0, top + STAGE_HEIGHT, stage_top(i + 1));
        }
    }

    scene.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_stage_fits_canvas() {
        let last_bottom = stage_top(STAGES.len() - 1) + STAGE_HEIGHT;
        assert!(last_bottom <= HEIGHT);
        assert_eq!(last_bottom, 472.0);
    }
}
