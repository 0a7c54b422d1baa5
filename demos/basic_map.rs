use autotilemap::{draw_lower, draw_upper, load, TilemapConfig};
use macroquad::prelude::*;

const SCROLL_SPEED: f32 = 4.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Autotile Map".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = TilemapConfig {
        view_width: screen_width(),
        view_height: screen_height(),
        ..Default::default()
    };
    let mut engine = load("assets/map.json", config)
        .await
        .expect("Failed to load map");

    let mut origin = vec2(0.0, 0.0);
    let mut frame: u64 = 0;

    loop {
        if is_key_down(KeyCode::Right) {
            origin.x += SCROLL_SPEED;
        }
        if is_key_down(KeyCode::Left) {
            origin.x -= SCROLL_SPEED;
        }
        if is_key_down(KeyCode::Down) {
            origin.y += SCROLL_SPEED;
        }
        if is_key_down(KeyCode::Up) {
            origin.y -= SCROLL_SPEED;
        }

        engine.set_origin(origin.x, origin.y);
        // Water animation advances one phase every 16 display frames.
        engine.update(frame / 16, |_, _| false);

        clear_background(BLACK);
        draw_lower(&engine);
        // Characters would be drawn here, between the two batches.
        draw_upper(&engine);

        draw_text(&format!("FPS: {}", get_fps()), 20.0, 30.0, 30.0, RED);
        next_frame().await;

        frame += 1;
    }
}
