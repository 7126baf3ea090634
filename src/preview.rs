//! Native preview window.
//!
//! Hosts one slideshow container in a [`MemoryDocument`] and feeds raylib input
//! into the same listeners a browser would: clicking the Next button, the
//! arrow/space/enter keys, and mouse drags standing in for touch swipes.
//! Slide sources are read as local file paths.
//!
//! Only raster formats raylib decodes (PNG, JPEG, BMP, GIF) can be shown.
//! Anything else, SVG included, fires the image `error` listener just like a
//! broken URL in the browser.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;
use tracing::{debug, info};

use crate::dom::{MemoryDocument, SlideshowNodes};
use crate::gesture::Point;
use crate::texture_loader::load_texture_with_exif_rotation;

pub const DEFAULT_WIDTH: i32 = 960;
pub const DEFAULT_HEIGHT: i32 = 540;
const FPS: u32 = 60;
const BAR_HEIGHT: f32 = 48.0;   // Control bar at the bottom of the window
const FONT_SIZE: i32 = 20;

const KEYS: [(KeyboardKey, &str); 4] = [
    (KeyboardKey::KEY_RIGHT, "ArrowRight"),
    (KeyboardKey::KEY_SPACE, " "),
    (KeyboardKey::KEY_ENTER, "Enter"),
    (KeyboardKey::KEY_LEFT, "ArrowLeft"),
];

#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    pub width: i32,
    pub height: i32,
}

// Textures by src; `None` marks a src that failed to load
#[derive(Default)]
struct TextureCache {
    textures: HashMap<String, Option<Texture2D>>,
}

impl TextureCache {
    fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, src: &str) -> bool {
        if let Some(entry) = self.textures.get(src) {
            return entry.is_some();
        }
        let texture = match load_texture_with_exif_rotation(rl, thread, Path::new(src)) {
            Ok(texture) => Some(texture),
            Err(e) => {
                debug!("{e:#}");
                None
            }
        };
        let loaded = texture.is_some();
        self.textures.insert(src.to_string(), texture);
        loaded
    }

    fn get(&self, src: &str) -> Option<&Texture2D> {
        self.textures.get(src).and_then(Option::as_ref)
    }
}

fn next_button(screen_width: f32, screen_height: f32) -> Rectangle {
    Rectangle::new(screen_width - 110.0, screen_height - BAR_HEIGHT + 8.0, 100.0, BAR_HEIGHT - 16.0)
}

fn to_point(v: Vector2) -> Point {
    Point::new(v.x, v.y)
}

pub fn run(doc: &MemoryDocument, nodes: SlideshowNodes, options: PreviewOptions) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(options.width, options.height)
        .title("Slideshow Preview")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut textures = TextureCache::default();
    let mut shown_src = String::new();
    let mut dragging = false;

    info!("preview window open");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;
        let button = next_button(sw, sh);

        // 1. Fetch what the widget asked to preload
        for src in doc.take_preloads() {
            textures.load(&mut rl, &thread, &src);
        }

        // 2. Input -> DOM events
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if button.check_collision_point_rec(mouse) {
                doc.click(nodes.next);
            } else {
                dragging = true;
                doc.touch_start(nodes.container, to_point(mouse));
            }
        }
        if dragging && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            dragging = false;
            doc.touch_end(nodes.container, to_point(mouse));
        }
        for (key, name) in KEYS {
            if rl.is_key_pressed(key) {
                doc.key_down(nodes.container, name);
            }
        }

        // 3. The image element changed: load it, or fire its error event
        let src = doc.src(nodes.image);
        if src != shown_src {
            shown_src = src;
            if !textures.load(&mut rl, &thread, &shown_src) {
                doc.image_error(nodes.image);
            }
        }

        // --- Render ---
        let counter = format!("{} / {}", doc.text(nodes.count), doc.text(nodes.total));
        let alt = doc.alt(nodes.image);
        let last_alert = doc.alerts().pop();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        match textures.get(&shown_src) {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                // Fit to 90% of the area above the control bar
                let scale = ((sw * 0.9) / tex_width).min(((sh - BAR_HEIGHT) * 0.9) / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        (sw - scaled_width) * 0.5,
                        (sh - BAR_HEIGHT - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                d.draw_text(&format!("Cannot show {shown_src}"), 20, 20, FONT_SIZE, Color::RED);
            }
        }

        // Debug-mode alerts show as a banner instead of blocking the window
        if let Some(message) = &last_alert {
            d.draw_rectangle(0, 0, sw as i32, 36, Color::MAROON);
            d.draw_text(message, 12, 8, FONT_SIZE, Color::WHITE);
        }

        let bar_y = (sh - BAR_HEIGHT) as i32;
        d.draw_rectangle(0, bar_y, sw as i32, BAR_HEIGHT as i32, Color::DARKGRAY);
        d.draw_text(&counter, 12, bar_y + 14, FONT_SIZE, Color::WHITE);
        d.draw_text(&alt, 120, bar_y + 14, FONT_SIZE, Color::LIGHTGRAY);
        d.draw_rectangle_rec(button, Color::GRAY);
        d.draw_text(
            "Next",
            button.x as i32 + 26,
            button.y as i32 + 6,
            FONT_SIZE,
            Color::WHITE,
        );
    }

    Ok(())
}
