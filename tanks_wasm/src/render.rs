use tanks_core::{
    common::constants::EXPLOSION_TILE_SIZE,
    scene::{Color, DrawCommand, FONT_SIZE, LARGE_FONT_SIZE},
};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets::Sprites;

/// Commands in the order they are painted, lowest layer first
pub fn paint_order(mut commands: Vec<DrawCommand>) -> Vec<DrawCommand> {
    // `sort_by_key` is stable, so commands within a layer keep their order
    commands.sort_by_key(DrawCommand::z);
    commands
}

pub fn render_scene(
    context: &CanvasRenderingContext2d,
    sprites: &Sprites,
    scene: Vec<DrawCommand>,
) {
    for command in paint_order(scene) {
        draw(context, sprites, &command);
    }
}

fn draw(context: &CanvasRenderingContext2d, sprites: &Sprites, command: &DrawCommand) {
    match command {
        DrawCommand::Sprite {
            key,
            center,
            rotation,
            ..
        } => {
            if let Some(image) = sprites.get(*key) {
                draw_rotated(context, image, center.x, center.y, *rotation);
            }
        }
        DrawCommand::Tile {
            key,
            frame,
            top_left,
            ..
        } => {
            if let Some(image) = sprites.get(*key) {
                let tile = EXPLOSION_TILE_SIZE;
                context
                    .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                        image,
                        *frame as f64 * tile,
                        0.0,
                        tile,
                        tile,
                        top_left.x,
                        top_left.y,
                        tile,
                        tile,
                    )
                    .expect("tile could not be drawn");
            }
        }
        DrawCommand::Image { key, top_left, .. } => {
            if let Some(image) = sprites.get(*key) {
                context
                    .draw_image_with_html_image_element(image, top_left.x, top_left.y)
                    .expect("image could not be drawn");
            }
        }
        DrawCommand::Rect {
            top_left,
            width,
            height,
            color,
            ..
        } => {
            context.set_fill_style(&color.css().into());
            context.fill_rect(top_left.x, top_left.y, *width, *height);
        }
        DrawCommand::Text {
            text,
            top_left,
            size,
            color,
            ..
        } => draw_text(context, text, top_left.x, top_left.y, *size, *color),
    }
}

/// Image centered on (x, y) and turned clockwise by `degrees`
fn draw_rotated(
    context: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    x: f64,
    y: f64,
    degrees: f64,
) {
    let (width, height) = (image.natural_width() as f64, image.natural_height() as f64);

    context.save();
    context.translate(x, y).expect("failed to move origin");
    context.rotate(degrees.to_radians()).expect("failed to rotate");
    context
        .draw_image_with_html_image_element(image, -width / 2.0, -height / 2.0)
        .expect("sprite could not be drawn");
    context.restore();
}

fn draw_text(
    context: &CanvasRenderingContext2d,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    color: Color,
) {
    context.set_font(&format!("{size}px sans-serif"));
    context.set_text_baseline("top");
    context.set_text_align("left");
    context.set_fill_style(&color.css().into());
    context.fill_text(text, x, y).expect("text could not be drawn");
}

/// Plain message over a black screen, for the time before the game can run
pub fn render_message(context: &CanvasRenderingContext2d, width: f64, height: f64, lines: &[&str]) {
    context.set_fill_style(&Color::BLACK.css().into());
    context.fill_rect(0.0, 0.0, width, height);

    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { LARGE_FONT_SIZE } else { FONT_SIZE };
        let y = height / 3.0 + i as f64 * LARGE_FONT_SIZE * 1.5;
        draw_text(context, line, width / 10.0, y, size, Color::WHITE);
    }
}
