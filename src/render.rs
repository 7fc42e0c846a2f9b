//! Canvas2D drawing
//!
//! Pure presentation over a read-only `GameState` snapshot, called only
//! between completed ticks. Every sprite falls back to a colored rectangle
//! until (or unless) its image arrives.

use web_sys::CanvasRenderingContext2d;

use crate::assets::Assets;
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const SKY_COLOR: &str = "#87CEEB";
const GROUND_COLOR: &str = "#8B7355";
const GROUND_LINE_COLOR: &str = "#654321";
const PLAYER_COLOR: &str = "#FF6B6B";
const COLLECTIBLE_COLOR: &str = "#FFA500";

/// How many ticks each run frame is held
const RUN_FRAME_TICKS: u64 = 6;

pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState, assets: &Assets) {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;
    let ready = assets.all_loaded();

    // Background
    if ready && assets.background.complete() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.background,
            0.0,
            0.0,
            w,
            h,
        );
    } else {
        ctx.set_fill_style_str(SKY_COLOR);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    // Ground strip and line
    ctx.set_fill_style_str(GROUND_COLOR);
    ctx.fill_rect(0.0, (CANVAS_HEIGHT - GROUND_HEIGHT) as f64, w, GROUND_HEIGHT as f64);
    ctx.set_stroke_style_str(GROUND_LINE_COLOR);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(0.0, (CANVAS_HEIGHT - GROUND_HEIGHT) as f64);
    ctx.line_to(w, (CANVAS_HEIGHT - GROUND_HEIGHT) as f64);
    ctx.stroke();

    draw_player(ctx, state, assets, ready);

    for obstacle in &state.obstacles {
        let img = assets.obstacle_image(obstacle.kind);
        if ready && img.complete() {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        } else {
            ctx.set_fill_style_str(obstacle.color);
            ctx.fill_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }
    }

    for collectible in &state.collectibles {
        if collectible.collected {
            continue;
        }
        if ready && assets.collectible.complete() {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &assets.collectible,
                collectible.pos.x as f64,
                collectible.pos.y as f64,
                collectible.size.x as f64,
                collectible.size.y as f64,
            );
        } else {
            ctx.set_fill_style_str(COLLECTIBLE_COLOR);
            ctx.fill_rect(
                collectible.pos.x as f64,
                collectible.pos.y as f64,
                collectible.size.x as f64,
                collectible.size.y as f64,
            );
        }
    }
}

fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState, assets: &Assets, ready: bool) {
    let p = &state.player;

    let img = if state.phase == GamePhase::GameOver {
        Some(&assets.fall)
    } else if p.airborne {
        Some(&assets.jump)
    } else if !assets.run_frames.is_empty() {
        let idx = (state.score / RUN_FRAME_TICKS) as usize % assets.run_frames.len();
        Some(&assets.run_frames[idx])
    } else {
        None
    };

    if ready {
        if let Some(img) = img {
            if img.complete() {
                let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    p.pos.x as f64,
                    p.pos.y as f64,
                    p.size.x as f64,
                    p.size.y as f64,
                );
                return;
            }
        }
    }

    // Placeholder: a rectangle with eyes
    ctx.set_fill_style_str(PLAYER_COLOR);
    ctx.fill_rect(
        p.pos.x as f64,
        p.pos.y as f64,
        p.size.x as f64,
        p.size.y as f64,
    );
    ctx.set_fill_style_str("#FFF");
    ctx.fill_rect(p.pos.x as f64 + 10.0, p.pos.y as f64 + 15.0, 8.0, 8.0);
    ctx.fill_rect(p.pos.x as f64 + 22.0, p.pos.y as f64 + 15.0, 8.0, 8.0);
}
