use std::f64::consts::PI;

use duel_core::constants::SHIELD_COLOR;
use duel_core::snapshot::{PlayerView, ProjectileView, Snapshot};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// What a phase puts on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
    Blank,
    Countdown,
    Avatars,
    Arena,
}

fn layer_for(phase: &str) -> Layer {
    match phase {
        "notStarted" => Layer::Blank,
        "countdown" => Layer::Countdown,
        "dropping" | "intro" => Layer::Avatars,
        _ => Layer::Arena,
    }
}

/// Paint one frame of the snapshot: nothing behind the start screen, the bare
/// countdown numeral, avatars during the drop, then the full arena with HUD
/// text once play begins.
pub fn draw(ctx: &CanvasRenderingContext2d, snap: &Snapshot) -> Result<(), JsValue> {
    let w = snap.canvas_width as f64;
    let h = snap.canvas_height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    match layer_for(snap.phase) {
        Layer::Blank => {}
        Layer::Countdown => {
            if let Some(n) = snap.countdown {
                ctx.set_fill_style_str("white");
                ctx.set_font("48px Arial");
                ctx.set_text_align("center");
                ctx.fill_text(&n.to_string(), w / 2.0, h / 2.0)?;
                ctx.set_text_align("left");
            }
        }
        Layer::Avatars => {
            for p in &snap.players {
                draw_player(ctx, p)?;
            }
            for p in &snap.players {
                draw_message(ctx, p)?;
            }
        }
        Layer::Arena => {
            draw_top_status(ctx, snap, w)?;
            for proj in &snap.projectiles {
                draw_projectile(ctx, proj);
            }
            for p in &snap.players {
                draw_player(ctx, p)?;
            }
            for p in &snap.players {
                draw_message(ctx, p)?;
            }
            draw_controls(ctx, snap, w, h)?;
        }
    }
    Ok(())
}

fn draw_player(ctx: &CanvasRenderingContext2d, p: &PlayerView) -> Result<(), JsValue> {
    ctx.set_fill_style_str(p.color);
    ctx.fill_rect(p.x as f64, p.y as f64, p.width as f64, p.height as f64);
    if p.shield_active {
        ctx.set_stroke_style_str(SHIELD_COLOR);
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.arc(
            p.x as f64 + p.width as f64 / 2.0,
            p.y as f64 + p.height as f64 / 2.0,
            p.width as f64,
            0.0,
            PI * 2.0,
        )?;
        ctx.stroke();
    }
    Ok(())
}

fn draw_message(ctx: &CanvasRenderingContext2d, p: &PlayerView) -> Result<(), JsValue> {
    if let Some(msg) = &p.message {
        ctx.set_fill_style_str("white");
        ctx.set_font("18px Arial");
        ctx.fill_text(msg, p.x as f64 - 10.0, p.y as f64 - 10.0)?;
    }
    Ok(())
}

fn draw_projectile(ctx: &CanvasRenderingContext2d, proj: &ProjectileView) {
    ctx.set_fill_style_str(proj.color);
    ctx.fill_rect(
        proj.x as f64,
        proj.y as f64,
        proj.width as f64,
        proj.height as f64,
    );
}

fn draw_top_status(ctx: &CanvasRenderingContext2d, snap: &Snapshot, w: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str("white");
    ctx.set_font("18px Arial");
    ctx.set_text_align("left");
    ctx.fill_text(&format!("🛡️ {}%", snap.players[0].shield_percent), 10.0, 25.0)?;
    ctx.set_text_align("right");
    ctx.fill_text(&format!("🛡️ {}%", snap.players[1].shield_percent), w - 10.0, 25.0)?;
    ctx.set_text_align("left");
    Ok(())
}

fn draw_controls(ctx: &CanvasRenderingContext2d, snap: &Snapshot, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str("white");
    ctx.set_font("14px Arial");
    ctx.set_text_align("left");
    ctx.fill_text(snap.controls_help[0], 10.0, h - 20.0)?;
    ctx.set_text_align("right");
    ctx.fill_text(snap.controls_help[1], w - 10.0, h - 20.0)?;
    ctx.set_text_align("left");
    Ok(())
}
