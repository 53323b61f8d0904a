//! Canvas2D rendering module
//!
//! Blits atlas sprites and HUD text onto the game canvas. Rendering only
//! reads the game state; it never mutates it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::*;
use crate::sim::GameState;
use crate::sim::geom::Rect;

/// Background band colors (sky, water, sand)
const SKY_COLOR: &str = "#0000dd";
const WATER_COLOR: &str = "#222255";
const SAND_COLOR: &str = "#442200";
const HUD_COLOR: &str = "#ffffff";
const LOW_AIR_COLOR: &str = "#ff6666";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    atlas: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, atlas: HtmlImageElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, atlas })
    }

    /// Blit one atlas sprite at a world position (top-left anchor)
    fn draw_sprite(&self, sprite: &Rect, x: f32, y: f32) {
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.atlas,
                sprite.x as f64,
                sprite.y as f64,
                sprite.w as f64,
                sprite.h as f64,
                x as f64,
                y as f64,
                sprite.w as f64,
                sprite.h as f64,
            );
    }

    /// Draw one full frame: background bands, boat, actors, treasure, HUD
    pub fn render(&self, state: &GameState, best: Option<u64>) {
        let w = WORLD_W as f64;
        let h = WORLD_H as f64;

        self.ctx.set_fill_style_str(SKY_COLOR);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(WATER_COLOR);
        self.ctx
            .fill_rect(0.0, h * SURFACE_FRAC as f64, w, h * 0.7);
        self.ctx.set_fill_style_str(SAND_COLOR);
        self.ctx
            .fill_rect(0.0, h * SAND_FRAC as f64, w, h * 0.1);

        let boat = &state.boat;
        self.draw_sprite(
            &boat.sprite,
            boat.pos.x - boat.sprite.w / 2.0,
            boat.pos.y - boat.sprite.h,
        );

        for actor in &state.characters {
            if actor.dir == -1.0 {
                // Mirror about the sprite's own width
                self.ctx.save();
                let _ = self.ctx.scale(-1.0, 1.0);
                self.draw_sprite(
                    &actor.sprite,
                    -(actor.pos.x - actor.sprite.w / 2.0) - actor.sprite.w,
                    actor.pos.y,
                );
                self.ctx.restore();
            } else {
                self.draw_sprite(
                    &actor.sprite,
                    actor.pos.x - actor.sprite.w / 2.0,
                    actor.pos.y,
                );
            }
        }

        let treasure = &state.treasure;
        if treasure.held {
            // Held treasure rides just above the diver
            if let Some(diver) = state.diver() {
                self.draw_sprite(
                    &treasure.sprite,
                    treasure.pos.x - treasure.sprite.w / 2.0,
                    diver.pos.y - 26.0,
                );
            }
        } else {
            self.draw_sprite(
                &treasure.sprite,
                treasure.pos.x - treasure.sprite.w / 2.0,
                treasure.pos.y - treasure.sprite.h,
            );
        }

        self.draw_hud(state, best);
    }

    fn draw_hud(&self, state: &GameState, best: Option<u64>) {
        self.ctx.set_font("25px monospace");
        self.ctx.set_fill_style_str(HUD_COLOR);
        let _ = self
            .ctx
            .fill_text(&format!("LEVEL: {}", state.level), 10.0, 30.0);
        let _ = self
            .ctx
            .fill_text(&format!("SCORE: {}", state.score.round() as i64), 10.0, 60.0);
        if let Some(best) = best {
            let _ = self.ctx.fill_text(&format!("BEST: {best}"), 10.0, 120.0);
        }
        if state.air < LOW_AIR {
            self.ctx.set_fill_style_str(LOW_AIR_COLOR);
        }
        let _ = self
            .ctx
            .fill_text(&format!("AIR: {}", state.air.ceil() as i32), 10.0, 90.0);
    }

    /// Full-screen terminal message, drawn instead of the HUD
    pub fn render_game_over(&self) {
        self.ctx.set_font("100px monospace");
        self.ctx.set_fill_style_str(HUD_COLOR);
        let _ = self
            .ctx
            .fill_text("GAME OVER", 130.0, (WORLD_H / 2.0) as f64);
    }
}
