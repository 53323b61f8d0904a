//! Treasure Diver entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use treasure_diver::audio::{AudioManager, SoundEffect};
    use treasure_diver::consts::*;
    use treasure_diver::renderer::CanvasRenderer;
    use treasure_diver::sim::{GameEvent, GameState, Stepper, TickInput};
    use treasure_diver::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        stepper: Stepper,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
        settings: Settings,
        highscores: HighScores,
        input: TickInput,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_muted(settings.muted);
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            Self {
                state: GameState::new(seed),
                stepper: Stepper::new(),
                renderer: None,
                audio,
                settings,
                highscores: HighScores::load(),
                input: TickInput::default(),
                last_time: 0.0,
            }
        }

        /// Drain one frame's wall time into the simulation, then replay the
        /// gameplay edges as one-shot sounds
        fn update(&mut self, dt: f32) {
            self.stepper.advance(&mut self.state, &self.input, dt);
            for event in self.state.events.drain(..) {
                match event {
                    GameEvent::TreasureGrabbed => self.audio.play(SoundEffect::Grab),
                    GameEvent::TreasureDelivered => {
                        self.audio.play(SoundEffect::Score);
                        log::info!(
                            "Level up! level={} score={}",
                            self.state.level,
                            self.state.score.round()
                        );
                    }
                    GameEvent::GameOver => self.audio.play(SoundEffect::Die),
                }
            }
        }

        /// Render the current frame (plus the terminal overlay once the
        /// latch has flipped)
        fn render(&self) {
            if let Some(renderer) = &self.renderer {
                let best = if self.settings.show_best {
                    self.highscores.top_score()
                } else {
                    None
                };
                renderer.render(&self.state, best);
                if self.state.game_over {
                    renderer.render_game_over();
                }
            }
        }

        /// Record the finished run on the leaderboard
        fn finish(&mut self) {
            let score = self.state.score.round() as u64;
            match self
                .highscores
                .add_score(score, self.state.level, js_sys::Date::now())
            {
                Some(rank) => {
                    log::info!("Game over: score {score} makes the leaderboard at rank {rank}");
                    self.highscores.save();
                }
                None => log::info!("Game over: score {score}"),
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_muted(self.settings.muted);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Treasure Diver starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(WORLD_W as u32);
        canvas.set_height(WORLD_H as u32);

        let atlas: HtmlImageElement = document
            .get_element_by_id("sprites")
            .expect("no sprite atlas")
            .dyn_into()
            .expect("not an image");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        let renderer = CanvasRenderer::new(&canvas, atlas).expect("Failed to create renderer");
        game.borrow_mut().renderer = Some(renderer);

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Treasure Diver running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down - set held directions, toggle mute
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                // First gesture is allowed to unlock the audio context
                g.audio.resume();
                match event.key().as_str() {
                    "ArrowUp" | "w" | "W" => {
                        event.prevent_default();
                        g.input.up = true;
                    }
                    "ArrowDown" | "s" | "S" => {
                        event.prevent_default();
                        g.input.down = true;
                    }
                    "ArrowLeft" | "a" | "A" => {
                        event.prevent_default();
                        g.input.left = true;
                    }
                    "ArrowRight" | "d" | "D" => {
                        event.prevent_default();
                        g.input.right = true;
                    }
                    "m" | "M" => {
                        if !event.repeat() {
                            g.toggle_mute();
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up - clear held directions
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" | "w" | "W" => g.input.up = false,
                    "ArrowDown" | "s" | "S" => g.input.down = false,
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let over = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if g.state.game_over {
                g.finish();
            }
            g.state.game_over
        };

        // The loop does not restart itself after the terminal overlay
        if !over {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use treasure_diver::sim::{GameState, Stepper, TickInput};

    env_logger::init();
    log::info!("Treasure Diver (native) starting...");

    // Headless demo: a scripted dive fed with synthetic frame deltas through
    // the same entry point the browser loop uses.
    let mut state = GameState::new(2026);
    let mut stepper = Stepper::new();
    let frame = 1.0 / 60.0;

    let dive = TickInput {
        down: true,
        ..Default::default()
    };
    let surface = TickInput {
        up: true,
        ..Default::default()
    };

    while !state.game_over && state.level == 1 && stepper.run_time < 120.0 {
        let input = if state.treasure.held { &surface } else { &dive };
        stepper.advance(&mut state, input, frame);
        for event in state.events.drain(..) {
            log::info!("event: {event:?}");
        }
    }

    println!(
        "demo finished: level {} score {} air {:.1} game_over {}",
        state.level,
        state.score.round(),
        state.air,
        state.game_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
