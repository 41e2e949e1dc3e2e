//! Nightflap entry point
//!
//! On the web this mounts the game in `#canvas` and drives it from
//! `requestAnimationFrame`. `index.html` provides the HUD elements:
//! `#title`, `#hud-score`, `#start-prompt`, `#start-btn`, `#game-over`,
//! `#final-score`, `#restart-btn`, `#loading`.
//!
//! Natively it plays a headless run with the autopilot and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use nightflap::Tuning;
    use nightflap::consts::*;
    use nightflap::platform::{HostAction, Viewport, action_for_key, command_for};
    use nightflap::renderer::{RenderState, STAR_COUNT, Star, build_scene, generate_stars};
    use nightflap::sim::{Engine, GameEvent, GamePhase, should_flap};

    /// Game instance holding all state
    struct Game {
        engine: Engine,
        render_state: Option<RenderState>,
        stars: Vec<Star>,
        canvas: HtmlCanvasElement,
        accumulator: f32,
        last_time: f64,
        /// Tab hidden: no ticks, no catch-up afterwards
        suspended: bool,
        /// Demo mode
        autopilot: bool,
        /// Title centered and bird hidden until the first start or reset
        intro: bool,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement) -> Self {
            let tuning = Tuning::default();
            let mut star_rng = Pcg32::seed_from_u64(seed.rotate_left(17));
            let stars = generate_stars(&mut star_rng, STAR_COUNT, &tuning);
            Self {
                engine: Engine::with_seed(tuning, seed),
                render_state: None,
                stars,
                canvas,
                accumulator: 0.0,
                last_time: 0.0,
                suspended: false,
                autopilot: false,
                intro: true,
            }
        }

        /// Route an input action to the engine
        fn handle(&mut self, action: HostAction) {
            if action == HostAction::ToggleAutopilot {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
                return;
            }

            if let Some(command) = command_for(action, self.engine.phase()) {
                self.engine.apply(command);
            }
        }

        /// Run simulation ticks at a fixed cadence
        fn update(&mut self, dt: f32) {
            if self.suspended {
                return;
            }

            if self.engine.phase() != GamePhase::Running {
                self.accumulator = 0.0;
            } else {
                self.accumulator += dt.min(0.25);

                let mut substeps = 0;
                while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                    if self.autopilot && should_flap(self.engine.state(), self.engine.tuning()) {
                        self.engine.activate();
                    }
                    self.engine.tick();
                    self.accumulator -= TICK_DT;
                    substeps += 1;
                }
                if substeps == MAX_SUBSTEPS {
                    self.accumulator = 0.0;
                }
            }

            for event in self.engine.drain_events() {
                match event {
                    GameEvent::Started => {
                        self.intro = false;
                        log::info!("Run started")
                    }
                    GameEvent::Scored { score } => log::debug!("Score: {}", score),
                    GameEvent::Crashed { cause, score } => {
                        log::info!("Game over ({:?}) with score {}", cause, score)
                    }
                    GameEvent::Reset => {
                        self.intro = false;
                        log::info!("Back to title")
                    }
                    GameEvent::Flapped { .. } => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };

            let snapshot = self.engine.snapshot();
            let vertices = build_scene(
                &snapshot,
                self.engine.tuning(),
                &self.stars,
                (time / 1000.0) as f32,
                self.intro,
            );

            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Fit the canvas to the window and resize the surface
        fn fit_canvas(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(VIEWPORT_WIDTH as f64);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(VIEWPORT_HEIGHT as f64);

            let viewport = Viewport::fit(self.engine.tuning(), width as f32, height as f32);
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{}px", viewport.css_width));
            let _ = style.set_property("height", &format!("{}px", viewport.css_height));

            let (w, h) = viewport.physical_size(window.device_pixel_ratio());
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(w, h);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let phase = self.engine.phase();
            let score = self.engine.score().to_string();

            if let Some(el) = document.get_element_by_id("title") {
                let _ = el.set_attribute("class", if self.intro { "intro" } else { "" });
            }

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&score));
                let class = if phase == GamePhase::NotStarted { "hidden" } else { "" };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("start-prompt") {
                let class = if phase == GamePhase::NotStarted { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if phase == GamePhase::Over {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&score));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Nightflap starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.clone())));
        game.borrow_mut().fit_canvas();

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (width, height) = (canvas.width(), canvas.height());
        let field = {
            let g = game.borrow();
            let tuning = g.engine.tuning();
            Vec2::new(tuning.viewport_width, tuning.viewport_height)
        };
        match RenderState::new(surface, &adapter, width, height, field).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_resize(game.clone());
        setup_visibility(game.clone());

        request_animation_frame(game);

        log::info!("Nightflap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle(HostAction::Primary);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().handle(HostAction::Primary);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.code()) {
                    if action == HostAction::Primary {
                        // Keep space from scrolling the page
                        event.prevent_default();
                    }
                    game.borrow_mut().handle(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let buttons = [
            ("start-btn", HostAction::Primary),
            ("restart-btn", HostAction::Restart),
        ];
        for (id, action) in buttons {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    event.stop_propagation();
                    game.borrow_mut().handle(action);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_canvas();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            let mut g = game.borrow_mut();
            g.suspended = hidden;
            if hidden {
                log::info!("Suspended (tab hidden)");
            } else {
                // Restart frame timing so the hidden time is not replayed
                g.last_time = 0.0;
                g.accumulator = 0.0;
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Nightflap (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot run: `nightflap [seed] [max_ticks]`
///
/// `NIGHTFLAP_TUNING` may point to a JSON file overriding the default tuning.
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use nightflap::Tuning;
    use nightflap::sim::{Engine, GameEvent, should_flap};

    const DEFAULT_MAX_TICKS: u64 = 10_000;

    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => rand::random::<u64>(),
        };
        let max_ticks = match args.next() {
            Some(s) => s.parse::<u64>()?,
            None => DEFAULT_MAX_TICKS,
        };

        let tuning = match std::env::var("NIGHTFLAP_TUNING") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)?;
                let tuning = Tuning::from_json(&json)?;
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(_) => Tuning::default(),
        };

        let mut engine = Engine::with_seed(tuning, seed);
        engine.start();
        log::info!("Seed {}, up to {} ticks", seed, max_ticks);

        let mut crash = None;
        for _ in 0..max_ticks {
            if should_flap(engine.state(), engine.tuning()) {
                engine.activate();
            }
            crash = engine.tick();

            for event in engine.drain_events() {
                match event {
                    GameEvent::Scored { score } => log::debug!("Score: {}", score),
                    GameEvent::Crashed { cause, score } => {
                        log::info!("Crashed ({:?}) with score {}", cause, score)
                    }
                    other => log::trace!("{:?}", other),
                }
            }

            if crash.is_some() {
                break;
            }
        }

        let state = engine.state();
        println!(
            "seed={} ticks={} score={} outcome={}",
            seed,
            state.time_ticks,
            state.score,
            match crash {
                Some(cause) => format!("{:?}", cause),
                None => "survived".to_string(),
            }
        );

        Ok(())
    }
}
