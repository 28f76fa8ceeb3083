//! Arcade Duel entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use std::cell::RefCell;
    use std::rc::Rc;

    use arcade_duel::consts::{HEIGHT, WIDTH};
    use arcade_duel::hud::{phase_banner, role_label};
    use arcade_duel::platform::input::Gesture;
    use arcade_duel::platform::web::{self, SharedGame, WebSocketChannel};
    use arcade_duel::renderer::canvas::context_2d;
    use arcade_duel::{Game, Settings};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Arcade Duel starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: web_sys::HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Fixed logical resolution; CSS handles scaling to the viewport
        canvas.set_width(WIDTH as u32);
        canvas.set_height(HEIGHT as u32);
        let ctx = context_2d(&canvas)?;

        let settings = Settings::load();
        // Write back so newly added fields show up in storage
        settings.save();
        let location = window.location();
        let url = settings.socket_url(&location.protocol()?, &location.host()?);
        let channel = WebSocketChannel::open(&url)?;

        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(Game::new(&settings, seed, channel)));
        log::info!("Game initialized with seed: {}", seed);

        web::attach(&game);
        setup_input_handlers(&game)?;
        setup_restart_button(&document, game.clone())?;

        // Start render loop
        request_animation_frame(game, Rc::new(RefCell::new(ctx)), settings.show_fps);

        log::info!("Arcade Duel running!");
        Ok(())
    }

    fn setup_input_handlers(game: &SharedGame) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if (Gesture::Key { code: &code }).is_action() {
                    game.borrow_mut().send_input();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if (Gesture::MouseDown {
                    button: event.button(),
                })
                .is_action()
                {
                    game.borrow_mut().send_input();
                }
            });
            window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start: must be non-passive so it can suppress scroll/zoom
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if Gesture::TouchStart.is_action() {
                    game.borrow_mut().send_input();
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &Document, game: SharedGame) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().request_restart();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(
        game: SharedGame,
        ctx: Rc<RefCell<CanvasRenderingContext2d>>,
        show_fps: bool,
    ) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, ctx, show_fps, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(
        game: SharedGame,
        ctx: Rc<RefCell<CanvasRenderingContext2d>>,
        show_fps: bool,
        time: f64,
    ) {
        {
            let mut g = game.borrow_mut();
            g.frame(&mut *ctx.borrow_mut(), time);
            update_hud(&g, show_fps);
        }

        request_animation_frame(game, ctx, show_fps);
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            if let Err(e) = el.style().set_property("display", display) {
                log::trace!("set display on #{} failed: {:?}", id, e);
            }
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(game: &Game<WebSocketChannel>, show_fps: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let hud = game.hud();
        set_text(&document, "score-p1", &hud.scores[0].to_string());
        set_text(&document, "score-p2", &hud.scores[1].to_string());
        set_text(&document, "phase-banner", phase_banner(game.phase()));
        set_text(&document, "my-role-display", role_label(game.role()));

        let view = game.overlay_view();
        if view.visible {
            set_display(&document, "msg-overlay", "flex");
            set_text(&document, "msg-text", &view.text);
        } else {
            set_display(&document, "msg-overlay", "none");
        }
        set_display(
            &document,
            "restart-btn",
            if view.show_restart { "block" } else { "none" },
        );

        if show_fps {
            set_text(&document, "fps", &game.fps().to_string());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arcade Duel (native) starting...");
    log::info!("Native mode renders headless - serve the wasm build for the playable version");

    demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Replay a short scripted match through the real client and report what was drawn
#[cfg(not(target_arch = "wasm32"))]
fn demo() {
    use arcade_duel::hud::phase_banner;
    use arcade_duel::net::MemoryChannel;
    use arcade_duel::renderer::recording::RecordingSurface;
    use arcade_duel::{Game, Settings};

    let mut game = Game::new(&Settings::load(), 0xD0E1, MemoryChannel::new());
    let mut surface = RecordingSurface::new();

    game.handle_text(r#"{"event":"assign_role","data":{"role":"p1"}}"#);

    for (i, phase) in ["soccer", "american", "basket"].iter().enumerate() {
        let snapshot = format!(
            r#"{{"event":"state_update","data":{{"phase":"{phase}","status":"playing",
                "players":{{"p1":{{"x":{p1x},"y":350,"angle":30,"leg_angle":-40,"score":{i}}},
                            "p2":{{"x":650,"y":350,"angle":-30,"leg_angle":40,"score":0}}}},
                "ball":{{"x":400,"y":150}}}}}}"#,
            p1x = 150 + i * 100,
        );
        game.handle_text(&snapshot);
        game.send_input();
        game.handle_text(r#"{"event":"goal_event","data":{"scorer":"p1"}}"#);

        for frame in 0..30 {
            surface.reset();
            game.frame(&mut surface, (i * 30 + frame) as f64 * 1000.0 / 60.0);
        }

        let p1 = game.render_state().p1;
        log::info!(
            "{}: p1 at ({:.1}, {:.1}) angle {:.1}, {} draw calls, {} particles live",
            phase_banner(game.phase()),
            p1.pos.x,
            p1.pos.y,
            p1.angle,
            surface.commands.len(),
            game.particles().len(),
        );
    }

    log::info!("Sent {} messages upstream", game.channel().sent.len());
    println!("✓ Rendered 90 frames across all three sports");
}
