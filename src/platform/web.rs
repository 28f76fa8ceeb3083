//! Browser socket transport
//!
//! Snapshots arrive as text frames and are handed straight to the game.
//! Outbound messages are sent only while the socket is open; otherwise they
//! are logged and dropped. There is no reconnect logic.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::game::Game;
use crate::net::Channel;
use crate::protocol::{self, Outbound};

pub type SharedGame = Rc<RefCell<Game<WebSocketChannel>>>;

/// Outbound half of the socket
pub struct WebSocketChannel {
    ws: WebSocket,
}

impl WebSocketChannel {
    pub fn open(url: &str) -> Result<Self, JsValue> {
        let ws = WebSocket::new(url)?;
        log::info!("Connecting to {}", url);
        Ok(Self { ws })
    }

    pub fn socket(&self) -> &WebSocket {
        &self.ws
    }
}

impl Channel for WebSocketChannel {
    fn emit(&mut self, msg: &Outbound) {
        if self.ws.ready_state() != WebSocket::OPEN {
            log::warn!("Socket not open, dropping {:?}", msg);
            return;
        }
        if let Err(e) = self.ws.send_with_str(&protocol::encode(msg)) {
            log::warn!("Send failed: {:?}", e);
        }
    }
}

/// Route socket events into the game. Closures live for the page lifetime.
pub fn attach(game: &SharedGame) {
    let ws = game.borrow().channel().socket().clone();

    {
        let closure = Closure::<dyn FnMut()>::new(move || {
            log::info!("Socket connected");
        });
        ws.set_onopen(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MessageEvent| {
            match event.data().as_string() {
                Some(text) => game.borrow_mut().handle_text(&text),
                None => log::warn!("Ignoring non-text socket frame"),
            }
        });
        ws.set_onmessage(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: CloseEvent| {
            log::warn!("Socket closed (code {})", event.code());
        });
        ws.set_onclose(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        // Browsers fire a plain Event here, with no detail attached
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            log::error!("Socket error");
        });
        ws.set_onerror(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}
