use yew::prelude::*;

use super::board::Board;
use crate::game::{self, GameAction, SLOTS};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub cell_size: f64,
    pub left: f64,
    pub top: f64,
}

#[function_component(Game)]
pub fn game_component(props: &Props) -> Html {
    let Props {
        cell_size,
        left,
        top,
    } = props.clone();

    let game = use_reducer(game::Game::new);

    let window = web_sys::window().unwrap();

    // taps land on the toothpick band only; the rows below hold the
    // counter and the buttons, which handle their own clicks
    let slot_at = move |client_x: f64, client_y: f64| {
        let y = client_y - top;
        if y < 0. || y >= cell_size * 3. {
            return None;
        }
        let index = ((client_x - left) / cell_size)
            .max(0.)
            .min(SLOTS as f64 - 1.) as usize;
        Some(index)
    };

    let cloned_game = game.clone();
    let onmousedown = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        if let Some(index) = slot_at(event.client_x() as f64, event.client_y() as f64) {
            cloned_game.dispatch(GameAction::Tap(index));
        }
    });

    let cloned_game = game.clone();
    let ontouchstart = Callback::from(move |event: web_sys::TouchEvent| {
        let touches = event.target_touches();
        for i in 0..touches.length() {
            if let Some(touch) = touches.item(i) {
                web_sys::console::log_1(&wasm_bindgen::JsValue::from(touch.client_x()));
                web_sys::console::log_1(&wasm_bindgen::JsValue::from(touch.client_y()));
                if let Some(index) = slot_at(touch.client_x() as f64, touch.client_y() as f64) {
                    cloned_game.dispatch(GameAction::Tap(index));
                }
            }
        }
    });

    let cloned_game = game.clone();
    let onundo = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        cloned_game.dispatch(GameAction::Undo);
    });

    let cloned_game = game.clone();
    let onreset = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        cloned_game.dispatch(GameAction::Reset);
    });

    let (onmousedown, ontouchstart) = if window.navigator().max_touch_points() > 0 {
        (Callback::from(|_| ()), ontouchstart)
    } else {
        (onmousedown, Callback::from(|_| ()))
    };

    let game = &*game;

    html! {
        <div class="game" style={format!("top: {}px; left: {}px;", top, left)} onmousedown={onmousedown} ontouchstart={ontouchstart}>
            <Board
                board={game.board.clone()}
                selected={game.selected}
                move_count={game.move_count}
                can_undo={game.can_undo()}
                onundo={onundo}
                onreset={onreset}
                cell_size={cell_size} />
        </div>
    }
}
