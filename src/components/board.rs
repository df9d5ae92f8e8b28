use yew::prelude::*;

use super::button::Button;
use super::slot::Slot;
use crate::game::{Board as GameBoard, SLOTS};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub cell_size: f64,
    pub board: GameBoard,
    pub selected: Option<usize>,
    pub move_count: usize,
    pub can_undo: bool,
    pub onundo: Callback<web_sys::MouseEvent>,
    pub onreset: Callback<web_sys::MouseEvent>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        cell_size,
        board,
        selected,
        move_count,
        can_undo,
        onundo,
        onreset,
    } = props;
    let cell_size = *cell_size;
    let width = (SLOTS as f64 * cell_size).to_string();
    let height = (cell_size * 4.).to_string();
    let center_x = SLOTS as f64 * cell_size / 2.;

    let slots = board.cells().iter().enumerate().map(|(index, &cell)| {
        let selected = *selected == Some(index);
        html! {
            <Slot index={index} cell={cell} selected={selected} size={cell_size} />
        }
    });

    let status = if board.is_won() {
        html! {
            <text x={center_x.to_string()} y={(cell_size * 3.3).to_string()} font-size={format!("{}px", cell_size * 0.4)} class="text won" text-anchor="middle">
                {format!("You won in {} moves!", move_count)}
            </text>
        }
    } else {
        html! {
            <text x={center_x.to_string()} y={(cell_size * 3.3).to_string()} font-size={format!("{}px", cell_size * 0.3)} class="text" text-anchor="middle">
                {format!("Moves: {}", move_count)}
            </text>
        }
    };

    html! {
        <svg width={width} height={height}>
            <text x={center_x.to_string()} y={(cell_size * 0.35).to_string()} font-size={format!("{}px", cell_size * 0.35)} class="text" text-anchor="middle">
                {"Grandfather's Game"}
            </text>
            {for slots}
            {status}
            <Button
                x={center_x - cell_size}
                y={cell_size * 3.75}
                font_size={format!("{}px", cell_size * 0.5)}
                disabled={!can_undo}
                onclick={onundo.clone()}>
                {"⟲"}
            </Button>
            <Button
                x={center_x + cell_size}
                y={cell_size * 3.75}
                font_size={format!("{}px", cell_size * 0.5)}
                onclick={onreset.clone()}>
                {"⟳"}
            </Button>
        </svg>
    }
}
