use yew::prelude::*;

use crate::game::Cell;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub index: usize,
    pub cell: Cell,
    pub selected: bool,
    pub size: f64,
}

#[function_component(Slot)]
pub fn slot(props: &Props) -> Html {
    let Props {
        index,
        cell,
        selected,
        size,
    } = props.clone();
    let center_x = (index as f64 + 0.5) * size;
    let width = size * 0.15;
    let height = size * 2.;
    let top = size * 0.5;
    let center_y = top + height / 2.;

    let x = (center_x - width / 2.).to_string();
    let y = top.to_string();
    let width = width.to_string();
    let height = height.to_string();

    match cell {
        Cell::Empty => html! {},
        Cell::Single => {
            let class = if selected {
                "toothpick selected"
            } else {
                "toothpick"
            };
            html! {
                <rect x={x} y={y} width={width} height={height} class={class} />
            }
        }
        Cell::Paired => {
            let lean_left = format!("rotate(-20 {} {})", center_x, center_y);
            let lean_right = format!("rotate(20 {} {})", center_x, center_y);
            html! {
                <>
                    <rect x={x.clone()} y={y.clone()} width={width.clone()} height={height.clone()} class="toothpick" transform={lean_left} />
                    <rect x={x} y={y} width={width} height={height} class="toothpick" transform={lean_right} />
                </>
            }
        }
    }
}
