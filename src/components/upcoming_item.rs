use crate::models::dashboard::PlantUpcoming;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UpcomingItemProps {
    pub plant: PlantUpcoming,
    /// Emits `(plant_id, name)` when "Regar" is pressed
    pub on_water: Callback<(AttrValue, AttrValue)>,
}

/// One row of the upcoming waterings list
#[function_component(UpcomingItem)]
pub fn upcoming_item(props: &UpcomingItemProps) -> Html {
    let plant = &props.plant;
    let status_class = plant.status.css_class();

    let onclick = {
        let on_water = props.on_water.clone();
        let id = AttrValue::from(plant.plant_id.clone());
        let name = AttrValue::from(plant.name.clone());
        Callback::from(move |_| on_water.emit((id.clone(), name.clone())))
    };

    html! {
        <div class={classes!("upcoming-item", status_class)}>
            <div>
                <h3>{&plant.name}</h3>
                <p class="upcoming-due">{plant.due_label()}</p>
            </div>
            <div class="upcoming-actions">
                <span class={classes!("status-badge", status_class)}>{plant.status.label()}</span>
                <button class="btn btn-primary" {onclick}>{"Regar"}</button>
            </div>
        </div>
    }
}
