use crate::components::{input_value, textarea_value};
use crate::hooks::use_mutations::use_water_plant;
use crate::models::{forms::WaterForm, plant::WaterPlantResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WaterModalProps {
    pub plant_id: AttrValue,
    pub plant_name: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_success: Callback<WaterPlantResponse>,
}

/// Records a watering for one plant
#[function_component(WaterModal)]
pub fn water_modal(props: &WaterModalProps) -> Html {
    let form = use_state(WaterForm::default);
    let invalid = use_state(|| None::<String>);
    let water = use_water_plant();

    let on_liters = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(WaterForm {
                liters: input_value(&e),
                ..(*form).clone()
            });
        })
    };

    let on_note = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(WaterForm {
                note: textarea_value(&e),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let water = water.clone();
        let plant_id = props.plant_id.clone();
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Invalid input never reaches the network
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    invalid.set(Some(err.to_string()));
                    return;
                }
            };
            invalid.set(None);

            let form = form.clone();
            let water = water.clone();
            let plant_id = plant_id.to_string();
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                // On failure the hook keeps the error and the modal stays open
                if let Ok(response) = water.run((plant_id, request)).await {
                    form.set(WaterForm::default());
                    on_close.emit(());
                    on_success.emit(response);
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let loading = water.loading();

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <h2>{"Regar: "}{&props.plant_name}</h2>

                if let Some(message) = &*invalid {
                    <div class="alert alert-warning" role="alert">{message}</div>
                }
                if let Some(error) = water.error() {
                    <div class="alert alert-error">{error.to_string()}</div>
                }

                <form {onsubmit}>
                    <label class="field">
                        <span>{"Litros *"}</span>
                        <input
                            type="number"
                            step="0.1"
                            min="0.1"
                            value={form.liters.clone()}
                            oninput={on_liters}
                        />
                    </label>

                    <label class="field">
                        <span>{"Nota (opcional)"}</span>
                        <textarea
                            rows="3"
                            placeholder="Ej: Se agregó fertilizante"
                            value={form.note.clone()}
                            oninput={on_note}
                        />
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={on_cancel} disabled={loading}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={loading}>
                            { if loading { "Guardando..." } else { "Regar" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
