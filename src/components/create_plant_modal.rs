use crate::components::input_value;
use crate::hooks::use_mutations::use_create_plant;
use crate::models::{forms::CreatePlantForm, plant::Plant};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreatePlantModalProps {
    /// Indoor the new plant is placed in
    #[prop_or_default]
    pub indoor_id: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_success: Callback<Plant>,
}

#[function_component(CreatePlantModal)]
pub fn create_plant_modal(props: &CreatePlantModalProps) -> Html {
    let indoor_id = props.indoor_id.as_ref().map(ToString::to_string);
    let form = use_state(|| CreatePlantForm::for_indoor(indoor_id.clone()));
    let invalid = use_state(|| None::<String>);
    let create = use_create_plant();

    // One input handler per field, each replacing only its own value
    let field = |apply: fn(&mut CreatePlantForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };
    let on_name = field(|f, v| f.name = v);
    let on_species = field(|f, v| f.species = v);
    let on_interval = field(|f, v| f.watering_interval_days = v);
    let on_liters = field(|f, v| f.default_liters = v);

    let onsubmit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let create = create.clone();
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    invalid.set(Some(err.to_string()));
                    return;
                }
            };
            invalid.set(None);

            let form = form.clone();
            let create = create.clone();
            let indoor_id = indoor_id.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                if let Ok(plant) = create.run(request).await {
                    form.set(CreatePlantForm::for_indoor(indoor_id));
                    on_close.emit(());
                    on_success.emit(plant);
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let loading = create.loading();

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <h2>{"Nueva Planta"}</h2>

                if let Some(message) = &*invalid {
                    <div class="alert alert-warning" role="alert">{message}</div>
                }
                if let Some(error) = create.error() {
                    <div class="alert alert-error">{error.to_string()}</div>
                }

                <form {onsubmit}>
                    <label class="field">
                        <span>{"Nombre *"}</span>
                        <input type="text" value={form.name.clone()} oninput={on_name} />
                    </label>
                    <label class="field">
                        <span>{"Especie (opcional)"}</span>
                        <input type="text" value={form.species.clone()} oninput={on_species} />
                    </label>
                    <label class="field">
                        <span>{"Intervalo de riego (días)"}</span>
                        <input
                            type="number"
                            step="1"
                            min="1"
                            value={form.watering_interval_days.clone()}
                            oninput={on_interval}
                        />
                    </label>
                    <label class="field">
                        <span>{"Litros por riego"}</span>
                        <input
                            type="number"
                            step="0.1"
                            min="0.1"
                            value={form.default_liters.clone()}
                            oninput={on_liters}
                        />
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={on_cancel} disabled={loading}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={loading}>
                            { if loading { "Creando..." } else { "Crear" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
