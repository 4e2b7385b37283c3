use crate::components::input_value;
use crate::hooks::use_mutations::use_create_indoor;
use crate::models::{forms::CreateIndoorForm, indoor::IndoorDetail};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateIndoorModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_success: Callback<IndoorDetail>,
}

#[function_component(CreateIndoorModal)]
pub fn create_indoor_modal(props: &CreateIndoorModalProps) -> Html {
    let form = use_state(CreateIndoorForm::default);
    let invalid = use_state(|| None::<String>);
    let create = use_create_indoor();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| form.set(CreateIndoorForm { name: input_value(&e) }))
    };

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
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                if let Ok(indoor) = create.run(request).await {
                    form.set(CreateIndoorForm::default());
                    on_close.emit(());
                    on_success.emit(indoor);
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
                <h2>{"Nuevo Indoor"}</h2>

                if let Some(message) = &*invalid {
                    <div class="alert alert-warning" role="alert">{message}</div>
                }
                if let Some(error) = create.error() {
                    <div class="alert alert-error">{error.to_string()}</div>
                }

                <form {onsubmit}>
                    <label class="field">
                        <span>{"Nombre *"}</span>
                        <input
                            type="text"
                            placeholder="Ej: Carpa 80x80"
                            value={form.name.clone()}
                            oninput={on_name}
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
