use crate::components::{
    EmptyState, ErrorBlock, ToastContainer, create_plant_modal::CreatePlantModal, input_value,
    water_modal::WaterModal,
};
use crate::hooks::{
    use_indoor_detail::use_indoor_detail, use_mutations::use_update_indoor, use_toasts::use_toasts,
};
use crate::models::{
    forms::{IndoorDraft, IndoorField, IndoorToggle},
    indoor::{IndoorDetail, IndoorHistoryEvent},
    plant::{Plant, WaterPlantResponse},
};
use chrono::{Local, NaiveDate};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn format_event_time(event: &IndoorHistoryEvent) -> String {
    event
        .event_ts
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

#[derive(Properties, PartialEq)]
pub struct IndoorDetailPageProps {
    pub indoor_id: AttrValue,
    pub on_back: Callback<()>,
}

/// A single indoor: plants, history and editable settings
#[function_component(IndoorDetailPage)]
pub fn indoor_detail_page(props: &IndoorDetailPageProps) -> Html {
    let detail = use_indoor_detail(props.indoor_id.clone());
    let update = use_update_indoor();
    let toasts = use_toasts();

    let watering = use_state(|| None::<(AttrValue, AttrValue)>);
    let adding_plant = use_state(|| false);
    let editing = use_state(|| false);
    let draft = use_state(IndoorDraft::default);

    if props.indoor_id.trim().is_empty() {
        return html! { <div class="status">{"ID de indoor no encontrado"}</div> };
    }

    let state = &detail.state;
    if let Some(error) = &state.error {
        return html! {
            <ErrorBlock prefix="Error al cargar detalle: " message={error.to_string()} />
        };
    }
    let Some(data) = state.data().cloned() else {
        return if state.is_loading() {
            html! { <div class="status loading"><div class="spinner"></div><p>{"Cargando..."}</p></div> }
        } else {
            html! { <div class="status">{"No se encontró el indoor"}</div> }
        };
    };

    let refetch = detail.refetch.clone();

    let on_water = {
        let watering = watering.clone();
        Callback::from(move |plant: (AttrValue, AttrValue)| watering.set(Some(plant)))
    };
    let on_water_close = {
        let watering = watering.clone();
        Callback::from(move |()| watering.set(None))
    };
    let on_watered = {
        let toasts = toasts.clone();
        let refetch = refetch.clone();
        Callback::from(move |_: WaterPlantResponse| {
            toasts.success("Planta regada correctamente");
            refetch.emit(());
        })
    };

    let on_add_plant = {
        let adding_plant = adding_plant.clone();
        Callback::from(move |_| adding_plant.set(true))
    };
    let on_add_close = {
        let adding_plant = adding_plant.clone();
        Callback::from(move |()| adding_plant.set(false))
    };
    let on_plant_created = {
        let toasts = toasts.clone();
        let refetch = refetch.clone();
        Callback::from(move |plant: Plant| {
            toasts.success(format!("Planta \"{}\" añadida", plant.name));
            refetch.emit(());
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(true))
    };
    let on_cancel_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            editing.set(false);
            draft.set(IndoorDraft::default());
        })
    };
    let on_save = {
        let draft = draft.clone();
        let editing = editing.clone();
        let update = update.clone();
        let toasts = toasts.clone();
        let refetch = refetch.clone();
        let indoor_id = props.indoor_id.to_string();

        Callback::from(move |_| {
            let request = match draft.to_request() {
                Ok(request) => request,
                Err(err) => {
                    toasts.error(err.to_string());
                    return;
                }
            };
            if request.is_empty() {
                editing.set(false);
                return;
            }

            let draft = draft.clone();
            let editing = editing.clone();
            let update = update.clone();
            let toasts = toasts.clone();
            let refetch = refetch.clone();
            let indoor_id = indoor_id.clone();

            spawn_local(async move {
                match update.run((indoor_id, request)).await {
                    Ok(_) => {
                        toasts.success("Cambios guardados");
                        editing.set(false);
                        draft.set(IndoorDraft::default());
                        refetch.emit(());
                    }
                    Err(_) => {
                        toasts.error("Error al guardar cambios");
                    }
                }
            });
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    let saving = update.loading();
    let indoor = &data.indoor;

    html! {
        <div class="page">
            <header class="page-header page-header-actions">
                <div>
                    <button class="link-button" onclick={on_back}>{"← Volver"}</button>
                    <h1>{&indoor.name}</h1>
                </div>
                <button class="btn btn-primary" onclick={on_add_plant}>{"+ Añadir Planta"}</button>
            </header>

            <section>
                <h2>{"Plantas"}</h2>
                { plants_table(&data.plants, &on_water) }
            </section>

            <section>
                <h2>{"Historial"}</h2>
                if data.history.is_empty() {
                    <EmptyState icon="📝" title="No hay historial" />
                } else {
                    <div class="history-list">
                        {
                            data.history.iter().enumerate().map(|(idx, event)| html! {
                                <div key={idx} class="card history-item">
                                    <p>{&event.message}</p>
                                    <span class="history-time">{format_event_time(event)}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </section>

            <section>
                <div class="section-header">
                    <h2>{"Detalles del Indoor"}</h2>
                    if *editing {
                        <div class="button-row">
                            <button class="btn" onclick={on_cancel_edit}>{"Cancelar"}</button>
                            <button class="btn btn-primary" onclick={on_save} disabled={saving}>
                                { if saving { "Guardando..." } else { "Guardar Cambios" } }
                            </button>
                        </div>
                    } else {
                        <button class="btn" onclick={on_edit}>{"Editar"}</button>
                    }
                </div>

                <div class="card settings-card">
                    <h3>{"Ambiente"}</h3>
                    <div class="settings-grid">
                        if *editing {
                            { edit_field(IndoorField::Name, indoor, &draft) }
                        }
                        {
                            IndoorField::ENVIRONMENT.iter().map(|field| {
                                settings_field(*field, indoor, &draft, *editing)
                            }).collect::<Html>()
                        }
                        { toggles(indoor, &draft, *editing) }
                    </div>

                    <h3>{"Luz"}</h3>
                    <div class="settings-grid">
                        {
                            IndoorField::LIGHT.iter().map(|field| {
                                settings_field(*field, indoor, &draft, *editing)
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            if let Some((plant_id, plant_name)) = &*watering {
                <WaterModal
                    plant_id={plant_id.clone()}
                    plant_name={plant_name.clone()}
                    on_close={on_water_close}
                    on_success={on_watered}
                />
            }

            if *adding_plant {
                <CreatePlantModal
                    indoor_id={props.indoor_id.clone()}
                    on_close={on_add_close}
                    on_success={on_plant_created}
                />
            }

            <ToastContainer toasts={toasts.toasts.clone()} on_remove={toasts.remove.clone()} />
        </div>
    }
}

fn plants_table(plants: &[Plant], on_water: &Callback<(AttrValue, AttrValue)>) -> Html {
    if plants.is_empty() {
        return html! { <EmptyState icon="🌱" title="No hay plantas aún" /> };
    }

    html! {
        <div class="card table-wrapper">
            <table class="plants-table">
                <thead>
                    <tr>
                        <th>{"Nombre"}</th>
                        <th>{"Último Riego"}</th>
                        <th>{"Próximo Riego"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        plants.iter().map(|plant| {
                            let onclick = {
                                let on_water = on_water.clone();
                                let id = AttrValue::from(plant.id.clone());
                                let name = AttrValue::from(plant.name.clone());
                                Callback::from(move |_| on_water.emit((id.clone(), name.clone())))
                            };
                            html! {
                                <tr key={plant.id.clone()}>
                                    <td class="plant-name">
                                        {&plant.name}
                                        if let Some(species) = &plant.species {
                                            <span class="plant-species">{species}</span>
                                        }
                                    </td>
                                    <td>{format_date(plant.last_watered_at)}</td>
                                    <td>{format_date(plant.next_water_at)}</td>
                                    <td>
                                        <button class="btn btn-primary btn-small" {onclick}>{"Regar"}</button>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

fn edit_field(field: IndoorField, indoor: &IndoorDetail, draft: &UseStateHandle<IndoorDraft>) -> Html {
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.set_field(field, input_value(&e));
            draft.set(next);
        })
    };

    let step = match field {
        IndoorField::LightHeightCm | IndoorField::LightPowerPct => Some("1"),
        IndoorField::TempC | IndoorField::Humidity => Some("0.1"),
        _ => None,
    };
    let placeholder = (field == IndoorField::LightSchedule).then_some("Ej: 18h-6h");

    html! {
        <label class="field">
            <span>{field.label()}</span>
            <input
                type={field.input_type()}
                {step}
                {placeholder}
                value={draft.field_value(field, indoor)}
                {oninput}
            />
        </label>
    }
}

fn settings_field(
    field: IndoorField,
    indoor: &IndoorDetail,
    draft: &UseStateHandle<IndoorDraft>,
    editing: bool,
) -> Html {
    if editing {
        return edit_field(field, indoor, draft);
    }

    html! {
        <div class="field">
            <span>{field.label()}</span>
            <p class="field-value">{field.display(indoor)}</p>
        </div>
    }
}

fn toggles(indoor: &IndoorDetail, draft: &UseStateHandle<IndoorDraft>, editing: bool) -> Html {
    let rows = IndoorToggle::ALL.iter().map(|toggle| {
        let toggle = *toggle;
        let checked = draft.toggle_value(toggle, indoor);

        if !editing {
            let mark = if checked { "✓" } else { "✗" };
            return html! { <p>{format!("{}: {mark}", toggle.label())}</p> };
        }

        let onchange = {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                let mut next = (*draft).clone();
                next.set_toggle(toggle, input.checked());
                draft.set(next);
            })
        };

        html! {
            <label class="toggle">
                <input type="checkbox" {checked} {onchange} />
                <span>{toggle.label()}</span>
            </label>
        }
    });

    html! {
        <div class="field">
            <span>{"Toggles"}</span>
            <div class="toggle-list">{ for rows }</div>
        </div>
    }
}
