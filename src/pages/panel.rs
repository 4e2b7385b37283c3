use crate::components::{
    CardSkeleton, EmptyState, ErrorBlock, ToastContainer, upcoming_item::UpcomingItem,
    water_modal::WaterModal,
};
use crate::hooks::{use_dashboard::use_dashboard, use_toasts::use_toasts};
use crate::models::plant::WaterPlantResponse;
use yew::prelude::*;

/// Dashboard: totals and upcoming waterings
#[function_component(Panel)]
pub fn panel() -> Html {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let selected = use_state(|| None::<(AttrValue, AttrValue)>);

    let on_water = {
        let selected = selected.clone();
        Callback::from(move |plant: (AttrValue, AttrValue)| selected.set(Some(plant)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let on_watered = {
        let toasts = toasts.clone();
        let refetch = dashboard.refetch.clone();
        Callback::from(move |_: WaterPlantResponse| {
            toasts.success("Planta regada correctamente");
            refetch.emit(());
        })
    };

    let state = &dashboard.state;
    if let Some(error) = &state.error {
        return html! {
            <ErrorBlock prefix="Error al cargar panel: " message={error.to_string()} />
        };
    }

    let stats = match state.data() {
        Some(summary) => html! {
            <div class="stats-grid">
                <div class="card stat-card">
                    <h3>{"Indoors Totales"}</h3>
                    <p class="stat-value">{summary.indoors_total}</p>
                </div>
                <div class="card stat-card">
                    <h3>{"Plantas Totales"}</h3>
                    <p class="stat-value">{summary.plants_total}</p>
                </div>
                <div class="card stat-card stat-card-warning">
                    <h3>{"Necesitan Riego"}</h3>
                    <p class="stat-value">{summary.need_water_count}</p>
                </div>
            </div>
        },
        None if state.is_loading() => html! {
            <div class="stats-grid">
                <CardSkeleton />
                <CardSkeleton />
                <CardSkeleton />
            </div>
        },
        None => html! {},
    };

    let upcoming = match state.data() {
        Some(summary) if !summary.upcoming.is_empty() => html! {
            <div class="upcoming-list">
                {
                    summary.upcoming.iter().map(|plant| html! {
                        <UpcomingItem
                            key={plant.plant_id.clone()}
                            plant={plant.clone()}
                            on_water={on_water.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>
        },
        None if state.is_loading() => html! {
            <div class="upcoming-list">
                { for (0..3).map(|i| html! { <div key={i} class="card skeleton skeleton-row"></div> }) }
            </div>
        },
        _ => html! {
            <EmptyState
                icon="🌿"
                title="Todas las plantas están al día"
                description="No hay plantas que necesiten riego en este momento."
            />
        },
    };

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{"Panel de Control"}</h1>
                <p>{"Un resumen rápido de tu jardín."}</p>
            </header>

            {stats}

            <section>
                <h2>{"Próximos Riegos"}</h2>
                {upcoming}
            </section>

            if let Some((plant_id, plant_name)) = &*selected {
                <WaterModal
                    plant_id={plant_id.clone()}
                    plant_name={plant_name.clone()}
                    on_close={on_close}
                    on_success={on_watered}
                />
            }

            <ToastContainer toasts={toasts.toasts.clone()} on_remove={toasts.remove.clone()} />
        </div>
    }
}
