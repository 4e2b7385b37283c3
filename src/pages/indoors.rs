use crate::components::{
    CardSkeleton, EmptyState, ErrorBlock, ToastContainer, create_indoor_modal::CreateIndoorModal,
};
use crate::hooks::{use_indoors::use_indoors, use_toasts::use_toasts};
use crate::models::indoor::IndoorDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IndoorsProps {
    /// Emits the id of the indoor to open
    pub on_select: Callback<AttrValue>,
}

/// Growing spaces overview
#[function_component(Indoors)]
pub fn indoors(props: &IndoorsProps) -> Html {
    let indoors = use_indoors();
    let toasts = use_toasts();
    let creating = use_state(|| false);

    let on_open = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(true))
    };

    let on_close = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    let on_created = {
        let toasts = toasts.clone();
        let refetch = indoors.refetch.clone();
        Callback::from(move |indoor: IndoorDetail| {
            toasts.success(format!("Indoor \"{}\" creado", indoor.name));
            refetch.emit(());
        })
    };

    let state = &indoors.state;
    if let Some(error) = &state.error {
        return html! {
            <ErrorBlock prefix="Error al cargar indoors: " message={error.to_string()} />
        };
    }

    let content = match state.data() {
        Some(items) if !items.is_empty() => html! {
            <div class="indoor-grid">
                {
                    items.iter().map(|indoor| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let id = AttrValue::from(indoor.id.clone());
                            Callback::from(move |_| on_select.emit(id.clone()))
                        };
                        html! {
                            <button key={indoor.id.clone()} class="card indoor-card" {onclick}>
                                <h3>{&indoor.name}</h3>
                                <p>{indoor.plants_label()}</p>
                                <span class="card-link">{"Ver detalle →"}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        },
        None if state.is_loading() => html! {
            <div class="indoor-grid">
                <CardSkeleton />
                <CardSkeleton />
                <CardSkeleton />
            </div>
        },
        _ => html! {
            <EmptyState
                icon="🌱"
                title="No hay indoors aún"
                description="Crea tu primer indoor para empezar a cultivar plantas."
                action_label="Crear Indoor"
                on_action={on_open.clone()}
            />
        },
    };

    let on_new = {
        let on_open = on_open.clone();
        Callback::from(move |_| on_open.emit(()))
    };

    html! {
        <div class="page">
            <header class="page-header page-header-actions">
                <div>
                    <h1>{"Indoors"}</h1>
                    <p>{"Gestiona tus carpas y espacios de cultivo."}</p>
                </div>
                <button class="btn btn-primary" onclick={on_new}>{"+ Nuevo Indoor"}</button>
            </header>

            {content}

            if *creating {
                <CreateIndoorModal on_close={on_close} on_success={on_created} />
            }

            <ToastContainer toasts={toasts.toasts.clone()} on_remove={toasts.remove.clone()} />
        </div>
    }
}
