use crate::components::textarea_value;
use gloo::console;
use yew::prelude::*;

/// Placeholder chat box until the bot is wired in
#[function_component(ChatbotTest)]
pub fn chatbot_test() -> Html {
    let message = use_state(String::new);

    let send = {
        let message = message.clone();
        Callback::from(move |()| {
            let text = message.trim();
            if text.is_empty() {
                return;
            }
            console::log!(format!("Message sent: {text}"));
            message.set(String::new());
        })
    };

    let oninput = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| message.set(textarea_value(&e)))
    };

    let onkeydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let onclick = send.reform(|_: MouseEvent| ());
    let empty = message.trim().is_empty();

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{"Chatbot Test"}</h1>
                <p class="subtitle">{"Pruebas del bot conversacional."}</p>
            </header>

            <div class="card chat-box">
                <div class="chat-messages">
                    <div class="chat-notice">{"🤖 Chatbot listo"}</div>
                </div>
                <div class="chat-input">
                    <textarea
                        rows="2"
                        placeholder="Escribe tu mensaje aquí..."
                        value={(*message).clone()}
                        {oninput}
                        {onkeydown}
                    />
                    <button class="btn btn-primary" {onclick} disabled={empty}>{"Enviar"}</button>
                </div>
            </div>
        </div>
    }
}
