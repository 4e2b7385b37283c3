use crate::hooks::use_api::use_api_client;
use yew::prelude::*;

/// Handle returned by `use_user_id` hook
#[derive(Clone, PartialEq)]
pub struct UserIdHandle {
    /// Raw value as typed, may be blank while editing
    pub user_id: String,
    pub set_user_id: Callback<String>,
}

/// Telegram user id editing with persistence through the client's identity provider
#[hook]
pub fn use_user_id() -> UserIdHandle {
    let client = use_api_client();
    let user_id = use_state({
        let client = client.clone();
        move || client.identity().user_id()
    });

    // Effect: Persist the id on change
    {
        let value = (*user_id).clone();
        use_effect_with(value, move |value| {
            client.identity().set_user_id(value);
            || ()
        });
    }

    let set_user_id = {
        let user_id = user_id.clone();
        Callback::from(move |new_id: String| user_id.set(new_id))
    };

    UserIdHandle {
        user_id: (*user_id).clone(),
        set_user_id,
    }
}
