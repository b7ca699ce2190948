use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::card_link::CardNames;
use crate::components::copy_link::CopyLinkButton;
use crate::config;

#[function_component(Composer)]
pub fn composer() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let from = use_state(String::new);
    // Names the current share link was made from. Cleared on edit.
    let created = use_state(|| None::<CardNames>);

    let on_name_input = {
        let name = name.clone();
        let created = created.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            created.set(None);
        })
    };

    let on_from_input = {
        let from = from.clone();
        let created = created.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            from.set(input.value());
            created.set(None);
        })
    };

    let on_submit = {
        let name = name.clone();
        let from = from.clone();
        let created = created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(names) = CardNames::from_form(&name, &from) {
                info!("Created card link {}", names.local_path());
                created.set(Some(names));
            }
        })
    };

    let share = (*created).as_ref().map(|names| {
        let link = names.share_url(&config::get_share_origin());
        let on_open = {
            let navigator = navigator.clone();
            let route = names.route();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                info!("Opening card {}", route.to_path());
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
            })
        };

        html! {
            <div class="share-panel fade-in">
                <label for="share-link">{"Share this link"}</label>
                <input id="share-link" class="share-link" type="text" readonly=true value={link.clone()} />
                <div class="share-actions">
                    <CopyLinkButton link={link} />
                    <button type="button" class="open-button" onclick={on_open}>
                        {"Open card"}
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <div class="composer-page">
            <style>
                {r#"
                    .composer-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: linear-gradient(to bottom right, #fce7f3, #f3e8ff);
                    }
                    .composer {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 30px rgba(124, 58, 237, 0.25);
                        padding: 2rem;
                        width: 100%;
                        max-width: 28rem;
                        animation: fadeIn 0.8s ease-out;
                    }
                    .composer h1 {
                        font-size: 1.875rem;
                        font-weight: bold;
                        text-align: center;
                        color: #7c3aed;
                        margin: 0 0 1.5rem 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .composer h1 .cake {
                        display: inline-block;
                        animation: float 3s ease-in-out infinite;
                    }
                    .field {
                        margin-bottom: 1rem;
                    }
                    .composer label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .composer input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.5rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        outline: none;
                        font-size: 1rem;
                    }
                    .composer input:focus {
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #a855f7;
                    }
                    .composer button {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #7c3aed;
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .composer button:hover {
                        background: #6d28d9;
                        transform: scale(1.05);
                    }
                    .share-panel {
                        margin-top: 1.5rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #ede9fe;
                    }
                    .share-link {
                        color: #5b21b6;
                        background: #faf5ff;
                    }
                    .share-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 0.75rem;
                    }
                    .composer .copy-button {
                        background: #fff;
                        color: #7c3aed;
                        border: 1px solid #7c3aed;
                    }
                    .composer .copy-button:hover {
                        background: #faf5ff;
                    }
                    .composer .copy-button.copied {
                        background: #16a34a;
                        border-color: #16a34a;
                        color: #fff;
                    }
                    .fade-in {
                        animation: fadeIn 0.5s ease-out;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                "#}
            </style>
            <div class="composer">
                <h1><span class="cake">{"🎂"}</span>{"Birthday Wishes"}</h1>
                <form onsubmit={on_submit}>
                    <div class="field">
                        <label for="name">{"Enter the birthday person's name"}</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter recipient's name..."
                            required=true
                            value={(*name).clone()}
                            oninput={on_name_input}
                        />
                    </div>
                    <div class="field">
                        <label for="from">{"Your name (From)"}</label>
                        <input
                            type="text"
                            id="from"
                            placeholder="Enter your name..."
                            required=true
                            value={(*from).clone()}
                            oninput={on_from_input}
                        />
                    </div>
                    <button type="submit">{"✨ Create Birthday Card"}</button>
                </form>
                { share.unwrap_or_default() }
            </div>
        </div>
    }
}
