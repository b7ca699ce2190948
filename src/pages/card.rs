use log::warn;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::card_link::CardNames;
use crate::Route;

/// Which side of the card is facing the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }
}

const WISHES: [&str; 2] = [
    "On your special day, I wish you endless joy, love, and laughter! May this year bring you amazing opportunities and beautiful moments.",
    "Keep shining bright and spreading your wonderful energy everywhere you go! 🎉",
];

fn headline_name(name: &str) -> String {
    format!("{}!", name)
}

fn salutation(name: &str) -> String {
    format!("Dear {},", name)
}

#[derive(Properties, PartialEq)]
pub struct BirthdayCardProps {
    /// Path segments exactly as they appear in the URL.
    pub name: String,
    pub from: String,
}

#[function_component(BirthdayCard)]
pub fn birthday_card(props: &BirthdayCardProps) -> Html {
    let face = use_state(CardFace::default);
    let names = use_memo(
        |(name, from)| CardNames::from_segments(name, from),
        (props.name.clone(), props.from.clone()),
    );

    {
        let navigator = use_navigator();
        use_effect_with_deps(
            move |names| {
                if names.is_none() {
                    warn!("Card link is missing a name, redirecting to composer");
                    if let Some(navigator) = navigator {
                        navigator.replace(&Route::Composer);
                    }
                }
                || ()
            },
            names.clone(),
        );
    }

    let Some(names) = (*names).clone() else {
        return html! {};
    };

    let on_flip = {
        let face = face.clone();
        Callback::from(move |_: MouseEvent| face.set(face.flipped()))
    };

    let on_key = {
        let face = face.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                face.set(face.flipped());
            }
        })
    };

    let card_class = classes!("card", (*face == CardFace::Back).then(|| "flipped"));

    html! {
        <div class="card-page">
            <style>
                {r#"
                    .card-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: linear-gradient(to bottom right, #fce7f3, #f3e8ff);
                    }
                    .card-scene {
                        perspective: 1000px;
                        width: 100%;
                        max-width: 28rem;
                    }
                    .card {
                        position: relative;
                        aspect-ratio: 3 / 4;
                        cursor: pointer;
                        transform-style: preserve-3d;
                        transition: transform 0.7s;
                        outline: none;
                    }
                    .card.flipped {
                        transform: rotateY(180deg);
                    }
                    .card-face {
                        position: absolute;
                        inset: 0;
                        backface-visibility: hidden;
                        -webkit-backface-visibility: hidden;
                        border-radius: 1rem;
                        box-shadow: 0 10px 30px rgba(124, 58, 237, 0.25);
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }
                    .card-front {
                        background: #fff;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .card-back {
                        background: linear-gradient(to bottom right, #7c3aed, #5b21b6);
                        color: #fff;
                        transform: rotateY(180deg);
                    }
                    .ornament {
                        position: absolute;
                        font-size: 1.5rem;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .ornament.top-left { top: 1rem; left: 1rem; }
                    .ornament.top-right { top: 1rem; right: 1rem; }
                    .ornament.bottom-left { bottom: 1rem; left: 1rem; }
                    .ornament.bottom-right { bottom: 1rem; right: 1rem; }
                    .cake {
                        font-size: 6rem;
                        margin-bottom: 2rem;
                        animation: float 3s ease-in-out infinite;
                    }
                    .card-front h1 {
                        font-size: 3rem;
                        font-weight: bold;
                        color: #7c3aed;
                        margin: 0 0 1rem 0;
                    }
                    .recipient {
                        font-size: 1.875rem;
                        color: #374151;
                        text-transform: capitalize;
                        margin-bottom: 1.5rem;
                    }
                    .hint {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .wishes {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        gap: 1.5rem;
                    }
                    .heart {
                        font-size: 5rem;
                        animation: heartbeat 1.5s ease-in-out infinite;
                    }
                    .salutation {
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .salutation, .sender {
                        text-transform: capitalize;
                    }
                    .wish {
                        font-size: 1.25rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .signature {
                        text-align: center;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(192, 132, 252, 0.3);
                    }
                    .signature p {
                        margin: 0;
                        color: #e9d5ff;
                        font-size: 1.125rem;
                    }
                    .signature .sender {
                        margin-top: 0.5rem;
                        font-size: 1.875rem;
                        font-weight: bold;
                        color: #f9a8d4;
                    }
                    .fade-in {
                        animation: fadeIn 0.8s ease-out;
                    }
                    .make-your-own {
                        margin-top: 1.5rem;
                        color: #7c3aed;
                        font-size: 0.95rem;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                    @keyframes heartbeat {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
            <div class="card-scene">
                <div
                    class={card_class}
                    role="button"
                    tabindex="0"
                    aria-label="Birthday card, press to flip"
                    onclick={on_flip}
                    onkeydown={on_key}
                >
                    <div class="card-face card-front" aria-hidden={(*face == CardFace::Back).to_string()}>
                        <span class="ornament top-left">{"✨"}</span>
                        <span class="ornament top-right">{"✨"}</span>
                        <div class="cake">{"🎂"}</div>
                        <h1 class="fade-in">{"Happy Birthday"}</h1>
                        <p class="recipient fade-in">{headline_name(&names.name)}</p>
                        <p class="hint fade-in">{"Click the card to see your wishes"}</p>
                        <span class="ornament bottom-left">{"✨"}</span>
                        <span class="ornament bottom-right">{"✨"}</span>
                    </div>
                    <div class="card-face card-back" aria-hidden={(*face == CardFace::Front).to_string()}>
                        <span class="ornament top-right">{"💗"}</span>
                        <div class="wishes">
                            <div class="heart">{"❤️"}</div>
                            <p class="salutation fade-in">{salutation(&names.name)}</p>
                            { for WISHES.iter().map(|wish| html! { <p class="wish fade-in">{*wish}</p> }) }
                        </div>
                        <div class="signature fade-in">
                            <p>{"With love and best wishes,"}</p>
                            <p class="sender">{&names.from}</p>
                        </div>
                        <span class="ornament bottom-left">{"💗"}</span>
                    </div>
                </div>
            </div>
            <Link<Route> to={Route::Composer} classes="make-your-own">
                {"Make your own card"}
            </Link<Route>>
        </div>
    }
}
