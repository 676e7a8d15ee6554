//! Bladeboard entry point: a Yew scoreboard for spinning-top battles.
//!
//! Wires the pure scoreboard state to the DOM: decision pads, the decision
//! log, the settings modal, and a document-level keyboard shortcut layer.

use bladeboard::shortcuts::{self, Action};
use bladeboard::{interop, keys, parse_points, ScoreboardAction, ScoreboardState, Settings, Side};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

mod components;
mod config;

use components::{render_log, PlayerColumn, SettingsModal};
use config::{DECISIONS, DEFAULT_LEFT_NAME, DEFAULT_RIGHT_NAME, DEFAULT_VICTORY_POINT};

fn initial_settings() -> Settings {
    Settings {
        left_name: DEFAULT_LEFT_NAME.to_string(),
        right_name: DEFAULT_RIGHT_NAME.to_string(),
        video_src: config::COUNTDOWN_VIDEOS[0].0.to_string(),
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(|| ScoreboardState {
        victory_point: DEFAULT_VICTORY_POINT,
        ..ScoreboardState::default()
    });
    let settings = use_state(initial_settings);
    let modal_open = use_state(|| false);
    // Raw text of the victory-point field; the parsed value lives in state.
    // Keeping the text local lets the user empty the field mid-edit without
    // it snapping back to "0".
    let victory_text = use_state(|| DEFAULT_VICTORY_POINT.to_string());

    // Document-level shortcut listener, removed again on unmount.
    {
        let state = state.clone();
        let modal_open = modal_open.clone();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
                    if shortcuts::is_typing_target(&target.tag_name(), target.is_content_editable())
                    {
                        return;
                    }
                }

                let symbol = keys::normalize(e.key_code(), &e.code(), &e.key());
                let Some(action) = shortcuts::route(&symbol) else {
                    return;
                };
                if shortcuts::suppresses_default(action) {
                    e.prevent_default();
                }

                match action {
                    Action::Reset => state.dispatch(ScoreboardAction::Reset),
                    Action::OpenSettings => modal_open.set(true),
                    Action::Decision { side, slot } => {
                        // A slot past the table end is tolerated.
                        if let Some(spec) = DECISIONS.get(slot) {
                            state.dispatch(ScoreboardAction::Score {
                                side,
                                delta: spec.delta,
                                label: spec.label.to_string(),
                            });
                        }
                    }
                }
            }) as Box<dyn FnMut(_)>);

            let _ = document
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            move || {
                let _ = document
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                drop(key_cb);
            }
        });
    }

    let on_decision = |side: Side| {
        let state = state.clone();
        Callback::from(move |(delta, label): (i32, String)| {
            state.dispatch(ScoreboardAction::Score { side, delta, label });
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ScoreboardAction::Reset))
    };
    let on_menu = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let on_rocket = Callback::from(|_| interop::start_countdown());
    let on_victory_input = {
        let state = state.clone();
        let victory_text = victory_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            state.dispatch(ScoreboardAction::SetVictoryPoint(parse_points(&text)));
            victory_text.set(text);
        })
    };
    let on_apply_settings = {
        let settings = settings.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |next: Settings| {
            settings.set(next);
            modal_open.set(false);
        })
    };

    html! {
        <div class="scoreboard">
            <header class="toolbar">
                <button type="button" id="menu-icon" class="icon" onclick={on_menu}>{ "\u{2630}" }</button>
                <button type="button" id="rocket-icon" class="icon" onclick={on_rocket}>{ "\u{1F680}" }</button>
                <label class="victory-point">
                    { "Victory points" }
                    <input
                        id="victory-point-input"
                        type="number"
                        min="0"
                        value={(*victory_text).clone()}
                        oninput={on_victory_input}
                    />
                </label>
                <button type="button" id="reset-button" onclick={on_reset}>{ "Reset" }</button>
            </header>

            <main class="columns">
                <PlayerColumn
                    side={Side::Left}
                    name={settings.left_name.clone()}
                    panel={state.left}
                    on_decision={on_decision(Side::Left)}
                />
                <div class="center-column">
                    { render_log(&state.log) }
                    <video
                        id="countdownVideo"
                        class="countdown-video"
                        src={settings.video_src.clone()}
                        preload="auto"
                    />
                </div>
                <PlayerColumn
                    side={Side::Right}
                    name={settings.right_name.clone()}
                    panel={state.right}
                    on_decision={on_decision(Side::Right)}
                />
            </main>

            if *modal_open {
                <SettingsModal settings={(*settings).clone()} on_apply={on_apply_settings} />
            }
        </div>
    }
}

fn main() {
    // Log detailed panics to the console.
    console_error_panic_hook::set_once();
    // Inline markup calls changestyle by name, so it must live on window.
    interop::install();
    yew::Renderer::<App>::new().render();
}
