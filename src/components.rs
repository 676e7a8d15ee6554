//! Yew view components for the scoreboard.
//!
//! These are thin renderers over the library state: they own no game logic
//! and report interactions back through callbacks.

use crate::config::{
    DecisionSpec, COUNTDOWN_VIDEOS, DECISIONS, HIGHLIGHT_STYLE, LR_DELTA, LR_LABEL,
};
use bladeboard::{LogEntry, PlayerPanel, Settings, Side};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// One player column: name header, score display, decision pad, LR button.
#[derive(Properties, PartialEq)]
pub struct PlayerColumnProps {
    pub side: Side,
    pub name: String,
    pub panel: PlayerPanel,
    /// Emitted with the `(delta, label)` of the pressed button.
    pub on_decision: Callback<(i32, String)>,
}

#[function_component(PlayerColumn)]
pub fn player_column(props: &PlayerColumnProps) -> Html {
    let highlight = if props.panel.highlighted {
        HIGHLIGHT_STYLE
    } else {
        ""
    };

    html! {
        <div class={classes!("player-column", props.side.to_string())}>
            <div class="player-name" style={highlight}>{ &props.name }</div>
            <div class="score">{ props.panel.score }</div>
            <div class="decision-buttons">
                { DECISIONS.iter().map(|spec| decision_button(spec, &props.on_decision)).collect::<Html>() }
            </div>
            <button
                type="button"
                class="lr-button"
                onclick={
                    let on_decision = props.on_decision.clone();
                    Callback::from(move |_| on_decision.emit((LR_DELTA, LR_LABEL.to_string())))
                }
            >
                { LR_LABEL }
            </button>
        </div>
    }
}

fn decision_button(spec: &DecisionSpec, on_decision: &Callback<(i32, String)>) -> Html {
    let onclick = {
        let on_decision = on_decision.clone();
        let delta = spec.delta;
        let label = spec.label;
        Callback::from(move |_| on_decision.emit((delta, label.to_string())))
    };

    html! {
        <button type="button" class="decision-button" {onclick}>
            { spec.label }
        </button>
    }
}

/// Decision log list: one line per scoring event, in event order, arrows
/// pointing toward the scoring side.
pub fn render_log(entries: &[LogEntry]) -> Html {
    html! {
        <ul id="decision-log" class="decision-log">
            { entries.iter().map(|entry| html! { <li>{ entry.to_string() }</li> }).collect::<Html>() }
        </ul>
    }
}

/// Settings modal: player names and countdown clip, applied on submit.
#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub settings: Settings,
    /// Emitted with the new settings when the form is submitted; the parent
    /// applies them and closes the modal.
    pub on_apply: Callback<Settings>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let left_ref = use_node_ref();
    let right_ref = use_node_ref();
    let video_ref = use_node_ref();

    let onsubmit = {
        let left_ref = left_ref.clone();
        let right_ref = right_ref.clone();
        let video_ref = video_ref.clone();
        let current = props.settings.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A ref that resolves to nothing leaves that field untouched.
            let mut next = current.clone();
            if let Some(input) = left_ref.cast::<HtmlInputElement>() {
                next.left_name = input.value();
            }
            if let Some(input) = right_ref.cast::<HtmlInputElement>() {
                next.right_name = input.value();
            }
            if let Some(select) = video_ref.cast::<HtmlSelectElement>() {
                next.video_src = select.value();
            }
            on_apply.emit(next);
        })
    };

    html! {
        <div id="setting-modal" class="modal">
            <form id="setting-form" class="modal-content" {onsubmit}>
                <label>
                    { "Left player" }
                    <input
                        ref={left_ref.clone()}
                        id="left-player-name-input"
                        type="text"
                        value={props.settings.left_name.clone()}
                    />
                </label>
                <label>
                    { "Right player" }
                    <input
                        ref={right_ref.clone()}
                        id="right-player-name-input"
                        type="text"
                        value={props.settings.right_name.clone()}
                    />
                </label>
                <label>
                    { "Countdown" }
                    <select ref={video_ref.clone()} id="countdown-video-select">
                        { COUNTDOWN_VIDEOS.iter().map(|(src, name)| html! {
                            <option value={*src} selected={*src == props.settings.video_src}>
                                { *name }
                            </option>
                        }).collect::<Html>() }
                    </select>
                </label>
                <button type="submit">{ "Apply" }</button>
            </form>
        </div>
    }
}
