//! Core state for the Bladeboard scoreboard.
//!
//! All scoring logic lives here as pure transitions over [`ScoreboardState`];
//! the Yew binary renders the state and forwards DOM events into it.

use log::debug;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

pub mod interop;
pub mod keys;
pub mod shortcuts;

/// Which player column an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One scoring event as it appears in the decision log.
///
/// The arrow points toward the side that scored: left-side entries render
/// value-first (`3<--Over Finish`), right-side entries label-first
/// (`Over Finish-->3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub side: Side,
    pub delta: i32,
    pub label: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Left => write!(f, "{}<--{}", self.delta, self.label),
            Side::Right => write!(f, "{}-->{}", self.label, self.delta),
        }
    }
}

/// Per-side score plus the victory highlight computed at the last update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerPanel {
    pub score: i32,
    pub highlighted: bool,
}

/// Display settings applied from the settings form. Kept apart from
/// [`ScoreboardState`] so a reset never touches player names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub left_name: String,
    pub right_name: String,
    pub video_src: String,
}

/// Full scoreboard state: both panels, the victory threshold, and the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreboardState {
    pub left: PlayerPanel,
    pub right: PlayerPanel,
    /// Score at or above which a side is marked as winning; 0 disables.
    pub victory_point: i32,
    pub log: Vec<LogEntry>,
}

impl ScoreboardState {
    pub fn panel(&self, side: Side) -> &PlayerPanel {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn panel_mut(&mut self, side: Side) -> &mut PlayerPanel {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Apply one scoring event: add `delta` to the side's score, recompute
    /// that side's highlight against the current victory threshold, and
    /// append a log entry.
    ///
    /// The highlight is recomputed on every update, so a negative delta that
    /// drops a side back below the threshold also clears its highlight.
    pub fn apply_score(&mut self, side: Side, delta: i32, label: &str) {
        let victory_point = self.victory_point;
        let panel = self.panel_mut(side);
        panel.score += delta;
        panel.highlighted = victory_point > 0 && panel.score >= victory_point;
        debug!("{side} {delta:+} ({label}) -> {}", panel.score);
        self.log.push(LogEntry {
            side,
            delta,
            label: label.to_string(),
        });
    }

    /// Store the threshold used by subsequent [`apply_score`] calls.
    ///
    /// [`apply_score`]: ScoreboardState::apply_score
    pub fn set_victory_point(&mut self, points: i32) {
        self.victory_point = points;
    }

    /// Zero both scores, clear both highlights, and empty the log.
    /// The victory threshold survives. Idempotent.
    pub fn reset(&mut self) {
        self.left = PlayerPanel::default();
        self.right = PlayerPanel::default();
        self.log.clear();
    }
}

/// Events dispatched from the view layer.
pub enum ScoreboardAction {
    Score { side: Side, delta: i32, label: String },
    SetVictoryPoint(i32),
    Reset,
}

impl Reducible for ScoreboardState {
    type Action = ScoreboardAction;

    fn reduce(self: Rc<Self>, action: ScoreboardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScoreboardAction::Score { side, delta, label } => {
                next.apply_score(side, delta, &label)
            }
            ScoreboardAction::SetVictoryPoint(points) => next.set_victory_point(points),
            ScoreboardAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

/// Parse a points field, defaulting to zero on anything non-numeric.
pub fn parse_points(text: &str) -> i32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_score_accumulates_and_logs_value_first() {
        let mut state = ScoreboardState::default();
        state.apply_score(Side::Left, 3, "Over Finish");
        assert_eq!(state.left.score, 3);
        assert_eq!(state.log.len(), 1);
        assert_eq!(state.log[0].to_string(), "3<--Over Finish");
    }

    #[test]
    fn right_score_logs_label_first() {
        let mut state = ScoreboardState::default();
        state.apply_score(Side::Right, 2, "Spin Finish");
        assert_eq!(state.right.score, 2);
        assert_eq!(state.log[0].to_string(), "Spin Finish-->2");
    }

    #[test]
    fn highlight_tracks_victory_threshold_both_ways() {
        let mut state = ScoreboardState::default();
        state.set_victory_point(5);
        state.apply_score(Side::Left, 5, "Xtreme Finish");
        assert!(state.left.highlighted);

        state.apply_score(Side::Left, -5, "OF");
        assert_eq!(state.left.score, 0);
        assert!(!state.left.highlighted);
    }

    #[test]
    fn zero_threshold_never_highlights() {
        let mut state = ScoreboardState::default();
        state.apply_score(Side::Right, 10, "Burst Finish");
        assert!(!state.right.highlighted);
    }

    #[test]
    fn threshold_change_alone_does_not_recompute_highlight() {
        let mut state = ScoreboardState::default();
        state.set_victory_point(3);
        state.apply_score(Side::Left, 3, "Xtreme Finish");
        assert!(state.left.highlighted);

        // Raising the bar only takes effect at the next score update.
        state.set_victory_point(10);
        assert!(state.left.highlighted);
        state.apply_score(Side::Left, 1, "Spin Finish");
        assert!(!state.left.highlighted);
    }

    #[test]
    fn reset_clears_scores_log_and_highlights() {
        let mut state = ScoreboardState::default();
        state.set_victory_point(2);
        state.apply_score(Side::Left, 3, "Xtreme Finish");
        state.apply_score(Side::Right, 1, "Spin Finish");

        state.reset();
        assert_eq!(state.left, PlayerPanel::default());
        assert_eq!(state.right, PlayerPanel::default());
        assert!(state.log.is_empty());
        assert_eq!(state.victory_point, 2);

        let after_once = state.clone();
        state.reset();
        assert_eq!(state, after_once);
    }

    #[test]
    fn log_preserves_event_order() {
        let mut state = ScoreboardState::default();
        state.apply_score(Side::Left, 1, "Spin Finish");
        state.apply_score(Side::Right, 2, "Burst Finish");
        state.apply_score(Side::Left, 3, "Xtreme Finish");
        let rendered: Vec<String> = state.log.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["1<--Spin Finish", "Burst Finish-->2", "3<--Xtreme Finish"]
        );
    }

    #[test]
    fn parse_points_defaults_to_zero() {
        assert_eq!(parse_points("4"), 4);
        assert_eq!(parse_points(" 7 "), 7);
        assert_eq!(parse_points("abc"), 0);
    }

    #[test]
    fn parse_points_treats_mid_edit_fragments_as_disabled() {
        // An emptied or half-typed field disables the rule without
        // clobbering what the user is typing.
        for fragment in ["", " ", "-", "+"] {
            assert_eq!(parse_points(fragment), 0);
        }
    }
}
