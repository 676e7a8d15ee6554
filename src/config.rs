//! Static configuration: the decision table, defaults, and presentation
//! constants.

/// One decision button: the score delta it awards and its log label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionSpec {
    pub delta: i32,
    pub label: &'static str,
}

/// Fixed button order per pad. Shortcut slots cover the first four entries;
/// the OF button (owner foul, deducts a point) is click-only.
pub const DECISIONS: [DecisionSpec; 5] = [
    DecisionSpec {
        delta: 1,
        label: "Spin Finish",
    },
    DecisionSpec {
        delta: 2,
        label: "Burst Finish",
    },
    DecisionSpec {
        delta: 2,
        label: "Over Finish",
    },
    DecisionSpec {
        delta: 3,
        label: "Xtreme Finish",
    },
    DecisionSpec {
        delta: -1,
        label: "OF",
    },
];

/// Limited-rules button: every finish scores a flat point.
pub const LR_DELTA: i32 = 1;
pub const LR_LABEL: &str = "LR";

pub const DEFAULT_LEFT_NAME: &str = "Player 1";
pub const DEFAULT_RIGHT_NAME: &str = "Player 2";

/// Standard match plays to 4 points; set to 0 in the UI to disable.
pub const DEFAULT_VICTORY_POINT: i32 = 4;

/// Inline style for a side's name header once it reaches the victory
/// threshold.
pub const HIGHLIGHT_STYLE: &str = "background-color: yellow; color: black;";

/// Countdown clips offered by the settings form; the first is the default.
pub const COUNTDOWN_VIDEOS: [(&str, &str); 3] = [
    ("media/countdown-classic.mp4", "Classic"),
    ("media/countdown-neon.mp4", "Neon"),
    ("media/countdown-silent.mp4", "Silent"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_order_matches_the_printed_buttons() {
        let labels: Vec<&str> = DECISIONS.iter().map(|spec| spec.label).collect();
        assert_eq!(
            labels,
            vec!["Spin Finish", "Burst Finish", "Over Finish", "Xtreme Finish", "OF"]
        );
    }

    #[test]
    fn of_button_deducts_and_sits_outside_the_shortcut_slots() {
        let of = DECISIONS[4];
        assert_eq!(of.label, "OF");
        assert!(of.delta < 0);
        // Shortcut slots only reach indices 0..=3.
        assert!(DECISIONS[..4].iter().all(|spec| spec.delta > 0));
    }
}
