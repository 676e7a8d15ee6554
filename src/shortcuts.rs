//! Dispatch table for normalized shortcut symbols.
//!
//! The numpad mirrors the on-screen layout: the left pad sits on `7 4 1 0`,
//! the right pad on `9 6 3 .`, with `/` resetting and `*` opening settings.

use crate::Side;

/// Action resolved from a shortcut symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reset,
    OpenSettings,
    /// Trigger the decision button at `slot` on `side`'s pad, exactly as if
    /// it had been clicked.
    Decision { side: Side, slot: usize },
}

/// Resolve a normalized symbol. Unrecognized symbols map to nothing; that
/// fallthrough is deliberate.
pub fn route(symbol: &str) -> Option<Action> {
    let action = match symbol {
        "/" => Action::Reset,
        "*" => Action::OpenSettings,

        "7" => decision(Side::Left, 3),
        "4" => decision(Side::Left, 2),
        "1" => decision(Side::Left, 1),
        "0" => decision(Side::Left, 0),

        "9" => decision(Side::Right, 3),
        "6" => decision(Side::Right, 2),
        "3" => decision(Side::Right, 1),
        "." => decision(Side::Right, 0),

        _ => return None,
    };
    Some(action)
}

fn decision(side: Side, slot: usize) -> Action {
    Action::Decision { side, slot }
}

/// Whether a routed action should also suppress the browser default.
pub fn suppresses_default(action: Action) -> bool {
    matches!(action, Action::Reset | Action::OpenSettings)
}

/// True when the event target is a text-entry surface; shortcuts must not
/// fire while the user is typing a name.
pub fn is_typing_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || tag_name.eq_ignore_ascii_case("input")
        || tag_name.eq_ignore_ascii_case("textarea")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_and_star_route_to_global_actions() {
        assert_eq!(route("/"), Some(Action::Reset));
        assert_eq!(route("*"), Some(Action::OpenSettings));
        assert!(suppresses_default(Action::Reset));
        assert!(suppresses_default(Action::OpenSettings));
    }

    #[test]
    fn left_pad_keys_map_to_slots() {
        for (symbol, slot) in [("7", 3), ("4", 2), ("1", 1), ("0", 0)] {
            assert_eq!(
                route(symbol),
                Some(Action::Decision {
                    side: Side::Left,
                    slot
                })
            );
        }
    }

    #[test]
    fn right_pad_keys_map_to_slots() {
        for (symbol, slot) in [("9", 3), ("6", 2), ("3", 1), (".", 0)] {
            assert_eq!(
                route(symbol),
                Some(Action::Decision {
                    side: Side::Right,
                    slot
                })
            );
        }
    }

    #[test]
    fn decision_keys_do_not_suppress_default() {
        let action = route("7").unwrap();
        assert!(!suppresses_default(action));
    }

    #[test]
    fn everything_else_routes_nowhere() {
        for symbol in ["2", "5", "8", "Enter", "a", "+", "", "Escape"] {
            assert_eq!(route(symbol), None);
        }
    }

    #[test]
    fn typing_targets_are_guarded() {
        assert!(is_typing_target("INPUT", false));
        assert!(is_typing_target("input", false));
        assert!(is_typing_target("TEXTAREA", false));
        assert!(is_typing_target("DIV", true));
        assert!(!is_typing_target("DIV", false));
        assert!(!is_typing_target("BUTTON", false));
    }
}
