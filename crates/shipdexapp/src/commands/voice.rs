use crate::catalog::Catalog;
use crate::commands::{display_all, CmdMessage, CmdResult};
use crate::selection::IdSet;
use crate::state::AppState;
use crate::voice::{self, Interpretation};

/// Interpret `transcript` and apply it to `state`.
///
/// Returns the next state (unchanged unless a command was accepted) and the
/// resulting view: the visible ships, with the current ship listed as affected.
pub fn run(
    catalog: &Catalog,
    favorites: &IdSet,
    state: &AppState,
    transcript: &str,
) -> (AppState, CmdResult) {
    let mut messages = Vec::new();
    let next = match voice::interpret(transcript, catalog.all()) {
        Interpretation::Ignored => {
            messages.push(CmdMessage::info(
                "No wake word heard. Start commands with \"computer\".",
            ));
            state.clone()
        }
        Interpretation::NotRecognized => {
            messages.push(CmdMessage::error(
                "Command not recognized. Please try again with a valid command",
            ));
            state.clone()
        }
        Interpretation::Command(command) => {
            messages.push(CmdMessage::success(format!(
                "Command accepted: {}",
                command.describe()
            )));
            command.apply(state)
        }
    };

    let visible = next.visible(catalog, favorites);
    let current: Vec<_> = next.current(catalog).into_iter().collect();
    let mut result = CmdResult::default()
        .with_listed_ships(display_all(&visible, favorites))
        .with_affected_ships(display_all(&current, favorites));
    result.messages = messages;
    (next, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn accepted_command_changes_view() {
        let catalog = Catalog::bundled();
        let state = AppState::initial(&catalog);
        let (next, result) = run(
            &catalog,
            &IdSet::new(),
            &state,
            "Computer, filter Romulan ships",
        );
        assert_eq!(next.filter.affiliation.as_deref(), Some("Romulan Star Empire"));
        assert_eq!(result.listed_ships.len(), 1);
        assert_eq!(result.listed_ships[0].ship.id, "romulan-warbird");
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn show_me_updates_current_ship() {
        let catalog = Catalog::bundled();
        let state = AppState::initial(&catalog);
        let (next, result) = run(&catalog, &IdSet::new(), &state, "computer display intrepid");
        assert_eq!(next.current_ship.as_deref(), Some("voyager"));
        assert_eq!(result.affected_ships[0].ship.name, "USS Voyager");
    }

    #[test]
    fn rejected_commands_keep_state() {
        let catalog = Catalog::bundled();
        let state = AppState::initial(&catalog);
        let (next, result) = run(&catalog, &IdSet::new(), &state, "computer, warp nine, engage");
        assert_eq!(next, state);
        assert!(matches!(result.messages[0].level, MessageLevel::Error));

        let (next, result) = run(&catalog, &IdSet::new(), &state, "sort by era");
        assert_eq!(next, state);
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }
}
