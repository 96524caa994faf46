//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Redraw the random sample tables.
    Resample,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    if state.show_help {
        return handle_help(state, key);
    }
    handle_normal(state, key)
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_normal(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            state.switch_tab(Tab::all()[index]);
            KeyAction::None
        }

        // Chart selection within a section
        KeyCode::Down | KeyCode::Char('j') => {
            match state.current_tab {
                Tab::Info => state.info_scroll = state.info_scroll.saturating_add(1),
                Tab::Sample => state.sample_scroll = state.sample_scroll.saturating_add(1),
                _ => state.step_chart(1),
            }
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            match state.current_tab {
                Tab::Info => state.info_scroll = state.info_scroll.saturating_sub(1),
                Tab::Sample => state.sample_scroll = state.sample_scroll.saturating_sub(1),
                _ => state.step_chart(-1),
            }
            KeyAction::None
        }
        KeyCode::Char('n') | KeyCode::PageDown => {
            state.step_chart(1);
            KeyAction::None
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            state.step_chart(-1);
            KeyAction::None
        }

        // Animation frames: arrows step by hand, space toggles playback
        KeyCode::Right | KeyCode::Char('l') => {
            if state.is_animated() {
                state.step_frame(1);
            } else {
                state.step_chart(1);
            }
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if state.is_animated() {
                state.step_frame(-1);
            } else {
                state.step_chart(-1);
            }
            KeyAction::None
        }
        KeyCode::Char(' ') => {
            state.paused = !state.paused;
            KeyAction::None
        }

        // Detail cursor over the chart's bars or points
        KeyCode::Char(']') => {
            state.step_element(1);
            KeyAction::None
        }
        KeyCode::Char('[') => {
            state.step_element(-1);
            KeyAction::None
        }

        // Sample regeneration
        KeyCode::Char('r') => KeyAction::Resample,

        // Help
        KeyCode::Char('?') => {
            state.show_help = true;
            state.help_scroll = 0;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataTable, Datasets, Value};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|c| Value::parse(c)).collect()
    }

    fn state() -> AppState {
        let overall_headers = [
            "Country/Region",
            "Continent",
            "TotalCases",
            "TotalDeaths",
            "TotalTests",
            "Tests/1M pop",
            "NewCases",
            "NewDeaths",
            "NewRecovered",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let ts_headers = [
            "Date",
            "Country/Region",
            "Confirmed",
            "Deaths",
            "Recovered",
            "New cases",
            "WHO Region",
            "iso_alpha",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let datasets = Datasets {
            overall: DataTable::new(
                "covid.csv",
                overall_headers,
                vec![
                    row(&[
                        "USA",
                        "North America",
                        "100",
                        "5",
                        "1000",
                        "99",
                        "",
                        "",
                        "",
                    ]),
                    row(&["India", "Asia", "80", "3", "900", "12", "", "", ""]),
                ],
            ),
            time_series: DataTable::new(
                "covid_grouped.csv",
                ts_headers,
                vec![
                    row(&["2020-01-22", "US", "1", "0", "0", "0", "Americas", "USA"]),
                    row(&["2020-01-23", "US", "3", "0", "1", "2", "Americas", "USA"]),
                ],
            ),
            conditions: DataTable::new(
                "coviddeath.csv",
                vec!["Condition Group".to_string(), "Condition".to_string()],
                vec![row(&["Respiratory diseases", "Cardiac arrest"])],
            ),
        };
        AppState::new(&datasets)
    }

    #[test]
    fn q_asks_before_quitting() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert!(state.show_quit_confirm);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            KeyAction::Quit
        );
    }

    #[test]
    fn quit_confirm_can_be_dismissed() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn digits_jump_to_tabs() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('8')));
        assert_eq!(state.current_tab, Tab::Clouds);
        handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.current_tab, Tab::Info);
    }

    #[test]
    fn tab_cycles_forward_and_back() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Sample);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Info);
    }

    #[test]
    fn arrows_step_charts_on_static_tabs() {
        let mut state = state();
        state.switch_tab(Tab::Bars);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.selected_chart(), 1);
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.selected_chart(), 0);
    }

    #[test]
    fn arrows_step_frames_on_animated_charts() {
        let mut state = state();
        state.switch_tab(Tab::Maps);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.frame, 1);
        assert!(state.paused);
        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.paused);
    }

    #[test]
    fn brackets_walk_the_chart_elements() {
        let mut state = state();
        state.switch_tab(Tab::Bars);
        handle_key(&mut state, key(KeyCode::Char(']')));
        assert_eq!(state.element, 1);
        handle_key(&mut state, key(KeyCode::Char(']')));
        assert_eq!(state.element, 0);
        handle_key(&mut state, key(KeyCode::Char('[')));
        assert_eq!(state.element, 1);
    }

    #[test]
    fn r_requests_a_resample() {
        let mut state = state();
        state.switch_tab(Tab::Sample);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('r'))),
            KeyAction::Resample
        );
    }

    #[test]
    fn help_scrolls_and_closes() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert!(state.show_help);
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.help_scroll, 1);
        // q inside help closes the popup instead of quitting.
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert!(!state.show_help);
    }
}
