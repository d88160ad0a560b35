use folio_core::about::AboutView;
use folio_core::content::builtin_content;
use folio_core::portfolio::{CategoryFilter, PortfolioView};
use folio_core::terminal::{Interpretation, PROMPT, TerminalSession};
use folio_core::window::{WindowAction, WindowState, reduce};
use folio_core::{AppId, WindowManager};

#[test]
fn test_dock_session_replays_through_reducer() {
    let actions = [
        WindowAction::Toggle(AppId::Terminal),
        WindowAction::Minimize(AppId::Terminal),
        WindowAction::Toggle(AppId::Portfolio),
        WindowAction::Minimize(AppId::Portfolio),
        WindowAction::RestoreFirst,
    ];

    let end = actions
        .iter()
        .fold(WindowManager::new(), |state, action| reduce(&state, *action));

    assert_eq!(end.active_app(), Some(AppId::Terminal));
    assert_eq!(end.state_of(AppId::Portfolio), WindowState::Minimized);
    assert_eq!(end.minimized_summary().as_deref(), Some("1 app minimized"));
}

#[test]
fn test_toggle_quirk_forgets_other_minimized_app() {
    let mut wm = WindowManager::new();
    wm.apply(WindowAction::Toggle(AppId::About));
    wm.apply(WindowAction::Minimize(AppId::Resume));
    wm.apply(WindowAction::Toggle(AppId::About));
    assert_eq!(wm, WindowManager::new());
}

#[test]
fn test_view_state_is_independent_of_window_state() {
    let content = builtin_content();
    let mut wm = WindowManager::new();
    let mut terminal = TerminalSession::new();
    let mut portfolio = PortfolioView::new();
    let mut about = AboutView::new();

    wm.toggle(AppId::Terminal);
    terminal.submit("projects", content);
    wm.minimize(AppId::Terminal);

    wm.toggle(AppId::Portfolio);
    portfolio.select(CategoryFilter::from_label("Data Science"));
    wm.minimize(AppId::Portfolio);

    wm.toggle(AppId::About);
    about.toggle();

    wm.restore(AppId::Terminal);
    assert_eq!(terminal.history().len(), 5);
    assert_eq!(terminal.history().last().map(String::as_str), Some(PROMPT));

    wm.restore(AppId::Portfolio);
    let visible = portfolio.visible_projects(&content.projects);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Data Analytics Dashboard");
    assert!(about.is_expanded());
}

#[test]
fn test_terminal_transcript() {
    let content = builtin_content();
    let mut session = TerminalSession::new();

    for input in ["help", "contact", "whoami"] {
        session.submit(input, content);
    }
    let transcript = session.history().join("\n");
    assert!(transcript.contains("> help\nAvailable commands: help, projects, skills, contact, clear"));
    assert!(transcript.contains("> whoami\nCommand not found: whoami."));

    assert_eq!(session.submit("clear", content), Interpretation::Clear);
    assert_eq!(session.history(), &[PROMPT.to_string()]);
}
