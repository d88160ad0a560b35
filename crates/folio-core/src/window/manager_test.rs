#[cfg(test)]
mod tests {
    use crate::app::AppId;
    use crate::window::action::WindowAction;
    use crate::window::manager::{TogglePolicy, WindowManager, WindowState};

    fn assert_invariant(wm: &WindowManager) {
        if let Some(active) = wm.active_app() {
            assert!(
                !wm.is_minimized(active),
                "active app {active} must not be minimized: {wm:?}"
            );
        }
    }

    fn all_actions() -> Vec<WindowAction> {
        let mut actions = vec![WindowAction::RestoreFirst];
        for app in AppId::ALL {
            actions.push(WindowAction::Toggle(app));
            actions.push(WindowAction::Minimize(app));
            actions.push(WindowAction::Maximize(app));
            actions.push(WindowAction::Restore(app));
            actions.push(WindowAction::Close(app));
        }
        actions
    }

    #[test]
    fn test_initial_state() {
        let wm = WindowManager::new();
        assert_eq!(wm.active_app(), None);
        assert!(wm.minimized_apps().is_empty());
        for app in AppId::ALL {
            assert_eq!(wm.state_of(app), WindowState::Closed);
        }
    }

    #[test]
    fn test_toggle_twice_returns_to_initial_state() {
        for app in AppId::ALL {
            let mut wm = WindowManager::new();
            wm.toggle(app);
            assert_eq!(wm.state_of(app), WindowState::Active);
            wm.toggle(app);
            assert_eq!(wm, WindowManager::new());
        }
    }

    #[test]
    fn test_toggle_replaces_active_app() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Resume);
        wm.toggle(AppId::Terminal);
        assert_eq!(wm.active_app(), Some(AppId::Terminal));
        assert_eq!(wm.state_of(AppId::Resume), WindowState::Closed);
    }

    #[test]
    fn test_toggle_closing_clears_every_minimized_app() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Resume);
        wm.minimize(AppId::Portfolio);
        assert_eq!(wm.minimized_apps(), &[AppId::Portfolio]);
        assert_eq!(wm.active_app(), Some(AppId::Resume));

        wm.toggle(AppId::Resume);
        assert_eq!(wm.active_app(), None);
        assert!(wm.minimized_apps().is_empty());
        assert_eq!(wm.state_of(AppId::Portfolio), WindowState::Closed);
    }

    #[test]
    fn test_toggle_closing_keeps_others_when_policy_is_narrow() {
        let mut wm = WindowManager::with_policy(TogglePolicy::ClearToggledOnly);
        wm.toggle(AppId::Resume);
        wm.minimize(AppId::Portfolio);
        wm.toggle(AppId::Resume);
        assert_eq!(wm.active_app(), None);
        assert_eq!(wm.minimized_apps(), &[AppId::Portfolio]);
    }

    #[test]
    fn test_toggle_minimized_app_brings_it_back() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::About);
        wm.minimize(AppId::About);
        assert_eq!(wm.state_of(AppId::About), WindowState::Minimized);

        wm.toggle(AppId::About);
        assert_eq!(wm.state_of(AppId::About), WindowState::Active);
        assert!(wm.minimized_apps().is_empty());
    }

    #[test]
    fn test_minimize_then_restore() {
        for app in AppId::ALL {
            let mut wm = WindowManager::new();
            wm.toggle(app);
            wm.minimize(app);
            assert_eq!(wm.active_app(), None);
            wm.restore(app);
            assert_eq!(wm.active_app(), Some(app));
            assert!(!wm.is_minimized(app));
        }
    }

    #[test]
    fn test_minimize_is_idempotent_and_leaves_other_active_app() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Terminal);
        wm.minimize(AppId::Resume);
        wm.minimize(AppId::Resume);
        assert_eq!(wm.minimized_apps(), &[AppId::Resume]);
        assert_eq!(wm.active_app(), Some(AppId::Terminal));
    }

    #[test]
    fn test_restore_first_uses_minimize_order() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Terminal);
        wm.minimize(AppId::Terminal);
        wm.toggle(AppId::Portfolio);
        wm.minimize(AppId::Portfolio);
        assert_eq!(wm.minimized_apps(), &[AppId::Terminal, AppId::Portfolio]);

        assert_eq!(wm.restore_first(), Some(AppId::Terminal));
        assert_eq!(wm.active_app(), Some(AppId::Terminal));
        assert_eq!(wm.minimized_apps(), &[AppId::Portfolio]);
    }

    #[test]
    fn test_restore_first_with_nothing_minimized() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Resume);
        assert_eq!(wm.restore_first(), None);
        assert_eq!(wm.active_app(), Some(AppId::Resume));
    }

    #[test]
    fn test_close_active_and_minimized() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Resume);
        wm.minimize(AppId::Resume);
        wm.toggle(AppId::About);

        wm.close(AppId::Resume);
        assert!(wm.minimized_apps().is_empty());
        assert_eq!(wm.active_app(), Some(AppId::About));

        wm.close(AppId::About);
        assert_eq!(wm, WindowManager::new());
    }

    #[test]
    fn test_close_other_app_keeps_active() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Portfolio);
        wm.close(AppId::Terminal);
        assert_eq!(wm.active_app(), Some(AppId::Portfolio));
    }

    #[test]
    fn test_maximize_is_noop() {
        let mut wm = WindowManager::new();
        wm.toggle(AppId::Resume);
        let before = wm.clone();
        wm.maximize(AppId::Resume);
        assert_eq!(wm, before);
    }

    #[test]
    fn test_minimized_summary() {
        let mut wm = WindowManager::new();
        assert_eq!(wm.minimized_summary(), None);
        wm.minimize(AppId::Resume);
        assert_eq!(wm.minimized_summary().as_deref(), Some("1 app minimized"));
        wm.minimize(AppId::About);
        assert_eq!(wm.minimized_summary().as_deref(), Some("2 apps minimized"));
    }

    #[test]
    fn test_invariant_holds_for_every_three_step_sequence() {
        let actions = all_actions();
        for policy in [TogglePolicy::ClearAllMinimized, TogglePolicy::ClearToggledOnly] {
            for a in &actions {
                for b in &actions {
                    for c in &actions {
                        let mut wm = WindowManager::with_policy(policy);
                        for action in [a, b, c] {
                            wm.apply(*action);
                            assert_invariant(&wm);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_state_serializes_for_diagnostics() {
        let mut wm = WindowManager::new();
        wm.minimize(AppId::Resume);
        wm.toggle(AppId::Terminal);
        let json = serde_json::to_value(&wm).unwrap();
        assert_eq!(json["active_app"], "terminal");
        assert_eq!(json["minimized_apps"], serde_json::json!(["resume"]));
    }
}
