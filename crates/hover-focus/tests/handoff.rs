//! Terminal-manager election and hook handoff across controllers.

use std::rc::Rc;

use hover_common::{FocusTarget, TerminalId};
use hover_config::EditorConfig;
use hover_focus::headless::{HeadlessEditor, HeadlessWorkbench};
use hover_focus::{HoverCoordinator, HoverFocusController};

fn enabled() -> EditorConfig {
    EditorConfig::with_focus_on_hover(true)
}

fn attach(
    bench: &HeadlessWorkbench,
    coordinator: &HoverCoordinator,
    options: EditorConfig,
) -> (Rc<HeadlessEditor>, HoverFocusController) {
    let editor = bench.open_editor(options);
    let controller =
        HoverFocusController::new(editor.clone(), bench.terminal_service(), coordinator);
    (editor, controller)
}

/// Exactly one live controller holds the role whenever any is live.
fn assert_single_manager(coordinator: &HoverCoordinator, live: &[HoverFocusController]) {
    let managers: Vec<_> = live.iter().filter(|c| c.is_terminal_manager()).collect();
    if live.is_empty() {
        assert!(managers.is_empty());
        assert_eq!(coordinator.terminal_manager(), None);
    } else {
        assert_eq!(managers.len(), 1, "expected exactly one terminal manager");
        assert_eq!(coordinator.terminal_manager(), Some(managers[0].id()));
    }
    assert_eq!(
        coordinator.members(),
        live.iter().map(|c| c.id()).collect::<Vec<_>>()
    );
}

#[test]
fn exactly_one_manager_through_creations_and_disposals() {
    let bench = HeadlessWorkbench::new();
    let coordinator = HoverCoordinator::new();
    let mut live: Vec<HoverFocusController> = Vec::new();
    let mut editors = Vec::new();

    // Deterministic interleaving: grow, then remove from varying positions.
    let plan: &[Option<usize>] = &[
        None,
        None,
        None,
        Some(0),
        None,
        Some(1),
        Some(0),
        None,
        None,
        Some(2),
        Some(0),
        Some(0),
        None,
        Some(0),
    ];

    for step in plan {
        match step {
            None => {
                let (editor, controller) = attach(&bench, &coordinator, enabled());
                editors.push(editor);
                live.push(controller);
            }
            Some(index) => {
                let controller = live.remove(*index);
                controller.dispose();
            }
        }
        assert_single_manager(&coordinator, &live);
    }
    assert!(live.is_empty());
}

fn orderings(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in orderings(&rest) {
            tail.insert(0, first);
            all.push(tail);
        }
    }
    all
}

#[test]
fn every_disposal_order_keeps_one_manager_and_all_hooks() {
    let flags = [true, false, true, false];

    for order in orderings(&[0, 1, 2, 3]) {
        let bench = HeadlessWorkbench::new();
        let service = bench.terminal_service();
        let terminals = [service.create_terminal(), service.create_terminal()];
        let expected: Vec<TerminalId> = terminals.iter().map(|t| t.id()).collect();
        let coordinator = HoverCoordinator::new();

        let mut slots: Vec<Option<HoverFocusController>> = flags
            .iter()
            .map(|&on| {
                let editor = bench.open_editor(EditorConfig::with_focus_on_hover(on));
                Some(HoverFocusController::new(editor, service.clone(), &coordinator))
            })
            .collect();

        for &index in &order {
            if let Some(controller) = slots[index].take() {
                controller.dispose();
            }
            let remaining: Vec<&HoverFocusController> = slots.iter().flatten().collect();
            let managers: Vec<_> = remaining.iter().filter(|c| c.is_terminal_manager()).collect();

            if remaining.is_empty() {
                assert_eq!(coordinator.terminal_manager(), None, "order {order:?}");
            } else {
                assert_eq!(managers.len(), 1, "order {order:?}");
                assert_eq!(managers[0].hooked_terminals(), expected, "order {order:?}");
                assert_eq!(coordinator.terminal_manager(), Some(managers[0].id()));
            }
            assert_eq!(
                coordinator.members(),
                remaining.iter().map(|c| c.id()).collect::<Vec<_>>()
            );
        }

        for terminal in &terminals {
            assert_eq!(terminal.mouse_listener_count(), 0, "order {order:?}");
        }
        assert!(coordinator.is_empty());
    }
}

#[test]
fn disposing_the_manager_every_time_walks_the_roster() {
    let bench = HeadlessWorkbench::new();
    let terminal = bench.terminal_service().create_terminal();
    let coordinator = HoverCoordinator::new();
    let mut live: Vec<HoverFocusController> = (0..5)
        .map(|i| attach(&bench, &coordinator, EditorConfig::with_focus_on_hover(i % 2 == 0)).1)
        .collect();

    while !live.is_empty() {
        let position = live
            .iter()
            .position(HoverFocusController::is_terminal_manager)
            .unwrap();
        assert_eq!(position, 0, "the oldest live controller manages");
        live.remove(position).dispose();
        assert_single_manager(&coordinator, &live);
        if let Some(manager) = live.first() {
            assert_eq!(manager.hooked_terminals(), vec![terminal.id()]);
        }
    }
    assert_eq!(terminal.mouse_listener_count(), 0);
}

#[test]
fn handoff_keeps_terminal_hooks_intact() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let t1 = service.create_terminal();
    let t2 = service.create_terminal();
    let coordinator = HoverCoordinator::new();

    let (_ea, a) = attach(&bench, &coordinator, enabled());
    let (_eb, b) = attach(&bench, &coordinator, enabled());
    assert_eq!(a.hooked_terminals(), vec![t1.id(), t2.id()]);

    a.dispose();

    assert!(b.is_terminal_manager());
    assert_eq!(b.hooked_terminals(), vec![t1.id(), t2.id()]);
    // No duplicate or lost hooks on the terminals themselves.
    assert_eq!(t1.mouse_listener_count(), 1);
    assert_eq!(t2.mouse_listener_count(), 1);

    t1.hover(0, 0);
    assert_eq!(bench.focused(), Some(FocusTarget::Terminal(t1.id())));
}

#[test]
fn successor_tracks_terminal_lifecycle() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let coordinator = HoverCoordinator::new();
    let (_ea, a) = attach(&bench, &coordinator, enabled());
    let (_eb, b) = attach(&bench, &coordinator, enabled());

    a.dispose();

    let t = service.create_terminal();
    assert_eq!(b.hooked_terminals(), vec![t.id()]);
    assert_eq!(t.mouse_listener_count(), 1);

    service.dispose_terminal(t.id()).unwrap();
    assert!(b.hooked_terminals().is_empty());
    assert_eq!(t.mouse_listener_count(), 0);
}

#[test]
fn disposed_manager_stops_reacting_to_terminals() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let coordinator = HoverCoordinator::new();
    let (_ea, a) = attach(&bench, &coordinator, enabled());
    let (_eb, _b) = attach(&bench, &coordinator, enabled());

    a.dispose();
    let t = service.create_terminal();

    // Only the successor hooked it.
    assert!(a.hooked_terminals().is_empty());
    assert_eq!(t.mouse_listener_count(), 1);
}

#[test]
fn last_manager_disposal_clears_all_hooks() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let t1 = service.create_terminal();
    let t2 = service.create_terminal();
    let coordinator = HoverCoordinator::new();
    let (editor, a) = attach(&bench, &coordinator, enabled());

    a.dispose();

    assert!(a.hooked_terminals().is_empty());
    assert!(!a.is_terminal_manager());
    assert_eq!(t1.mouse_listener_count(), 0);
    assert_eq!(t2.mouse_listener_count(), 0);
    assert_eq!(editor.mouse_listener_count(), 0);
    assert!(coordinator.is_empty());
    assert_eq!(coordinator.terminal_manager(), None);

    t1.hover(0, 0);
    assert_eq!(bench.focused(), None);
}

#[test]
fn successor_with_focus_on_hover_disabled_inherits_hooks() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let t = service.create_terminal();
    let coordinator = HoverCoordinator::new();
    let (_ea, a) = attach(&bench, &coordinator, enabled());
    let (_eb, b) = attach(&bench, &coordinator, EditorConfig::default());

    a.dispose();

    assert!(b.is_terminal_manager());
    assert!(!b.is_editor_hooked());
    assert_eq!(b.hooked_terminals(), vec![t.id()]);

    // New terminals follow the successor's own setting.
    let late = service.create_terminal();
    assert_eq!(late.mouse_listener_count(), 0);
}

#[test]
fn handoff_goes_to_oldest_remaining_controller() {
    let bench = HeadlessWorkbench::new();
    let coordinator = HoverCoordinator::new();
    let (_ea, a) = attach(&bench, &coordinator, enabled());
    let (_eb, b) = attach(&bench, &coordinator, enabled());
    let (_ec, c) = attach(&bench, &coordinator, enabled());

    b.dispose();
    assert!(a.is_terminal_manager());

    a.dispose();
    assert!(c.is_terminal_manager());
    assert_eq!(coordinator.members(), vec![c.id()]);
}

#[test]
fn walkthrough_two_editors() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let t = service.create_terminal();
    let coordinator = HoverCoordinator::new();

    // A: manager, hooks its editor and the open terminal.
    let (ea, a) = attach(&bench, &coordinator, enabled());
    assert!(a.is_terminal_manager());
    assert!(a.is_editor_hooked());
    assert_eq!(a.hooked_terminals(), vec![t.id()]);

    // B: its own editor only.
    let (eb, b) = attach(&bench, &coordinator, enabled());
    assert!(!b.is_terminal_manager());
    assert!(b.is_editor_hooked());
    assert!(b.hooked_terminals().is_empty());

    // Dispose A: B takes A's terminal hooks; A's editor hook is gone.
    a.dispose();
    assert!(b.is_terminal_manager());
    assert_eq!(b.hooked_terminals(), vec![t.id()]);
    assert_eq!(ea.mouse_listener_count(), 0);
    assert_eq!(eb.mouse_listener_count(), 1);

    ea.hover(0, 0);
    assert_eq!(bench.focused(), None);
    eb.hover(0, 0);
    assert_eq!(bench.focused(), Some(FocusTarget::Editor(eb.id())));

    // Dispose B: nothing left.
    b.dispose();
    assert!(coordinator.is_empty());
    assert_eq!(coordinator.terminal_manager(), None);
    assert_eq!(eb.mouse_listener_count(), 0);
    assert_eq!(t.mouse_listener_count(), 0);
}

#[test]
fn hooked_terminal_ids_match_service() {
    let bench = HeadlessWorkbench::new();
    let service = bench.terminal_service();
    let coordinator = HoverCoordinator::new();
    let (_ea, a) = attach(&bench, &coordinator, enabled());

    let ids: Vec<TerminalId> = (0..4).map(|_| service.create_terminal().id()).collect();
    service.dispose_terminal(ids[1]).unwrap();

    assert_eq!(a.hooked_terminals(), vec![ids[0], ids[2], ids[3]]);
}
