// tests/dashboard_test.rs — Integration test: widget collection lifecycle

use gridboard::dashboard::registry::{CHART_VALUE_BOUND, DEFAULT_INFO_TEXT};
use gridboard::dashboard::{
    Action, DashboardController, DashboardView, WidgetData, WidgetId, WidgetType,
};
use pretty_assertions::assert_eq;

fn ids(c: &DashboardController) -> Vec<String> {
    c.widgets().iter().map(|w| w.id().to_string()).collect()
}

fn remove(c: &mut DashboardController, id: &str) -> bool {
    c.remove_widget(&WidgetId::from(id))
}

#[test]
fn test_walkthrough() {
    // 1. Initial state
    let mut c = DashboardController::with_seed(2024);
    assert_eq!(ids(&c), vec!["widget-1", "widget-2"]);
    assert_eq!(c.widgets()[0].kind(), WidgetType::Chart);
    assert_eq!(c.widgets()[0].data(), &WidgetData::Chart(420));
    assert_eq!(c.widgets()[1].kind(), WidgetType::TaskList);
    assert_eq!(
        c.widgets()[1].data(),
        &WidgetData::TaskList(vec!["Buy eggs".into(), "Review PR".into()])
    );
    assert_eq!(c.next_id(), 3);

    // 2. Add an info panel
    let id = c.add_widget("InfoPanel".parse().unwrap());
    assert_eq!(id, "widget-3");
    assert_eq!(
        c.get(&id).map(|w| w.data()),
        Some(&WidgetData::InfoPanel(DEFAULT_INFO_TEXT.to_string()))
    );
    assert_eq!(c.next_id(), 4);
    assert_eq!(ids(&c), vec!["widget-1", "widget-2", "widget-3"]);

    // 3. Remove the task list
    assert!(remove(&mut c, "widget-2"));
    assert_eq!(ids(&c), vec!["widget-1", "widget-3"]);
    assert_eq!(c.next_id(), 4);

    // 4. Removing it again changes nothing
    assert!(!remove(&mut c, "widget-2"));
    assert_eq!(ids(&c), vec!["widget-1", "widget-3"]);

    // 5. Remove the rest; the view becomes the empty state
    remove(&mut c, "widget-1");
    remove(&mut c, "widget-3");
    assert!(c.is_empty());
    assert_eq!(c.render(), DashboardView::Empty);

    // 6. Two charts get distinct ids and in-range values
    let a = c.add_widget("ChartWidget".parse().unwrap());
    let b = c.add_widget(WidgetType::Chart);
    assert_eq!(a, "widget-4");
    assert_eq!(b, "widget-5");
    for id in [&a, &b] {
        match c.get(id).map(|w| w.data()) {
            Some(WidgetData::Chart(v)) => assert!(*v < CHART_VALUE_BOUND),
            other => panic!("expected chart data for {id}, got {other:?}"),
        }
    }
}

#[test]
fn test_remove_never_reorders() {
    let mut c = DashboardController::with_seed(5);
    for kind in WidgetType::ALL.iter().cycle().take(9) {
        c.add_widget(*kind);
    }
    let mut expected = ids(&c);

    for victim in [
        "widget-6",
        "widget-1",
        "widget-11",
        "widget-nope",
        "widget-3",
    ] {
        remove(&mut c, victim);
        expected.retain(|id| id != victim);
        assert_eq!(ids(&c), expected);
    }
}

#[test]
fn test_remove_unknown_leaves_everything() {
    let mut c = DashboardController::with_seed(5);
    c.add_widget(WidgetType::InfoPanel);
    let before = c.widgets().to_vec();

    for bogus in ["", "widget-0", "widget-4", "WIDGET-1", "1"] {
        assert!(!remove(&mut c, bogus));
    }
    assert_eq!(c.widgets(), before.as_slice());
    assert_eq!(c.next_id(), 4);
}

#[test]
fn test_chart_values_drawn_independently() {
    let mut c = DashboardController::with_seed(11);
    let values: Vec<u32> = (0..50)
        .map(|_| {
            let id = c.add_widget(WidgetType::Chart);
            match c.get(&id).unwrap().data() {
                WidgetData::Chart(v) => *v,
                other => panic!("expected chart data, got {other:?}"),
            }
        })
        .collect();

    assert!(values.iter().all(|v| *v < CHART_VALUE_BOUND));
    // 50 draws from 0..1000 being all equal would mean the generator is stuck.
    assert!(values.iter().any(|v| *v != values[0]));
}

#[test]
fn test_view_tracks_collection() {
    let mut c = DashboardController::empty(Some(3));
    assert_eq!(c.render(), DashboardView::Empty);

    c.apply(&Action::AddWidget(WidgetType::TaskList));
    c.apply(&Action::AddWidget(WidgetType::Chart));
    match c.render() {
        DashboardView::Cards(cards) => {
            let view_ids: Vec<&str> = cards.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(view_ids, vec!["widget-1", "widget-2"]);
            assert_eq!(cards[0].kind(), WidgetType::TaskList);
            // Dispatching a card's removal action removes exactly that card.
            let on_remove = cards[0].on_remove.clone();
            c.apply(&on_remove);
        }
        DashboardView::Empty => panic!("expected cards"),
    }
    assert_eq!(ids(&c), vec!["widget-2"]);
}
