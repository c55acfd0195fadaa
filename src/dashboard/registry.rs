// src/dashboard/registry.rs — Per-type metadata and mock data generators
//
// The render half of the registry lives in `tui::widgets`; both halves
// dispatch with an exhaustive match on `WidgetType`.

use rand::Rng;

use super::types::{WidgetData, WidgetType};

/// Chart values are drawn from `0..CHART_VALUE_BOUND`.
pub const CHART_VALUE_BOUND: u32 = 1000;

pub const DEFAULT_TASKS: [&str; 2] = ["New task item", "Another task to complete"];

pub const DEFAULT_INFO_TEXT: &str = "This is an informational panel with static content. \
It provides helpful context and details about your dashboard.";

/// Static description of a widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetMeta {
    pub kind: WidgetType,
    /// Card title.
    pub title: &'static str,
    /// Label of the control-bar button that adds this kind.
    pub button_label: &'static str,
    /// Key binding that adds this kind.
    pub key: char,
}

const CHART: WidgetMeta = WidgetMeta {
    kind: WidgetType::Chart,
    title: "Chart",
    button_label: "+ Chart",
    key: 'c',
};

const TASK_LIST: WidgetMeta = WidgetMeta {
    kind: WidgetType::TaskList,
    title: "Tasks",
    button_label: "+ Tasks",
    key: 't',
};

const INFO_PANEL: WidgetMeta = WidgetMeta {
    kind: WidgetType::InfoPanel,
    title: "Info",
    button_label: "+ Info",
    key: 'i',
};

pub fn meta(kind: WidgetType) -> &'static WidgetMeta {
    match kind {
        WidgetType::Chart => &CHART,
        WidgetType::TaskList => &TASK_LIST,
        WidgetType::InfoPanel => &INFO_PANEL,
    }
}

/// Look up the kind bound to a key, if any.
pub fn kind_for_key(key: char) -> Option<WidgetType> {
    WidgetType::ALL.into_iter().find(|k| meta(*k).key == key)
}

/// Fresh payload for a new instance of `kind`. Called once per instance, at
/// creation time.
pub fn generate_default_data<R: Rng + ?Sized>(kind: WidgetType, rng: &mut R) -> WidgetData {
    match kind {
        WidgetType::Chart => WidgetData::Chart(rng.gen_range(0..CHART_VALUE_BOUND)),
        WidgetType::TaskList => {
            WidgetData::TaskList(DEFAULT_TASKS.iter().map(|s| s.to_string()).collect())
        }
        WidgetType::InfoPanel => WidgetData::InfoPanel(DEFAULT_INFO_TEXT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chart_values_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            match generate_default_data(WidgetType::Chart, &mut rng) {
                WidgetData::Chart(v) => assert!(v < CHART_VALUE_BOUND),
                other => panic!("expected chart data, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_task_list_is_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = generate_default_data(WidgetType::TaskList, &mut rng);
        assert_eq!(
            data,
            WidgetData::TaskList(vec![
                "New task item".to_string(),
                "Another task to complete".to_string()
            ])
        );
    }

    #[test]
    fn test_info_panel_is_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = generate_default_data(WidgetType::InfoPanel, &mut rng);
        match data {
            WidgetData::InfoPanel(text) => {
                assert!(text.starts_with("This is an informational panel"));
                assert!(text.ends_with("about your dashboard."));
            }
            other => panic!("expected info data, got {other:?}"),
        }
    }

    #[test]
    fn test_generated_kind_matches_request() {
        let mut rng = StdRng::seed_from_u64(3);
        for kind in WidgetType::ALL {
            assert_eq!(generate_default_data(kind, &mut rng).kind(), kind);
        }
    }

    #[test]
    fn test_meta_lookup() {
        assert_eq!(meta(WidgetType::Chart).title, "Chart");
        assert_eq!(meta(WidgetType::TaskList).button_label, "+ Tasks");
        assert_eq!(meta(WidgetType::InfoPanel).key, 'i');
        for kind in WidgetType::ALL {
            assert_eq!(meta(kind).kind, kind);
        }
    }

    #[test]
    fn test_kind_for_key() {
        assert_eq!(kind_for_key('c'), Some(WidgetType::Chart));
        assert_eq!(kind_for_key('t'), Some(WidgetType::TaskList));
        assert_eq!(kind_for_key('i'), Some(WidgetType::InfoPanel));
        assert_eq!(kind_for_key('z'), None);
    }
}
