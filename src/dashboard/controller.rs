// src/dashboard/controller.rs — Owns the widget collection and id counter.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::registry;
use super::types::{Action, WidgetData, WidgetId, WidgetInstance, WidgetType};

/// Props handed to a card renderer. `on_remove` is the action the card's
/// removal control dispatches.
#[derive(Debug, Clone, PartialEq)]
pub struct CardProps<'a> {
    pub id: &'a WidgetId,
    pub data: &'a WidgetData,
    pub on_remove: Action,
}

impl CardProps<'_> {
    pub fn kind(&self) -> WidgetType {
        self.data.kind()
    }
}

/// Derived view of the dashboard grid, recomputed from controller state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView<'a> {
    /// Zero instances; the grid shows the empty-state message.
    Empty,
    /// One card per instance, in collection order.
    Cards(Vec<CardProps<'a>>),
}

impl DashboardView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty)
    }
}

/// The live, ordered collection of widgets for one session.
pub struct DashboardController {
    widgets: Vec<WidgetInstance>,
    next_id: u64,
    rng: StdRng,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    /// Pre-seeded dashboard with chart values drawn from OS entropy.
    pub fn new() -> Self {
        Self::seeded(StdRng::from_entropy())
    }

    /// Pre-seeded dashboard with deterministic chart values.
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(StdRng::seed_from_u64(seed))
    }

    /// Dashboard with no widgets; the first added widget is `widget-1`.
    pub fn empty(seed: Option<u64>) -> Self {
        Self {
            widgets: Vec::new(),
            next_id: 1,
            rng: rng_from(seed),
        }
    }

    /// Build from config: seeded or empty, fixed seed or entropy.
    pub fn from_options(seed_defaults: bool, chart_seed: Option<u64>) -> Self {
        if seed_defaults {
            Self::seeded(rng_from(chart_seed))
        } else {
            Self::empty(chart_seed)
        }
    }

    fn seeded(rng: StdRng) -> Self {
        let initial = [
            WidgetData::Chart(420),
            WidgetData::TaskList(vec!["Buy eggs".into(), "Review PR".into()]),
        ];
        let widgets: Vec<WidgetInstance> = initial
            .into_iter()
            .enumerate()
            .map(|(i, data)| WidgetInstance::new(WidgetId::from_counter(i as u64 + 1), data))
            .collect();
        let next_id = widgets.len() as u64 + 1;

        Self {
            widgets,
            next_id,
            rng,
        }
    }

    /// Append a new widget of `kind` and return its id.
    pub fn add_widget(&mut self, kind: WidgetType) -> WidgetId {
        let id = WidgetId::from_counter(self.next_id);
        let data = registry::generate_default_data(kind, &mut self.rng);
        self.next_id += 1;

        tracing::debug!(id = %id, kind = %kind, "widget added");
        self.widgets.push(WidgetInstance::new(id.clone(), data));
        id
    }

    /// Remove the widget with `id`. Unknown ids are ignored; returns whether
    /// anything was removed.
    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id() != id);
        let removed = self.widgets.len() != before;

        if removed {
            tracing::debug!(id = %id, remaining = self.widgets.len(), "widget removed");
        } else {
            tracing::trace!(id = %id, "remove ignored, no such widget");
        }
        removed
    }

    /// Dispatch a user action.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::AddWidget(kind) => {
                self.add_widget(*kind);
            }
            Action::RemoveWidget(id) => {
                self.remove_widget(id);
            }
        }
    }

    /// Project the current collection into the grid view.
    pub fn render(&self) -> DashboardView<'_> {
        if self.widgets.is_empty() {
            return DashboardView::Empty;
        }
        DashboardView::Cards(
            self.widgets
                .iter()
                .map(|w| CardProps {
                    id: w.id(),
                    data: w.data(),
                    on_remove: Action::RemoveWidget(w.id().clone()),
                })
                .collect(),
        )
    }

    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.widgets
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
