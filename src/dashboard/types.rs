// src/dashboard/types.rs — Widget type definitions

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::infra::errors::GridboardError;

/// The closed set of card kinds. Adding a kind means adding a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Chart,
    TaskList,
    InfoPanel,
}

impl WidgetType {
    /// Registry order; also the order of the add buttons.
    pub const ALL: [WidgetType; 3] = [
        WidgetType::Chart,
        WidgetType::TaskList,
        WidgetType::InfoPanel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Chart => "chart",
            WidgetType::TaskList => "task-list",
            WidgetType::InfoPanel => "info-panel",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = GridboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chart" | "ChartWidget" => Ok(WidgetType::Chart),
            "task-list" | "tasks" | "TaskListWidget" => Ok(WidgetType::TaskList),
            "info-panel" | "info" | "InfoPanel" => Ok(WidgetType::InfoPanel),
            other => Err(GridboardError::UnknownWidgetType(other.to_string())),
        }
    }
}

/// Payload of a widget. The variant decides the widget's type, so a chart can
/// only ever carry a number and a task list only ever carries strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetData {
    Chart(u32),
    TaskList(Vec<String>),
    InfoPanel(String),
}

impl WidgetData {
    pub fn kind(&self) -> WidgetType {
        match self {
            WidgetData::Chart(_) => WidgetType::Chart,
            WidgetData::TaskList(_) => WidgetType::TaskList,
            WidgetData::InfoPanel(_) => WidgetType::InfoPanel,
        }
    }
}

/// Identifier of a widget instance, e.g. `widget-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub(crate) fn from_counter(n: u64) -> Self {
        Self(format!("widget-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for WidgetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WidgetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One card on the dashboard. Only the controller creates these, and nothing
/// mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetInstance {
    id: WidgetId,
    #[serde(rename = "type")]
    kind: WidgetType,
    data: WidgetData,
}

impl WidgetInstance {
    pub(crate) fn new(id: WidgetId, data: WidgetData) -> Self {
        Self {
            id,
            kind: data.kind(),
            data,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn kind(&self) -> WidgetType {
        self.kind
    }

    pub fn data(&self) -> &WidgetData {
        &self.data
    }
}

/// Something the user asked for. Buttons, removal controls and key bindings
/// all resolve to one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddWidget(WidgetType),
    RemoveWidget(WidgetId),
}
