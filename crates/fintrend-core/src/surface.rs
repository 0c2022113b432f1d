//! The UI tree the pipeline draws into.
//!
//! [`DashboardSurface`] is the seam between the pipeline and whatever shows the
//! dashboard. [`FrameSurface`] is the in-memory implementation used by the
//! terminal front end and by tests.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::chart::{ChartSlot, ChartSpec};
use crate::summary::SummaryView;
use crate::table::TableView;

/// Status line of the dashboard (loading indicator, prompts, errors).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    Idle,
    Loading { tickers: Vec<String> },
    Ready { tickers: Vec<String> },
    Error { code: &'static str, message: String },
}

/// Mount points and display regions of a dashboard.
pub trait DashboardSurface {
    /// Handle to a live chart widget. Owned by the chart registry.
    type Widget;

    fn has_chart_mount(&self, slot: ChartSlot) -> bool;

    fn create_chart(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Self::Widget;

    fn destroy_chart(&mut self, widget: Self::Widget);

    /// `None` clears the table region.
    fn show_table(&mut self, table: Option<&TableView>);

    fn show_summary(&mut self, summary: &SummaryView);

    fn show_title(&mut self, title: &str);

    fn show_status(&mut self, status: &Status);
}

/// Widget handle issued by [`FrameSurface`].
#[derive(Debug, PartialEq, Eq)]
pub struct FrameWidget {
    id: u64,
    slot: ChartSlot,
}

impl FrameWidget {
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub const fn slot(&self) -> ChartSlot {
        self.slot
    }
}

/// Mutation observed on a [`FrameSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    ChartCreated { slot: ChartSlot, widget: u64 },
    ChartDestroyed { slot: ChartSlot, widget: u64 },
    TableChanged,
    SummaryChanged,
    TitleChanged,
    StatusChanged,
}

impl SurfaceEvent {
    pub const fn touches_content(&self) -> bool {
        !matches!(self, Self::StatusChanged)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountedChart {
    pub slot: ChartSlot,
    pub mount_id: &'static str,
    pub widget: u64,
    pub spec: ChartSpec,
}

/// Serializable snapshot of everything currently shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub title: Option<String>,
    pub status: Status,
    pub summary: Option<SummaryView>,
    pub charts: Vec<MountedChart>,
    pub table: Option<TableView>,
}

/// In-memory dashboard with configurable mount points.
#[derive(Debug, Clone)]
pub struct FrameSurface {
    chart_mounts: BTreeSet<ChartSlot>,
    table_mounted: bool,
    next_widget: u64,
    charts: BTreeMap<ChartSlot, MountedChart>,
    live: BTreeMap<u64, ChartSlot>,
    table: Option<TableView>,
    summary: Option<SummaryView>,
    title: Option<String>,
    status: Status,
    events: Vec<SurfaceEvent>,
}

impl FrameSurface {
    /// Surface with every chart mount and the table mount present.
    pub fn new() -> Self {
        Self {
            chart_mounts: ChartSlot::ALL.into_iter().collect(),
            table_mounted: true,
            next_widget: 1,
            charts: BTreeMap::new(),
            live: BTreeMap::new(),
            table: None,
            summary: None,
            title: None,
            status: Status::Idle,
            events: Vec::new(),
        }
    }

    pub fn without_chart_mount(mut self, slot: ChartSlot) -> Self {
        self.chart_mounts.remove(&slot);
        self
    }

    pub fn without_table_mount(mut self) -> Self {
        self.table_mounted = false;
        self
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts.get(&slot).map(|mounted| &mounted.spec)
    }

    pub fn table(&self) -> Option<&TableView> {
        self.table.as_ref()
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Live widgets currently attached to `slot`.
    pub fn live_widget_count(&self, slot: ChartSlot) -> usize {
        self.live.values().filter(|live| **live == slot).count()
    }

    pub fn total_live_widgets(&self) -> usize {
        self.live.len()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> DashboardFrame {
        DashboardFrame {
            title: self.title.clone(),
            status: self.status.clone(),
            summary: self.summary.clone(),
            charts: self.charts.values().cloned().collect(),
            table: self.table.clone(),
        }
    }
}

impl Default for FrameSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSurface for FrameSurface {
    type Widget = FrameWidget;

    fn has_chart_mount(&self, slot: ChartSlot) -> bool {
        self.chart_mounts.contains(&slot)
    }

    fn create_chart(&mut self, slot: ChartSlot, spec: &ChartSpec) -> FrameWidget {
        let id = self.next_widget;
        self.next_widget += 1;
        self.live.insert(id, slot);
        self.charts.insert(
            slot,
            MountedChart {
                slot,
                mount_id: slot.mount_id(),
                widget: id,
                spec: spec.clone(),
            },
        );
        self.events.push(SurfaceEvent::ChartCreated { slot, widget: id });
        FrameWidget { id, slot }
    }

    fn destroy_chart(&mut self, widget: FrameWidget) {
        self.live.remove(&widget.id);
        if self
            .charts
            .get(&widget.slot)
            .is_some_and(|mounted| mounted.widget == widget.id)
        {
            self.charts.remove(&widget.slot);
        }
        self.events.push(SurfaceEvent::ChartDestroyed {
            slot: widget.slot,
            widget: widget.id,
        });
    }

    fn show_table(&mut self, table: Option<&TableView>) {
        if !self.table_mounted {
            return;
        }
        self.table = table.cloned();
        self.events.push(SurfaceEvent::TableChanged);
    }

    fn show_summary(&mut self, summary: &SummaryView) {
        self.summary = Some(summary.clone());
        self.events.push(SurfaceEvent::SummaryChanged);
    }

    fn show_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
        self.events.push(SurfaceEvent::TitleChanged);
    }

    fn show_status(&mut self, status: &Status) {
        self.status = status.clone();
        self.events.push(SurfaceEvent::StatusChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            title: String::from("Quarterly EBITDA Trend"),
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    #[test]
    fn destroying_a_widget_unmounts_its_chart() {
        let mut surface = FrameSurface::new();
        let widget = surface.create_chart(ChartSlot::Revenue, &spec());
        assert!(surface.chart(ChartSlot::Revenue).is_some());

        surface.destroy_chart(widget);
        assert!(surface.chart(ChartSlot::Revenue).is_none());
        assert_eq!(surface.total_live_widgets(), 0);
        assert_eq!(surface.events().len(), 2);
    }

    #[test]
    fn table_is_ignored_without_mount() {
        let mut surface = FrameSurface::new().without_table_mount();
        surface.show_table(Some(&TableView {
            title: String::from("AAPL Analysis"),
            sections: Vec::new(),
        }));
        assert!(surface.table().is_none());
        assert!(surface.events().is_empty());
    }

    #[test]
    fn status_changes_do_not_touch_content() {
        let mut surface = FrameSurface::new();
        surface.show_status(&Status::Loading {
            tickers: vec![String::from("AAPL")],
        });
        assert!(surface.events().iter().all(|event| !event.touches_content()));
    }
}
