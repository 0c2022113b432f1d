//! Chart slots, chart specs and the widget registry.
//!
//! [`ChartRegistry`] is the only owner of live chart widgets. Widgets for a
//! render cycle are created through a [`RenderPass`], which can only be obtained
//! after every widget of the previous cycle has been destroyed.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::domain::{AlignedSeries, Metric, PeriodLabel};
use crate::summary::SummaryView;
use crate::surface::DashboardSurface;
use crate::table::TableView;

/// Named chart mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSlot {
    Ebitda,
    Revenue,
    NetIncome,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Ebitda, ChartSlot::Revenue, ChartSlot::NetIncome];

    /// Stable identifier of the mount point in the UI tree.
    pub const fn mount_id(self) -> &'static str {
        match self {
            Self::Ebitda => "ebitdaChart",
            Self::Revenue => "revenueChart",
            Self::NetIncome => "netIncomeChart",
        }
    }

    pub const fn metric(self) -> Metric {
        match self {
            Self::Ebitda => Metric::Ebitda,
            Self::Revenue => Metric::Revenue,
            Self::NetIncome => Metric::NetIncome,
        }
    }

    pub fn from_mount_id(mount_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.mount_id().eq_ignore_ascii_case(mount_id))
    }
}

impl Display for ChartSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mount_id())
    }
}

/// Stable identifier of the table mount point.
pub const TABLE_MOUNT_ID: &str = "financialsTable";

/// RGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Comparison palette, assigned by entity index.
pub const PALETTE: [Color; 5] = [
    Color::rgb(0x66, 0x7e, 0xea),
    Color::rgb(0x28, 0xa7, 0x45),
    Color::rgb(0xff, 0xc1, 0x07),
    Color::rgb(0xdc, 0x35, 0x45),
    Color::rgb(0x6f, 0x42, 0xc1),
];

pub const fn palette_color(entity_index: usize) -> Color {
    PALETTE[entity_index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Comparison,
}

/// One plotted line. `values` is aligned to the chart labels; `None` is a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub color: Color,
    pub values: Vec<Option<f64>>,
}

/// Everything a surface needs to draw one chart widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<PeriodLabel>,
    pub datasets: Vec<ChartDataset>,
}

/// One entity's series in a multi-entity chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonDataset {
    pub entity_index: usize,
    pub label: String,
    pub series: AlignedSeries,
    pub color: Color,
}

impl ComparisonDataset {
    pub fn new(entity_index: usize, label: impl Into<String>, series: AlignedSeries) -> Self {
        Self {
            entity_index,
            label: label.into(),
            series,
            color: palette_color(entity_index),
        }
    }
}

/// Owner of every live chart widget, at most one per slot.
pub struct ChartRegistry<W> {
    live: BTreeMap<ChartSlot, W>,
    passes: u64,
}

impl<W> ChartRegistry<W> {
    pub fn new() -> Self {
        Self {
            live: BTreeMap::new(),
            passes: 0,
        }
    }

    /// Destroy every live widget across all slots.
    pub fn destroy_all<S>(&mut self, surface: &mut S)
    where
        S: DashboardSurface<Widget = W> + ?Sized,
    {
        let destroyed = self.live.len();
        for widget in std::mem::take(&mut self.live).into_values() {
            surface.destroy_chart(widget);
        }
        self.passes += 1;
        debug!(destroyed, pass = self.passes, "destroyed live charts");
    }

    /// Register `widget` under `slot`, destroying whatever the slot held before.
    pub fn set<S>(&mut self, surface: &mut S, slot: ChartSlot, widget: W)
    where
        S: DashboardSurface<Widget = W> + ?Sized,
    {
        if let Some(previous) = self.live.remove(&slot) {
            warn!(%slot, "slot still held a widget; destroying it before replacement");
            surface.destroy_chart(previous);
        }
        self.live.insert(slot, widget);
    }

    /// Start a render cycle: destroy everything, then hand out the creation handle.
    pub fn begin_pass<'a, S>(&'a mut self, surface: &'a mut S) -> RenderPass<'a, S>
    where
        S: DashboardSurface<Widget = W>,
    {
        self.destroy_all(surface);
        RenderPass {
            registry: self,
            surface,
            created: 0,
        }
    }

    pub fn live_slots(&self) -> Vec<ChartSlot> {
        self.live.keys().copied().collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of destroy-all sweeps performed so far.
    pub const fn passes(&self) -> u64 {
        self.passes
    }
}

impl<W> Default for ChartRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Debug for ChartRegistry<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRegistry")
            .field("live", &self.live_slots())
            .field("passes", &self.passes)
            .finish()
    }
}

/// Creation handle for one render cycle.
pub struct RenderPass<'a, S: DashboardSurface> {
    registry: &'a mut ChartRegistry<S::Widget>,
    surface: &'a mut S,
    created: usize,
}

impl<S: DashboardSurface> RenderPass<'_, S> {
    /// Draw one series as a line chart. Returns whether a widget was created.
    pub fn render_line_chart(
        &mut self,
        slot: ChartSlot,
        series: &AlignedSeries,
        label: &str,
        color: Color,
    ) -> bool {
        if !series.has_values() {
            debug!(%slot, "empty series; leaving slot empty");
            return false;
        }

        let spec = ChartSpec {
            kind: ChartKind::Line,
            title: format!("Quarterly {} Trend", slot.metric()),
            labels: series.labels().to_vec(),
            datasets: vec![ChartDataset {
                label: label.to_owned(),
                color,
                values: series.values().to_vec(),
            }],
        };
        self.mount(slot, spec)
    }

    /// Draw several entities on one chart. Returns whether a widget was created.
    pub fn render_comparison_chart(
        &mut self,
        slot: ChartSlot,
        datasets: &[ComparisonDataset],
    ) -> bool {
        let width = datasets
            .iter()
            .filter(|dataset| dataset.series.has_values())
            .map(|dataset| dataset.series.len())
            .max()
            .unwrap_or(0);
        if width == 0 {
            debug!(%slot, "no comparison data; leaving slot empty");
            return false;
        }

        let datasets = datasets
            .iter()
            .filter(|dataset| dataset.series.has_values())
            .map(|dataset| {
                let padding = width - dataset.series.len();
                let values = std::iter::repeat(None)
                    .take(padding)
                    .chain(dataset.series.values().iter().copied())
                    .collect();
                ChartDataset {
                    label: dataset.label.clone(),
                    color: dataset.color,
                    values,
                }
            })
            .collect();

        let spec = ChartSpec {
            kind: ChartKind::Comparison,
            title: format!("Multi-Company {} Trends", slot.metric()),
            labels: PeriodLabel::trailing(width).to_vec(),
            datasets,
        };
        self.mount(slot, spec)
    }

    pub fn show_table(&mut self, table: Option<&TableView>) {
        self.surface.show_table(table);
    }

    pub fn show_summary(&mut self, summary: &SummaryView) {
        self.surface.show_summary(summary);
    }

    pub fn show_title(&mut self, title: &str) {
        self.surface.show_title(title);
    }

    /// Widgets created so far in this pass.
    pub const fn created(&self) -> usize {
        self.created
    }

    fn mount(&mut self, slot: ChartSlot, spec: ChartSpec) -> bool {
        if !self.surface.has_chart_mount(slot) {
            debug!(%slot, "mount point missing; skipping chart");
            return false;
        }
        let widget = self.surface.create_chart(slot, &spec);
        self.registry.set(&mut *self.surface, slot, widget);
        self.created += 1;
        true
    }
}
