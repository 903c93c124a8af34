//! Headline KPIs, throughput history, and the delay heatmap.
//!
//! The analytics panel opens on a seeded history (the dashboard starts
//! mid-shift, not empty) and folds live readings in on top. Throughput
//! is the exception: the feed reports positions, not terminal arrivals,
//! so the trains-per-hour figure is carried forward rather than derived
//! from a snapshot.

use std::collections::BTreeMap;

use railwatch_types::{HeatmapCell, Kpis, SegmentId, ThroughputPoint, Train};

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// KPI values shown before the first position update arrives.
pub const fn seed_kpis() -> Kpis {
    Kpis {
        throughput: 124.0,
        avg_delay: 8.5,
        utilization: 78.0,
    }
}

/// Recompute KPIs from a fresh train snapshot.
///
/// Mean delay is rounded to one decimal; utilization is the share of
/// trains currently moving, as a whole percentage. An empty snapshot
/// zeroes both. Throughput is always carried from `previous`.
pub fn live_kpis(trains: &[Train], previous: Kpis) -> Kpis {
    if trains.is_empty() {
        return Kpis {
            throughput: previous.throughput,
            avg_delay: 0.0,
            utilization: 0.0,
        };
    }

    // Train counts are tiny; safe to represent as f64.
    #[allow(clippy::cast_precision_loss)]
    let count = trains.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let moving = trains.iter().filter(|t| t.speed > 0.0).count() as f64;
    let total_delay: f64 = trains.iter().map(|t| t.delay).sum();

    Kpis {
        throughput: previous.throughput,
        avg_delay: round_tenth(total_delay / count),
        utilization: (moving / count * 100.0).round(),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Throughput history
// ---------------------------------------------------------------------------

/// Rolling trains-per-hour history behind the throughput chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputSeries {
    points: Vec<ThroughputPoint>,
    capacity: usize,
}

impl ThroughputSeries {
    /// An empty series bounded to `capacity` points.
    pub const fn new(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// The half-hourly history the dashboard opens with.
    pub fn seeded() -> Self {
        let readings = [
            ("10:00", 95.0),
            ("10:30", 108.0),
            ("11:00", 118.0),
            ("11:30", 124.0),
            ("12:00", 135.0),
            ("12:30", 142.0),
            ("13:00", 128.0),
            ("13:30", 115.0),
            ("14:00", 124.0),
        ];
        Self {
            points: readings
                .into_iter()
                .map(|(time, value)| ThroughputPoint::new(time, value))
                .collect(),
            capacity: 48,
        }
    }

    /// Record a reading. A reading for the newest label overwrites it;
    /// a new label appends, dropping the oldest point past capacity.
    pub fn record(&mut self, time: impl Into<String>, value: f64) {
        let time = time.into();
        match self.points.last_mut() {
            Some(last) if last.time == time => last.value = value,
            _ => {
                self.points.push(ThroughputPoint::new(time, value));
                if self.points.len() > self.capacity {
                    self.points.remove(0);
                }
            }
        }
    }

    /// The series, oldest first.
    pub fn points(&self) -> &[ThroughputPoint] {
        &self.points
    }

    /// Number of points held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ThroughputSeries {
    fn default() -> Self {
        Self::seeded()
    }
}

// ---------------------------------------------------------------------------
// Delay heatmap
// ---------------------------------------------------------------------------

/// Running per-cell statistics: enough to recover the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellStats {
    sum: f64,
    count: u32,
}

impl CellStats {
    fn mean(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

/// Mean delay per segment per hour of day.
///
/// Cells accumulate readings; the displayed value is always the running
/// mean, so the seeded history and live observations blend smoothly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayHeatmap {
    cells: BTreeMap<(SegmentId, u8), CellStats>,
}

impl DelayHeatmap {
    /// Hours of day covered by the seeded history.
    const SEED_HOURS: [u8; 5] = [10, 11, 12, 13, 14];

    /// The per-segment delay history the dashboard opens with.
    pub fn seeded() -> Self {
        let rows: [(&str, [f64; 5]); 5] = [
            ("S1", [2.0, 5.0, 8.0, 12.0, 6.0]),
            ("S2", [0.0, 3.0, 15.0, 18.0, 12.0]),
            ("S3", [1.0, 0.0, 4.0, 7.0, 2.0]),
            ("S4", [8.0, 12.0, 20.0, 15.0, 9.0]),
            ("S5", [5.0, 8.0, 22.0, 25.0, 18.0]),
        ];

        let mut cells = BTreeMap::new();
        for (segment, delays) in rows {
            for (hour, delay) in Self::SEED_HOURS.into_iter().zip(delays) {
                cells.insert((SegmentId::new(segment), hour), CellStats { sum: delay, count: 1 });
            }
        }
        Self { cells }
    }

    /// Fold one delay reading into the cell for `segment` during `hour`.
    pub fn observe(&mut self, segment: &SegmentId, hour: u8, delay: f64) {
        let cell = self
            .cells
            .entry((segment.clone(), hour))
            .or_insert(CellStats { sum: 0.0, count: 0 });
        cell.sum += delay;
        cell.count = cell.count.saturating_add(1);
    }

    /// Mean observed delay for one cell, if any readings exist.
    pub fn mean(&self, segment: &SegmentId, hour: u8) -> Option<f64> {
        self.cells.get(&(segment.clone(), hour)).copied().map(CellStats::mean)
    }

    /// Snapshot every cell as a displayable mean, ordered by segment
    /// then hour.
    pub fn cells(&self) -> Vec<HeatmapCell> {
        self.cells
            .iter()
            .map(|((segment, hour), stats)| HeatmapCell {
                segment: segment.clone(),
                hour: *hour,
                delay: stats.mean(),
            })
            .collect()
    }

    /// Number of cells with at least one reading.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use chrono::{TimeZone, Utc};
    use railwatch_types::{TrainId, TrainStatus};

    use super::*;

    fn train(id: &str, speed: f64, delay: f64) -> Train {
        Train {
            id: TrainId::new(id),
            speed,
            segment: SegmentId::new("S1"),
            progress: 0.5,
            eta: Utc.with_ymd_and_hms(2025, 1, 20, 14, 30, 0).unwrap(),
            status: TrainStatus::OnTime,
            delay,
            priority: 2,
            origin: "A".to_owned(),
            destination: "B".to_owned(),
        }
    }

    #[test]
    fn seed_kpis_match_the_opening_display() {
        let kpis = seed_kpis();
        assert_eq!(kpis.throughput, 124.0);
        assert_eq!(kpis.avg_delay, 8.5);
        assert_eq!(kpis.utilization, 78.0);
    }

    #[test]
    fn live_kpis_average_delay_and_count_moving_trains() {
        let trains = vec![train("a", 40.0, 12.0), train("b", 0.0, 3.0), train("c", 55.0, 0.25)];

        let kpis = live_kpis(&trains, seed_kpis());
        assert_eq!(kpis.throughput, 124.0);
        assert_eq!(kpis.avg_delay, 5.1);
        assert_eq!(kpis.utilization, 67.0);
    }

    #[test]
    fn live_kpis_zero_out_for_an_empty_snapshot() {
        let kpis = live_kpis(&[], seed_kpis());
        assert_eq!(kpis.throughput, 124.0);
        assert_eq!(kpis.avg_delay, 0.0);
        assert_eq!(kpis.utilization, 0.0);
    }

    #[test]
    fn seeded_series_spans_the_morning_shift() {
        let series = ThroughputSeries::seeded();
        assert_eq!(series.len(), 9);
        assert_eq!(series.points()[0], ThroughputPoint::new("10:00", 95.0));
        assert_eq!(series.points()[8], ThroughputPoint::new("14:00", 124.0));
    }

    #[test]
    fn recording_the_newest_label_overwrites_in_place() {
        let mut series = ThroughputSeries::seeded();
        series.record("14:00", 130.0);
        assert_eq!(series.len(), 9);
        assert_eq!(series.points()[8], ThroughputPoint::new("14:00", 130.0));
    }

    #[test]
    fn recording_a_new_label_appends() {
        let mut series = ThroughputSeries::seeded();
        series.record("14:30", 119.0);
        assert_eq!(series.len(), 10);
        assert_eq!(series.points()[9], ThroughputPoint::new("14:30", 119.0));
    }

    #[test]
    fn series_drops_its_oldest_point_past_capacity() {
        let mut series = ThroughputSeries::new(3);
        series.record("10:00", 1.0);
        series.record("10:30", 2.0);
        series.record("11:00", 3.0);
        series.record("11:30", 4.0);

        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[0].time, "10:30");
        assert_eq!(series.points()[2].time, "11:30");
    }

    #[test]
    fn seeded_heatmap_covers_five_segments_by_five_hours() {
        let heatmap = DelayHeatmap::seeded();
        assert_eq!(heatmap.cell_count(), 25);
        assert_eq!(heatmap.mean(&SegmentId::new("S1"), 10), Some(2.0));
        assert_eq!(heatmap.mean(&SegmentId::new("S5"), 13), Some(25.0));
        assert_eq!(heatmap.mean(&SegmentId::new("S3"), 11), Some(0.0));
    }

    #[test]
    fn observations_fold_into_the_running_mean() {
        let mut heatmap = DelayHeatmap::seeded();
        let segment = SegmentId::new("S1");

        heatmap.observe(&segment, 10, 4.0);
        assert_eq!(heatmap.mean(&segment, 10), Some(3.0));

        heatmap.observe(&segment, 15, 7.0);
        assert_eq!(heatmap.mean(&segment, 15), Some(7.0));
        assert_eq!(heatmap.cell_count(), 26);
    }

    #[test]
    fn unknown_cells_have_no_mean() {
        let heatmap = DelayHeatmap::seeded();
        assert_eq!(heatmap.mean(&SegmentId::new("S9"), 10), None);
        assert_eq!(heatmap.mean(&SegmentId::new("S1"), 3), None);
    }

    #[test]
    fn cells_render_ordered_by_segment_then_hour() {
        let heatmap = DelayHeatmap::seeded();
        let cells = heatmap.cells();
        assert_eq!(cells[0].segment, SegmentId::new("S1"));
        assert_eq!(cells[0].hour, 10);
        assert_eq!(cells[4].hour, 14);
        assert_eq!(cells[5].segment, SegmentId::new("S2"));
        assert_eq!(cells[24].segment, SegmentId::new("S5"));
        assert_eq!(cells[24].hour, 14);
    }
}
