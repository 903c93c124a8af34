//! The built-in five-segment network the dashboard ships with.
//!
//! Reference data for the Delhi-area schematic: segment labels, display
//! names, endpoint stations with map coordinates, and the SVG curves the
//! frontend draws. Coordinates live in the schematic map's own planar
//! space, not in any geographic projection.

use railwatch_types::{Segment, SegmentId, Station};

use crate::network::RailNetwork;

/// Construct one segment from its reference data.
fn segment(
    id: &str,
    name: &str,
    path: &str,
    start: (&str, f64, f64),
    end: (&str, f64, f64),
) -> Segment {
    Segment {
        id: SegmentId::from(id),
        name: name.to_owned(),
        path: path.to_owned(),
        start: Station::new(start.0, start.1, start.2),
        end: Station::new(end.0, end.1, end.2),
    }
}

/// Build the built-in rail network.
pub fn builtin_network() -> RailNetwork {
    let mut network = RailNetwork::new();

    network.add_segment(segment(
        "S1",
        "New Delhi - Gurgaon",
        "M 50 150 Q 200 100 350 150",
        ("New Delhi", 50.0, 150.0),
        ("Gurgaon", 350.0, 150.0),
    ));
    network.add_segment(segment(
        "S2",
        "Faridabad - Noida",
        "M 100 200 Q 250 120 400 180",
        ("Faridabad", 100.0, 200.0),
        ("Noida", 400.0, 180.0),
    ));
    network.add_segment(segment(
        "S3",
        "Ghaziabad - Dwarka",
        "M 150 80 Q 300 50 450 100",
        ("Ghaziabad", 150.0, 80.0),
        ("Dwarka", 450.0, 100.0),
    ));
    network.add_segment(segment(
        "S4",
        "Rohini - Badarpur",
        "M 80 250 Q 220 180 380 240",
        ("Rohini", 80.0, 250.0),
        ("Badarpur", 380.0, 240.0),
    ));
    network.add_segment(segment(
        "S5",
        "Janakpuri - Lajpat Nagar",
        "M 120 120 Q 280 200 420 140",
        ("Janakpuri", 120.0, 120.0),
        ("Lajpat Nagar", 420.0, 140.0),
    ));

    network
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn builtin_network_has_five_segments() {
        let network = builtin_network();
        assert_eq!(network.segment_count(), 5);
        let ids: Vec<&str> = network.segment_ids().map(SegmentId::as_str).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3", "S4", "S5"]);
    }

    #[test]
    fn segment_endpoints_match_reference_data() {
        let network = builtin_network();
        let s1 = network.segment(&SegmentId::from("S1")).unwrap();
        assert_eq!(s1.name, "New Delhi - Gurgaon");
        assert_eq!(s1.start.name, "New Delhi");
        assert_eq!(s1.start.position.x, 50.0);
        assert_eq!(s1.start.position.y, 150.0);
        assert_eq!(s1.end.name, "Gurgaon");
        assert_eq!(s1.end.position.x, 350.0);
        assert_eq!(s1.end.position.y, 150.0);
    }

    #[test]
    fn every_segment_has_a_drawable_path() {
        let network = builtin_network();
        for seg in network.segments() {
            assert!(seg.path.starts_with("M "));
        }
    }
}
