use crate::db::Barangay;

/// Nearest-barangay lookup strategy.
///
/// A seam for swapping the linear scan for a spatial index (grid, k-d tree,
/// or a database-native nearest-neighbor operator) without touching callers.
pub trait NearestStrategy: Send + Sync {
    /// The barangay closest to `(lat, lng)`, or `None` if the slice is empty.
    fn nearest<'a>(&self, barangays: &'a [Barangay], lat: f64, lng: f64) -> Option<&'a Barangay>;
}

/// Linear scan minimizing squared planar Euclidean distance.
///
/// Degrees are treated as planar coordinates; at the scale of a single
/// municipality the curvature error is negligible, so no great-circle math.
/// The square root is skipped since only relative ordering matters. Ties go
/// to the first barangay in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanNearest;

impl NearestStrategy for LinearScanNearest {
    fn nearest<'a>(&self, barangays: &'a [Barangay], lat: f64, lng: f64) -> Option<&'a Barangay> {
        let mut best: Option<(&Barangay, f64)> = None;

        for barangay in barangays {
            let dist = squared_distance(barangay, lat, lng);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((barangay, dist)),
            }
        }

        best.map(|(barangay, _)| barangay)
    }
}

fn squared_distance(barangay: &Barangay, lat: f64, lng: f64) -> f64 {
    let dlat = barangay.latitude - lat;
    let dlng = barangay.longitude - lng;
    dlat * dlat + dlng * dlng
}
