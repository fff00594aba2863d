use ddd_entities::geo::*;

/// The minimal bounding box that contains all `points`.
///
/// Returns `None` if there are no points.
pub fn bounding_box<I>(points: I) -> Option<MapBbox>
where
    I: IntoIterator<Item = MapPoint>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    let mut bbox = MapBbox::from_point(first);
    for pos in points {
        bbox.extend(pos);
    }
    Some(bbox)
}
