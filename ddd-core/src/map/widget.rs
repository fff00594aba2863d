use thiserror::Error;

use ddd_entities::{geo::*, location::LocationRecord};

use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The map is not mounted")]
    NotMounted,
}

/// Seam between the widget lifecycle and a concrete mapping library.
pub trait MapBackend {
    /// The element that hosts the map.
    type Container;
    /// A live map instance.
    type Map;

    fn create_map(&mut self, container: &Self::Container, center: MapPoint, zoom: f64) -> Self::Map;
    fn add_tile_layer(&mut self, map: &Self::Map, layer: &TileLayer);
    fn add_marker(&mut self, map: &Self::Map, marker: &MapMarker);
    fn fit_bounds(&mut self, map: &Self::Map, bounds: &MapBbox, padding: Padding);
    /// Release the instance including all layers and event listeners.
    fn remove_map(&mut self, map: Self::Map);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// No container available yet.
    Skipped,
    /// A map for the same records is already live.
    AlreadyMounted,
    Mounted { markers: usize, fitted: bool },
}

struct LiveMap<M> {
    map: M,
    records: Vec<LocationRecord>,
}

/// Owns at most one live map instance.
///
/// The instance is acquired by [`MapWidget::mount`] and released by
/// [`MapWidget::unmount`] or when the widget is dropped.
pub struct MapWidget<B: MapBackend> {
    backend: B,
    live: Option<LiveMap<B::Map>>,
}

impl<B: MapBackend> MapWidget<B> {
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    /// Create the map, place all markers and fit the viewport.
    ///
    /// Mounting again with the same records is a no-op, with different
    /// records the map is re-initialized.
    pub fn mount(
        &mut self,
        container: Option<&B::Container>,
        records: &[LocationRecord],
    ) -> MountOutcome {
        let Some(container) = container else {
            log::debug!("No map container available: skip initialization");
            return MountOutcome::Skipped;
        };
        if let Some(live) = &self.live {
            if live.records == records {
                return MountOutcome::AlreadyMounted;
            }
            log::debug!("Location records changed: re-initialize map");
            self.unmount();
        }
        let plan = MapPlan::new(records);
        let map = self
            .backend
            .create_map(container, DEFAULT_CENTER, DEFAULT_ZOOM);
        self.backend.add_tile_layer(&map, &OSM_TILE_LAYER);
        for marker in &plan.markers {
            self.backend.add_marker(&map, marker);
        }
        let fitted = match plan.bounds {
            Some(bounds) => {
                self.backend.fit_bounds(&map, &bounds, FIT_BOUNDS_PADDING);
                true
            }
            None => false,
        };
        log::debug!("Mounted map with {} markers", plan.markers.len());
        self.live = Some(LiveMap {
            map,
            records: records.to_vec(),
        });
        MountOutcome::Mounted {
            markers: plan.markers.len(),
            fitted,
        }
    }

    /// Place an additional marker on the live map.
    ///
    /// The viewport is not fitted again.
    pub fn add_marker(&mut self, record: &LocationRecord) -> Result<(), Error> {
        let Some(live) = &mut self.live else {
            return Err(Error::NotMounted);
        };
        self.backend.add_marker(&live.map, &MapMarker::from(record));
        live.records.push(record.clone());
        Ok(())
    }

    pub fn unmount(&mut self) {
        if let Some(LiveMap { map, .. }) = self.live.take() {
            log::debug!("Remove map");
            self.backend.remove_map(map);
        }
    }
}

impl<B: MapBackend> Drop for MapWidget<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use ddd_entities::{builders::*, conference::Conference};
    use time::macros::date;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorded {
        created: usize,
        removed: usize,
        tile_layers: usize,
        markers: Vec<MarkerStyle>,
        fitted: Vec<(MapBbox, Padding)>,
    }

    impl Recorded {
        fn live_maps(&self) -> usize {
            self.created - self.removed
        }
    }

    #[derive(Default, Clone)]
    struct RecordingBackend(Rc<RefCell<Recorded>>);

    impl MapBackend for RecordingBackend {
        type Container = ();
        type Map = usize;

        fn create_map(&mut self, _: &(), center: MapPoint, zoom: f64) -> usize {
            assert_eq!(center, DEFAULT_CENTER);
            assert_eq!(zoom, DEFAULT_ZOOM);
            let mut rec = self.0.borrow_mut();
            rec.created += 1;
            rec.created
        }
        fn add_tile_layer(&mut self, _: &usize, layer: &TileLayer) {
            assert_eq!(*layer, OSM_TILE_LAYER);
            self.0.borrow_mut().tile_layers += 1;
        }
        fn add_marker(&mut self, _: &usize, marker: &MapMarker) {
            self.0.borrow_mut().markers.push(marker.style);
        }
        fn fit_bounds(&mut self, _: &usize, bounds: &MapBbox, padding: Padding) {
            self.0.borrow_mut().fitted.push((*bounds, padding));
        }
        fn remove_map(&mut self, _: usize) {
            self.0.borrow_mut().removed += 1;
        }
    }

    fn records() -> Vec<LocationRecord> {
        [
            ("ddd-north", Some(date!(2026 - 02 - 28)), 53.771_68, -0.368_12),
            ("ddd-east-midlands", None, 52.956_862, -1.152_904),
        ]
        .into_iter()
        .map(|(id, date, lat, lng)| {
            let c = Conference::build()
                .id(id)
                .date(date)
                .pos(MapPoint::from_lat_lng_deg(lat, lng))
                .finish();
            LocationRecord::from(&c)
        })
        .collect()
    }

    #[test]
    fn mount_places_markers_and_fits_bounds() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        let outcome = widget.mount(Some(&()), &records());
        assert_eq!(
            outcome,
            MountOutcome::Mounted {
                markers: 2,
                fitted: true
            }
        );
        let rec = backend.0.borrow();
        assert_eq!(rec.created, 1);
        assert_eq!(rec.tile_layers, 1);
        assert_eq!(rec.markers, [MarkerStyle::Confirmed, MarkerStyle::Pending]);
        assert_eq!(rec.fitted.len(), 1);
        assert_eq!(rec.fitted[0].1, FIT_BOUNDS_PADDING);
    }

    #[test]
    fn mount_without_records_skips_fitting() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        let outcome = widget.mount(Some(&()), &[]);
        assert_eq!(
            outcome,
            MountOutcome::Mounted {
                markers: 0,
                fitted: false
            }
        );
        assert!(widget.is_mounted());
        assert!(backend.0.borrow().fitted.is_empty());
    }

    #[test]
    fn mount_without_container_is_skipped() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        assert_eq!(widget.mount(None, &records()), MountOutcome::Skipped);
        assert!(!widget.is_mounted());
        assert_eq!(backend.0.borrow().created, 0);
        // The container shows up on a later render pass
        assert!(matches!(
            widget.mount(Some(&()), &records()),
            MountOutcome::Mounted { .. }
        ));
    }

    #[test]
    fn mount_twice_keeps_a_single_instance() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        widget.mount(Some(&()), &records());
        assert_eq!(
            widget.mount(Some(&()), &records()),
            MountOutcome::AlreadyMounted
        );
        let rec = backend.0.borrow();
        assert_eq!(rec.live_maps(), 1);
        assert_eq!(rec.tile_layers, 1);
        assert_eq!(rec.markers.len(), 2);
    }

    #[test]
    fn changed_records_reinitialize_the_map() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        widget.mount(Some(&()), &records());
        let all = records();
        assert_eq!(
            widget.mount(Some(&()), &all[..1]),
            MountOutcome::Mounted {
                markers: 1,
                fitted: true
            }
        );
        let rec = backend.0.borrow();
        assert_eq!(rec.created, 2);
        assert_eq!(rec.removed, 1);
        assert_eq!(rec.live_maps(), 1);
    }

    #[test]
    fn unmount_releases_the_instance() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        widget.mount(Some(&()), &records());
        widget.unmount();
        assert!(!widget.is_mounted());
        assert_eq!(backend.0.borrow().live_maps(), 0);
        assert_eq!(
            widget.add_marker(&records()[0]),
            Err(Error::NotMounted)
        );
        assert_eq!(backend.0.borrow().markers.len(), 2);
    }

    #[test]
    fn unmount_before_mount_is_a_noop() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        widget.unmount();
        widget.unmount();
        assert_eq!(backend.0.borrow().removed, 0);
    }

    #[test]
    fn add_marker_to_live_map() {
        let backend = RecordingBackend::default();
        let mut widget = MapWidget::new(backend.clone());
        widget.mount(Some(&()), &records()[..1]);
        widget.add_marker(&records()[1]).unwrap();
        let rec = backend.0.borrow();
        assert_eq!(rec.markers, [MarkerStyle::Confirmed, MarkerStyle::Pending]);
        assert_eq!(rec.fitted.len(), 1);
    }

    #[test]
    fn drop_releases_the_instance() {
        let backend = RecordingBackend::default();
        {
            let mut widget = MapWidget::new(backend.clone());
            widget.mount(Some(&()), &records());
            assert_eq!(widget.backend().0.borrow().live_maps(), 1);
        }
        assert_eq!(backend.0.borrow().live_maps(), 0);
    }
}
