use js_sys::{Array, Object, Reflect};
use leaflet::{LatLng, LatLngBounds, Map, MapOptions};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlElement;

use ddd_core::{
    entities::geo::{MapBbox, MapPoint},
    map::{MapBackend, MapMarker, Padding, TileLayer, MARKER_ICON},
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url_template: &str, options: &Object) -> leaflet::TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn new_div_icon(options: &Object) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(pos: &LatLng, options: &Object) -> leaflet::Marker;

    #[wasm_bindgen(extends = Map)]
    type MapExt;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds_with_options(this: &MapExt, bounds: &LatLngBounds, options: &Object);

    #[wasm_bindgen(method, js_name = remove)]
    fn remove_instance(this: &MapExt);

    #[wasm_bindgen(extends = leaflet::Layer)]
    type LayerExt;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup_html(this: &LayerExt, content: &str);
}

/// Renders maps with the global Leaflet library (`L`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LeafletBackend;

impl MapBackend for LeafletBackend {
    type Container = HtmlElement;
    type Map = Map;

    fn create_map(&mut self, container: &HtmlElement, center: MapPoint, zoom: f64) -> Map {
        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_view(&lat_lng(center), zoom);
        map
    }

    fn add_tile_layer(&mut self, map: &Map, layer: &TileLayer) {
        let options = js_object(&[
            ("attribution", layer.attribution.into()),
            ("maxZoom", f64::from(layer.max_zoom).into()),
        ]);
        new_tile_layer(layer.url, &options).add_to(map);
    }

    fn add_marker(&mut self, map: &Map, marker: &MapMarker) {
        let icon = new_div_icon(&js_object(&[
            ("html", marker.style.icon_html().into()),
            ("className", marker.style.css_class().into()),
            ("iconSize", pair(MARKER_ICON.size)),
            ("iconAnchor", pair(MARKER_ICON.anchor)),
            ("popupAnchor", pair(MARKER_ICON.popup_anchor)),
        ]));
        let layer = new_marker(&lat_lng(marker.pos), &js_object(&[("icon", icon)]));
        layer
            .unchecked_ref::<LayerExt>()
            .bind_popup_html(&marker.popup_html);
        layer.add_to(map);
    }

    fn fit_bounds(&mut self, map: &Map, bounds: &MapBbox, padding: Padding) {
        let bounds = LatLngBounds::new(
            &lat_lng(bounds.southwest()),
            &lat_lng(bounds.northeast()),
        );
        let options = js_object(&[("padding", pair((padding.x, padding.y)))]);
        map.unchecked_ref::<MapExt>()
            .fit_bounds_with_options(&bounds, &options);
    }

    fn remove_map(&mut self, map: Map) {
        map.unchecked_ref::<MapExt>().remove_instance();
    }
}

fn lat_lng(pos: MapPoint) -> LatLng {
    LatLng::new(pos.lat(), pos.lng())
}

fn pair((x, y): (f64, f64)) -> JsValue {
    Array::of2(&x.into(), &y.into()).into()
}

fn js_object(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object
}
