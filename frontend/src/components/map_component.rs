use leaflet::{LatLng, Map, MapOptions, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{js_sys::Object, HtmlElement, Node};
use workout_tracker_lib::{
    summary::Marker,
    surface::{MapSurface, PanOptions},
    Coordinates, TrackerConfig,
};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Zoom/pan options for `setView`.
    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    type ViewOptions;

    #[wasm_bindgen(method, setter, js_name = animate)]
    fn set_animate(this: &ViewOptions, val: bool);

    #[wasm_bindgen(method, setter, js_name = pan)]
    fn set_pan(this: &ViewOptions, val: &PanTiming);

    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    type PanTiming;

    #[wasm_bindgen(method, setter, js_name = duration)]
    fn set_duration(this: &PanTiming, val: f64);
}

impl ViewOptions {
    fn new(pan: PanOptions) -> Self {
        let timing: PanTiming = Object::new().unchecked_into();
        timing.set_duration(pan.duration_secs);

        let options: ViewOptions = Object::new().unchecked_into();
        options.set_animate(pan.animate);
        options.set_pan(&timing);
        options
    }
}

/// A loaded leaflet map.
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    pub fn create(container: &HtmlElement, center: Coordinates, config: &TrackerConfig, on_click: Callback<Coordinates>) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_view(&lat_lng(center), config.zoom_level);
        add_tile_layer(&map, config);

        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let position = event.lat_lng();
            on_click.emit(Coordinates::new(position.lat(), position.lng()));
        }));
        map.invalidate_size(false);

        Self { map }
    }
}

impl MapSurface for LeafletMap {
    fn place_marker(&mut self, marker: &Marker) {
        let popup_opts = PopupOptions::default();
        popup_opts.set_max_width(marker.max_width);
        popup_opts.set_min_width(marker.min_width);
        popup_opts.set_auto_close(marker.auto_close);
        popup_opts.set_close_on_click(marker.close_on_click);
        popup_opts.set_class_name(marker.popup_class.clone());

        let popup = Popup::new(&popup_opts, None);
        popup.set_content(&marker.popup_text.as_str().into());

        let pin = leaflet::Marker::new(&lat_lng(marker.coordinates));
        pin.add_to(&self.map);
        pin.bind_popup(&popup);
        pin.open_popup();
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions) {
        self.map
            .set_view_with_options(&lat_lng(center), zoom, &ViewOptions::new(pan));
    }
}

/// Mounts the map container, which lives outside of yew's control.
pub fn render_container(container: &HtmlElement) -> Html {
    let node: &Node = container.as_ref();
    Html::VRef(node.clone())
}

fn lat_lng(coordinates: Coordinates) -> LatLng {
    LatLng::new(coordinates.latitude, coordinates.longitude)
}

fn add_tile_layer(map: &Map, config: &TrackerConfig) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(config.tile_attribution.clone());
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}
