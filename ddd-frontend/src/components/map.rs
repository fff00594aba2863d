use leptos::{html, *};

use ddd_core::{
    card::map_list_badge,
    entities::location::LocationRecord,
    map::{MapWidget, MarkerStyle, MountOutcome, LEGEND_HINT, LIST_TITLE},
};

use super::{leaflet_backend::LeafletBackend, Badge};

#[component]
pub fn ConferenceMap(#[prop(into)] records: Signal<Vec<LocationRecord>>) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let widget = store_value(MapWidget::new(LeafletBackend));

    // -- effects -- //

    Effect::new(move |_| {
        let element = container.get();
        let element: Option<&web_sys::HtmlElement> = element.as_deref().map(AsRef::as_ref);
        let records = records.get();
        let outcome = widget.try_update_value(|w| w.mount(element, &records));
        if let Some(MountOutcome::Mounted { markers, fitted }) = outcome {
            log::debug!("Leaflet map ready: {markers} markers (fitted: {fitted})");
        }
    });

    on_cleanup(move || {
        _ = widget.try_update_value(MapWidget::unmount);
    });

    view! {
      <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
        <div class="lg:col-span-2 relative">
          <div
            node_ref=container
            class="h-96 lg:h-[500px] w-full rounded-xl shadow-sm border z-0"
          ></div>
          <MapLegend />
        </div>
        <ConferenceList records />
      </div>
    }
}

#[component]
fn MapLegend() -> impl IntoView {
    view! {
      <div class="absolute bottom-4 left-4 bg-white rounded-lg shadow-md p-3 z-[1000]">
        <div class="space-y-2">
        { MarkerStyle::LEGEND
            .into_iter()
            .map(|style| view! {
              <div class="flex items-center gap-2 text-xs text-gray-700">
                <span class=format!("w-3 h-3 rounded-full {}", style.dot_class())></span>
                <span>{ style.label() }</span>
              </div>
            })
            .collect_view()
        }
        </div>
        <p class="text-xs text-gray-600 mt-2">{ LEGEND_HINT }</p>
      </div>
    }
}

/// All conferences regardless of the visible map section.
#[component]
fn ConferenceList(records: Signal<Vec<LocationRecord>>) -> impl IntoView {
    view! {
      <div class="bg-white rounded-xl shadow-sm border p-4">
        <h3 class="text-lg font-semibold text-gray-900 mb-4">{ LIST_TITLE }</h3>
        <ul class="space-y-3 max-h-[500px] overflow-y-auto">
          <For
            each=move || records.get()
            key=|record| record.id.clone()
            children=move |record| {
              let style = MarkerStyle::for_status(record.status);
              let (label, variant) = map_list_badge(record.status);
              view! {
                <li class="flex items-center justify-between gap-3 p-3 rounded-lg hover:bg-gray-50">
                  <div class="flex items-center gap-3">
                    <span class=format!("w-3 h-3 rounded-full {}", style.dot_class())></span>
                    <div>
                      <p class="font-medium text-gray-900">{ record.display_name }</p>
                      <p class="text-sm text-gray-600">{ record.city }</p>
                    </div>
                  </div>
                  <Badge variant>{ label }</Badge>
                </li>
              }
            }
          />
        </ul>
      </div>
    }
}
