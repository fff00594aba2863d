use leptos::*;

use ddd_core::image::{ImageCdn, ImageOptions};

const SLIDE_WIDTH: u32 = 800;

#[component]
pub fn ImageCarousel(images: Vec<String>, alt: String, cdn: ImageCdn) -> impl IntoView {
    let count = images.len();
    let (current, set_current) = create_signal(0_usize);

    let options = ImageOptions::width(SLIDE_WIDTH);
    let urls: Vec<_> = images.iter().map(|path| cdn.url(path, &options)).collect();
    let urls = store_value(urls);

    let previous = move |_| set_current.update(|i| *i = (*i + count - 1) % count);
    let next = move |_| set_current.update(|i| *i = (*i + 1) % count);

    if count == 0 {
        return view! {
          <div class="h-64 bg-gray-100 flex items-center justify-center text-gray-400">
            "No images yet"
          </div>
        }
        .into_view();
    }

    view! {
      <div class="relative h-64 overflow-hidden bg-gray-100">
        <img
          class="w-full h-full object-cover"
          src=move || urls.with_value(|urls| urls[current.get()].clone())
          alt=move || format!("{alt} - image {} of {count}", current.get() + 1)
          loading="lazy"
        />
        <Show when=move || { count > 1 }>
          <button
            class="absolute left-2 top-1/2 -translate-y-1/2 bg-white/80 rounded-full w-8 h-8 shadow"
            aria-label="Previous image"
            on:click=previous
          >
            "‹"
          </button>
          <button
            class="absolute right-2 top-1/2 -translate-y-1/2 bg-white/80 rounded-full w-8 h-8 shadow"
            aria-label="Next image"
            on:click=next
          >
            "›"
          </button>
          <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex gap-1">
            { (0..count)
                .map(|i| view! {
                  <button
                    class="w-2 h-2 rounded-full"
                    class=("bg-white", move || current.get() == i)
                    class=("bg-white/50", move || current.get() != i)
                    aria-label=format!("Show image {}", i + 1)
                    on:click=move |_| set_current.set(i)
                  ></button>
                })
                .collect_view()
            }
          </div>
        </Show>
      </div>
    }
    .into_view()
}
