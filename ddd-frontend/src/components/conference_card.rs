use leptos::*;

use ddd_core::{
    card::{date_label, social_icon_html, status_badge, BadgeVariant},
    entities::{
        after_party::AfterParty,
        conference::{Conference, SchedulingStatus},
        hotel::Hotel,
        social::SocialLink,
    },
    image::{ImageCdn, ImageOptions},
};

use super::{Badge, ImageCarousel};

const THUMBNAIL_WIDTH: u32 = 160;

#[component]
pub fn ConferenceCard(conference: Conference, cdn: ImageCdn) -> impl IntoView {
    let Conference {
        name,
        venue,
        city,
        date,
        website,
        images,
        social,
        hotels,
        after_parties,
        ..
    } = conference;
    let status = SchedulingStatus::from_date(date);
    let (badge_label, badge_variant) = status_badge(status);
    let date = date_label(date);
    let alt = name.clone();
    let carousel_cdn = cdn.clone();

    view! {
      <article class="bg-white rounded-xl shadow-sm border overflow-hidden flex flex-col">
        <ImageCarousel images alt cdn=carousel_cdn />
        <div class="p-6 space-y-6 flex-1">
          <header class="flex items-start justify-between gap-4">
            <div>
              <h3 class="text-2xl font-bold text-gray-900">{ name }</h3>
              <p class="text-gray-600">{ format!("{venue}, {city}") }</p>
              <p class="text-sm text-gray-500 mt-1">{ date }</p>
            </div>
            <Badge variant=badge_variant>{ badge_label }</Badge>
          </header>
          <a
            href=website
            target="_blank"
            rel="noopener noreferrer"
            class="inline-block w-full text-center px-4 py-2 rounded-lg bg-gray-900 text-white font-medium hover:bg-gray-700"
          >
            "Visit Website"
          </a>
          <Socials links=social />
          <Hotels hotels cdn />
          <AfterParties after_parties />
        </div>
      </article>
    }
}

#[component]
fn Socials(links: Vec<SocialLink>) -> impl IntoView {
    let (open, set_open) = create_signal(true);
    if links.is_empty() {
        return ().into_view();
    }
    let links = store_value(links);
    view! {
      <section>
        <button
          class="w-full flex items-center justify-between font-semibold text-gray-900"
          on:click=move |_| set_open.update(|o| *o = !*o)
        >
          "Socials"
          <span>{ move || if open.get() { "−" } else { "+" } }</span>
        </button>
        <Show when=move || open.get()>
          <ul class="mt-3 flex flex-wrap gap-2">
            { links.with_value(|links| links.iter().map(|link| view! {
                <li>
                  <a
                    href=link.url.clone()
                    title=link.title()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full border text-sm hover:bg-gray-50"
                  >
                    <span class="shrink-0" inner_html=social_icon_html(link.platform)></span>
                    <span class="font-medium">{ link.label.clone() }</span>
                  </a>
                </li>
              }).collect_view())
            }
          </ul>
        </Show>
      </section>
    }
    .into_view()
}

#[component]
fn Hotels(hotels: Vec<Hotel>, cdn: ImageCdn) -> impl IntoView {
    if hotels.is_empty() {
        return ().into_view();
    }
    let thumbnail = ImageOptions::width(THUMBNAIL_WIDTH);
    view! {
      <section>
        <h4 class="font-semibold text-gray-900 mb-3">"Recommended Hotels"</h4>
        <ul class="space-y-3">
          { hotels.into_iter().map(|hotel| {
              let image = hotel.image.as_deref().map(|path| cdn.url(path, &thumbnail));
              let rating = hotel.visible_rating().map(|r| format!("★ {r:.1}"));
              let badge = hotel.availability.badge();
              let name = match hotel.availability.booking_url() {
                  Some(url) => view! {
                    <a
                      href=url.to_owned()
                      target="_blank"
                      rel="noopener noreferrer"
                      class="font-medium text-gray-900 hover:underline"
                    >
                      { hotel.name.clone() }
                    </a>
                  }.into_view(),
                  None => view! {
                    <span class="font-medium text-gray-900">{ hotel.name.clone() }</span>
                  }.into_view(),
              };
              view! {
                <li class="flex items-center gap-3">
                  { image.map(|src| view! {
                      <img src=src alt=hotel.name.clone() class="w-16 h-12 rounded object-cover" loading="lazy" />
                  }) }
                  <div class="flex-1">
                    { name }
                    { rating.map(|r| view! { <p class="text-sm text-amber-600">{ r }</p> }) }
                  </div>
                  { badge.map(|b| view! { <Badge variant=BadgeVariant::Outline>{ b }</Badge> }) }
                </li>
              }
          }).collect_view() }
        </ul>
      </section>
    }
    .into_view()
}

#[component]
fn AfterParties(after_parties: Vec<AfterParty>) -> impl IntoView {
    if after_parties.is_empty() {
        return ().into_view();
    }
    view! {
      <section>
        <h4 class="font-semibold text-gray-900 mb-3">"After Parties"</h4>
        <ul class="space-y-3">
          { after_parties.into_iter().map(|party| view! {
              <li class="p-3 rounded-lg border">
                <p class="font-medium text-gray-900">{ party.name }</p>
                <p class="text-sm text-gray-600">{ party.description }</p>
                <p class="text-sm text-gray-500">{ format!("{} · {}", party.location, party.time) }</p>
                <a
                  href=party.ticket_url
                  target="_blank"
                  rel="noopener noreferrer"
                  class="text-sm font-medium text-green-700 hover:underline"
                >
                  "Get Tickets"
                </a>
              </li>
          }).collect_view() }
        </ul>
      </section>
    }
    .into_view()
}
