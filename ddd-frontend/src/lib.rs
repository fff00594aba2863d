use leptos::*;

use ddd_core::{
    catalog,
    entities::location::LocationRecord,
    image::{ImageCdn, DEFAULT_CLOUD_NAME},
};
use ddd_frontend_api::{FormApi, FORM_ENDPOINT};

mod components;
use components::*;

const CLOUDINARY_CLOUD_NAME: Option<&str> = option_env!("CLOUDINARY_CLOUD_NAME");
const FORM_ENDPOINT_URL: Option<&str> = option_env!("FORM_ENDPOINT");

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let conferences = catalog::conferences();
    let records: Vec<LocationRecord> = conferences.iter().map(LocationRecord::from).collect();
    let (records, _) = create_signal(records);

    let cdn = ImageCdn::new(CLOUDINARY_CLOUD_NAME.unwrap_or(DEFAULT_CLOUD_NAME));
    let form_api = FormApi::new(FORM_ENDPOINT_URL.unwrap_or(FORM_ENDPOINT).to_owned());
    log::debug!(
        "Serving {} conferences, images from {}",
        conferences.len(),
        cdn.cloud_name()
    );

    let cards = conferences
        .iter()
        .cloned()
        .map(|conference| view! { <ConferenceCard conference cdn=cdn.clone() /> })
        .collect_view();

    view! {
      <div class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100">
        <header class="bg-white shadow-sm border-b">
          <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-center">
            <h1 class="text-5xl font-bold text-gray-900 mb-4">"DDD Conferences"</h1>
            <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
              "Developer Developer Developer conferences across the UK. Connect with fellow developers, find accommodation, and join our WhatsApp communities."
            </p>
          </div>
        </header>
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
          <section class="mb-16">
            <SectionTitle
              title="Conference Locations"
              subtitle="Discover DDD conferences across the United Kingdom"
            />
            <ConferenceMap records />
          </section>
          <section class="mb-16">
            <SectionTitle
              title="Upcoming Conferences"
              subtitle="Explore our conferences, venues, and recommended accommodations"
            />
            <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">{ cards }</div>
          </section>
          <section class="bg-white rounded-xl shadow-sm border p-8">
            <SectionTitle
              title="Join Our WhatsApp Communities"
              subtitle="Connect with fellow developers before and after events. Coordinate meetups, share meals, and build lasting connections in the developer community."
            />
            <WhatsAppSignup conferences form_api />
          </section>
        </main>
        <footer class="bg-gray-900 text-white py-12 mt-20">
          <p class="max-w-7xl mx-auto px-4 text-center text-gray-400 text-lg">
            "© 2024 DDD Conferences. Connecting developers across the UK."
          </p>
        </footer>
      </div>
    }
}

#[component]
fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
      <div class="text-center mb-8">
        <h2 class="text-3xl font-bold text-gray-900 mb-4">{ title }</h2>
        <p class="text-lg text-gray-600 max-w-3xl mx-auto">{ subtitle }</p>
      </div>
    }
}
