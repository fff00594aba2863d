use leptos::{ev, *};

use ddd_boundary::SignupRequest;
use ddd_core::{
    catalog,
    entities::{conference::Conference, id::Id, registration::Registration},
    signup::{self, Notice, NoticeKind, Signup, SubmitFailure},
};
use ddd_frontend_api::{self as api, FormApi};

const INPUT_CLASS: &str = "block w-full px-3 py-2 text-base text-gray-700 bg-white border border-gray-300 rounded-lg focus:border-green-600 focus:outline-none disabled:opacity-50";

#[component]
pub fn WhatsAppSignup(conferences: Vec<Conference>, form_api: FormApi) -> impl IntoView {
    let conferences = store_value(conferences);
    let signup = RwSignal::new(Signup::default());
    let notice = RwSignal::new(None::<Notice>);

    let conference_name = move |id: &Id| {
        conferences.with_value(|all| catalog::find(all, id).map(|c| c.name.clone()))
    };

    // -- actions -- //

    let submit_action = create_action(move |registration: &Registration| {
        log::info!("Submitting registration for {}", registration.conference);
        let name = conference_name(&registration.conference);
        let request = SignupRequest::from(registration.clone());
        let form_api = form_api.clone();
        async move {
            let result = form_api
                .submit_registration(&request)
                .await
                .map_err(|err| match err {
                    api::Error::Rejected(message) => SubmitFailure::Rejected { message },
                    api::Error::Fetch(msg) => {
                        log::warn!("Unable to submit registration: {msg}");
                        SubmitFailure::Network
                    }
                });
            let finished = signup
                .try_update(|s| s.finish_submit(result, name.as_deref()))
                .flatten();
            if let Some(finished) = finished {
                notice.set(Some(finished));
            }
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match signup.try_update(Signup::begin_submit) {
            Some(Ok(registration)) => {
                notice.set(None);
                submit_action.dispatch(registration);
            }
            Some(Err(signup::Error::Incomplete)) => {
                notice.set(Some(Notice::missing_information()));
            }
            Some(Err(err)) => {
                log::debug!("Ignoring submit: {err}");
            }
            None => {}
        }
    };

    let on_reset = move |_| {
        signup.update(Signup::reset);
        notice.set(None);
    };

    let submitting = Signal::derive(move || signup.with(Signup::is_submitting));
    let submitted = Signal::derive(move || signup.with(Signup::is_submitted));
    let selected_name = Signal::derive(move || {
        signup
            .with(|s| s.form.conference.clone())
            .and_then(|id| conference_name(&id))
            .unwrap_or_default()
    });

    view! {
      <div class="max-w-md mx-auto">
        <NoticeBanner notice />
        <Show
          when=move || submitted.get()
          fallback=move || view! {
            <form class="space-y-4" on:submit=on_submit>
              <h3 class="text-xl font-semibold text-center text-gray-900">"Join WhatsApp Community"</h3>
              <div class="space-y-2">
                <label for="name" class="block text-sm font-medium">"Full Name"</label>
                <input
                  id="name"
                  type="text"
                  required
                  placeholder="Enter your full name"
                  class=INPUT_CLASS
                  prop:value=move || signup.with(|s| s.form.name.clone())
                  prop:disabled=move || submitting.get()
                  on:input=move |ev| {
                    let val = event_target_value(&ev);
                    signup.update(|s| s.form.name = val);
                  }
                />
              </div>
              <div class="space-y-2">
                <label for="phone" class="block text-sm font-medium">"Phone Number"</label>
                <input
                  id="phone"
                  type="tel"
                  required
                  placeholder="+44 7XXX XXXXXX"
                  class=INPUT_CLASS
                  prop:value=move || signup.with(|s| s.form.phone.clone())
                  prop:disabled=move || submitting.get()
                  on:input=move |ev| {
                    let val = event_target_value(&ev);
                    signup.update(|s| s.form.phone = val);
                  }
                />
              </div>
              <div class="space-y-2">
                <label for="conference" class="block text-sm font-medium">"Select Conference"</label>
                <select
                  id="conference"
                  class=INPUT_CLASS
                  prop:disabled=move || submitting.get()
                  on:change=move |ev| {
                    let val = event_target_value(&ev);
                    let id = (!val.is_empty()).then(|| Id::from(val));
                    signup.update(|s| s.form.conference = id);
                  }
                >
                  <option value="" selected=move || signup.with(|s| s.form.conference.is_none())>
                    "Choose a conference"
                  </option>
                  { conferences.with_value(|all| all.iter().map(|c| {
                      let id = c.id.clone();
                      let selected_id = id.clone();
                      view! {
                        <option
                          value=id.to_string()
                          selected=move || signup.with(|s| s.form.conference.as_ref() == Some(&selected_id))
                        >
                          { format!("{} - {}", c.name, c.city) }
                        </option>
                      }
                    }).collect_view())
                  }
                </select>
              </div>
              <button
                type="submit"
                class="w-full px-4 py-2 rounded-lg bg-green-600 text-white font-medium hover:bg-green-700 disabled:opacity-50"
                prop:disabled=move || submitting.get()
              >
                { move || if submitting.get() { "Submitting..." } else { "Join WhatsApp Community" } }
              </button>
              <p class="mt-4 p-3 bg-blue-50 rounded-lg text-xs text-blue-800">
                <strong>"Privacy Note: "</strong>
                "Your phone number will only be used to add you to the relevant WhatsApp community. We respect your privacy and won't share your details."
              </p>
            </form>
          }
        >
          <div class="text-center space-y-4">
            <h3 class="text-xl font-semibold text-gray-900">"Registration Successful!"</h3>
            <p class="text-gray-600">
              "We'll add you to the WhatsApp community for "
              <strong>{ move || selected_name.get() }</strong>
              " within 24 hours."
            </p>
            <button
              class="w-full px-4 py-2 rounded-lg border border-gray-300 font-medium hover:bg-gray-50"
              on:click=on_reset
            >
              "Register for Another Conference"
            </button>
          </div>
        </Show>
      </div>
    }
}

#[component]
fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|Notice { kind, title, description }| {
            let class = match kind {
                NoticeKind::Success => "border-green-600 bg-green-50 text-green-900",
                NoticeKind::Error => "border-red-600 bg-red-50 text-red-900",
            };
            view! {
              <div role="status" class=format!("mb-4 p-4 rounded-lg border {class}")>
                <div class="flex items-start justify-between gap-4">
                  <div>
                    <p class="font-semibold">{ title }</p>
                    <p class="text-sm">{ description }</p>
                  </div>
                  <button aria-label="Dismiss" on:click=move |_| notice.set(None)>"×"</button>
                </div>
              </div>
            }
        })
    }
}
