use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::{
    meteors::{generate, Meteor, WidthClass},
    theme::Theme,
};

/// Decorative meteors behind the page.
///
/// The width class is re-derived on every resize, but a new set of meteors
/// is only drawn when the class actually flips. Toggling the theme recolours
/// the meteors already on screen and never redraws them.
#[component]
pub fn MeteorRain() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let width_class = Memo::new(move |_| WidthClass::from_width(width.get()));
    let meteors = Memo::new(move |_| {
        let class = width_class.get();
        log::debug!("generating meteors for {class:?}");
        generate(&mut rand::thread_rng(), class)
    });

    view! {
        <div class="pointer-events-none fixed inset-0 z-0 overflow-hidden bg-transparent" aria-hidden="true">
            {move || {
                meteors
                    .get()
                    .into_iter()
                    .map(|meteor| {
                        view! {
                            <div
                                class="absolute opacity-40 sm:opacity-60"
                                style=move || meteor.style(width_class.get(), theme.get())
                            >
                                <div
                                    class="absolute -mt-0.5 h-1 w-1 rounded-full sm:h-1.5 sm:w-1.5"
                                    style=move || Meteor::head_style(width_class.get(), theme.get())
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
