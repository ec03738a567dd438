use leptos::prelude::*;

use crate::theme::Theme;

const ICON: &str = "absolute inset-0 flex h-5 w-5 items-center justify-center transition-all duration-300 sm:h-6 sm:w-6";

#[component]
pub fn ThemeToggle<F>(on_toggle: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let theme = expect_context::<RwSignal<Theme>>();
    let is_dark = move || theme.get().is_dark();

    view! {
        <button
            type="button"
            on:click=move |_| on_toggle()
            class="fixed right-4 top-4 z-[9999] flex h-10 w-10 items-center justify-center rounded-lg border border-yellow-600/40 bg-card shadow-lg transition-all duration-300 hover:scale-110 hover:shadow-xl dark:border-purple-400/40 sm:right-6 sm:top-6 sm:h-12 sm:w-12"
            aria-label="Toggle theme"
        >
            <div class="relative h-5 w-5 sm:h-6 sm:w-6">
                <span class=move || {
                    format!(
                        "{ICON} text-yellow-600 {}",
                        if is_dark() {
                            "rotate-90 scale-0 opacity-0"
                        } else {
                            "rotate-0 scale-100 opacity-100"
                        },
                    )
                }>"☀"</span>
                <span class=move || {
                    format!(
                        "{ICON} text-purple-400 {}",
                        if is_dark() {
                            "rotate-0 scale-100 opacity-100"
                        } else {
                            "-rotate-90 scale-0 opacity-0"
                        },
                    )
                }>"☾"</span>
            </div>
        </button>
    }
}
