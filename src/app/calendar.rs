use leptos::prelude::*;

use crate::site::{ModalState, CALENDAR_SANDBOX, CALENDAR_URL};

/// Scheduling dialog. Opened from the social links; only the close button hides it.
#[component]
pub fn CalendarModal(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <Show when=move || modal.get().is_open()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                role="dialog"
                aria-modal="true"
                aria-labelledby="calendar-title"
            >
                <div class="relative max-h-[90vh] w-full max-w-4xl overflow-hidden rounded-lg border border-gray-200 bg-white shadow-2xl dark:border-gray-700 dark:bg-gray-900">
                    <div class="flex items-center justify-between border-b border-gray-200 bg-gray-50 p-4 dark:border-gray-700 dark:bg-gray-800">
                        <h2
                            id="calendar-title"
                            class="text-lg font-semibold text-gray-900 dark:text-white"
                        >
                            "Schedule a Meeting"
                        </h2>
                        <button
                            type="button"
                            on:click=move |_| modal.update(ModalState::close)
                            class="flex h-8 w-8 items-center justify-center rounded-lg text-gray-600 transition-colors hover:bg-gray-200 dark:text-gray-300 dark:hover:bg-gray-700"
                            aria-label="Close modal"
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="h-[600px] bg-white">
                        <iframe
                            src=CALENDAR_URL
                            class="h-full w-full border-0"
                            title="Schedule Meeting"
                            sandbox=CALENDAR_SANDBOX
                        ></iframe>
                    </div>
                </div>
            </div>
        </Show>
    }
}
