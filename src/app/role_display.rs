use leptos::prelude::*;

use crate::{
    roles::{CycleState, RoleCycler},
    site::{specialization, ROLES},
    timers::BrowserTimers,
};

#[component]
pub fn RoleDisplay() -> impl IntoView {
    let (cycle, set_cycle) = signal(CycleState::default());
    let cycler = StoredValue::new_local(None::<RoleCycler<BrowserTimers>>);

    Effect::new(move |_| {
        let roles = RoleCycler::new(BrowserTimers, ROLES.len(), move |state: &CycleState| {
            set_cycle.set(*state)
        });
        roles.start();
        cycler.set_value(Some(roles));
    });
    on_cleanup(move || {
        cycler.try_update_value(|c| {
            if let Some(c) = c.take() {
                c.stop();
            }
        });
    });

    let label = move || specialization(ROLES[cycle.get().index % ROLES.len()]);

    view! {
        <div class="mb-6 text-4xl sm:mb-8 sm:text-3xl md:text-4xl lg:text-5xl">
            <div class="text-center">
                <div class="relative inline-flex items-center">
                    <div class="relative flex h-[1.4em] w-[12ch] items-center justify-end overflow-hidden">
                        <div class=move || {
                            format!(
                                "whitespace-nowrap font-medium text-yellow-600 dark:text-purple-400 {}",
                                cycle.get().animation.class(),
                            )
                        }>{label}</div>
                    </div>
                    <span class="ml-1 font-medium text-muted-foreground sm:ml-2">"Engineer"</span>
                    <span class=move || {
                        format!(
                            "ml-1 inline-block w-[0.5ch] font-light text-yellow-600 transition-opacity duration-300 dark:text-purple-400 {}",
                            if cycle.get().cursor_visible { "opacity-100" } else { "opacity-0" },
                        )
                    }>"|"</span>
                    <span class="w-[10ch]" aria-hidden="true"></span>
                </div>
            </div>
        </div>
    }
}
