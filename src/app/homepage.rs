use leptos::{either::*, prelude::*};
use leptos_meta::Title;
use leptos_router::components::*;
use leptos_use::use_interval_fn;

use super::{
    calendar::CalendarModal, meteor_rain::MeteorRain, role_display::RoleDisplay,
    theme_toggle::ThemeToggle,
};
use crate::{
    site::{LinkAction, ModalState, BADGES, OWNER_FIRST, OWNER_LAST, SCHOOL, SKILLS, SOCIAL_LINKS},
    theme::{BrowserTheme, Theme, ThemeController},
};

const ACCENT: &str = "text-yellow-600 dark:text-purple-400";
const SOCIAL_BADGE: &str = "social-badge-mobile flex h-8 w-8 items-center justify-center rounded bg-card transition-all duration-200 hover:-translate-y-1 hover:scale-125 hover:bg-accent dark:hover:shadow-lg sm:h-10 sm:w-10";

#[component]
pub fn HomePage() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    let backend = BrowserTheme::new();
    let controller = StoredValue::new(None::<ThemeController<BrowserTheme>>);
    // effects only run in the browser, so everything that depends on
    // storage or the window is decided here
    Effect::new(move |_| {
        let mounted_theme = ThemeController::mount(backend);
        theme.set(mounted_theme.theme());
        controller.set_value(Some(mounted_theme));
        set_mounted.set(true);
    });

    let toggle_theme = move || {
        controller.update_value(|c| {
            if let Some(c) = c {
                theme.set(c.toggle());
            }
        });
    };

    let calendar = RwSignal::new(ModalState::default());
    let open_calendar = move || calendar.update(ModalState::open);

    view! {
        <Title text="Home" />
        <Show when=move || mounted.get() fallback=|| view! { <Loading /> }>
            <div class="relative flex min-h-screen w-full flex-col bg-background text-foreground">
                <MeteorRain />
                <MadeWithAi />
                <main class="relative z-10 w-full flex-1">
                    <ThemeToggle on_toggle=toggle_theme />
                    <section class="relative flex min-h-screen items-center overflow-hidden">
                        <div class="absolute inset-0 bg-gradient-to-br from-yellow-500/5 via-transparent to-transparent dark:from-purple-500/5" />
                        <div class="relative mx-auto w-full max-w-6xl px-4 py-6 sm:px-6 sm:py-8">
                            <div class="fade-in text-center">
                                <SocialLinks on_schedule=open_calendar />
                                <Badges />
                                <Hero />
                                <RoleDisplay />
                                <Tagline />
                                <div class="mb-4 sm:mb-6">
                                    <SkillsList />
                                </div>
                                <div class="text-center">
                                    <span class="text-sm font-medium tracking-normal">
                                        <a
                                            href=SCHOOL.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=format!(
                                                "{ACCENT} underline decoration-dotted underline-offset-4 transition-colors hover:text-yellow-500 dark:hover:text-purple-300",
                                            )
                                        >
                                            {SCHOOL.name}
                                        </a>
                                        " "
                                        {SCHOOL.suffix}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </section>
                </main>
                <CalendarModal modal=calendar />
            </div>
        </Show>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-background text-foreground">
            <div class="flex flex-1 items-center justify-center">
                <div class="h-8 w-8 animate-spin rounded-full border-b-2 border-foreground"></div>
            </div>
        </div>
    }
}

#[component]
fn MadeWithAi() -> impl IntoView {
    view! {
        <div class="fixed left-1/2 top-4 z-20 -translate-x-1/2 transform">
            <div class="flex items-center gap-1 rounded-full border border-blue-500/30 bg-blue-500/10 px-3 py-1 text-xs font-medium text-blue-600 shadow-sm dark:border-blue-400/30 dark:bg-blue-400/10 dark:text-blue-400">
                <span class="text-xs">"🤖"</span>
                "Made with AI"
            </div>
        </div>
    }
}

#[component]
fn SocialLinks<F>(on_schedule: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let icon_class = format!("h-4 w-4 sm:h-5 sm:w-5 {ACCENT}");
    view! {
        <div class="mb-6 sm:mb-8">
            <div class="flex flex-wrap justify-center gap-2 sm:gap-3 md:gap-4">
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|link| {
                        let icon = view! { <i class=format!("{} {icon_class}", link.icon.class()) /> };
                        match link.action() {
                            LinkAction::Navigate(href) => {
                                EitherOf3::A(
                                    view! {
                                        <A href=href attr:class=SOCIAL_BADGE attr:title=link.name>
                                            {icon}
                                        </A>
                                    },
                                )
                            }
                            LinkAction::OpenScheduler => {
                                EitherOf3::B(
                                    view! {
                                        <button
                                            type="button"
                                            class=SOCIAL_BADGE
                                            title=link.name
                                            aria-label=link.name
                                            on:click=move |_| on_schedule()
                                        >
                                            {icon}
                                        </button>
                                    },
                                )
                            }
                            LinkAction::OpenExternal(href) => {
                                EitherOf3::C(
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=SOCIAL_BADGE
                                            title=link.name
                                            aria-label=link.name
                                        >
                                            {icon}
                                        </a>
                                    },
                                )
                            }
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Badges() -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-col gap-3 sm:mb-8">
            <div class="flex flex-wrap items-center justify-center gap-2 sm:gap-3">
                {BADGES
                    .into_iter()
                    .map(|badge| {
                        let label = match badge.short_label {
                            Some(short) => {
                                Either::Left(
                                    view! {
                                        <span class="hidden xs:inline">{badge.label}</span>
                                        <span class="xs:hidden">{short}</span>
                                    },
                                )
                            }
                            None => Either::Right(view! { <span>{badge.label}</span> }),
                        };
                        view! {
                            <div class=format!(
                                "badge-mobile-small flex items-center gap-1.5 rounded-full border px-2.5 py-1 text-xs font-medium shadow-sm sm:gap-2 sm:px-3 sm:py-1.5 {}",
                                badge.tone.classes(),
                            )>
                                {badge.glyph.map(|g| view! { <span class="text-[0.7rem]">{g}</span> })}
                                {label}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Name heading with its own blinking cursor, independent of the role cursor.
#[component]
fn Hero() -> impl IntoView {
    let (cursor_visible, set_cursor_visible) = signal(true);
    let _ = use_interval_fn(move || set_cursor_visible.update(|v| *v = !*v), 1000_u64);

    view! {
        <h1 class="cinematic-glow mb-4 text-5xl font-bold tracking-normal sm:mb-6 sm:text-5xl sm:tracking-tight md:text-6xl lg:text-7xl">
            {OWNER_FIRST}
            " "
            <span class="text-gradient">{OWNER_LAST}</span>
            <span class=move || {
                format!(
                    "inline-block -translate-y-2 animate-cursor-flicker align-baseline transition-opacity {ACCENT} {}",
                    if cursor_visible.get() { "opacity-100 duration-200" } else { "opacity-0 duration-1000" },
                )
            }>"_"</span>
        </h1>
    }
}

#[component]
fn Tagline() -> impl IntoView {
    let accent = |text: &'static str| {
        view! { <span class=format!("font-medium {ACCENT}")>{text}</span> }
    };
    view! {
        <div class="mb-6 flex justify-center px-2 sm:mb-0 sm:px-0">
            <p class="mb-6 max-w-4xl text-center text-base leading-relaxed tracking-normal text-muted-foreground sm:text-lg">
                "Natural " {accent("problem solver")} " and " {accent("proactive")} " "
                <span class="underline">"builder"</span> " that treats "
                {accent("pragmatism")} ", " {accent("dynamic modern solutions")} ", and "
                {accent("agility")} " as " <span class="underline">"priorities"</span>
                ". I have years of experience interacting with different types of software and infrastructure in diverse environments and teams, and I love learning new things, architecting useful tools, and tinkering with new technologies."
            </p>
        </div>
    }
}

#[component]
fn SkillsList() -> impl IntoView {
    view! {
        <div class="mx-auto flex max-w-none flex-wrap justify-center gap-1.5 px-4 sm:gap-3">
            {SKILLS
                .into_iter()
                .map(|skill| {
                    view! {
                        <span class="inline-block cursor-default whitespace-nowrap rounded-full border border-yellow-600/40 bg-yellow-600/20 px-2 py-1 text-xs font-medium text-yellow-800 shadow-sm transition-all duration-300 hover:scale-105 hover:shadow-md dark:border-purple-500/30 dark:bg-purple-500/10 dark:text-purple-300 sm:px-3 sm:py-1.5 sm:text-sm">
                            {skill}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
