//! Static content for the landing page: names, roles, skills, links and badges.

pub const OWNER_FIRST: &str = "Abraham";
pub const OWNER_LAST: &str = "Guimbao";
pub const SITE_NAME: &str = "aguimbao.me";

pub const CALENDAR_URL: &str = "https://calendar.google.com/calendar/appointments/schedules/AcZssZ14mGOqXTtYVDzQ6r4tco-wtsowz-4rPJMTnFneYtdHjXoRmQhGRo0XJjInnFjGRi8VFOAhJxjO?gv=true";
pub const CALENDAR_SANDBOX: &str = "allow-scripts allow-forms allow-popups allow-same-origin";

pub const ROLES: [&str; 15] = [
    "Site Reliability Engineer",
    "Infrastructure Engineer",
    "Platform Engineer",
    "Full-Stack Engineer",
    "Back-End Engineer",
    "Network Engineer",
    "DevOps Engineer",
    "DevSecOps Engineer",
    "LLMOps Engineer",
    "Systems Engineer",
    "Cloud Engineer",
    "Automation Engineer",
    "AI Engineer",
    "Web3 Engineer",
    "GameDev Engineer",
];

pub const SKILLS: [&str; 12] = [
    "Infrastructure",
    "Full-Stack",
    "Back-End",
    "Networking",
    "DevOps",
    "Systems",
    "Cloud",
    "Automation",
    "AI",
    "Web3",
    "GameDev",
    "Cybersec",
];

/// Every word of a role except the trailing one, which the page renders in a fixed slot.
pub fn specialization(role: &str) -> &str {
    role.trim()
        .rsplit_once(' ')
        .map(|(head, _)| head)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LinkedIn,
    GitHub,
    Resume,
    Calendar,
    Mail,
}

impl Icon {
    /// Icon font class.
    pub fn class(self) -> &'static str {
        match self {
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::GitHub => "devicon-github-plain",
            Icon::Resume => "extra-file",
            Icon::Calendar => "extra-calendar",
            Icon::Mail => "extra-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Same-site route, handled by the router.
    Navigate(&'static str),
    /// Opened in a new browsing context.
    OpenExternal(&'static str),
    /// Opens the scheduling modal instead of leaving the page.
    OpenScheduler,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub popup: bool,
}

impl SocialLink {
    pub fn action(&self) -> LinkAction {
        if self.popup {
            LinkAction::OpenScheduler
        } else if self.href.starts_with('/') {
            LinkAction::Navigate(self.href)
        } else {
            LinkAction::OpenExternal(self.href)
        }
    }
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/abraham-guimbao",
        icon: Icon::LinkedIn,
        popup: false,
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/aguimbao",
        icon: Icon::GitHub,
        popup: false,
    },
    SocialLink {
        name: "Resume",
        href: "https://storage.rxresu.me/clpopswdi025g84ec1rapzplq/resumes/abraham-guimbao.pdf",
        icon: Icon::Resume,
        popup: false,
    },
    SocialLink {
        name: "Schedule Meeting",
        href: CALENDAR_URL,
        icon: Icon::Calendar,
        popup: true,
    },
    SocialLink {
        name: "Email",
        href: "mailto:abraham@aguimbao.me",
        icon: Icon::Mail,
        popup: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Orange,
    Gray,
}

impl Tone {
    pub fn classes(self) -> &'static str {
        match self {
            Tone::Green => "border-green-600/40 bg-green-600/20 text-green-600 dark:border-green-500/30 dark:bg-green-500/10 dark:text-green-400",
            Tone::Blue => "border-blue-600/40 bg-blue-600/20 text-blue-600 dark:border-blue-500/30 dark:bg-blue-500/10 dark:text-blue-400",
            Tone::Orange => "border-orange-600/40 bg-orange-600/20 text-orange-600 dark:border-orange-500/30 dark:bg-orange-500/10 dark:text-orange-400",
            Tone::Gray => "border-gray-400/50 bg-gray-200/60 text-gray-700 dark:border-gray-400/30 dark:bg-gray-200/20 dark:text-gray-300",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub glyph: Option<&'static str>,
    pub label: &'static str,
    /// Shown instead of `label` on the narrowest screens.
    pub short_label: Option<&'static str>,
    pub tone: Tone,
}

pub const BADGES: [Badge; 4] = [
    Badge {
        glyph: Some("✓"),
        label: "Open To Work",
        short_label: Some("Available"),
        tone: Tone::Green,
    },
    Badge {
        glyph: Some("📍"),
        label: "Remote",
        short_label: None,
        tone: Tone::Blue,
    },
    Badge {
        glyph: Some("💼"),
        label: "Freelance - B2B",
        short_label: None,
        tone: Tone::Orange,
    },
    Badge {
        glyph: None,
        label: "🇬🇧 🇪🇸 🇫🇷",
        short_label: None,
        tone: Tone::Gray,
    },
];

/// Visibility of the scheduling dialog. The scheduler link opens it and the
/// dialog's close button is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

pub struct Credit {
    pub name: &'static str,
    pub href: &'static str,
    pub suffix: &'static str,
}

pub const SCHOOL: Credit = Credit {
    name: "42 Paris",
    href: "https://42.fr",
    suffix: "Graduate",
};

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_specialization_drops_last_word() {
        assert_eq!(specialization("Site Reliability Engineer"), "Site Reliability");
        assert_eq!(specialization("AI Engineer"), "AI");
        assert_eq!(specialization("Engineer"), "");
        assert_eq!(specialization(""), "");
    }

    #[test]
    fn test_every_role_ends_with_engineer() {
        for role in ROLES {
            assert!(role.ends_with(" Engineer"), "{role}");
            assert!(!specialization(role).is_empty());
        }
    }

    #[test]
    fn test_only_schedule_meeting_opens_scheduler() {
        let schedulers = SOCIAL_LINKS
            .iter()
            .filter(|l| l.action() == LinkAction::OpenScheduler)
            .map(|l| l.name)
            .collect::<Vec<_>>();
        assert_eq!(schedulers, vec!["Schedule Meeting"]);
    }

    #[test]
    fn test_link_classification() {
        let internal = SocialLink {
            name: "CV",
            href: "/cv",
            icon: Icon::Resume,
            popup: false,
        };
        assert_eq!(internal.action(), LinkAction::Navigate("/cv"));

        let github = &SOCIAL_LINKS[1];
        assert_eq!(
            github.action(),
            LinkAction::OpenExternal("https://github.com/aguimbao")
        );

        let email = &SOCIAL_LINKS[4];
        assert!(matches!(email.action(), LinkAction::OpenExternal(h) if h.starts_with("mailto:")));
    }

    #[test]
    fn test_modal_starts_closed() {
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn test_modal_moves_only_through_open_and_close() {
        let owner = Owner::new();
        owner.with(|| {
            let modal = RwSignal::new(ModalState::default());
            let theme = RwSignal::new(Theme::Light);

            modal.update(ModalState::open);
            assert!(modal.get_untracked().is_open());

            // opening again is idempotent
            modal.update(ModalState::open);
            assert!(modal.get_untracked().is_open());

            theme.update(|t| *t = t.toggled());
            theme.update(|t| *t = t.toggled());
            assert!(modal.get_untracked().is_open());

            modal.update(ModalState::close);
            assert!(!modal.get_untracked().is_open());

            theme.update(|t| *t = t.toggled());
            assert!(!modal.get_untracked().is_open());
            assert_eq!(theme.get_untracked(), Theme::Dark);
        });
    }
}
