pub const SITE_NAME: &str = "BoldFlow Labs";
pub const SITE_EMAIL: &str = "hello@boldflowlabs.com";
pub const SITE_PHONE: &str = "+1 (555) 123-4567";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// `/` only matches itself; other links also match their sub-paths.
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/case-studies", label: "Case Studies" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/testimonials", label: "Testimonials" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/contact", label: "Contact" },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &[
            NavLink { href: "/about", label: "About Us" },
            NavLink { href: "/case-studies", label: "Case Studies" },
            NavLink { href: "/testimonials", label: "What to Expect" },
            NavLink { href: "/contact", label: "Contact" },
        ],
    },
    FooterColumn {
        title: "Services",
        links: &[
            NavLink { href: "/services", label: "AI Chatbots & Agents" },
            NavLink { href: "/services", label: "Workflow Automation" },
            NavLink { href: "/services", label: "Analytics & Insights" },
            NavLink { href: "/services", label: "Custom AI Models" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            NavLink { href: "/pricing", label: "Pricing" },
            NavLink { href: "/contact", label: "Book a Call" },
            NavLink { href: "/case-studies", label: "Portfolio" },
            NavLink { href: "/about", label: "Our Process" },
        ],
    },
];
