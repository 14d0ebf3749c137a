pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        title: "Results-Obsessed",
        description: "We measure our success by your outcomes. Every solution is built to deliver measurable, meaningful business impact.",
    },
    Value {
        title: "Client-First",
        description: "Your goals drive everything we do. We build deep partnerships, not transactional vendor relationships.",
    },
    Value {
        title: "Innovation-Led",
        description: "We stay at the cutting edge of AI research and apply the latest breakthroughs to solve real business problems.",
    },
    Value {
        title: "Transparent & Honest",
        description: "No black boxes. We explain how our AI works, set realistic expectations, and deliver on our promises.",
    },
    Value {
        title: "Agile Delivery",
        description: "Fast iteration with continuous feedback loops. We ship early, test often, and optimize relentlessly.",
    },
    Value {
        title: "Trust & Security",
        description: "Enterprise-grade security from day one. SOC 2 compliance, data encryption, and privacy-first design.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub initials: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Chen",
        role: "CEO & Co-Founder",
        bio: "Former ML lead at Google. Stanford PhD in AI. 15+ years building intelligent systems at scale.",
        initials: "AC",
    },
    TeamMember {
        name: "Sarah Kim",
        role: "CTO & Co-Founder",
        bio: "Ex-Amazon principal engineer. Expert in distributed systems and cloud-native AI infrastructure.",
        initials: "SK",
    },
    TeamMember {
        name: "Marcus Reed",
        role: "Head of AI",
        bio: "Published researcher in NLP and reinforcement learning. Led AI teams at DeepMind and OpenAI.",
        initials: "MR",
    },
    TeamMember {
        name: "Priya Sharma",
        role: "Head of Engineering",
        bio: "Full-stack engineering leader with 12+ years at startups and enterprises. Passionate about clean architecture.",
        initials: "PS",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2022",
        title: "Founded",
        description: "BoldFlow Labs launched with a mission to democratize AI automation for businesses of all sizes.",
    },
    Milestone {
        year: "2023",
        title: "First 50 Clients",
        description: "Reached 50 active clients across fintech, healthcare, and e-commerce verticals.",
    },
    Milestone {
        year: "2024",
        title: "Series A Funding",
        description: "Secured $12M in Series A funding to scale our platform and expand the team to 40+.",
    },
    Milestone {
        year: "2025",
        title: "150+ Projects",
        description: "Surpassed 150 delivered projects with a 98% client satisfaction rate.",
    },
];

pub const ABOUT_STATS: &[super::Stat] = &[
    super::Stat { value: "150+", label: "Projects Delivered" },
    super::Stat { value: "98%", label: "Satisfaction Rate" },
    super::Stat { value: "40+", label: "Team Members" },
    super::Stat { value: "$50M+", label: "Client Revenue Generated" },
];
