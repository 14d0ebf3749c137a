pub struct Feature {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        label: "01",
        title: "AI Chatbots & Agents",
        description: "Deploy intelligent conversational agents that handle customer inquiries, qualify leads, and support your team 24/7.",
    },
    Feature {
        label: "02",
        title: "Workflow Automation",
        description: "Eliminate manual processes with smart automation pipelines that connect your tools and scale your operations.",
    },
    Feature {
        label: "03",
        title: "Predictive Analytics",
        description: "Transform raw data into actionable insights with AI-powered analytics dashboards and forecasting models.",
    },
    Feature {
        label: "04",
        title: "Custom AI Solutions",
        description: "Bespoke AI models trained on your data to solve unique challenges and unlock competitive advantages.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "150+", label: "Projects Delivered" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "40%", label: "Avg. Cost Reduction" },
    Stat { value: "3.5x", label: "ROI for Clients" },
];

pub const TRUSTED_BY: &[&str] = &[
    "TechForge",
    "DataPulse",
    "NovaStar",
    "Synthetix",
    "CloudBase",
    "Quantum AI",
];
