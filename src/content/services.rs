use crate::domain::ServiceInterest;

pub struct Service {
    pub interest: ServiceInterest,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl Service {
    pub fn title(&self) -> &'static str {
        self.interest.label()
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        interest: ServiceInterest::Chatbots,
        description: "Deploy intelligent conversational AI agents across your customer touchpoints. Our chatbots handle complex queries, qualify leads, and provide 24/7 support with human-like understanding.",
        features: &[
            "Multi-channel deployment (web, SMS, WhatsApp)",
            "Natural language understanding & context retention",
            "Seamless human handoff protocols",
            "Custom knowledge base integration",
        ],
    },
    Service {
        interest: ServiceInterest::Workflow,
        description: "Eliminate repetitive tasks and streamline complex business processes with intelligent automation pipelines that connect all your tools and systems.",
        features: &[
            "End-to-end process automation",
            "Integration with 500+ business tools",
            "Custom trigger & action workflows",
            "Error handling & automatic retries",
        ],
    },
    Service {
        interest: ServiceInterest::Analytics,
        description: "Transform raw data into strategic decisions. Our AI analytics platforms provide real-time insights, trend forecasting, and automated reporting dashboards.",
        features: &[
            "Real-time data visualization dashboards",
            "ML-powered trend forecasting",
            "Anomaly detection & alerting",
            "Custom KPI tracking & reporting",
        ],
    },
    Service {
        interest: ServiceInterest::CustomAi,
        description: "Purpose-built AI models trained on your proprietary data, designed to solve your unique business challenges and deliver competitive advantage.",
        features: &[
            "Fine-tuned LLMs for your domain",
            "Computer vision solutions",
            "NLP & text classification",
            "Recommendation engines",
        ],
    },
    Service {
        interest: ServiceInterest::DataPipelines,
        description: "Build robust, scalable data infrastructure that feeds your AI systems. From ETL pipelines to real-time streaming architecture, we handle the plumbing.",
        features: &[
            "ETL/ELT pipeline design",
            "Real-time data streaming",
            "Data warehouse optimization",
            "Cloud-native architecture",
        ],
    },
    Service {
        interest: ServiceInterest::Content,
        description: "Automate content creation at scale. From marketing copy to product descriptions, our AI systems generate high-quality, brand-aligned content.",
        features: &[
            "Blog & article generation",
            "Product description automation",
            "Social media content at scale",
            "Brand voice customization",
        ],
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery & Strategy",
        description: "We dive deep into your operations to identify high-impact automation opportunities and build a custom roadmap.",
    },
    ProcessStep {
        step: "02",
        title: "Design & Prototype",
        description: "Our team designs the solution architecture and builds a working prototype for your review and feedback.",
    },
    ProcessStep {
        step: "03",
        title: "Build & Integrate",
        description: "We develop, test, and integrate the solution into your existing tech stack with minimal disruption.",
    },
    ProcessStep {
        step: "04",
        title: "Launch & Optimize",
        description: "Go live with full monitoring, then continuously optimize performance based on real-world data.",
    },
];
