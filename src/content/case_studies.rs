/// Filter tabs on the case studies page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Chatbots,
    Automation,
    Analytics,
    CustomAi,
}

impl Category {
    pub const TABS: [Category; 5] = [
        Category::All,
        Category::Chatbots,
        Category::Automation,
        Category::Analytics,
        Category::CustomAi,
    ];

    /// Unknown or missing categories fall back to `All`.
    pub fn parse(s: Option<&str>) -> Category {
        s.and_then(|s| Self::TABS.into_iter().find(|c| c.slug() == s))
            .unwrap_or_default()
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Chatbots => "chatbots",
            Category::Automation => "automation",
            Category::Analytics => "analytics",
            Category::CustomAi => "custom-ai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Chatbots => "Chatbots",
            Category::Automation => "Automation",
            Category::Analytics => "Analytics",
            Category::CustomAi => "Custom AI",
        }
    }

    /// Studies in this category, in page order.
    pub fn filter(&self, studies: &'static [CaseStudy]) -> Vec<&'static CaseStudy> {
        studies
            .iter()
            .filter(|study| *self == Category::All || study.category == *self)
            .collect()
    }
}

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct CaseStudy {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub metrics: &'static [Metric],
    pub tags: &'static [&'static str],
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "AI Customer Support for E-Commerce Giant",
        category: Category::Chatbots,
        description: "Built an AI-powered support system that handles 80% of customer inquiries autonomously, reducing response time from hours to seconds.",
        metrics: &[
            Metric { label: "Response Time", value: "-95%" },
            Metric { label: "Support Costs", value: "-60%" },
            Metric { label: "CSAT Score", value: "+35%" },
        ],
        tags: &["NLP", "Multi-channel", "E-commerce"],
    },
    CaseStudy {
        title: "Predictive Inventory Management System",
        category: Category::Analytics,
        description: "Deployed ML models that forecast demand with 94% accuracy, reducing overstock waste by 40% and preventing stockouts.",
        metrics: &[
            Metric { label: "Forecast Accuracy", value: "94%" },
            Metric { label: "Waste Reduction", value: "-40%" },
            Metric { label: "Revenue Impact", value: "+$2.1M" },
        ],
        tags: &["Machine Learning", "Supply Chain", "Retail"],
    },
    CaseStudy {
        title: "Automated Lead Qualification Pipeline",
        category: Category::Automation,
        description: "Designed an AI-driven lead scoring and qualification system that increased sales team efficiency by 240% and conversion rates by 67%.",
        metrics: &[
            Metric { label: "Efficiency", value: "+240%" },
            Metric { label: "Conversion Rate", value: "+67%" },
            Metric { label: "Sales Cycle", value: "-30%" },
        ],
        tags: &["Lead Scoring", "CRM Integration", "B2B"],
    },
    CaseStudy {
        title: "Custom Fraud Detection Engine",
        category: Category::CustomAi,
        description: "Built a real-time fraud detection system for a fintech company that catches 99.7% of fraudulent transactions while maintaining low false positive rates.",
        metrics: &[
            Metric { label: "Detection Rate", value: "99.7%" },
            Metric { label: "False Positives", value: "-85%" },
            Metric { label: "Annual Savings", value: "$2.5M" },
        ],
        tags: &["Deep Learning", "Real-time", "Fintech"],
    },
    CaseStudy {
        title: "Intelligent Document Processing",
        category: Category::Automation,
        description: "Automated extraction and classification of data from 50,000+ documents monthly, replacing manual data entry with 98% accuracy.",
        metrics: &[
            Metric { label: "Processing Speed", value: "10x" },
            Metric { label: "Accuracy", value: "98%" },
            Metric { label: "Hours Saved", value: "200/mo" },
        ],
        tags: &["OCR", "NLP", "Healthcare"],
    },
    CaseStudy {
        title: "AI-Powered Recommendation Engine",
        category: Category::CustomAi,
        description: "Developed a personalization engine that increased average order value by 45% and customer engagement by 3.2x for a major retailer.",
        metrics: &[
            Metric { label: "Avg Order Value", value: "+45%" },
            Metric { label: "Engagement", value: "3.2x" },
            Metric { label: "Revenue Lift", value: "+$4.8M" },
        ],
        tags: &["Recommendation", "Personalization", "Retail"],
    },
];
