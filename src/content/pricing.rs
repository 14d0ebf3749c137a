use crate::util::thousands;

/// Pricing page toggle; anything unrecognised is monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn parse(s: Option<&str>) -> BillingCycle {
        match s {
            Some("yearly") => BillingCycle::Yearly,
            _ => BillingCycle::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    /// per month, billed monthly; `None` is a custom quote
    pub monthly: Option<u32>,
    /// per month, billed yearly
    pub yearly: Option<u32>,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> Option<u32> {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }

    /// `$2,499` style, or `Custom`.
    pub fn price_label(&self, cycle: BillingCycle) -> String {
        match self.price(cycle) {
            Some(amount) => format!("${}", thousands(amount)),
            None => "Custom".into(),
        }
    }

    pub fn call_to_action(&self) -> &'static str {
        if self.monthly.is_some() {
            "Get Started"
        } else {
            "Contact Sales"
        }
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Perfect for small teams exploring AI automation",
        monthly: Some(2499),
        yearly: Some(1999),
        features: &[
            "1 AI automation workflow",
            "Up to 5,000 monthly operations",
            "Email support (48h response)",
            "Basic analytics dashboard",
            "Standard integrations (5+)",
            "Monthly performance reports",
        ],
        popular: false,
    },
    Plan {
        name: "Growth",
        description: "For scaling businesses that need serious automation power",
        monthly: Some(5999),
        yearly: Some(4999),
        features: &[
            "5 AI automation workflows",
            "Up to 50,000 monthly operations",
            "Priority support (4h response)",
            "Advanced analytics & forecasting",
            "Custom integrations (20+)",
            "Weekly performance reports",
            "Dedicated success manager",
            "Custom AI model fine-tuning",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        description: "For organizations with complex AI needs at scale",
        monthly: None,
        yearly: None,
        features: &[
            "Unlimited AI workflows",
            "Unlimited monthly operations",
            "24/7 dedicated support",
            "Custom AI model development",
            "Full enterprise integration suite",
            "Real-time performance dashboards",
            "Dedicated engineering team",
            "SLA guarantees (99.99%)",
            "On-premise deployment option",
            "Executive strategy reviews",
        ],
        popular: false,
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long does it take to get started?",
        answer: "Most projects begin with a 1-2 week discovery phase, followed by a 4-8 week implementation period. Simple automation workflows can be deployed in as little as 2 weeks.",
    },
    Faq {
        question: "Can I switch plans later?",
        answer: "You can upgrade or downgrade your plan at any time. Changes take effect at the start of your next billing cycle, and we'll prorate any differences.",
    },
    Faq {
        question: "What kind of support do you offer?",
        answer: "All plans include technical support. Starter gets email support, Growth includes priority support with a dedicated success manager, and Enterprise gets 24/7 dedicated support with SLA guarantees.",
    },
    Faq {
        question: "Do you offer a free trial or POC?",
        answer: "We offer a free 30-minute strategy call and can build a proof-of-concept for qualified prospects. This lets you see the value of our solutions before committing.",
    },
    Faq {
        question: "What integrations do you support?",
        answer: "We integrate with 500+ business tools including Salesforce, HubSpot, Slack, Google Workspace, AWS, Azure, and more. Custom integrations are available for Growth and Enterprise plans.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Absolutely. We maintain SOC 2 compliance, use end-to-end encryption, and follow strict data governance protocols. Enterprise clients can opt for on-premise deployment.",
    },
];
