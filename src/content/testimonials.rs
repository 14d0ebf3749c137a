pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub metric: &'static str,
    pub featured: bool,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.into())
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "David Park",
        role: "CTO, TechForge Inc.",
        content: "BoldFlow Labs transformed our customer service operations. Their AI chatbot handles 80% of inquiries autonomously, and the quality of responses is remarkable.",
        rating: 5,
        metric: "+240% Efficiency",
        featured: true,
    },
    Testimonial {
        name: "Sarah Chen",
        role: "VP Operations, DataPulse",
        content: "The workflow automation solution reduced our manual data processing time by 35 hours per week. The ROI was visible within the first month.",
        rating: 5,
        metric: "35h/wk Saved",
        featured: false,
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "CEO, NovaStar Retail",
        content: "Their predictive analytics platform gave us a competitive edge. We can now forecast demand with 94% accuracy, reducing waste and maximizing revenue.",
        rating: 5,
        metric: "94% Accuracy",
        featured: false,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Director, Synthetix Health",
        content: "Working with BoldFlow was seamless from start to finish. They understood our complex requirements and delivered an AI solution that exceeded expectations.",
        rating: 5,
        metric: "3.5x ROI",
        featured: false,
    },
    Testimonial {
        name: "James Williams",
        role: "Head of Sales, CloudBase",
        content: "Our lead qualification process is now fully automated. The AI identifies high-value prospects with incredible precision, boosting our conversion rate by 67%.",
        rating: 5,
        metric: "+67% Conversion",
        featured: false,
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "COO, Quantum Finance",
        content: "The custom AI model BoldFlow built for fraud detection saves us millions annually. Their team's expertise in financial AI is unmatched.",
        rating: 5,
        metric: "$2.5M Saved/yr",
        featured: false,
    },
];

pub struct ResultFigure {
    pub value: &'static str,
    pub label: &'static str,
    /// percentage width of the bar under the figure
    pub bar_width: u8,
}

pub const RESULTS: &[ResultFigure] = &[
    ResultFigure { value: "40%", label: "Average Cost Reduction", bar_width: 85 },
    ResultFigure { value: "98%", label: "Client Satisfaction Rate", bar_width: 98 },
    ResultFigure { value: "3.5x", label: "Average Return on Investment", bar_width: 75 },
    ResultFigure { value: "2wk", label: "Average Time to Deployment", bar_width: 60 },
];
