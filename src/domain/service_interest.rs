/// The offering a visitor is asking about, or `Unsure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceInterest {
    Chatbots,
    Workflow,
    Analytics,
    CustomAi,
    DataPipelines,
    Content,
    Unsure,
}

impl ServiceInterest {
    /// Select control order.
    pub const ALL: [ServiceInterest; 7] = [
        ServiceInterest::Chatbots,
        ServiceInterest::Workflow,
        ServiceInterest::Analytics,
        ServiceInterest::CustomAi,
        ServiceInterest::DataPipelines,
        ServiceInterest::Content,
        ServiceInterest::Unsure,
    ];

    pub fn parse(s: &str) -> Result<ServiceInterest, String> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| {
                if s.is_empty() {
                    "Please choose the service you are interested in.".to_string()
                } else {
                    format!("`{s}` is not a service we offer.")
                }
            })
    }

    /// Wire value, sent to the webhook as `service`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceInterest::Chatbots => "chatbots",
            ServiceInterest::Workflow => "workflow",
            ServiceInterest::Analytics => "analytics",
            ServiceInterest::CustomAi => "custom-ai",
            ServiceInterest::DataPipelines => "data-pipelines",
            ServiceInterest::Content => "content",
            ServiceInterest::Unsure => "unsure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceInterest::Chatbots => "AI Chatbots & Virtual Assistants",
            ServiceInterest::Workflow => "Workflow Automation",
            ServiceInterest::Analytics => "Predictive Analytics & BI",
            ServiceInterest::CustomAi => "Custom AI Model Development",
            ServiceInterest::DataPipelines => "Data Pipeline Engineering",
            ServiceInterest::Content => "AI-Powered Content Generation",
            ServiceInterest::Unsure => "Not sure yet",
        }
    }
}
