pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email Us",
        value: super::SITE_EMAIL,
        description: "We respond within 24 hours",
    },
    ContactInfo {
        title: "Call Us",
        value: super::SITE_PHONE,
        description: "Mon-Fri, 9am-6pm PST",
    },
    ContactInfo {
        title: "Visit Us",
        value: "San Francisco, CA",
        description: "By appointment only",
    },
    ContactInfo {
        title: "Response Time",
        value: "< 24 Hours",
        description: "Average response time",
    },
];
