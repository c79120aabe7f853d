pub struct Site {
    pub owner: &'static str,
    pub tagline: &'static str,
    pub cv_href: &'static str,
    pub portrait_src: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub const SITE: Site = Site {
    owner: "Drashti Thakkar",
    tagline: "Available for opportunities",
    cv_href: "/cv.pdf",
    portrait_src: "/profile-image.jpeg",
    email: "drashku99@gmail.com",
    location: "India",
};

pub struct HeroCopy {
    pub title_lines: &'static [&'static str],
    pub caption_lead: &'static str,
    pub caption_emphasis: &'static str,
    pub caption_tail: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    title_lines: &["Operations", "& Data", "Professional"],
    caption_lead: "Bringing ",
    caption_emphasis: "structure to data, clarity to workflows, and reliability",
    caption_tail: " to every moving part behind the scenes",
};

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/drashti-thakkar-4bb2091ab",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/919773480416",
    },
    SocialLink {
        label: "Email",
        href: "https://mail.google.com/mail/?view=cm&fs=1&to=drashku99@gmail.com",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Welcome and thank you for taking the time to explore my work. With several years of experience across international operations and data-driven environments, I bring a structured, execution-focused approach to every engagement. I have supported teams across the UK, Australia, and New Zealand by managing operational data, enterprise CRM systems, reporting workflows, and cross-functional coordination that ensures efficiency and continuity.",
    "From translating complex site and geospatial data into actionable insight to facilitating stakeholder alignment and communication, I prioritise accuracy, accountability, and outcomes clients can depend on. My background in analytics and operations enables me to look beyond task completion focusing on context, process improvement, and informed decision-making.",
    "Adaptability and continuous learning underpin how I work. I have consistently stepped into unfamiliar domains, acquired new tools and knowledge quickly, and delivered independently a discipline I bring into every client relationship. Clients can expect professionalism, transparency, and collaboration, with a focus on measurable value and long-term impact. If you’re seeking a reliable, thoughtful, and results-driven professional, I would welcome the opportunity to connect.",
];

pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub bullets: &'static [&'static str],
}

impl Experience {
    pub fn key(&self) -> String {
        format!("{}-{}", self.company, self.role)
    }

    pub fn has_details(&self) -> bool {
        !self.bullets.is_empty()
    }
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "04/2025 — Present",
        role: "Customer Data Analyst",
        company: "Ipath Solutions",
        bullets: &[
            "Managed end-to-end site data analysis for a UK-based snow maintenance and gritting operations client.",
            "Conducted detailed site mapping and spatial analysis using Google Earth to support commercial quoting and operational planning.",
            "Created and delivered high-accuracy KMZ files, site layouts, and measurement reports used for customer proposals and cost estimation.",
            "Translated raw geospatial and site data into actionable insights for internal sales and operations teams.",
            "Maintained and updated CRM systems including Monday.com and IGLU to ensure accurate client, site, and contract records.",
            "Owned daily operational and data reporting to support management decision-making.",
            "Acted as a central data liaison between multiple UK managers, coordinating requests, priorities, and deliverables.",
            "Ensured data consistency, quality control, and timely updates across systems and reports.",
            "Supported cross-functional teams by streamlining data workflows and improving visibility of site-level information.",
        ],
    },
    Experience {
        period: "06/2023 — 04/2025",
        role: "Customer Support Associate",
        company: "Ipath Solutions",
        bullets: &[
            "Served as the sole Contract Support Administrator for a UK-based building management company, working closely with the Managing Director and General Manager.",
            "Managed end-to-end mechanical and electrical maintenance operations across 10-15 properties in South London, Oxford, and Glasgow.",
            "Coordinated engineers, subcontractors, suppliers, and clients, ensuring smooth day-to-day operations and timely service delivery.",
            "Handled quotations, tenders, purchase orders, purchase invoices, and supported credit control activities.",
            "Managed direct communication with clients and their stakeholders, including service updates and issue resolution.",
            "Created and maintained PPM calendars, Gantt charts, and engineer reports.",
            "Maintained and updated the Digitize FM CRM, ensuring accurate records and workflow tracking.",
            "Took ownership of the role despite the field being new, adapting quickly and managing responsibilities independently.",
        ],
    },
    Experience {
        period: "05/2023 — 06/2023",
        role: "Member Support",
        company: "Etech Global Services",
        bullets: &[],
    },
    Experience {
        period: "11/2020 — 11/2022",
        role: "Social Media Coordinator",
        company: "Aussiz Group",
        bullets: &[
            "Worked on coordination and communication processes across 16 branches in Australia through various social media platforms, supporting teams during a period of process change.",
            "Learned and adapted to new workflows quickly to ensure day-to-day activities continued smoothly.",
            "Handled regular coordination between Migration Agents (MARA), education consultants, and prospective visa applicants using the company CRM and Napoleon.com.",
            "Provided basic guidance on Australian visa requirements, including PTE and IELTS, and connected visa enthusiasts with the appropriate MARA or education consultant.",
            "Managed calendars, follow-ups, and internal handovers to help teams stay aligned and responsive.",
            "Helped maintain clear communication across teams and consistent engagement with applicants across locations.",
        ],
    },
    Experience {
        period: "05/2019 — 10/2020",
        role: "Executive Assistant",
        company: "Vodafone Shared Services",
        bullets: &[
            "Managed high-volume inbound customer interactions for prepaid and postpaid SIM services within the New Zealand market, maintaining consistent service quality and resolution standards.",
            "Handled both prepaid and postpaid service domains concurrently, supporting a broader operational scope than standard role allocations.",
            "Utilised Siebel CRM to document customer interactions, track service requests, and ensure continuity across cases.",
            "Worked with Genesys-based softphone systems to manage inbound call workflows efficiently and professionally.",
            "Used Excel for basic tracking, data updates, and reporting to support day-to-day operational requirements.",
            "Adapted quickly to changing workflows, including handling chat-based customer interactions during periods of increased operational demand.",
        ],
    },
];

pub struct Skill {
    pub label: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { label: "CRM Proficiency", percent: 95 },
    Skill { label: "Operations Management", percent: 92 },
    Skill { label: "International Client Handling", percent: 90 },
    Skill { label: "Contract Management", percent: 88 },
    Skill { label: "Facilities Management", percent: 85 },
    Skill { label: "Procurement", percent: 90 },
    Skill { label: "GIS System Mapping", percent: 82 },
    Skill { label: "Active Engagement", percent: 92 },
    Skill { label: "Multichannel Support", percent: 88 },
    Skill { label: "Accountability & Adaptability", percent: 95 },
];

pub const TOOLS: &[&str] = &[
    "Monday.com",
    "IGLU CRM",
    "Digitize FM",
    "Siebel CRM",
    "Google Earth / What3Words",
    "MS office/MIS Executive",
    "Genesys",
    "Napoleon.com",
    "Gantt Charts",
    "KMZ / KML GIS Tools",
    "PPM / Reactive & Quoted Works Management",
    "Data Reporting",
    "Invoicing & Credit Control",
    "Subcontractors & Supplier Management",
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub year: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Business Administration in Business Analytics (MBA in Business Analytics)",
        school: "DY Patil University",
        year: "Completed",
        detail: "Advanced studies in business strategy, organizational management, leadership, and data-driven decision-making for global operations.",
    },
    Education {
        degree: "Bachelor of Business Administration in Finance & General (BBA in Finance & General)",
        school: "Gujarat University",
        year: "Completed",
        detail: "Foundation in business fundamentals, management principles, marketing, finance, and organizational behaviour.",
    },
];

pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "Hindi", level: "Fluent" },
    Language { name: "English", level: "Fluent" },
    Language { name: "Gujarati", level: "Native" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "You have been an absolute pleasure to work with and I am very sad to see you go. It has been amazing to watch you grow in knowledge and as a person. I appreciate the patience you showed and I know you’ll succeed in anything you pursue.",
        name: "Managing Director",
        title: "UK Facilities Management Sector",
    },
    Testimonial {
        quote: "Thank you for your hard work in what can be a messy and chaotic industry. Your support has been invaluable and greatly appreciated. I wish you the very best for the future — I’m sure you’ll do extremely well.",
        name: "Clark — Senior Operations Manager",
        title: "UK Facilities Management Sector",
    },
    Testimonial {
        quote: "Great to have worked with you. You supported the team brilliantly and turned urgent mapping work around quickly and professionally. Thanks for everything!",
        name: "Craig — Director of Operations",
        title: "UK Gritting & Snow Maintenance",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn experience_keys_are_unique() {
        let keys: HashSet<String> = EXPERIENCES.iter().map(Experience::key).collect();
        assert_eq!(keys.len(), EXPERIENCES.len());
    }

    #[test]
    fn only_entries_with_bullets_expand() {
        let inert: Vec<String> = EXPERIENCES
            .iter()
            .filter(|entry| !entry.has_details())
            .map(Experience::key)
            .collect();

        assert_eq!(inert, vec!["Etech Global Services-Member Support".to_string()]);
    }

    #[test]
    fn skill_percentages_fit_the_meter() {
        assert!(SKILLS.iter().all(|skill| skill.percent <= 100));
    }

    #[test]
    fn hero_caption_reads_as_one_sentence() {
        let caption = format!(
            "{}{}{}",
            HERO.caption_lead, HERO.caption_emphasis, HERO.caption_tail
        );

        assert_eq!(HERO.title_lines.len(), 3);
        assert_eq!(
            caption,
            "Bringing structure to data, clarity to workflows, and reliability to every moving part behind the scenes"
        );
    }

    #[test]
    fn testimonial_avatar_uses_first_letter() {
        let initials: String = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "MCC");
    }
}
