// Curated career-field table. Order here is the display order.

use super::models::{
    CareerField, ExperienceLevel, FieldIcon, GrowthOutlook, JobRole, SalaryRange, SkillCategory,
    Trend,
};

fn role(title: &'static str, description: &'static str, level: ExperienceLevel) -> JobRole {
    JobRole {
        title,
        description,
        experience_level: level,
    }
}

pub(super) fn builtin_fields() -> Vec<CareerField> {
    use ExperienceLevel::{Entry, Mid, Senior};

    vec![
        CareerField {
            id: "information-technology",
            name: "Information Technology",
            icon: FieldIcon::Code,
            short_description: "Build and maintain digital solutions that power modern business",
            description: "Information Technology encompasses software development, system \
                administration, cybersecurity, and technical support roles. IT professionals \
                design, develop, and maintain technology systems that enable businesses to \
                operate efficiently.",
            job_roles: vec![
                role(
                    "Software Developer",
                    "Design and build applications, websites, and software systems",
                    Entry,
                ),
                role(
                    "DevOps Engineer",
                    "Automate deployment processes and maintain infrastructure",
                    Mid,
                ),
                role(
                    "Solutions Architect",
                    "Design comprehensive technical solutions for complex business problems",
                    Senior,
                ),
                role(
                    "Cybersecurity Analyst",
                    "Protect systems and data from security threats",
                    Mid,
                ),
                role(
                    "Data Engineer",
                    "Build and maintain data pipelines and infrastructure",
                    Mid,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "Programming (Python, Java, JavaScript)",
                    "Cloud Platforms (AWS, Azure)",
                    "Database Management",
                    "Version Control (Git)",
                    "System Architecture",
                ],
                soft: vec![
                    "Problem Solving",
                    "Analytical Thinking",
                    "Collaboration",
                    "Continuous Learning",
                    "Communication",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$55,000 - $75,000",
                mid: "$85,000 - $120,000",
                senior: "$130,000 - $180,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Growing,
                percentage: "25%",
                description:
                    "Strong growth expected due to digital transformation across all industries",
            },
        },
        CareerField {
            id: "healthcare",
            name: "Healthcare",
            icon: FieldIcon::Heart,
            short_description: "Care for patients and improve public health outcomes",
            description: "Healthcare professionals diagnose, treat, and prevent illness while \
                promoting wellness. This field includes clinical roles, research positions, and \
                administrative healthcare management.",
            job_roles: vec![
                role(
                    "Registered Nurse",
                    "Provide patient care and coordinate treatment plans",
                    Entry,
                ),
                role(
                    "Physician Assistant",
                    "Diagnose illnesses and develop treatment plans under physician supervision",
                    Mid,
                ),
                role(
                    "Healthcare Administrator",
                    "Manage healthcare facilities and coordinate medical services",
                    Senior,
                ),
                role(
                    "Medical Lab Technician",
                    "Conduct laboratory tests and analyze results",
                    Entry,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "Clinical Knowledge",
                    "Medical Technology",
                    "Electronic Health Records",
                    "Diagnostic Procedures",
                    "Patient Care Protocols",
                ],
                soft: vec![
                    "Empathy",
                    "Communication",
                    "Critical Thinking",
                    "Stress Management",
                    "Attention to Detail",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$45,000 - $65,000",
                mid: "$75,000 - $95,000",
                senior: "$110,000 - $150,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Growing,
                percentage: "16%",
                description: "Aging population and healthcare expansion driving sustained demand",
            },
        },
        CareerField {
            id: "finance",
            name: "Finance & Banking",
            icon: FieldIcon::TrendingUp,
            short_description: "Manage financial resources and drive business growth",
            description: "Finance professionals analyze financial data, manage investments, and \
                provide strategic guidance for individuals and organizations. Roles range from \
                financial planning to investment banking.",
            job_roles: vec![
                role(
                    "Financial Analyst",
                    "Analyze financial data and provide investment recommendations",
                    Entry,
                ),
                role(
                    "Portfolio Manager",
                    "Manage investment portfolios and maximize returns",
                    Senior,
                ),
                role(
                    "Financial Planner",
                    "Help clients achieve financial goals through strategic planning",
                    Mid,
                ),
                role(
                    "Risk Analyst",
                    "Assess and mitigate financial risks for organizations",
                    Mid,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "Financial Modeling",
                    "Data Analysis",
                    "Excel & Analytics Tools",
                    "Accounting Principles",
                    "Regulatory Compliance",
                ],
                soft: vec![
                    "Analytical Thinking",
                    "Attention to Detail",
                    "Communication",
                    "Decision Making",
                    "Ethics",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$50,000 - $70,000",
                mid: "$80,000 - $110,000",
                senior: "$125,000 - $200,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Stable,
                percentage: "8%",
                description: "Steady demand with technology automation changing some roles",
            },
        },
        CareerField {
            id: "education",
            name: "Education",
            icon: FieldIcon::GraduationCap,
            short_description: "Shape minds and build the future through teaching",
            description: "Education professionals teach, mentor, and develop curriculum to help \
                students learn and grow. This includes K-12 teaching, higher education, and \
                educational administration.",
            job_roles: vec![
                role(
                    "Elementary Teacher",
                    "Teach fundamental subjects to young students",
                    Entry,
                ),
                role(
                    "Curriculum Specialist",
                    "Design and evaluate educational programs and materials",
                    Mid,
                ),
                role(
                    "School Principal",
                    "Lead school operations and manage educational staff",
                    Senior,
                ),
                role(
                    "Special Education Teacher",
                    "Adapt curriculum for students with diverse learning needs",
                    Entry,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "Curriculum Development",
                    "Educational Technology",
                    "Assessment Methods",
                    "Classroom Management",
                    "Learning Theories",
                ],
                soft: vec![
                    "Patience",
                    "Communication",
                    "Creativity",
                    "Adaptability",
                    "Leadership",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$40,000 - $55,000",
                mid: "$60,000 - $75,000",
                senior: "$85,000 - $110,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Stable,
                percentage: "5%",
                description: "Consistent demand with regional variations based on population",
            },
        },
        CareerField {
            id: "marketing",
            name: "Marketing & Communications",
            icon: FieldIcon::Megaphone,
            short_description: "Connect brands with audiences through strategic messaging",
            description: "Marketing professionals develop strategies to promote products and \
                services, build brand awareness, and engage customers through various channels \
                including digital, social, and traditional media.",
            job_roles: vec![
                role(
                    "Marketing Coordinator",
                    "Support marketing campaigns and manage promotional materials",
                    Entry,
                ),
                role(
                    "Digital Marketing Manager",
                    "Lead online marketing strategies and campaigns",
                    Mid,
                ),
                role(
                    "Brand Director",
                    "Develop and oversee brand strategy across all touchpoints",
                    Senior,
                ),
                role(
                    "Content Strategist",
                    "Plan and create engaging content for target audiences",
                    Mid,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "Digital Marketing Tools",
                    "Analytics & Metrics",
                    "SEO/SEM",
                    "Content Management Systems",
                    "Social Media Platforms",
                ],
                soft: vec![
                    "Creativity",
                    "Communication",
                    "Strategic Thinking",
                    "Collaboration",
                    "Adaptability",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$42,000 - $58,000",
                mid: "$65,000 - $85,000",
                senior: "$95,000 - $140,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Growing,
                percentage: "10%",
                description: "Digital transformation driving demand for marketing expertise",
            },
        },
        CareerField {
            id: "engineering",
            name: "Engineering",
            icon: FieldIcon::Cog,
            short_description: "Design and build solutions to technical challenges",
            description: "Engineers apply scientific and mathematical principles to design, \
                develop, and improve systems, structures, and products across various \
                disciplines including mechanical, electrical, and civil engineering.",
            job_roles: vec![
                role(
                    "Mechanical Engineer",
                    "Design mechanical systems and products",
                    Entry,
                ),
                role(
                    "Project Engineer",
                    "Manage engineering projects from concept to completion",
                    Mid,
                ),
                role(
                    "Chief Engineer",
                    "Lead engineering teams and oversee technical strategy",
                    Senior,
                ),
                role(
                    "Quality Assurance Engineer",
                    "Ensure products meet quality standards and specifications",
                    Entry,
                ),
            ],
            skills: SkillCategory {
                technical: vec![
                    "CAD Software",
                    "Engineering Principles",
                    "Project Management",
                    "Technical Analysis",
                    "Quality Control",
                ],
                soft: vec![
                    "Problem Solving",
                    "Attention to Detail",
                    "Teamwork",
                    "Innovation",
                    "Communication",
                ],
            },
            salary_ranges: SalaryRange {
                entry: "$60,000 - $75,000",
                mid: "$85,000 - $105,000",
                senior: "$120,000 - $160,000+",
            },
            growth_outlook: GrowthOutlook {
                trend: Trend::Stable,
                percentage: "7%",
                description: "Steady growth with specialization in renewable energy and automation",
            },
        },
    ]
}
