//! Built-in job profile catalog

pub(crate) struct JobSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub required: &'static [&'static str],
    pub sector: &'static str,
}

pub(crate) const JOB_PROFILES: &[JobSeed] = &[
    JobSeed {
        id: "software_engineer",
        title: "Software Engineer",
        description: "Design, develop, and maintain software applications",
        required: &["programming", "algorithms", "git", "databases", "web_development"],
        sector: "technology",
    },
    JobSeed {
        id: "data_scientist",
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make better decisions",
        required: &["python", "statistics", "machine learning", "data visualization", "sql"],
        sector: "technology",
    },
    JobSeed {
        id: "machine_learning_engineer",
        title: "Machine Learning Engineer",
        description: "Design and deploy machine learning models at scale",
        required: &["python", "machine learning", "deep learning", "git", "cloud_platforms"],
        sector: "technology",
    },
    JobSeed {
        id: "web_developer",
        title: "Web Developer",
        description: "Build and maintain websites and web applications",
        required: &["html", "css", "javascript", "web_development", "databases"],
        sector: "technology",
    },
    JobSeed {
        id: "devops_engineer",
        title: "DevOps Engineer",
        description: "Automate and optimize software deployment and infrastructure",
        required: &["docker", "kubernetes", "ci/cd", "cloud_platforms", "git"],
        sector: "technology",
    },
    JobSeed {
        id: "registered_nurse",
        title: "Registered Nurse",
        description: "Provide patient care and support in healthcare settings",
        required: &["patient care", "medical terminology", "clinical skills", "cpr", "medication administration"],
        sector: "healthcare",
    },
    JobSeed {
        id: "physician",
        title: "Physician",
        description: "Diagnose and treat patients in medical practice",
        required: &["medical diagnosis", "anatomy", "patient care", "clinical skills", "medical terminology"],
        sector: "healthcare",
    },
    JobSeed {
        id: "pharmacist",
        title: "Pharmacist",
        description: "Dispense medications and provide pharmaceutical care",
        required: &["pharmacy", "drug interactions", "prescription", "medication administration", "patient care"],
        sector: "healthcare",
    },
    JobSeed {
        id: "physical_therapist",
        title: "Physical Therapist",
        description: "Help patients recover movement and manage pain",
        required: &["physical therapy", "rehabilitation", "patient assessment", "treatment planning", "anatomy"],
        sector: "healthcare",
    },
    JobSeed {
        id: "healthcare_administrator",
        title: "Healthcare Administrator",
        description: "Manage healthcare facilities and operations",
        required: &["leadership", "healthcare", "management", "budget management", "communication"],
        sector: "healthcare",
    },
    JobSeed {
        id: "financial_analyst",
        title: "Financial Analyst",
        description: "Analyze financial data and provide investment guidance",
        required: &["financial analysis", "excel", "financial modeling", "accounting", "budgeting"],
        sector: "finance",
    },
    JobSeed {
        id: "accountant",
        title: "Accountant",
        description: "Manage financial records and ensure compliance",
        required: &["accounting", "bookkeeping", "tax preparation", "financial reporting", "excel"],
        sector: "finance",
    },
    JobSeed {
        id: "investment_banker",
        title: "Investment Banker",
        description: "Help companies raise capital and execute financial transactions",
        required: &["financial analysis", "investment analysis", "valuation", "corporate finance", "excel"],
        sector: "finance",
    },
    JobSeed {
        id: "risk_analyst",
        title: "Risk Analyst",
        description: "Assess and manage financial and operational risks",
        required: &["risk management", "financial analysis", "statistics", "excel", "regulatory compliance"],
        sector: "finance",
    },
    JobSeed {
        id: "financial_advisor",
        title: "Financial Advisor",
        description: "Provide financial planning and investment advice to clients",
        required: &["financial analysis", "investment analysis", "communication", "sales", "customer service"],
        sector: "finance",
    },
    JobSeed {
        id: "teacher",
        title: "Teacher",
        description: "Educate students in various subjects and grade levels",
        required: &["teaching", "curriculum development", "classroom management", "communication", "lesson planning"],
        sector: "education",
    },
    JobSeed {
        id: "professor",
        title: "Professor",
        description: "Teach and conduct research at university level",
        required: &["teaching", "research", "academic writing", "subject expertise", "publication"],
        sector: "education",
    },
    JobSeed {
        id: "school_administrator",
        title: "School Administrator",
        description: "Manage educational institutions and staff",
        required: &["leadership", "education", "management", "budget management", "communication"],
        sector: "education",
    },
    JobSeed {
        id: "special_education_teacher",
        title: "Special Education Teacher",
        description: "Work with students who have special needs",
        required: &["special education", "teaching", "patience", "communication", "lesson planning"],
        sector: "education",
    },
    JobSeed {
        id: "guidance_counselor",
        title: "Guidance Counselor",
        description: "Provide academic and career guidance to students",
        required: &["counseling", "communication", "career guidance", "academic advising", "mentoring"],
        sector: "education",
    },
    JobSeed {
        id: "marketing_manager",
        title: "Marketing Manager",
        description: "Develop and execute marketing strategies for organizations",
        required: &["marketing strategy", "digital marketing", "analytics", "project management", "brand management"],
        sector: "marketing",
    },
    JobSeed {
        id: "sales_representative",
        title: "Sales Representative",
        description: "Sell products or services to customers",
        required: &["sales techniques", "customer relationship management", "negotiation", "product knowledge", "communication"],
        sector: "marketing",
    },
    JobSeed {
        id: "digital_marketing_specialist",
        title: "Digital Marketing Specialist",
        description: "Create and manage online marketing campaigns",
        required: &["digital marketing", "social media", "seo", "content creation", "analytics"],
        sector: "marketing",
    },
    JobSeed {
        id: "market_researcher",
        title: "Market Researcher",
        description: "Conduct research to understand market trends and consumer behavior",
        required: &["market research", "data analysis", "statistics", "communication", "report writing"],
        sector: "marketing",
    },
    JobSeed {
        id: "brand_manager",
        title: "Brand Manager",
        description: "Develop and maintain brand identity and strategy",
        required: &["brand management", "marketing strategy", "communication", "project management", "analytics"],
        sector: "marketing",
    },
    JobSeed {
        id: "attorney",
        title: "Attorney",
        description: "Provide legal representation and counsel to clients",
        required: &["legal research", "contract law", "litigation", "legal writing", "client counseling"],
        sector: "legal",
    },
    JobSeed {
        id: "paralegal",
        title: "Paralegal",
        description: "Support attorneys with legal research and document preparation",
        required: &["legal research", "document preparation", "legal terminology", "organization", "communication"],
        sector: "legal",
    },
    JobSeed {
        id: "legal_assistant",
        title: "Legal Assistant",
        description: "Provide administrative support to legal professionals",
        required: &["organization", "communication", "document preparation", "legal terminology", "case management"],
        sector: "legal",
    },
    JobSeed {
        id: "compliance_officer",
        title: "Compliance Officer",
        description: "Ensure organizations follow laws and regulations",
        required: &["regulatory compliance", "legal research", "risk management", "communication", "audit"],
        sector: "legal",
    },
    JobSeed {
        id: "mediator",
        title: "Mediator",
        description: "Facilitate conflict resolution between parties",
        required: &["mediation", "communication", "negotiation", "conflict resolution", "patience"],
        sector: "legal",
    },
    JobSeed {
        id: "civil_engineer",
        title: "Civil Engineer",
        description: "Design and oversee construction of infrastructure projects",
        required: &["autocad", "structural analysis", "project management", "engineering design", "construction"],
        sector: "engineering",
    },
    JobSeed {
        id: "mechanical_engineer",
        title: "Mechanical Engineer",
        description: "Design and develop mechanical systems and products",
        required: &["solidworks", "mechanical design", "thermodynamics", "materials science", "manufacturing"],
        sector: "engineering",
    },
    JobSeed {
        id: "electrical_engineer",
        title: "Electrical Engineer",
        description: "Design electrical systems and electronic devices",
        required: &["circuit design", "electrical systems", "electronics", "power systems", "control systems"],
        sector: "engineering",
    },
    JobSeed {
        id: "chemical_engineer",
        title: "Chemical Engineer",
        description: "Design processes for chemical manufacturing and production",
        required: &["chemical processes", "thermodynamics", "materials science", "safety", "manufacturing"],
        sector: "engineering",
    },
    JobSeed {
        id: "software_engineer_embedded",
        title: "Embedded Systems Engineer",
        description: "Develop software for embedded systems and IoT devices",
        required: &["programming", "embedded systems", "electronics", "real-time systems", "hardware"],
        sector: "engineering",
    },
    JobSeed {
        id: "hotel_manager",
        title: "Hotel Manager",
        description: "Manage hotel operations and guest services",
        required: &["hospitality management", "customer service", "staff supervision", "operations", "guest relations"],
        sector: "hospitality",
    },
    JobSeed {
        id: "chef",
        title: "Chef",
        description: "Create and oversee food preparation in restaurants",
        required: &["cooking techniques", "food safety", "menu planning", "kitchen management", "culinary arts"],
        sector: "hospitality",
    },
    JobSeed {
        id: "travel_agent",
        title: "Travel Agent",
        description: "Plan and book travel arrangements for clients",
        required: &["travel planning", "booking systems", "destination knowledge", "customer service", "sales"],
        sector: "hospitality",
    },
    JobSeed {
        id: "event_planner",
        title: "Event Planner",
        description: "Coordinate and manage events and conferences",
        required: &["event planning", "project management", "vendor management", "communication", "organization"],
        sector: "hospitality",
    },
    JobSeed {
        id: "restaurant_manager",
        title: "Restaurant Manager",
        description: "Oversee restaurant operations and staff",
        required: &["food service", "staff supervision", "customer service", "operations", "cost control"],
        sector: "hospitality",
    },
    JobSeed {
        id: "policy_analyst",
        title: "Policy Analyst",
        description: "Research and analyze government policies and programs",
        required: &["policy research", "data analysis", "report writing", "government processes", "stakeholder engagement"],
        sector: "government",
    },
    JobSeed {
        id: "public_administrator",
        title: "Public Administrator",
        description: "Manage government programs and public services",
        required: &["public administration", "program management", "budget administration", "leadership", "communication"],
        sector: "government",
    },
    JobSeed {
        id: "urban_planner",
        title: "Urban Planner",
        description: "Plan and develop communities and infrastructure",
        required: &["urban planning", "gis", "project management", "community engagement", "sustainability"],
        sector: "government",
    },
    JobSeed {
        id: "social_worker",
        title: "Social Worker",
        description: "Help people solve and cope with problems in their lives",
        required: &["case management", "counseling", "social services", "client advocacy", "crisis intervention"],
        sector: "government",
    },
    JobSeed {
        id: "environmental_specialist",
        title: "Environmental Specialist",
        description: "Monitor and protect environmental resources",
        required: &["environmental science", "regulatory compliance", "data analysis", "report writing", "sustainability"],
        sector: "government",
    },
    JobSeed {
        id: "nonprofit_manager",
        title: "Nonprofit Manager",
        description: "Manage nonprofit organizations and programs",
        required: &["program management", "fundraising", "grant writing", "volunteer coordination", "community outreach"],
        sector: "nonprofit",
    },
    JobSeed {
        id: "fundraiser",
        title: "Fundraiser",
        description: "Raise funds for nonprofit organizations",
        required: &["fundraising", "donor relations", "communication", "sales", "event planning"],
        sector: "nonprofit",
    },
    JobSeed {
        id: "advocacy_specialist",
        title: "Advocacy Specialist",
        description: "Advocate for social causes and policy change",
        required: &["advocacy", "policy advocacy", "communication", "community organizing", "campaign management"],
        sector: "nonprofit",
    },
    JobSeed {
        id: "volunteer_coordinator",
        title: "Volunteer Coordinator",
        description: "Recruit and manage volunteers for organizations",
        required: &["volunteer coordination", "recruitment", "training", "communication", "organization"],
        sector: "nonprofit",
    },
    JobSeed {
        id: "program_director",
        title: "Program Director",
        description: "Oversee program development and implementation",
        required: &["program management", "strategic planning", "leadership", "budget management", "evaluation"],
        sector: "nonprofit",
    },
    JobSeed {
        id: "production_manager",
        title: "Production Manager",
        description: "Oversee manufacturing operations and production processes",
        required: &["production planning", "quality control", "inventory management", "safety", "lean manufacturing"],
        sector: "manufacturing",
    },
    JobSeed {
        id: "quality_control_specialist",
        title: "Quality Control Specialist",
        description: "Ensure products meet quality standards and specifications",
        required: &["quality control", "inspection", "iso standards", "statistical analysis", "process improvement"],
        sector: "manufacturing",
    },
    JobSeed {
        id: "industrial_engineer",
        title: "Industrial Engineer",
        description: "Optimize production processes and systems",
        required: &["process improvement", "lean manufacturing", "six sigma", "statistical analysis", "automation"],
        sector: "manufacturing",
    },
    JobSeed {
        id: "maintenance_technician",
        title: "Maintenance Technician",
        description: "Maintain and repair manufacturing equipment",
        required: &["equipment maintenance", "troubleshooting", "safety", "technical skills", "preventive maintenance"],
        sector: "manufacturing",
    },
    JobSeed {
        id: "supply_chain_analyst",
        title: "Supply Chain Analyst",
        description: "Analyze and optimize supply chain operations",
        required: &["supply chain", "inventory management", "data analysis", "logistics", "cost analysis"],
        sector: "manufacturing",
    },
    JobSeed {
        id: "retail_manager",
        title: "Retail Manager",
        description: "Manage retail store operations and staff",
        required: &["retail management", "customer service", "staff supervision", "inventory control", "sales analysis"],
        sector: "retail",
    },
    JobSeed {
        id: "merchandiser",
        title: "Merchandiser",
        description: "Plan and manage product displays and inventory",
        required: &["visual merchandising", "inventory planning", "trend forecasting", "category management", "sales analysis"],
        sector: "retail",
    },
    JobSeed {
        id: "buyer",
        title: "Buyer",
        description: "Purchase products for retail organizations",
        required: &["purchasing", "vendor management", "negotiation", "market analysis", "inventory planning"],
        sector: "retail",
    },
    JobSeed {
        id: "loss_prevention_specialist",
        title: "Loss Prevention Specialist",
        description: "Prevent theft and reduce losses in retail environments",
        required: &["loss prevention", "security", "investigation", "customer service", "surveillance"],
        sector: "retail",
    },
    JobSeed {
        id: "ecommerce_specialist",
        title: "E-commerce Specialist",
        description: "Manage online retail operations and digital sales",
        required: &["ecommerce", "digital marketing", "online sales", "customer service", "analytics"],
        sector: "retail",
    },
    JobSeed {
        id: "business_analyst",
        title: "Business Analyst",
        description: "Analyze business processes and recommend improvements",
        required: &["business analysis", "requirements gathering", "process improvement", "project management", "communication"],
        sector: "business",
    },
    JobSeed {
        id: "project_manager",
        title: "Project Manager",
        description: "Plan and execute projects to achieve organizational goals",
        required: &["project management", "leadership", "communication", "risk management", "budget management"],
        sector: "business",
    },
    JobSeed {
        id: "human_resources_manager",
        title: "Human Resources Manager",
        description: "Manage employee relations and HR policies",
        required: &["recruitment", "employee relations", "hr policies", "performance management", "communication"],
        sector: "business",
    },
    JobSeed {
        id: "operations_manager",
        title: "Operations Manager",
        description: "Oversee daily operations and improve efficiency",
        required: &["operations management", "process improvement", "leadership", "budget management", "quality control"],
        sector: "business",
    },
    JobSeed {
        id: "consultant",
        title: "Management Consultant",
        description: "Provide strategic advice to improve business performance",
        required: &["strategic planning", "business analysis", "communication", "problem solving", "project management"],
        sector: "business",
    },
];
