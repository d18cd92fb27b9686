//! Built-in skill keyword table
//!
//! Categories and keywords are matched against lower-cased resume text. Order is
//! significant: extracted skill maps follow category order and, inside a
//! category, keyword order.

pub(crate) const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
            "swift", "kotlin", "scala", "matlab", "sas", "stata", "spss", "r",
        ],
    ),
    (
        "web_development",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
            "spring", "asp.net", "laravel", "wordpress", "drupal", "jquery", "bootstrap",
        ],
    ),
    (
        "databases",
        &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "mariadb",
            "cassandra", "neo4j", "elasticsearch", "dynamodb",
        ],
    ),
    (
        "cloud_platforms",
        &[
            "aws", "azure", "gcp", "google cloud", "amazon web services", "docker", "kubernetes",
            "terraform", "jenkins", "gitlab", "github actions",
        ],
    ),
    (
        "data_science",
        &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn", "pandas",
            "numpy", "matplotlib", "seaborn", "plotly", "jupyter", "spark", "hadoop", "hive",
            "kafka", "airflow", "tableau", "power bi",
        ],
    ),
    (
        "devops",
        &[
            "ci/cd", "continuous integration", "continuous deployment", "jenkins", "gitlab ci",
            "github actions", "docker", "kubernetes", "terraform", "ansible", "chef", "puppet",
        ],
    ),
    (
        "healthcare",
        &[
            "patient care", "medical terminology", "clinical skills", "cpr",
            "medication administration", "electronic health records", "iv therapy", "wound care",
            "medical diagnosis", "anatomy", "pharmacy", "drug interactions", "prescription",
            "physical therapy", "rehabilitation", "patient assessment", "treatment planning",
            "specialized techniques", "sports medicine",
        ],
    ),
    (
        "finance",
        &[
            "financial analysis", "excel", "financial modeling", "accounting", "budgeting",
            "bloomberg terminal", "risk management", "investment analysis", "bookkeeping",
            "tax preparation", "financial reporting", "quickbooks", "audit", "cpa certification",
            "valuation", "corporate finance", "mergers acquisitions", "regulatory compliance",
            "insurance", "enterprise risk management",
        ],
    ),
    (
        "education",
        &[
            "teaching", "curriculum development", "classroom management", "communication",
            "lesson planning", "technology integration", "special education", "bilingual",
            "assessment", "research", "academic writing", "subject expertise", "publication",
            "grant writing", "mentoring", "conference presentation", "peer review", "leadership",
            "budget management", "staff supervision", "education policy", "strategic planning",
            "community relations", "crisis management",
        ],
    ),
    (
        "marketing",
        &[
            "marketing strategy", "digital marketing", "analytics", "project management",
            "brand management", "social media", "content creation", "seo", "market research",
            "sales techniques", "customer relationship management", "negotiation",
            "product knowledge", "crm software", "territory management", "closing",
            "lead generation", "email marketing", "google ads", "content marketing",
            "automation tools", "conversion optimization", "influencer marketing",
        ],
    ),
    (
        "legal",
        &[
            "legal research", "contract law", "litigation", "legal writing", "client counseling",
            "specialized practice areas", "negotiation", "courtroom experience", "mediation",
            "document preparation", "case management", "legal terminology", "court filing",
            "litigation support", "trial preparation", "legal software",
        ],
    ),
    (
        "engineering",
        &[
            "autocad", "structural analysis", "project management", "engineering design",
            "construction", "bim modeling", "sustainability", "construction management",
            "geotechnical", "solidworks", "mechanical design", "thermodynamics",
            "materials science", "manufacturing", "3d modeling", "product development", "fmea",
            "quality control", "circuit design", "electrical systems", "electronics",
            "power systems", "control systems", "programming", "renewable energy", "automation",
            "embedded systems",
        ],
    ),
    (
        "hospitality",
        &[
            "hospitality management", "customer service", "staff supervision", "operations",
            "guest relations", "revenue management", "event planning", "food service", "marketing",
            "cooking techniques", "food safety", "menu planning", "kitchen management",
            "culinary arts", "wine pairing", "international cuisine", "cost control",
            "food presentation", "travel planning", "booking systems", "destination knowledge",
            "itinerary planning", "specialized travel", "group bookings", "crisis management",
            "sales",
        ],
    ),
    (
        "government",
        &[
            "policy research", "data analysis", "report writing", "government processes",
            "stakeholder engagement", "statistics", "economic analysis", "legislative process",
            "public administration", "program management", "budget administration", "public policy",
            "leadership", "strategic planning", "performance measurement", "stakeholder relations",
            "change management", "crisis management",
        ],
    ),
    (
        "nonprofit",
        &[
            "program management", "fundraising", "grant writing", "volunteer coordination",
            "community outreach", "donor relations", "event planning", "advocacy",
            "strategic planning", "case management", "counseling", "social services",
            "client advocacy", "crisis intervention", "group therapy", "community organizing",
            "policy advocacy", "trauma informed care",
        ],
    ),
    (
        "manufacturing",
        &[
            "production planning", "quality control", "inventory management", "safety",
            "lean manufacturing", "six sigma", "automation", "supply chain",
            "continuous improvement", "statistical analysis", "process improvement", "inspection",
            "iso standards", "root cause analysis", "auditing", "quality management systems",
        ],
    ),
    (
        "retail",
        &[
            "retail management", "customer service", "staff supervision", "inventory control",
            "sales analysis", "visual merchandising", "loss prevention", "budget management",
            "team leadership", "purchasing", "vendor management", "negotiation",
            "inventory planning", "market analysis", "trend forecasting", "supply chain",
            "category management", "cost analysis",
        ],
    ),
    (
        "business",
        &[
            "business analysis", "requirements gathering", "process improvement",
            "project management", "leadership", "communication", "risk management",
            "budget management", "agile", "scrum", "stakeholder management", "quality assurance",
            "recruitment", "employee relations", "hr policies", "performance management",
            "compliance", "hr analytics", "talent management", "organizational development",
            "benefits administration",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership", "communication", "teamwork", "problem solving", "critical thinking",
            "time management", "organization", "adaptability", "creativity",
            "emotional intelligence", "conflict resolution", "mentoring", "coaching",
            "presentation skills", "interpersonal skills", "customer service", "sales",
            "negotiation", "project management", "strategic thinking",
        ],
    ),
];
