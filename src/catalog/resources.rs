//! Curated learning resources, keyed by lower-cased skill

pub(crate) struct ResourceSeed {
    pub skill: &'static str,
    pub courses: &'static [&'static str],
    pub books: &'static [&'static str],
    pub practice: &'static [&'static str],
}

pub(crate) const LEARNING_RESOURCES: &[ResourceSeed] = &[
    ResourceSeed {
        skill: "python",
        courses: &[
            "https://www.coursera.org/learn/python",
            "https://www.udemy.com/course/complete-python-bootcamp/",
            "https://www.freecodecamp.org/learn/scientific-computing-with-python/",
        ],
        books: &["Python Crash Course", "Automate the Boring Stuff with Python"],
        practice: &["HackerRank", "LeetCode", "Codewars"],
    },
    ResourceSeed {
        skill: "machine learning",
        courses: &[
            "https://www.coursera.org/learn/machine-learning",
            "https://www.udemy.com/course/machinelearning/",
            "https://www.fast.ai/",
        ],
        books: &["Hands-On Machine Learning", "Introduction to Statistical Learning"],
        practice: &["Kaggle", "Google Colab", "Paperspace"],
    },
    ResourceSeed {
        skill: "sql",
        courses: &[
            "https://www.coursera.org/learn/sql-for-data-science",
            "https://www.udemy.com/course/the-complete-sql-bootcamp/",
            "https://www.freecodecamp.org/learn/relational-database/",
        ],
        books: &["SQL for Data Analysis", "Learning SQL"],
        practice: &["HackerRank SQL", "LeetCode Database", "SQLZoo"],
    },
    ResourceSeed {
        skill: "javascript",
        courses: &[
            "https://www.udemy.com/course/the-complete-javascript-course/",
            "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
            "https://javascript.info/",
        ],
        books: &["Eloquent JavaScript", "You Don't Know JS"],
        practice: &["Codewars", "HackerRank", "Frontend Mentor"],
    },
    ResourceSeed {
        skill: "react",
        courses: &[
            "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
            "https://www.freecodecamp.org/learn/front-end-development-libraries/",
            "https://react.dev/learn",
        ],
        books: &["Learning React", "React Design Patterns"],
        practice: &["Frontend Mentor", "React Challenges", "Build projects"],
    },
    ResourceSeed {
        skill: "docker",
        courses: &[
            "https://www.udemy.com/course/docker-mastery/",
            "https://www.coursera.org/learn/docker-container",
            "https://docs.docker.com/get-started/",
        ],
        books: &["Docker in Action", "The Docker Book"],
        practice: &["Docker Hub", "Build containerized apps", "Docker playground"],
    },
    ResourceSeed {
        skill: "aws",
        courses: &[
            "https://www.udemy.com/course/aws-certified-solutions-architect-associate/",
            "https://www.coursera.org/learn/aws-cloud-technical-essentials",
            "https://aws.amazon.com/training/",
        ],
        books: &["AWS Certified Solutions Architect Study Guide", "AWS in Action"],
        practice: &["AWS Free Tier", "AWS CloudFormation", "Build projects on AWS"],
    },
    ResourceSeed {
        skill: "patient care",
        courses: &[
            "https://www.coursera.org/learn/patient-care",
            "https://www.edx.org/learn/nursing",
            "https://www.udemy.com/course/patient-care-technician/",
        ],
        books: &["Fundamentals of Nursing", "Patient Care Skills"],
        practice: &["Clinical Simulations", "Hospital Volunteering", "Nursing Labs"],
    },
    ResourceSeed {
        skill: "medical terminology",
        courses: &[
            "https://www.coursera.org/learn/medical-terminology",
            "https://www.khanacademy.org/science/health-and-medicine",
            "https://www.edx.org/learn/anatomy-physiology",
        ],
        books: &["Medical Terminology for Health Professions", "The Language of Medicine"],
        practice: &["Medical Dictionary Apps", "Flashcards", "Online Quizzes"],
    },
    ResourceSeed {
        skill: "cpr",
        courses: &[
            "https://www.heart.org/en/cpr",
            "https://www.redcross.org/take-a-class/cpr",
            "https://www.aha.org/cpr",
        ],
        books: &["CPR Guidelines", "Emergency Care"],
        practice: &["CPR Training Centers", "Simulation Labs", "Practice Mannequins"],
    },
    ResourceSeed {
        skill: "financial analysis",
        courses: &[
            "https://www.coursera.org/learn/financial-analysis",
            "https://www.edx.org/learn/corporate-finance",
            "https://www.udemy.com/course/financial-analysis/",
        ],
        books: &["Financial Statement Analysis", "Valuation: Measuring and Managing the Value of Companies"],
        practice: &["Bloomberg Terminal", "Yahoo Finance", "Financial Modeling"],
    },
    ResourceSeed {
        skill: "excel",
        courses: &[
            "https://www.coursera.org/learn/excel-skills-for-business",
            "https://www.udemy.com/course/microsoft-excel-2013-from-beginner-to-advanced-and-beyond/",
            "https://www.edx.org/learn/microsoft-excel",
        ],
        books: &["Excel 2019 Bible", "Advanced Excel Formulas"],
        practice: &["Excel Practice Files", "Financial Modeling", "Data Analysis Projects"],
    },
    ResourceSeed {
        skill: "accounting",
        courses: &[
            "https://www.coursera.org/learn/financial-accounting",
            "https://www.edx.org/learn/accounting",
            "https://www.udemy.com/course/accounting-basics/",
        ],
        books: &["Financial Accounting", "Intermediate Accounting"],
        practice: &["QuickBooks Practice", "Accounting Software", "Case Studies"],
    },
    ResourceSeed {
        skill: "teaching",
        courses: &[
            "https://www.coursera.org/learn/foundations-of-teaching",
            "https://www.edx.org/learn/teaching",
            "https://www.udemy.com/course/teaching-skills/",
        ],
        books: &["The First Days of School", "Teach Like a Champion"],
        practice: &["Student Teaching", "Tutoring", "Classroom Observations"],
    },
    ResourceSeed {
        skill: "curriculum development",
        courses: &[
            "https://www.coursera.org/learn/curriculum-design",
            "https://www.edx.org/learn/instructional-design",
            "https://www.udemy.com/course/curriculum-development/",
        ],
        books: &["Understanding by Design", "Curriculum Development"],
        practice: &["Lesson Planning", "Curriculum Mapping", "Educational Projects"],
    },
    ResourceSeed {
        skill: "classroom management",
        courses: &[
            "https://www.coursera.org/learn/classroom-management",
            "https://www.edx.org/learn/positive-behavior-support",
            "https://www.udemy.com/course/classroom-management/",
        ],
        books: &["The Classroom Management Book", "Discipline with Dignity"],
        practice: &["Student Teaching", "Classroom Observations", "Behavior Management"],
    },
    ResourceSeed {
        skill: "digital marketing",
        courses: &[
            "https://www.coursera.org/learn/digital-marketing",
            "https://learndigital.withgoogle.com/digitalgarage/",
            "https://academy.hubspot.com/",
        ],
        books: &["Digital Marketing for Dummies", "Contagious: Why Things Catch On"],
        practice: &["Google Ads", "Facebook Ads", "Social Media Management"],
    },
    ResourceSeed {
        skill: "social media",
        courses: &[
            "https://www.coursera.org/learn/social-media-marketing",
            "https://www.udemy.com/course/social-media-marketing-strategy/",
            "https://www.edx.org/learn/social-media",
        ],
        books: &["Jab, Jab, Jab, Right Hook", "The Art of Social Media"],
        practice: &["Personal Branding", "Content Creation", "Social Media Analytics"],
    },
    ResourceSeed {
        skill: "seo",
        courses: &[
            "https://www.coursera.org/learn/seo-fundamentals",
            "https://www.udemy.com/course/technical-seo/",
            "https://www.google.com/analytics/academy/",
        ],
        books: &["SEO for Dummies", "The Art of SEO"],
        practice: &["Website Optimization", "Keyword Research", "SEO Tools"],
    },
    ResourceSeed {
        skill: "legal research",
        courses: &[
            "https://www.coursera.org/learn/legal-research",
            "https://www.edx.org/learn/legal-writing",
            "https://www.udemy.com/course/legal-research/",
        ],
        books: &["Legal Research in a Nutshell", "Introduction to Legal Research"],
        practice: &["Westlaw", "LexisNexis", "Legal Databases"],
    },
    ResourceSeed {
        skill: "contract law",
        courses: &[
            "https://www.coursera.org/learn/contract-law",
            "https://www.edx.org/learn/business-law",
            "https://www.udemy.com/course/contract-law/",
        ],
        books: &["Contracts: Examples and Explanations", "Contract Law for Dummies"],
        practice: &["Contract Drafting", "Case Studies", "Legal Writing"],
    },
    ResourceSeed {
        skill: "litigation",
        courses: &[
            "https://www.coursera.org/learn/civil-litigation",
            "https://www.edx.org/learn/trial-advocacy",
            "https://www.udemy.com/course/litigation/",
        ],
        books: &["Civil Procedure", "Trial Techniques"],
        practice: &["Moot Court", "Mock Trials", "Legal Clinics"],
    },
    ResourceSeed {
        skill: "autocad",
        courses: &[
            "https://www.udemy.com/course/autocad-2018-course/",
            "https://www.autodesk.com/certification",
            "https://www.edx.org/learn/autocad",
        ],
        books: &["AutoCAD 2022 Tutorial", "Mastering AutoCAD"],
        practice: &["AutoCAD Software", "Design Projects", "Portfolio Building"],
    },
    ResourceSeed {
        skill: "solidworks",
        courses: &[
            "https://www.udemy.com/course/solidworks-course/",
            "https://www.dassault-systemes.com/certification",
            "https://www.edx.org/learn/solidworks",
        ],
        books: &["SolidWorks 2022 Tutorial", "Mastering SolidWorks"],
        practice: &["SolidWorks Software", "3D Modeling Projects", "Design Portfolio"],
    },
    ResourceSeed {
        skill: "structural analysis",
        courses: &[
            "https://www.coursera.org/learn/structural-analysis",
            "https://www.edx.org/learn/engineering-mechanics",
            "https://www.udemy.com/course/structural-analysis/",
        ],
        books: &["Structural Analysis", "Mechanics of Materials"],
        practice: &["Engineering Software", "Design Projects", "Structural Modeling"],
    },
    ResourceSeed {
        skill: "hospitality management",
        courses: &[
            "https://www.coursera.org/learn/hospitality-management",
            "https://www.edx.org/learn/hotel-operations",
            "https://www.udemy.com/course/hospitality-management/",
        ],
        books: &["Hospitality Management", "Hotel Operations Management"],
        practice: &["Hotel Internships", "Restaurant Management", "Event Planning"],
    },
    ResourceSeed {
        skill: "customer service",
        courses: &[
            "https://www.coursera.org/learn/customer-service",
            "https://www.udemy.com/course/customer-experience/",
            "https://www.edx.org/learn/customer-service",
        ],
        books: &["The Customer Service Revolution", "Delivering Happiness"],
        practice: &["Customer Service Roles", "Role-playing", "Service Excellence"],
    },
    ResourceSeed {
        skill: "cooking techniques",
        courses: &[
            "https://www.coursera.org/learn/culinary-arts",
            "https://www.udemy.com/course/cooking-fundamentals/",
            "https://www.edx.org/learn/cooking",
        ],
        books: &["The Professional Chef", "On Food and Cooking"],
        practice: &["Cooking Classes", "Kitchen Internships", "Recipe Development"],
    },
    ResourceSeed {
        skill: "policy research",
        courses: &[
            "https://www.coursera.org/learn/public-policy",
            "https://www.edx.org/learn/policy-analysis",
            "https://www.udemy.com/course/policy-research/",
        ],
        books: &["Policy Analysis", "Public Policy Making"],
        practice: &["Policy Research", "Government Internships", "Policy Writing"],
    },
    ResourceSeed {
        skill: "public administration",
        courses: &[
            "https://www.coursera.org/learn/public-administration",
            "https://www.edx.org/learn/government-management",
            "https://www.udemy.com/course/public-administration/",
        ],
        books: &["Public Administration", "The New Public Service"],
        practice: &["Government Internships", "Public Service", "Administrative Projects"],
    },
    ResourceSeed {
        skill: "stakeholder engagement",
        courses: &[
            "https://www.coursera.org/learn/stakeholder-management",
            "https://www.edx.org/learn/public-engagement",
            "https://www.udemy.com/course/stakeholder-engagement/",
        ],
        books: &["Stakeholder Theory", "Engaging Stakeholders"],
        practice: &["Community Outreach", "Public Meetings", "Stakeholder Interviews"],
    },
    ResourceSeed {
        skill: "fundraising",
        courses: &[
            "https://www.coursera.org/learn/fundraising",
            "https://www.edx.org/learn/nonprofit-management",
            "https://www.udemy.com/course/fundraising/",
        ],
        books: &["Fundraising for Dummies", "The Fundraising Plan"],
        practice: &["Fundraising Events", "Donor Relations", "Grant Writing"],
    },
    ResourceSeed {
        skill: "grant writing",
        courses: &[
            "https://www.coursera.org/learn/grant-writing",
            "https://www.edx.org/learn/proposal-writing",
            "https://www.udemy.com/course/grant-writing/",
        ],
        books: &["Grant Writing for Dummies", "The Only Grant Writing Book You'll Ever Need"],
        practice: &["Grant Applications", "Proposal Writing", "Foundation Research"],
    },
    ResourceSeed {
        skill: "volunteer coordination",
        courses: &[
            "https://www.coursera.org/learn/volunteer-management",
            "https://www.edx.org/learn/nonprofit-leadership",
            "https://www.udemy.com/course/volunteer-coordination/",
        ],
        books: &["Volunteer Management", "The Volunteer Management Handbook"],
        practice: &["Volunteer Coordination", "Event Planning", "Community Outreach"],
    },
    ResourceSeed {
        skill: "lean manufacturing",
        courses: &[
            "https://www.coursera.org/learn/lean-manufacturing",
            "https://www.edx.org/learn/six-sigma",
            "https://www.udemy.com/course/lean-manufacturing/",
        ],
        books: &["The Toyota Way", "Lean Thinking"],
        practice: &["Manufacturing Internships", "Process Improvement", "Quality Control"],
    },
    ResourceSeed {
        skill: "quality control",
        courses: &[
            "https://www.coursera.org/learn/quality-management",
            "https://www.edx.org/learn/six-sigma-certification",
            "https://www.udemy.com/course/quality-control/",
        ],
        books: &["Quality Control", "The Six Sigma Handbook"],
        practice: &["Quality Control Labs", "Statistical Analysis", "Process Auditing"],
    },
    ResourceSeed {
        skill: "six sigma",
        courses: &[
            "https://www.coursera.org/learn/six-sigma-green-belt",
            "https://www.edx.org/learn/six-sigma-black-belt",
            "https://www.udemy.com/course/six-sigma/",
        ],
        books: &["Six Sigma for Dummies", "The Six Sigma Way"],
        practice: &["Six Sigma Projects", "Statistical Analysis", "Process Improvement"],
    },
    ResourceSeed {
        skill: "retail management",
        courses: &[
            "https://www.coursera.org/learn/retail-management",
            "https://www.edx.org/learn/store-operations",
            "https://www.udemy.com/course/retail-management/",
        ],
        books: &["Retail Management", "The Retail Revolution"],
        practice: &["Retail Internships", "Store Management", "Customer Service"],
    },
    ResourceSeed {
        skill: "visual merchandising",
        courses: &[
            "https://www.coursera.org/learn/visual-merchandising",
            "https://www.edx.org/learn/retail-design",
            "https://www.udemy.com/course/visual-merchandising/",
        ],
        books: &["Visual Merchandising", "Store Design"],
        practice: &["Store Displays", "Window Design", "Product Placement"],
    },
    ResourceSeed {
        skill: "inventory control",
        courses: &[
            "https://www.coursera.org/learn/inventory-management",
            "https://www.edx.org/learn/supply-chain",
            "https://www.udemy.com/course/inventory-control/",
        ],
        books: &["Inventory Management", "Supply Chain Management"],
        practice: &["Inventory Systems", "Stock Management", "Warehouse Operations"],
    },
    ResourceSeed {
        skill: "project management",
        courses: &[
            "https://www.coursera.org/learn/project-management",
            "https://www.udemy.com/course/pmp-certification/",
            "https://www.edx.org/learn/project-management",
        ],
        books: &["A Guide to the Project Management Body of Knowledge", "The Fast Forward MBA in Project Management"],
        practice: &["Project Management Software", "Case Studies", "Project Planning"],
    },
    ResourceSeed {
        skill: "leadership",
        courses: &[
            "https://www.coursera.org/learn/leadership",
            "https://www.edx.org/learn/management-skills",
            "https://www.udemy.com/course/leadership/",
        ],
        books: &["The Leadership Challenge", "Good to Great"],
        practice: &["Team Leadership", "Mentoring", "Leadership Roles"],
    },
    ResourceSeed {
        skill: "communication",
        courses: &[
            "https://www.coursera.org/learn/business-communication",
            "https://www.edx.org/learn/public-speaking",
            "https://www.udemy.com/course/communication-skills/",
        ],
        books: &["Crucial Conversations", "How to Win Friends and Influence People"],
        practice: &["Public Speaking", "Presentation Skills", "Interpersonal Communication"],
    },
];
