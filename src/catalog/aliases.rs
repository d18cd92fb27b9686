//! Alias groups used to expand concrete technologies into the broader skill
//! tokens job profiles ask for.
//!
//! A skill may appear under several targets (`docker` counts as both
//! `cloud_platforms` and `devops`).

pub(crate) const ALIAS_GROUPS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
            "swift", "kotlin", "scala", "r", "matlab", "sas", "stata", "spss",
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
            "terraform", "jenkins", "gitlab",
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
        "data_science",
        &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn", "pandas",
            "numpy", "matplotlib", "seaborn", "plotly", "jupyter", "spark", "hadoop", "hive",
            "kafka", "airflow", "tableau", "power bi",
        ],
    ),
    ("git", &["git", "github", "gitlab", "bitbucket"]),
    (
        "algorithms",
        &[
            "algorithms", "data structures", "sorting", "searching", "dynamic programming",
            "graph algorithms",
        ],
    ),
];

/// Skills counted as in demand by the skill analysis.
pub(crate) const HIGH_DEMAND_SKILLS: &[&str] =
    &["python", "javascript", "sql", "aws", "docker", "react", "machine learning"];
