//! Static vocabularies backing the extractors and analyzers.
//!
//! Matching is case-insensitive substring membership over the document text, so
//! every term is kept as a whole multi-character token or phrase to limit false
//! positives. Overlaps are still possible (`java` matches inside `javascript`,
//! a spoken-language name can match inside a place name); that is a documented
//! limitation of the heuristic, not something the engine tries to correct.

/// Technical skill vocabulary. Order matters: the fresher keyword set samples a
/// prefix of this table.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "sql",
    "html",
    "css",
    "react",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "angular",
    "vue",
    "next.js",
    "node.js",
    "express",
    "django",
    "flask",
    "spring boot",
    ".net",
    "laravel",
    "graphql",
    "rest api",
    "aws",
    "azure",
    "google cloud",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "ci/cd",
    "git",
    "linux",
    "bash",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "spark",
    "hadoop",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "machine learning",
    "deep learning",
    "data analysis",
    "tableau",
    "power bi",
    "figma",
    "jira",
    "agile",
    "scrum",
    "microservices",
    "selenium",
    "cypress",
    "junit",
    "pytest",
];

/// Soft skill vocabulary. The fresher keyword set samples a prefix of this table.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "collaboration",
    "creativity",
    "attention to detail",
    "decision making",
    "conflict resolution",
    "presentation",
    "negotiation",
    "mentoring",
    "public speaking",
    "work ethic",
    "organization",
];

/// Action verbs in base form. The analyzer also accepts a trailing
/// `d`/`ed`/`es`/`ing`/`s` so `manage` covers `managed` and `managing`.
pub const ACTION_VERBS: &[&str] = &[
    "achieve",
    "accelerate",
    "analyze",
    "architect",
    "automate",
    "boost",
    "build",
    "built",
    "collaborate",
    "coordinate",
    "create",
    "cut",
    "deliver",
    "design",
    "develop",
    "direct",
    "drive",
    "enhance",
    "establish",
    "execute",
    "expand",
    "generate",
    "implement",
    "improve",
    "increase",
    "initiate",
    "launch",
    "lead",
    "led",
    "manage",
    "mentor",
    "migrate",
    "optimize",
    "organize",
    "oversee",
    "pioneer",
    "reduce",
    "refactor",
    "resolve",
    "scale",
    "ship",
    "spearhead",
    "streamline",
    "transform",
];

/// Spoken language names.
pub const SPOKEN_LANGUAGES: &[&str] = &[
    "english",
    "spanish",
    "french",
    "german",
    "hindi",
    "mandarin",
    "japanese",
    "korean",
    "portuguese",
    "italian",
    "russian",
    "arabic",
    "bengali",
    "tamil",
    "urdu",
    "dutch",
];

/// Terms an entry-level (fresher) resume is expected to carry.
pub const FRESHER_TERMS: &[&str] = &[
    "internship",
    "intern",
    "academic project",
    "coursework",
    "hackathon",
    "workshop",
    "seminar",
    "volunteer",
    "extracurricular",
    "undergraduate",
    "final year project",
    "training",
    "campus",
    "student",
];

/// Terms a senior resume is expected to carry.
pub const EXPERIENCED_TERMS: &[&str] = &[
    "led",
    "managed",
    "architected",
    "stakeholder",
    "mentored",
    "strategy",
    "cross-functional",
    "roadmap",
    "delivered",
    "ownership",
    "scaled",
    "budget",
    "hired",
    "initiative",
];

/// Seniority qualifiers used to assemble job-title patterns.
pub const SENIORITY: &[&str] = &[
    "senior", "junior", "lead", "principal", "staff", "associate", "chief", "head",
];

/// Role domains used to assemble job-title patterns. Multi-word entries come
/// first so the alternation prefers the longer match.
pub const ROLE_DOMAINS: &[&str] = &[
    "machine learning",
    "full stack",
    "full-stack",
    "software",
    "data",
    "web",
    "mobile",
    "frontend",
    "backend",
    "cloud",
    "devops",
    "security",
    "product",
    "project",
    "program",
    "business",
    "marketing",
    "qa",
    "ux",
    "ui",
];

/// Role nouns used to assemble job-title patterns.
pub const ROLE_NOUNS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "architect",
    "consultant",
    "scientist",
    "administrator",
    "specialist",
    "intern",
];
