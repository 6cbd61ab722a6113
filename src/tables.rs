//! Keyword tables used by the line rules and extractors. Plain data.

pub const COMPANY_INDICATORS: &[&str] = &[
    "inc", "corp", "llc", "ltd", "company", "solutions", "technologies", "systems", "services",
    "university", "college",
];

/// A line containing any of these is never a company name.
pub const NOT_COMPANY: &[&str] = &["experience", "skills", "education", "projects"];

pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "analyst", "manager", "assistant", "specialist", "consultant",
    "architect", "lead", "senior", "junior", "intern",
];

pub const LOCATION_WORDS: &[&str] = &["usa", "india", "canada", "uk", "remote"];

pub const BULLET_GLYPHS: &[&str] = &["•", "◦", "▪", "–", "-", "*", "→"];

pub const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school", "academy"];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "associate", "certificate", "diploma",
];

pub const PROJECT_INDICATORS: &[&str] = &[
    "system", "platform", "application", "tool", "website", "app", "portal", "dashboard",
];

pub const EXPERIENCE_START: &[&str] = &[
    "professional experience",
    "work experience",
    "employment history",
    "career history",
    "experience",
    "employment",
    "work history",
];
pub const EXPERIENCE_END: &[&str] = &["education", "skills", "projects", "certifications"];

pub const EDUCATION_START: &[&str] = &["education"];
pub const EDUCATION_END: &[&str] = &["experience", "skills", "projects", "certifications"];

pub const PROJECTS_START: &[&str] = &["projects", "academic projects", "personal projects", "portfolio"];
pub const PROJECTS_END: &[&str] = &["experience", "education", "skills", "certifications"];

pub const BIO_START: &[&str] = &["summary", "objective", "about", "profile"];
pub const BIO_END: &[&str] = &["experience", "education", "skills"];

/// Professional-title keywords for the personal header (no seniority words).
pub const HEADLINE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "analyst", "manager", "architect", "specialist", "consultant",
];

pub const ACHIEVEMENT_KEYWORDS: &[&str] = &["award", "recognition", "achievement", "honor", "accomplishment"];

/// Scanned against cleaned bullet text; hits are title-cased into technology tags.
pub const TECH_KEYWORDS: &[&str] = &[
    // cloud
    "aws", "azure", "gcp", "google cloud", "cloud",
    // languages
    "python", "java", "javascript", "typescript", "c++", "c#", "go", "rust", "php", "ruby",
    // devops
    "docker", "kubernetes", "jenkins", "terraform", "ansible", "vault", "github actions",
    // databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    // frameworks
    "react", "angular", "vue", "django", "flask", "spring", "express",
    // tools
    "git", "jira", "confluence", "slack", "linux", "windows",
];

/// `(keyword, display name, category)`
pub type SkillRow = (&'static str, &'static str, &'static str);

/// Skill buckets in output order.
pub const SKILL_TABLE: &[(&str, &[SkillRow])] = &[
    (
        "languages",
        &[
            ("python", "Python", "Programming"),
            ("java", "Java", "Programming"),
            ("javascript", "JavaScript", "Programming"),
            ("typescript", "TypeScript", "Programming"),
            ("c++", "C++", "Programming"),
            ("c#", "C#", "Programming"),
            ("go", "Go", "Programming"),
            ("rust", "Rust", "Programming"),
            ("php", "PHP", "Programming"),
            ("ruby", "Ruby", "Programming"),
            ("bash", "Bash/Shell", "Scripting"),
            ("shell", "Shell Scripting", "Scripting"),
            ("powershell", "PowerShell", "Scripting"),
        ],
    ),
    (
        "frontend",
        &[
            ("react", "React", "Framework"),
            ("angular", "Angular", "Framework"),
            ("vue", "Vue.js", "Framework"),
            ("html", "HTML/CSS", "Markup"),
            ("css", "CSS", "Styling"),
            ("sass", "Sass", "Styling"),
            ("tailwind", "Tailwind CSS", "Framework"),
            ("bootstrap", "Bootstrap", "Framework"),
            ("vite", "Vite", "Build Tool"),
            ("webpack", "Webpack", "Build Tool"),
        ],
    ),
    (
        "backend",
        &[
            ("node", "Node.js", "Runtime"),
            ("express", "Express.js", "Framework"),
            ("django", "Django", "Framework"),
            ("flask", "Flask", "Framework"),
            ("spring", "Spring", "Framework"),
            ("rest", "REST APIs", "Architecture"),
            ("graphql", "GraphQL", "API"),
            ("api", "API Development", "Architecture"),
        ],
    ),
    (
        "devops",
        &[
            ("docker", "Docker", "Containerization"),
            ("kubernetes", "Kubernetes", "Orchestration"),
            ("jenkins", "Jenkins", "CI/CD"),
            ("terraform", "Terraform", "IaC"),
            ("ansible", "Ansible", "Configuration"),
            ("github actions", "GitHub Actions", "CI/CD"),
            ("gitlab", "GitLab CI", "CI/CD"),
            ("circleci", "CircleCI", "CI/CD"),
            ("helm", "Helm", "Package Management"),
            ("vault", "HashiCorp Vault", "Security"),
        ],
    ),
    (
        "cloud",
        &[
            ("aws", "AWS", "Cloud Platform"),
            ("azure", "Azure", "Cloud Platform"),
            ("gcp", "Google Cloud Platform", "Cloud Platform"),
            ("google cloud", "Google Cloud", "Cloud Platform"),
            ("ec2", "EC2", "AWS Service"),
            ("s3", "S3", "AWS Service"),
            ("rds", "RDS", "AWS Service"),
            ("vpc", "VPC", "AWS Service"),
            ("iam", "IAM", "AWS Service"),
            ("lambda", "Lambda", "AWS Service"),
            ("cloudformation", "CloudFormation", "AWS Service"),
        ],
    ),
    (
        "databases",
        &[
            ("mysql", "MySQL", "Relational"),
            ("postgresql", "PostgreSQL", "Relational"),
            ("mongodb", "MongoDB", "NoSQL"),
            ("redis", "Redis", "Cache"),
            ("elasticsearch", "Elasticsearch", "Search"),
            ("cassandra", "Cassandra", "NoSQL"),
            ("dynamodb", "DynamoDB", "NoSQL"),
            ("sqlite", "SQLite", "Relational"),
        ],
    ),
    (
        "tools",
        &[
            ("git", "Git", "Version Control"),
            ("linux", "Linux/Unix", "Operating System"),
            ("ubuntu", "Ubuntu", "Operating System"),
            ("centos", "CentOS", "Operating System"),
            ("red hat", "Red Hat Enterprise Linux", "Operating System"),
            ("windows", "Windows", "Operating System"),
            ("jira", "Jira", "Project Management"),
            ("confluence", "Confluence", "Documentation"),
            ("slack", "Slack", "Communication"),
            ("vscode", "VS Code", "IDE"),
            ("intellij", "IntelliJ IDEA", "IDE"),
            ("postman", "Postman", "API Testing"),
        ],
    ),
];

/// Document-wide proficiency cues, checked in order; first hit wins.
pub const LEVEL_CUES: &[(&[&str], u8)] = &[
    (&["expert", "advanced", "senior", "lead"], 90),
    (&["proficient", "experienced", "skilled"], 80),
    (&["intermediate", "familiar"], 70),
    (&["basic", "beginner", "learning"], 60),
];
pub const DEFAULT_LEVEL: u8 = 75;

/// `(keyword in certification text, issuer)`, first hit wins.
pub const CERT_ISSUERS: &[(&[&str], &str)] = &[
    (&["aws"], "Amazon Web Services"),
    (&["microsoft", "azure"], "Microsoft"),
    (&["google"], "Google Cloud"),
    (&["comptia"], "CompTIA"),
    (&["cisco"], "Cisco"),
    (&["oracle"], "Oracle"),
];
pub const DEFAULT_CERT_ISSUER: &str = "Professional Certification Body";

pub const CERT_SKILLS: &[(&str, &[&str])] = &[
    ("aws", &["AWS", "Cloud Computing", "Architecture"]),
    ("azure", &["Azure", "Cloud Computing", "Microsoft Technologies"]),
    ("google cloud", &["Google Cloud Platform", "Cloud Computing"]),
];
