//! Common patterns and vocabularies for resume extraction.

use lazy_static::lazy_static;
use regex::Regex;

// Section header aliases, canonical (upper-case) spelling. The first entry of
// each list is the preferred label; the assembler consults them in order.

pub const EDUCATION_ALIASES: &[&str] = &[
    "EDUCATION",
    "ACADEMIC BACKGROUND",
    "ACADEMIC QUALIFICATIONS",
    "EDUCATIONAL BACKGROUND",
    "EDUCATION AND TRAINING",
];

pub const EXPERIENCE_ALIASES: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "EMPLOYMENT HISTORY",
    "WORK HISTORY",
    "RESEARCH EXPERIENCE",
];

pub const SKILLS_ALIASES: &[&str] = &[
    "SKILLS",
    "TECHNICAL SKILLS",
    "KEY SKILLS",
    "CORE COMPETENCIES",
    "SKILLS & ABILITIES",
    "SKILLS AND ABILITIES",
];

pub const PROJECTS_ALIASES: &[&str] = &[
    "PROJECTS",
    "PERSONAL PROJECTS",
    "ACADEMIC PROJECTS",
    "KEY PROJECTS",
    "PROJECT EXPERIENCE",
];

pub const CONTACT_ALIASES: &[&str] = &[
    "CONTACT",
    "CONTACT INFORMATION",
    "CONTACT DETAILS",
    "PERSONAL INFORMATION",
];

pub const CERTIFICATIONS_ALIASES: &[&str] = &[
    "CERTIFICATIONS",
    "CERTIFICATES",
    "LICENSES & CERTIFICATIONS",
    "LICENSES AND CERTIFICATIONS",
];

pub const AWARDS_ALIASES: &[&str] = &["AWARDS", "HONORS", "HONORS & AWARDS", "ACHIEVEMENTS"];

pub const PUBLICATIONS_ALIASES: &[&str] = &["PUBLICATIONS", "RESEARCH PUBLICATIONS", "PAPERS"];

pub const LANGUAGES_ALIASES: &[&str] = &["LANGUAGES", "LANGUAGE SKILLS", "SPOKEN LANGUAGES"];

pub const INTERESTS_ALIASES: &[&str] = &["INTERESTS", "HOBBIES", "HOBBIES & INTERESTS"];

pub const REFERENCES_ALIASES: &[&str] = &["REFERENCES", "REFEREES", "REFERENCES AVAILABLE UPON REQUEST"];

pub const VOLUNTEER_ALIASES: &[&str] = &[
    "VOLUNTEER EXPERIENCE",
    "VOLUNTEERING",
    "VOLUNTEER WORK",
    "COMMUNITY SERVICE",
];

pub const LEADERSHIP_ALIASES: &[&str] = &[
    "LEADERSHIP EXPERIENCE",
    "LEADERSHIP",
    "LEADERSHIP ROLES",
    "EXTRACURRICULAR ACTIVITIES",
];

pub const SUMMARY_ALIASES: &[&str] = &[
    "SUMMARY",
    "PROFESSIONAL SUMMARY",
    "PROFILE",
    "OBJECTIVE",
    "CAREER OBJECTIVE",
    "ABOUT ME",
];

/// Every known header spelling, grouped by concept.
pub const SECTION_ALIASES: &[&[&str]] = &[
    EDUCATION_ALIASES,
    EXPERIENCE_ALIASES,
    SKILLS_ALIASES,
    PROJECTS_ALIASES,
    CONTACT_ALIASES,
    CERTIFICATIONS_ALIASES,
    AWARDS_ALIASES,
    PUBLICATIONS_ALIASES,
    LANGUAGES_ALIASES,
    INTERESTS_ALIASES,
    REFERENCES_ALIASES,
    VOLUNTEER_ALIASES,
    LEADERSHIP_ALIASES,
    SUMMARY_ALIASES,
];

/// Keywords required by the formatting-based header heuristic (lower-case).
pub const HEADER_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "contact",
    "certification",
    "award",
    "publication",
    "language",
    "interest",
    "reference",
    "volunteer",
    "leadership",
    "summary",
];

/// Label for body lines seen before any section header.
pub const HEADER_LABEL: &str = "HEADER";

/// Company suffixes that look like "City, ST" but are not locations.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "Inc.", "LLC", "Ltd", "Ltd.", "Corp", "Corp.", "Co", "Co.", "GmbH", "PLC", "LLP",
    "Limited", "Group",
];

// Skill vocabularies

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "C", "C++", "C#", "Go", "Golang", "Rust",
    "Ruby", "PHP", "Swift", "Kotlin", "Scala", "MATLAB", "Perl", "Haskell", "Elixir", "Dart",
    "Lua", "Julia", "Objective-C", "SQL", "HTML", "CSS", "Solidity", "Assembly",
];

pub const WEB_TECHNOLOGIES: &[&str] = &[
    "React", "Angular", "Vue", "Vue.js", "Next.js", "Node.js", "Express", "Django", "Flask",
    "FastAPI", "Spring", "Spring Boot", "Ruby on Rails", "Rails", "ASP.NET", ".NET", "jQuery",
    "Bootstrap", "Tailwind", "GraphQL", "REST", "Svelte", "Sass", "Redux", "WebSockets",
];

pub const DATABASES: &[&str] = &[
    "MySQL", "PostgreSQL", "Postgres", "SQLite", "MongoDB", "Redis", "Cassandra", "DynamoDB",
    "Oracle", "SQL Server", "Elasticsearch", "Firebase", "Neo4j", "MariaDB", "Supabase",
];

pub const CLOUD_DEVOPS: &[&str] = &[
    "AWS", "Azure", "GCP", "Google Cloud", "Docker", "Kubernetes", "Terraform", "Ansible",
    "Jenkins", "CI/CD", "GitHub Actions", "GitLab CI", "Heroku", "Vercel", "Netlify", "Nginx",
    "Helm", "Prometheus", "Grafana", "Kafka", "RabbitMQ",
];

pub const TOOLING: &[&str] = &[
    "Git", "GitHub", "GitLab", "Bitbucket", "Jira", "Confluence", "Postman", "Webpack", "Vite",
    "Figma", "VS Code", "IntelliJ", "Maven", "Gradle", "npm", "Yarn", "Agile", "Scrum",
];

pub const DATA_SCIENCE: &[&str] = &[
    "NumPy", "Pandas", "SciPy", "scikit-learn", "TensorFlow", "PyTorch", "Keras", "Matplotlib",
    "Seaborn", "Spark", "Hadoop", "Jupyter", "OpenCV", "NLTK", "spaCy", "Hugging Face",
    "Tableau", "Power BI", "Excel", "XGBoost", "Machine Learning", "Deep Learning",
];

pub const MOBILE: &[&str] = &[
    "Android", "iOS", "Flutter", "React Native", "SwiftUI", "Xamarin", "Jetpack Compose",
];

pub const OS_SHELL: &[&str] = &[
    "Linux", "Unix", "Windows", "macOS", "Ubuntu", "Bash", "Shell", "PowerShell", "Zsh",
];

/// All skill vocabulary groups.
pub const SKILL_VOCABULARY: &[&[&str]] = &[
    PROGRAMMING_LANGUAGES,
    WEB_TECHNOLOGIES,
    DATABASES,
    CLOUD_DEVOPS,
    TOOLING,
    DATA_SCIENCE,
    MOBILE,
    OS_SHELL,
];

/// Vocabulary terms that are also ordinary words ("go", "rest", "excel").
/// These only match with the exact casing listed.
pub const CASE_SENSITIVE_SKILLS: &[&str] = &[
    "C", "Go", "REST", "Shell", "Excel", "Express", "Spring", "Swift", "Dart", "Rails", "Agile",
];

lazy_static! {
    // Contact shapes
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Bare (555-123-4567), parenthesized area code ((555) 123-4567) and
    // internationally prefixed (+44 20 7946 0958) groupings.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+\d{1,3}[\s.\-]?)?(?:\(\d{2,4}\)|\d{2,4})[\s.\-]?\d{3,4}[\s.\-]?\d{3,4}"
    ).unwrap();

    pub static ref LINKEDIN_URL: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/[^\s|,;]+"
    ).unwrap();

    pub static ref GITHUB_URL: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?github\.com/[^\s|,;]+"
    ).unwrap();

    pub static ref WEBSITE_URL: Regex = Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?[a-z0-9][a-z0-9\-]*(?:\.[a-z0-9\-]+)*\.(?:com|io|dev|me|net|org|app|ai|co|tech|site|xyz)\b(?:/[^\s|,;]*)?"
    ).unwrap();

    // Education
    pub static ref DEGREE: Regex = Regex::new(
        r"(?i)\b(?:bachelor(?:['’]?s)?|master(?:['’]?s)?|ph\.?\s?d|doctor(?:ate)?|mba|associate(?:['’]?s)?\s+(?:of|degree|in)|b\.?\s?tech|m\.?\s?tech|b\.?\s?sc|m\.?\s?sc)\b|\b[bm]\.\s?[sae]\b"
    ).unwrap();

    pub static ref INSTITUTION: Regex = Regex::new(
        r"(?i)\b(?:university|college|institute)\b"
    ).unwrap();

    pub static ref YEAR: Regex = Regex::new(
        r"\b(?:19|20)\d{2}\b"
    ).unwrap();

    pub static ref GPA: Regex = Regex::new(
        r"(?i)\bc?gpa\b(?:\s*(?:of|:|-)?\s*(\d+(?:\.\d+)?(?:\s*/\s*\d+(?:\.\d+)?)?))?"
    ).unwrap();

    pub static ref COURSEWORK: Regex = Regex::new(
        r"(?i)coursework"
    ).unwrap();

    // Experience
    pub static ref JOB_TITLE: Regex = Regex::new(
        r"(?i)\b(?:software\s+engineer|engineer|developer|programmer|designer|manager|analyst|consultant|architect|lead|senior|junior|intern|student|research|researcher|teaching|assistant)\b"
    ).unwrap();

    // "City, ST", "City, State" and "City, Country"
    pub static ref LOCATION: Regex = Regex::new(
        r"^[A-Z][A-Za-z.'\-]*(?:\s[A-Z][A-Za-z.'\-]*)*\s*,\s*(?:[A-Z]{2}|[A-Z][a-z]+(?:\s[A-Z][a-z]+)*)$"
    ).unwrap();

    pub static ref REMOTE: Regex = Regex::new(
        r"(?i)^(?:remote|hybrid)$"
    ).unwrap();

    // Dates: month-name + year, optionally a range ending in a month-year or
    // Present. The month alternation is spelled out so "Marketing 2020" does
    // not read as "Mar 2020".
    pub static ref MONTH_YEAR_RANGE: Regex = Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+((?:19|20)\d{2})\b(?:\s*(?:-|–|—|to)\s*(?:(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+((?:19|20)\d{2})\b|(present|current|now)\b))?"
    ).unwrap();

    // 03/2021, 03/2021 - 06/2022, 03/2021 - Present
    pub static ref NUMERIC_MONTH_YEAR_RANGE: Regex = Regex::new(
        r"(?i)\b(0?[1-9]|1[0-2])/((?:19|20)\d{2})\b(?:\s*(?:-|–|—|to)\s*(?:(0?[1-9]|1[0-2])/((?:19|20)\d{2})\b|(present|current|now)\b))?"
    ).unwrap();

    // 2019 - 2021, 2019 – Present
    pub static ref YEAR_RANGE: Regex = Regex::new(
        r"(?i)\b((?:19|20)\d{2})\s*(?:-|–|—|to)\s*(?:((?:19|20)\d{2})\b|(present|current|now)\b)"
    ).unwrap();

    // Projects
    pub static ref TECHNOLOGIES_LABEL: Regex = Regex::new(
        r"(?i)^\s*(?:technologies|tech\s+stack|tools|stack|built\s+with|using)\s*:\s*(.*)$"
    ).unwrap();

    // Certifications
    pub static ref CERTIFICATION: Regex = Regex::new(
        r"(?i)\b(?:certified|certifications?|certificates?|licen[cs]es?|licensed)\b"
    ).unwrap();

    // Bullet glyph with any surrounding whitespace
    pub static ref BULLET: Regex = Regex::new(
        r"^\s*[•\-*–▪◦●]\s*"
    ).unwrap();

    // Separators between fragments on a single header line
    pub static ref FIELD_SEPARATOR: Regex = Regex::new(
        r"\s*[|•·]\s*"
    ).unwrap();
}

/// Minimum digit count for a phone number; shorter shapes are postal codes
/// ("94105-1234") or date fragments.
pub const PHONE_MIN_DIGITS: usize = 10;

/// Find the first phone-shaped run with enough digits to be a phone number.
pub fn find_phone(text: &str) -> Option<regex::Match<'_>> {
    PHONE.find_iter(text).find(|m| {
        m.as_str().chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_DIGITS
    })
}

/// Check whether `label` (already canonical) is a known section alias.
pub fn is_known_alias(label: &str) -> bool {
    SECTION_ALIASES
        .iter()
        .any(|aliases| aliases.contains(&label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_shapes() {
        for phone in ["555-123-4567", "(555) 123-4567", "+1 555 123 4567", "+44 20 7946 0958", "5551234567"] {
            let m = PHONE.find(phone).unwrap();
            assert_eq!(m.as_str(), phone);
        }

        assert!(!PHONE.is_match("2019-2020"));
        assert!(!PHONE.is_match("94105"));
    }

    #[test]
    fn test_find_phone_skips_postal_codes() {
        assert_eq!(find_phone("San Francisco, CA 94105-1234"), None);
        assert_eq!(
            find_phone("CA 94105-1234 · 555-123-4567").map(|m| m.as_str()),
            Some("555-123-4567")
        );
        assert_eq!(find_phone("+44 20 7946 0958").map(|m| m.as_str()), Some("+44 20 7946 0958"));
    }

    #[test]
    fn test_degree_vocabulary() {
        for line in [
            "Bachelor of Science in CS",
            "Master's in Data Science",
            "PhD, Physics",
            "Ph.D. Computer Science",
            "B.S. Computer Science",
            "M.A. Economics",
            "B.Tech in Electronics",
            "MSc Statistics",
        ] {
            assert!(DEGREE.is_match(line), "{line}");
        }

        for line in ["MIT, Cambridge, MA", "Mastercard Scholarship", "Worked with me"] {
            assert!(!DEGREE.is_match(line), "{line}");
        }
    }

    #[test]
    fn test_month_year_does_not_match_words() {
        assert!(MONTH_YEAR_RANGE.is_match("Jan 2021"));
        assert!(MONTH_YEAR_RANGE.is_match("September 2019 - Present"));
        assert!(!MONTH_YEAR_RANGE.is_match("Marketing 2020"));
        assert!(!MONTH_YEAR_RANGE.is_match("Mayor 2020"));
    }

    #[test]
    fn test_location_shapes() {
        assert!(LOCATION.is_match("San Francisco, CA"));
        assert!(LOCATION.is_match("Austin, Texas"));
        assert!(LOCATION.is_match("London, United Kingdom"));
        assert!(!LOCATION.is_match("Acme Corp"));
        assert!(!LOCATION.is_match("Built APIs, tested them"));
    }

    #[test]
    fn test_known_alias() {
        assert!(is_known_alias("ACADEMIC BACKGROUND"));
        assert!(is_known_alias("VOLUNTEER EXPERIENCE"));
        assert!(!is_known_alias("Education"));
    }
}
