// Static portfolio content.
// The biographical tabs and the hard-coded substitute data shown whenever
// live GitHub data is unavailable.

use crate::showcase::Project;

/// The GitHub account this portfolio showcases.
pub const USERNAME: &str = "nshantha";

pub const DISPLAY_NAME: &str = "Nitesh";

pub const TAGLINE: &str =
    "Software Engineer specializing in distributed systems, microservices architecture, and AI/ML applications.";

pub const ABOUT: [&str; 2] = [
    "Hello! I'm Nitesh, a Software Engineer at Nordstrom specializing in high-throughput distributed systems and AI/ML applications. My background spans robotics, event-driven microservices, and applied machine learning.",
    "I'm passionate about solving complex engineering challenges and continuously exploring emerging technologies.",
];

pub const SKILLS: [&str; 8] = [
    "Python",
    "Go",
    "Rust",
    "Kafka",
    "Kubernetes",
    "AWS",
    "Machine Learning",
    "Distributed Systems",
];

pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        position: "Software Engineer",
        company: "Nordstrom, Seattle",
        summary: "High-throughput distributed systems powering retail platforms; event streaming, service reliability, and applied ML.",
    },
    Experience {
        position: "Research Assistant",
        company: "University at Buffalo, NY",
        summary: "Robot localization and perception research; probabilistic filtering over noisy sensor data.",
    },
    Experience {
        position: "Software Engineer",
        company: "Ak Aerotek, Bengaluru, India",
        summary: "Embedded and backend software for aerospace test tooling.",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub summary: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "M.S. in Engineering Sciences (Robotics)",
        school: "University at Buffalo, NY",
        summary: "Perception, planning, and probabilistic robotics.",
    },
    Education {
        degree: "B.E. in Electronics and Communication",
        school: "Visvesvaraya Technological University",
        summary: "Studied electronics, communication systems, and computational engineering.",
    },
];

pub struct BlogPost {
    pub title: &'static str,
    pub url: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 2] = [
    BlogPost {
        title: "What Only Humans Can Do..",
        url: "https://nitesh.bearblog.dev/what-only-humans-can-do/",
    },
    BlogPost {
        title: "AI, the RUSH",
        url: "https://nitesh.bearblog.dev/ai-the-rush/",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/nshantha",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/niteshs1001/",
    },
    SocialLink {
        label: "Blog",
        url: "https://nitesh.bearblog.dev",
    },
];

/// Substitute projects shown when the live pipeline yields nothing.
pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "SqlAI".to_string(),
            description: "A SQL query generator powered by AI that helps users create complex database queries using natural language input.".to_string(),
            technologies: string_vec(&["Python", "AI/ML", "SQL", "Natural Language Processing"]),
            source_url: "https://github.com/nshantha/SqlAI".to_string(),
            demo_url: None,
            featured: false,
        },
        Project {
            id: 2,
            title: "AI Research Assistant".to_string(),
            description: "An AI-powered research assistant that helps researchers find and summarize academic papers, generate insights, and track research progress.".to_string(),
            technologies: string_vec(&["Python", "AI/ML", "NLP", "PDF Processing"]),
            source_url: "https://github.com/nshantha/ai_research_assistant".to_string(),
            demo_url: None,
            featured: false,
        },
        Project {
            id: 3,
            title: "CyberSageAI".to_string(),
            description: "An intelligent cybersecurity assistant that uses ML techniques to detect and respond to security threats and vulnerabilities.".to_string(),
            technologies: string_vec(&["Jupyter Notebook", "Python", "TensorFlow", "Cybersecurity"]),
            source_url: "https://github.com/nshantha/CyberSageAI".to_string(),
            demo_url: None,
            featured: false,
        },
        Project {
            id: 4,
            title: "Neo4jAI".to_string(),
            description: "A graph database integration with AI capabilities for intelligent relationship mapping and knowledge representation using Neo4j.".to_string(),
            technologies: string_vec(&["Python", "Neo4j", "Graph Databases", "AI/ML"]),
            source_url: "https://github.com/nshantha/Neo4jAI".to_string(),
            demo_url: None,
            featured: false,
        },
        Project {
            id: 5,
            title: "Grid Localization With Bayes Filter".to_string(),
            description: "Implementation of grid localization for robots using Bayes filter to find the most probable location based on sensor data and predefined object tags.".to_string(),
            technologies: string_vec(&["Python", "Robotics", "Bayes Filter", "Localization"]),
            source_url: "https://github.com/nshantha/Grid-Localization-With-Bayes-Filter".to_string(),
            demo_url: Some("https://github.com/nshantha/Grid-Localization-With-Bayes-Filter".to_string()),
            featured: false,
        },
        Project {
            id: 6,
            title: "Realtor Agent".to_string(),
            description: "An AI-powered realtor assistant that helps agents and clients find, evaluate, and manage real estate properties.".to_string(),
            technologies: string_vec(&["Python", "AI/ML", "Real Estate", "NLP"]),
            source_url: "https://github.com/nshantha/realtor-agent".to_string(),
            demo_url: None,
            featured: false,
        },
    ]
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
