use crate::content::icons::Icon;
use crate::content::models::{
    Certification, Contact, Education, Experience, Language, Profile, Project, Service,
    SkillCategory, SocialLink, Stat,
};

const ABOUT: &str = "I am a cybersecurity specialist with a strong focus on Red Team and Blue Team practices, ethical hacking, and security auditing. My experience includes vulnerability assessment, system hardening, penetration testing, and analyzing real-world attack vectors across networks, web applications, and cloud environments. I approach security from both the attacker and defender mindset, allowing me to identify weaknesses and design practical mitigation strategies.

Alongside my security expertise, I work as a backend and web developer with proficiency in Python, Django, HTML, CSS/SCSS, and API-based system integration. I build structured, reliable components such as admin panels, Telegram bots, and service miniapps, with security as a foundational principle rather than an afterthought.

I am driven by solving complex technical problems, strengthening digital systems, and creating secure, efficient tools that support both business goals and user needs.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    /// The record compiled into the binary, used when no `CONTENT_PATH` is configured.
    pub fn builtin() -> Self {
        Profile {
            name: "Aider".to_string(),
            avatar: None,
            title: "Cybersecurity Specialist & Backend Developer".to_string(),
            tagline: "Bridging the gap between offensive security operations and secure backend architecture.".to_string(),
            about: ABOUT.to_string(),
            stats: vec![
                stat("Years Experience", "4+"),
                stat("Projects Shipped", "30+"),
                stat("Tech Stack", "15+"),
                stat("Certifications", "3"),
            ],
            services: vec![
                Service {
                    id: "srv-1".to_string(),
                    title: "IT Infrastructure & Security".to_string(),
                    description: "Network security protocols, system administration, and web penetration testing using Kali Linux.".to_string(),
                    icon: Icon::Shield,
                },
                Service {
                    id: "srv-2".to_string(),
                    title: "Data & Financial Analytics".to_string(),
                    description: "Advanced data analysis, financial reporting, and workflow optimization using Python and Excel.".to_string(),
                    icon: Icon::Chart,
                },
                Service {
                    id: "srv-3".to_string(),
                    title: "Digital Media & Video".to_string(),
                    description: "Professional video editing, content creation, and motion graphics using Adobe Premiere and CapCut.".to_string(),
                    icon: Icon::Video,
                },
            ],
            skills: vec![
                SkillCategory {
                    category: "Core Technologies".to_string(),
                    skills: strings(&["JavaScript", "HTML5", "CSS3/SCSS", "Python"]),
                    icon: Icon::Code,
                },
                SkillCategory {
                    category: "Video Editing".to_string(),
                    skills: strings(&["CapCut", "Adobe Premiere Pro"]),
                    icon: Icon::Video,
                },
                SkillCategory {
                    category: "Web Penetration".to_string(),
                    skills: strings(&["Kali Linux"]),
                    icon: Icon::Shield,
                },
                SkillCategory {
                    category: "Tools & DevOps".to_string(),
                    skills: strings(&["Git", "Docker", "Figma"]),
                    icon: Icon::Tool,
                },
                SkillCategory {
                    category: "IT Support & Operations".to_string(),
                    skills: strings(&["Microsoft Office", "Windows OS Mgmt", "Problem Solving"]),
                    icon: Icon::Cpu,
                },
            ],
            experience: vec![
                Experience {
                    id: "exp-3".to_string(),
                    role: "IT Specialist".to_string(),
                    company: "British Management University".to_string(),
                    period: "Sep 2024 - Mar 2025".to_string(),
                    description: "Managed campus IT infrastructure and provided technical support for faculty and students. Optimized learning management systems and oversaw network security protocols to ensure seamless academic operations.".to_string(),
                    skills: strings(&["System Admin", "Network Security", "LMS", "IT Support"]),
                },
                Experience {
                    id: "exp-2".to_string(),
                    role: "Accounting Department Intern".to_string(),
                    company: "Qanot Sharq".to_string(),
                    period: "Jun 2024 - Jul 2024".to_string(),
                    description: "Assisted with financial data analysis and reporting. Streamlined spreadsheet workflows and collaborated with the finance team on month-end closing procedures and documentation.".to_string(),
                    skills: strings(&["Data Analysis", "Excel", "Financial Reporting", "Auditing"]),
                },
                Experience {
                    id: "exp-1".to_string(),
                    role: "IT Intern".to_string(),
                    company: "Ipoteka Bank".to_string(),
                    period: "May 2021 - Jun 2021".to_string(),
                    description: "Provided technical assistance for banking software systems. Supported the IT team in hardware maintenance, network troubleshooting, and database management tasks.".to_string(),
                    skills: strings(&["Technical Support", "Banking Systems", "Networking", "Database Mgmt"]),
                },
            ],
            education: vec![Education {
                id: "edu-1".to_string(),
                degree: "Bachelor of Science in Accounting & Finance".to_string(),
                institution: "British Management University".to_string(),
                period: "2021 - 2026".to_string(),
                description: Some(
                    "Integrating financial principles with technical system analysis and secure data management.".to_string(),
                ),
            }],
            certifications: vec![
                certification("cert-3", "Connect and Protect: Networks and Network Security"),
                certification("cert-2", "Tools of the Trade: Linux and SQL"),
                certification("cert-1", "Foundations of Cybersecurity"),
            ],
            languages: vec![
                Language {
                    language: "English".to_string(),
                    proficiency: "Professional Working".to_string(),
                },
                Language {
                    language: "Russian".to_string(),
                    proficiency: "Native / Bilingual".to_string(),
                },
            ],
            projects: vec![
                Project {
                    id: "proj-1".to_string(),
                    title: "IT Service Automation Suite".to_string(),
                    description: "Developed a secure ecosystem combining a Telegram bot for support tickets and a Django admin panel for asset tracking, improving response times by 60%.".to_string(),
                    tech: strings(&["Python", "Django", "Telegram API", "PostgreSQL"]),
                    link: None,
                    image: Some("https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=800".to_string()),
                },
                Project {
                    id: "proj-2".to_string(),
                    title: "Network Vulnerability Scanner".to_string(),
                    description: "Built custom Python tools integrated with Kali Linux to automate reconnaissance, port scanning, and vulnerability assessment reports for simulated red team ops.".to_string(),
                    tech: strings(&["Kali Linux", "Python", "Bash", "Network Security"]),
                    link: None,
                    image: Some("https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=800".to_string()),
                },
                Project {
                    id: "proj-3".to_string(),
                    title: "Multimedia Content Production".to_string(),
                    description: "Produced and edited a series of high-quality technical explainer videos and corporate promotional content using advanced motion graphics.".to_string(),
                    tech: strings(&["Adobe Premiere", "CapCut", "Motion Graphics", "Storyboarding"]),
                    link: None,
                    image: Some("https://images.unsplash.com/photo-1626814026160-2237a95fc5a0?auto=format&fit=crop&q=80&w=800".to_string()),
                },
            ],
            testimonials: vec![],
            contact: Contact {
                email: "aiderparmankulov@gmail.com".to_string(),
                phone: None,
                location: Some("Uzbekistan".to_string()),
                socials: vec![
                    social("GitHub", "https://github.com", Icon::Github),
                    social(
                        "LinkedIn",
                        "https://www.linkedin.com/in/aider-parmankulov-478b18205",
                        Icon::Linkedin,
                    ),
                    social("Telegram", "https://t.me/Air_A_P", Icon::Telegram),
                ],
            },
        }
    }
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn certification(id: &str, name: &str) -> Certification {
    Certification {
        id: id.to_string(),
        name: name.to_string(),
        issuer: "Google / Coursera".to_string(),
        year: "2025".to_string(),
        url: None,
    }
}

fn social(platform: &str, url: &str, icon: Icon) -> SocialLink {
    SocialLink {
        platform: platform.to_string(),
        url: url.to_string(),
        icon,
    }
}
