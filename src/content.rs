//! Portfolio content.
//!
//! Static records handed to the section views. The engine never mutates
//! them; views only read.

/// A top-level section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Element id used for viewport observation.
    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Section bound to a digit key (1-based, page order).
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub name: &'static str,
    pub caption: &'static str,
    pub tagline: &'static str,
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub greeting: &'static str,
    pub avatar: &'static str,
    pub paragraphs: &'static [&'static str],
    pub interests: &'static [Interest],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0-100
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    /// Gradient endpoints as RGB
    pub gradient: [(u8, u8, u8); 2],
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub made_by: &'static str,
    pub copyright: &'static str,
}

/// Everything the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portfolio {
    pub initials: &'static str,
    pub resume_url: &'static str,
    pub hero: Hero,
    pub about: About,
    pub projects_intro: &'static str,
    pub projects: &'static [Project],
    pub skills_intro: &'static str,
    pub skill_categories: &'static [SkillCategory],
    pub skills_summary: (&'static str, &'static str),
    pub footer: Footer,
}

impl Portfolio {
    /// Find a skill category by title.
    pub fn category(&self, title: &str) -> Option<&SkillCategory> {
        self.skill_categories.iter().find(|c| c.title == title)
    }

    /// Find a project by title.
    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }
}

/// The portfolio shown by the application.
pub static PORTFOLIO: Portfolio = Portfolio {
    initials: "PN",
    resume_url: "https://drive.google.com/file/d/1GiI6_uCtQdGDB3PpIcbzdulO48sUEab7/view?usp=sharing",
    hero: Hero {
        name: "Prarthana Nayak",
        caption: "Full Stack Developer & AI Enthusiast",
        tagline: "Passionate about creating innovative solutions through code, exploring the frontiers of AI, and building digital experiences that make a difference.",
        actions: &["View My Work", "Download Resume", "Get In Touch"],
    },
    about: About {
        greeting: "Hello! I'm Prarthana Nayak",
        avatar: "💻",
        paragraphs: &[
            "A passionate full-stack developer with a deep love for creating innovative solutions that bridge the gap between technology and human needs. With over 5 years of experience in software development, I specialize in building scalable web applications and exploring the fascinating world of artificial intelligence.",
            "When I'm not coding, you'll find me diving into the latest AI research papers, contributing to open-source projects, or experimenting with new technologies. I believe in the power of continuous learning and the importance of building technology that makes the world a better place.",
        ],
        interests: &[
            Interest {
                icon: "🧠",
                title: "AI/ML",
                description: "Machine learning, deep learning, and artificial intelligence applications",
            },
            Interest {
                icon: "🗄",
                title: "Data Science",
                description: "Data analysis, visualization, and deriving insights from complex datasets",
            },
            Interest {
                icon: "⌨",
                title: "Web Development",
                description: "Full-stack development with modern frameworks and technologies",
            },
        ],
    },
    projects_intro: "Here are some of my recent projects that showcase my skills and passion for development",
    projects: &[
        Project {
            title: "AI-Powered Task Manager",
            description: "A smart task management application that uses machine learning to prioritize tasks and predict completion times. Built with React, Node.js, and TensorFlow.js.",
            technologies: &["React", "Node.js", "TensorFlow.js", "MongoDB"],
            github: "https://github.com",
            demo: "https://demo.com",
            featured: true,
        },
        Project {
            title: "Real-time Analytics Dashboard",
            description: "A comprehensive analytics dashboard with real-time data visualization, custom charts, and interactive filters. Perfect for business intelligence.",
            technologies: &["Vue.js", "D3.js", "Express", "PostgreSQL"],
            github: "https://github.com",
            demo: "https://demo.com",
            featured: false,
        },
        Project {
            title: "E-commerce Platform",
            description: "A modern e-commerce solution with payment integration, inventory management, and admin dashboard. Fully responsive and optimized for performance.",
            technologies: &["Next.js", "Stripe", "Prisma", "PostgreSQL"],
            github: "https://github.com",
            demo: "https://demo.com",
            featured: false,
        },
        Project {
            title: "Social Media Sentiment Analyzer",
            description: "An AI-powered tool that analyzes social media posts for sentiment analysis using natural language processing and provides detailed insights.",
            technologies: &["Python", "FastAPI", "NLTK", "React"],
            github: "https://github.com",
            demo: "https://demo.com",
            featured: false,
        },
    ],
    skills_intro: "Here are the technologies and tools I work with to bring ideas to life",
    skill_categories: &[
        SkillCategory {
            title: "Languages",
            icon: "</>",
            gradient: [(59, 130, 246), (6, 182, 212)],
            skills: &[
                Skill { name: "JavaScript", level: 95, icon: "🟨" },
                Skill { name: "TypeScript", level: 90, icon: "🔷" },
                Skill { name: "Python", level: 88, icon: "🐍" },
                Skill { name: "Java", level: 80, icon: "☕" },
            ],
        },
        SkillCategory {
            title: "Frontend",
            icon: "◎",
            gradient: [(168, 85, 247), (236, 72, 153)],
            skills: &[
                Skill { name: "React", level: 95, icon: "⚛" },
                Skill { name: "Vue.js", level: 85, icon: "💚" },
                Skill { name: "Next.js", level: 90, icon: "▲" },
                Skill { name: "Tailwind CSS", level: 92, icon: "🎨" },
            ],
        },
        SkillCategory {
            title: "Backend",
            icon: "⛁",
            gradient: [(34, 197, 94), (16, 185, 129)],
            skills: &[
                Skill { name: "Node.js", level: 90, icon: "🟢" },
                Skill { name: "Express", level: 88, icon: "🚀" },
                Skill { name: "FastAPI", level: 85, icon: "⚡" },
                Skill { name: "PostgreSQL", level: 87, icon: "🐘" },
            ],
        },
        SkillCategory {
            title: "Tools & Cloud",
            icon: "☁",
            gradient: [(249, 115, 22), (239, 68, 68)],
            skills: &[
                Skill { name: "Git", level: 95, icon: "📝" },
                Skill { name: "Docker", level: 82, icon: "🐳" },
                Skill { name: "AWS", level: 78, icon: "☁" },
                Skill { name: "Vercel", level: 90, icon: "▲" },
            ],
        },
    ],
    skills_summary: (
        "Always Learning, Always Growing",
        "Technology evolves rapidly, and so do I. I'm constantly exploring new frameworks, tools, and methodologies to stay at the forefront of development and deliver cutting-edge solutions.",
    ),
    footer: Footer {
        made_by: "Made with ♥ by Prarthana Nayak",
        copyright: "© 2025 Prarthana Nayak. All rights reserved.",
    },
};
