/// Entry in the project gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub github_url: &'static str,
    pub demo_image: &'static str,
    pub features: &'static [&'static str],
}

const GITHUB_PROFILE: &str = "https://github.com/ayushbhardwaj683";
const DEMO_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=500";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Distributed Task Scheduler",
        description: "A scalable microservices-based task scheduling system with Redis queue management and Docker containerization.",
        long_description: "This project implements a highly scalable distributed task scheduling system using microservices architecture. It features Redis-based queue management, Docker containerization, and real-time monitoring capabilities. The system can handle thousands of concurrent tasks with automatic load balancing and fault tolerance.",
        tech: &["Node.js", "Redis", "Docker", "PostgreSQL"],
        github_url: GITHUB_PROFILE,
        demo_image: DEMO_PLACEHOLDER,
        features: &["Real-time monitoring", "Auto-scaling", "Fault tolerance", "Load balancing"],
    },
    Project {
        id: 2,
        title: "Real-time Analytics Dashboard",
        description: "Full-stack application with WebSocket integration for live data visualization and user activity tracking.",
        long_description: "A comprehensive real-time analytics platform built with modern web technologies. Features live data streaming, interactive charts, user behavior tracking, and customizable dashboards. Supports multiple data sources and provides real-time insights for business intelligence.",
        tech: &["React", "Express.js", "Socket.io", "MongoDB"],
        github_url: GITHUB_PROFILE,
        demo_image: DEMO_PLACEHOLDER,
        features: &["Live data streaming", "Interactive charts", "Custom dashboards", "Multi-source integration"],
    },
    Project {
        id: 3,
        title: "API Gateway & Auth Service",
        description: "Secure API gateway with JWT authentication, rate limiting, and comprehensive logging for microservices.",
        long_description: "Enterprise-grade API gateway solution with advanced security features. Implements JWT-based authentication, intelligent rate limiting, request/response transformation, and comprehensive audit logging. Designed for high-throughput microservices environments.",
        tech: &["Express.js", "JWT", "Redis", "Docker"],
        github_url: GITHUB_PROFILE,
        demo_image: DEMO_PLACEHOLDER,
        features: &["JWT Authentication", "Rate limiting", "Request transformation", "Audit logging"],
    },
    Project {
        id: 4,
        title: "Cloud Infrastructure Automation",
        description: "Infrastructure as Code solution using Terraform and CI/CD pipelines for automated deployments.",
        long_description: "Complete Infrastructure as Code solution for cloud deployment automation. Features Terraform modules, CI/CD pipeline integration, automated testing, and multi-environment management. Supports AWS, Azure, and GCP with cost optimization and security best practices.",
        tech: &["Terraform", "AWS", "GitHub Actions", "Docker"],
        github_url: GITHUB_PROFILE,
        demo_image: DEMO_PLACEHOLDER,
        features: &["Multi-cloud support", "Cost optimization", "Automated testing", "Security compliance"],
    },
];

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Which project, if any, the detail modal is showing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectModal {
    selected: Option<&'static Project>,
}

impl ProjectModal {
    /// Select a project by id. Unknown ids leave the modal as it was.
    pub fn open(&mut self, id: u32) -> Option<&'static Project> {
        let project = project_by_id(id)?;
        self.selected = Some(project);
        Some(project)
    }

    /// Click on a project card. Clicks that land on a link inside the card
    /// (the card's GitHub shortcut) follow the link and leave the modal alone.
    pub fn on_card_click(&mut self, id: u32, on_link: bool) -> Option<&'static Project> {
        if on_link {
            return None;
        }
        self.open(id)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
