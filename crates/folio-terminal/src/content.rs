//! Fixed portfolio copy: section text, the fake file listing, and the
//! project catalog behind `project list` / `project info`.

/// `about` section copy.
pub const ABOUT: &str =
    "Hi there! I am a passionate developer with a focus on frontend technologies.";

/// `skills` section copy.
pub const SKILLS: &str = "JavaScript, TypeScript, React, Node.js, CSS, HTML";

/// `projects` hint pointing at the catalog commands.
pub const PROJECTS_HINT: &str = "Run `project list` to view my projects.";

/// `contact` block (two lines in one entry).
pub const CONTACT: &str = "Email: example@email.com\nLinkedIn: linkedin.com/in/yourname";

/// Fake file listing shown by `ls`.
pub const FILE_LISTING: &str = "about.md\nprojects.json\nskills.js\ncontact.tsx\nresume.pdf";

/// `whoami` copy.
pub const WHOAMI: &str = "Developer [Portfolio Owner]";

/// Greeting emitted by `hello`.
pub const HELLO: &str = "Hello! How can I help you today?";

/// Profile URL opened by `github`.
pub const GITHUB_URL: &str = "https://github.com/yourusername";

/// Command list emitted by `help`.
pub const HELP: &str = "Available commands: about, skills, projects, contact, clear, ls, echo, \
                        date, github, theme, hello, whoami, figlet";

/// A portfolio project shown by the catalog commands.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

/// The fixed project catalog, in display order.
pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform with product catalog, shopping cart, \
                      and payment processing",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        github: "https://github.com/yourusername/ecommerce",
        demo: Some("https://ecommerce-demo.com"),
    },
    Project {
        title: "Task Management App",
        description: "A productivity application for managing tasks, projects and team \
                      collaboration",
        technologies: &["Vue.js", "Firebase", "Tailwind CSS"],
        github: "https://github.com/yourusername/taskmanager",
        demo: Some("https://task-app-demo.com"),
    },
    Project {
        title: "Weather Dashboard",
        description: "A weather application showing forecasts and historical data with \
                      interactive visualizations",
        technologies: &["React", "D3.js", "Weather API", "Styled Components"],
        github: "https://github.com/yourusername/weather-dashboard",
        demo: None,
    },
];

/// Look up a project by its 1-based catalog number.
pub fn project(number: u8) -> Option<&'static Project> {
    match number {
        1..=3 => Some(&PROJECTS[usize::from(number) - 1]),
        _ => None,
    }
}

impl Project {
    /// The detail lines emitted by `project info`.
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("=== {} ===", self.title),
            format!("Description: {}", self.description),
            format!("Technologies: {}", self.technologies.join(", ")),
            format!("GitHub: {}", self.github),
        ];
        if let Some(demo) = self.demo {
            lines.push(format!("Demo: {demo}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_lookup_in_range() {
        assert_eq!(project(1).unwrap().title, "E-commerce Platform");
        assert_eq!(project(3).unwrap().title, "Weather Dashboard");
    }

    #[test]
    fn project_lookup_out_of_range() {
        assert!(project(0).is_none());
        assert!(project(4).is_none());
    }

    #[test]
    fn info_lines_include_demo_when_present() {
        let lines = project(1).unwrap().info_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "=== E-commerce Platform ===");
        assert_eq!(lines[4], "Demo: https://ecommerce-demo.com");
    }

    #[test]
    fn info_lines_omit_missing_demo() {
        let lines = project(3).unwrap().info_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| !l.starts_with("Demo:")));
    }

    #[test]
    fn technologies_join() {
        let lines = project(2).unwrap().info_lines();
        assert_eq!(lines[2], "Technologies: Vue.js, Firebase, Tailwind CSS");
    }
}
