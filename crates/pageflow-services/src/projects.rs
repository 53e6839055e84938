//! Static project listing shown on the projects page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub featured: bool,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Hsr Cloud Website",
        description: "A modern personal navigation website.",
        link: "https://github.com/PeterFujiyu/www-yshsr-org",
        featured: true,
    },
    Project {
        title: "Geektools",
        description: "A project to run shell script and download plugin with Rust.",
        link: "https://github.com/PeterFujiyu/geektools",
        featured: true,
    },
    Project {
        title: "Geektools Plugin Marketplace",
        description: "A project to run a Geektools Plugin Marketplace Server with Rust.",
        link: "https://github.com/PeterFujiyu/pluginmarket",
        featured: true,
    },
    Project {
        title: "More?",
        description: "Wait and see...",
        link: "https://github.com/PeterFujiyu",
        featured: false,
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_come_first() {
        let listing = projects();
        assert!(listing.len() >= 3);
        assert!(listing[0].featured);
    }
}
