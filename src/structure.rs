//! Output file names for the course variant of a template

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names for the three course pages derived from one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateStructure {
    pub main: String,
    pub video: String,
    pub podcast: String,
}

impl TemplateStructure {
    /// Role/file pairs in fixed order: main, video, podcast
    pub fn roles(&self) -> [(&'static str, &str); 3] {
        [
            ("main", self.main.as_str()),
            ("video", self.video.as_str()),
            ("podcast", self.podcast.as_str()),
        ]
    }
}

/// Propose the course file names for `template_name`.
///
/// `template_dir` is accepted for call-site symmetry with the inspector but
/// does not influence the result; nothing is read or written.
pub fn create_template_structure(template_name: &str, _template_dir: &Path) -> TemplateStructure {
    TemplateStructure {
        main: format!("{}-course.html", template_name),
        video: format!("{}-course-video.html", template_name),
        podcast: format!("{}-course-podcast.html", template_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_landing_structure() {
        let structure = create_template_structure("landing", Path::new("templates/landing"));

        assert_eq!(structure.main, "landing-course.html");
        assert_eq!(structure.video, "landing-course-video.html");
        assert_eq!(structure.podcast, "landing-course-podcast.html");
    }

    #[test]
    fn test_directory_is_ignored() {
        let a = create_template_structure("landing", Path::new("/tmp/a"));
        let b = create_template_structure("landing", &PathBuf::from("/does/not/exist"));
        let c = create_template_structure("landing", Path::new(""));

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_empty_name() {
        let structure = create_template_structure("", Path::new("."));

        assert_eq!(structure.main, "-course.html");
        assert_eq!(structure.video, "-course-video.html");
        assert_eq!(structure.podcast, "-course-podcast.html");
    }

    #[test]
    fn test_numbered_template_name() {
        let structure = create_template_structure("2138_aqua_nova", Path::new("."));
        assert_eq!(structure.main, "2138_aqua_nova-course.html");
    }

    #[test]
    fn test_roles_order() {
        let structure = create_template_structure("x", Path::new("."));
        let roles: Vec<&str> = structure.roles().iter().map(|(role, _)| *role).collect();

        assert_eq!(roles, vec!["main", "video", "podcast"]);
        assert_eq!(structure.roles()[1].1, "x-course-video.html");
    }
}
