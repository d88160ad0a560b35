//! Compiled-in portfolio content.
//!
//! Built once on first access and shared for the lifetime of the process.

use std::sync::OnceLock;

use super::model::{Education, Experience, PortfolioContent, Profile, Project, SocialLink};

static BUILTIN_CONTENT: OnceLock<PortfolioContent> = OnceLock::new();

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the portfolio displayed by the desktop.
pub fn builtin_content() -> &'static PortfolioContent {
    BUILTIN_CONTENT.get_or_init(|| PortfolioContent {
        profile: Profile {
            name: "Alex Johnson".into(),
            title: "Full Stack Developer & UI/UX Designer".into(),
            email: "alex.johnson@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            bio: "Passionate full-stack developer with 5+ years of experience creating elegant, \
                  user-centered digital experiences. Specialized in React, Node.js, and modern \
                  design systems."
                .into(),
            extended_bio: strings(&[
                "With a passion for creating seamless digital experiences, I've spent the last \
                 five years developing applications that solve real-world problems. My approach \
                 combines technical excellence with user-centered design principles to deliver \
                 products that are both functional and beautiful.",
                "I specialize in full-stack development with a focus on modern JavaScript \
                 frameworks, cloud infrastructure, and responsive design. When I'm not coding, \
                 you can find me contributing to open-source projects, speaking at tech \
                 conferences, or mentoring aspiring developers.",
            ]),
            skills: strings(&[
                "React",
                "Node.js",
                "TypeScript",
                "Python",
                "MongoDB",
                "AWS",
                "Docker",
                "GraphQL",
                "UI/UX Design",
                "Responsive Design",
            ]),
            social_links: vec![
                SocialLink {
                    label: "GitHub".into(),
                    url: "#".into(),
                },
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "#".into(),
                },
                SocialLink {
                    label: "Twitter".into(),
                    url: "#".into(),
                },
                SocialLink {
                    label: "Mail".into(),
                    url: "mailto:alex.johnson@example.com".into(),
                },
            ],
        },
        projects: vec![
            Project {
                id: 1,
                name: "E-Commerce Platform".into(),
                category: "Web Development".into(),
                description: "A full-featured e-commerce platform with payment integration, \
                              inventory management, and analytics dashboard."
                    .into(),
                technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                image: "https://placehold.co/400x250/6366f1/ffffff?text=E-Commerce+Platform".into(),
                demo: "https://example.com/ecommerce".into(),
                github: "https://github.com/example/ecommerce".into(),
            },
            Project {
                id: 2,
                name: "Health & Fitness App".into(),
                category: "Mobile Development".into(),
                description: "Mobile application for tracking workouts, nutrition, and health \
                              metrics with social features."
                    .into(),
                technologies: strings(&["React Native", "Firebase", "Redux", "Apple Health API"]),
                image: "https://placehold.co/400x250/10b981/ffffff?text=Fitness+App".into(),
                demo: "https://example.com/fitness".into(),
                github: "https://github.com/example/fitness-app".into(),
            },
            Project {
                id: 3,
                name: "Data Analytics Dashboard".into(),
                category: "Data Science".into(),
                description: "Interactive dashboard for visualizing complex data sets with \
                              real-time updates and predictive analytics."
                    .into(),
                technologies: strings(&[
                    "Python",
                    "Django",
                    "PostgreSQL",
                    "D3.js",
                    "Machine Learning",
                ]),
                image: "https://placehold.co/400x250/f59e0b/ffffff?text=Analytics+Dashboard"
                    .into(),
                demo: "https://example.com/analytics".into(),
                github: "https://github.com/example/analytics".into(),
            },
            Project {
                id: 4,
                name: "Design System".into(),
                category: "UI/UX Design".into(),
                description: "Comprehensive design system with component library, style guide, \
                              and accessibility standards."
                    .into(),
                technologies: strings(&["Figma", "React", "Storybook", "Accessibility"]),
                image: "https://placehold.co/400x250/ec4899/ffffff?text=Design+System".into(),
                demo: "https://example.com/design-system".into(),
                github: "https://github.com/example/design-system".into(),
            },
        ],
        experience: vec![
            Experience {
                company: "Tech Innovations Inc.".into(),
                position: "Senior Full Stack Developer".into(),
                duration: "2020 - Present".into(),
                description: "Lead development of enterprise web applications, mentor junior \
                              developers, and implement modern architecture patterns."
                    .into(),
            },
            Experience {
                company: "Digital Solutions LLC".into(),
                position: "Frontend Developer".into(),
                duration: "2018 - 2020".into(),
                description: "Developed responsive web applications, improved performance by \
                              40%, and implemented new UI features."
                    .into(),
            },
            Experience {
                company: "Startup Ventures".into(),
                position: "Full Stack Developer".into(),
                duration: "2016 - 2018".into(),
                description: "Built MVP products for startups, worked across the entire tech \
                              stack, and collaborated with product teams."
                    .into(),
            },
        ],
        education: vec![
            Education {
                institution: "Stanford University".into(),
                degree: "Master of Science in Computer Science".into(),
                year: "2016".into(),
                description: "Specialized in Human-Computer Interaction and Software Engineering"
                    .into(),
            },
            Education {
                institution: "University of California".into(),
                degree: "Bachelor of Science in Computer Science".into(),
                year: "2014".into(),
                description: "Graduated with honors, member of ACM".into(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_initialized_once() {
        let first = builtin_content() as *const PortfolioContent;
        let second = builtin_content() as *const PortfolioContent;
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_content_shape() {
        let content = builtin_content();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.profile.skills.len(), 10);
        assert_eq!(content.profile.extended_bio.len(), 2);
        assert_eq!(content.profile.initials(), "AJ");
    }

    #[test]
    fn test_line_continuations_collapse_whitespace() {
        let bio = &builtin_content().profile.bio;
        assert!(!bio.contains("  "));
        assert!(bio.contains("elegant, user-centered"));
    }

    #[test]
    fn test_project_ids_are_unique() {
        let content = builtin_content();
        let mut ids: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.projects.len());
    }
}
