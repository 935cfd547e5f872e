//! Course recommendation lookup
//!
//! Maps an experience level to a fixed course and renders it as text.

pub mod catalog;

pub use catalog::{CourseRecommendation, ExperienceLevel};

const WHY_THIS_COURSE: &str = "This course matches your current experience level and builds \
the skills you need for the next step, with practical projects throughout.";

const NEXT_STEPS: &str = "Enroll in the course, set aside regular weekly study time, and build \
a small project alongside the lessons to put each topic into practice.";

/// Render the recommendation for `level`
pub fn recommend(level: ExperienceLevel) -> String {
    let course = level.course();

    let mut text = String::from("Course Recommendation\n\n");
    text.push_str(&format!("Title: {}\n", course.title));
    text.push_str(&format!("Level: {}\n", level.label()));
    text.push_str(&format!("Description: {}\n", course.description));
    text.push_str(&format!("Duration: {}\n", course.duration));
    text.push_str(&format!("Prerequisites: {}\n", course.prerequisites));

    text.push_str("\nTopics Covered:\n");
    for (i, topic) in course.topics.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, topic));
    }

    text.push_str(&format!("\nWhy this course?\n{}\n", WHY_THIS_COURSE));
    text.push_str(&format!("\nNext steps:\n{}\n", NEXT_STEPS));

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_recommendation() {
        let text = recommend(ExperienceLevel::Beginner);
        assert!(text.contains("Title: Professional JavaScript"));
        assert!(text.contains("Level: Beginner"));
        assert!(text.contains("Duration: 8 weeks"));
        assert!(text.contains("Why this course?"));
        assert!(text.contains("Next steps:"));
    }

    #[test]
    fn test_intermediate_recommendation() {
        let text = recommend(ExperienceLevel::Intermediate);
        assert!(text.contains("Title: Professional React/NextJs"));
        assert!(text.contains("Level: Intermediate"));
        assert!(text.contains("Duration: 10 weeks"));
    }

    #[test]
    fn test_topics_listed_in_order() {
        for level in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate] {
            let text = recommend(level);
            let mut last = 0;
            for (i, topic) in level.course().topics.iter().enumerate() {
                let line = format!("{}. {}\n", i + 1, topic);
                let pos = text.find(&line).expect("topic line missing");
                assert!(pos >= last);
                last = pos;
            }
        }
    }

    #[test]
    fn test_level_deserialize() {
        let level: ExperienceLevel = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(level, ExperienceLevel::Intermediate);
        assert!(serde_json::from_str::<ExperienceLevel>("\"expert\"").is_err());
    }
}
